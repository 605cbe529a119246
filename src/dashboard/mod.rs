pub mod action_list;
pub mod overview;
