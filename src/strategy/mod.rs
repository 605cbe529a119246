pub mod buffer_management;
pub mod implementations;
pub mod traits;
