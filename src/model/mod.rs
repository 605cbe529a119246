pub mod buffer;
pub mod inventory;
pub mod queues;
