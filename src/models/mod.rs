pub mod attendance;
pub mod inventory;
pub mod location;
pub mod project;
pub mod task;
pub mod task_status;
pub mod user;
