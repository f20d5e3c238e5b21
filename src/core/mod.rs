pub mod attendance;
pub mod inventory;
pub mod location;
pub mod logic;
pub mod screen;
pub mod tasks;
pub mod usage;
