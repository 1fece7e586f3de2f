pub mod assistant;
pub mod attendance;
pub mod employee;
pub mod settings;
pub mod summary;
