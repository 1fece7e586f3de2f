pub mod employee;
pub mod record;
pub mod settings;
pub mod stats;
