pub mod date;
pub mod ids;
