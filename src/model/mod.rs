pub mod mode;
pub mod profile;
