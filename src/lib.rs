pub mod cli;
pub mod core;
pub mod factory;
pub mod model;
pub mod preview;
pub mod settings;
