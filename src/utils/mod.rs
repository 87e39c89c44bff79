pub mod changelog;
pub mod config;
pub mod render;
pub mod severity;
pub mod severity_config;

pub mod testing;
