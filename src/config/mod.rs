// src/config/mod.rs

pub mod error;
pub mod limits;
pub mod options;
pub mod parameters;
pub mod scenario;

pub use error::ConfigError;
pub use options::{ConfigOption, Settings};
pub use parameters::LaunchParameters;
pub use scenario::ScenarioConfig;
