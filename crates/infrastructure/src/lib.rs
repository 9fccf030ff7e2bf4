//! Infrastructure layer - Adapters for external systems
//!
//! Implements the weather port on top of the wttr.in client and owns
//! configuration loading and logging initialisation.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::AppConfig;
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_logging};
