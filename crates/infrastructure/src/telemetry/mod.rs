//! Logging initialisation
//!
//! Console logging through `tracing-subscriber`, text or JSON, on stderr.

mod subscriber;

pub use subscriber::{LogFormat, LoggingConfig, TelemetryError, init_logging};
