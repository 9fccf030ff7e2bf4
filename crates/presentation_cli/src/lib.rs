//! wttr-lookup presentation layer
//!
//! Command-line arguments, the render pipeline and the interactive session.

pub mod cli;
pub mod render;
pub mod session;

pub use cli::{Cli, Commands, convert, log_filter_from_verbosity};
pub use render::{RenderedPage, render};
