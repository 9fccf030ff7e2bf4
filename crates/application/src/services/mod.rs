//! Application services - Use case implementations

mod lookup_service;

pub use lookup_service::{LookupOutcome, PageSnapshot, WeatherLookupService};
