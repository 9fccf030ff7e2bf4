//! Domain layer for wttr-lookup
//!
//! Contains the weather view model, the condition classifier, the search
//! history store and the temperature converter. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
