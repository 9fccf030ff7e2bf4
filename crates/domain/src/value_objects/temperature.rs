//! Temperature conversion between Celsius and Fahrenheit
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{Temperature, TemperatureScale};
//!
//! let boiling = Temperature::new(100.0, TemperatureScale::Celsius);
//! let converted = boiling.convert_to(TemperatureScale::Fahrenheit);
//! assert_eq!(converted.to_string(), "212.00°F");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
}

impl TemperatureScale {
    /// Unit suffix ("°C" or "°F")
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// The other scale
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius => write!(f, "celsius"),
            Self::Fahrenheit => write!(f, "fahrenheit"),
        }
    }
}

impl FromStr for TemperatureScale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "celsius" => Ok(Self::Celsius),
            "f" | "fahrenheit" => Ok(Self::Fahrenheit),
            _ => Err(DomainError::ValidationError(format!(
                "Invalid temperature scale: {s}. Use 'c' or 'f'"
            ))),
        }
    }
}

/// A temperature reading on a given scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    value: f64,
    scale: TemperatureScale,
}

impl Temperature {
    #[must_use]
    pub const fn new(value: f64, scale: TemperatureScale) -> Self {
        Self { value, scale }
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn scale(&self) -> TemperatureScale {
        self.scale
    }

    /// Convert to `target`, rounded to two decimals
    ///
    /// Converting to the scale the reading is already on only rounds.
    #[must_use]
    pub fn convert_to(&self, target: TemperatureScale) -> Self {
        let raw = match (self.scale, target) {
            (TemperatureScale::Fahrenheit, TemperatureScale::Celsius) => {
                (self.value - 32.0) * 5.0 / 9.0
            },
            (TemperatureScale::Celsius, TemperatureScale::Fahrenheit) => {
                self.value * 9.0 / 5.0 + 32.0
            },
            _ => self.value,
        };
        Self::new((raw * 100.0).round() / 100.0, target)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}{}", self.value, self.scale.unit())
    }
}
