//! Day forecast entity

use serde::{Deserialize, Serialize};

use crate::value_objects::DayName;

/// Temperatures forecast for one day, in Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayForecast {
    pub name: DayName,
    pub average_temp_f: i32,
    pub max_temp_f: i32,
    pub min_temp_f: i32,
}
