//! Value Objects - Immutable, identity-less domain primitives

mod area_label;
mod condition;
mod day_name;
mod temperature;

pub use area_label::AreaLabel;
pub use condition::{ConditionChances, DominantCondition, HourlySample, WeatherSeries, classify};
pub use day_name::DayName;
pub use temperature::{Temperature, TemperatureScale};
