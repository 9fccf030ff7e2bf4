//! Condition classifier
//!
//! Averages the hourly sunshine, rain and snow chances of a single day and
//! picks the dominant condition used to select the display icon.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{DominantCondition, HourlySample, classify};
//!
//! let samples = [
//!     HourlySample::new(10, 80, 0).expect("valid sample"),
//!     HourlySample::new(20, 70, 0).expect("valid sample"),
//! ];
//! let (chances, dominant) = classify(&samples).expect("non-empty series");
//! assert_eq!(chances.rain, 75);
//! assert_eq!(dominant, DominantCondition::Rain);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Chances reported for one hour of a forecast day, as percentages (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlySample {
    sunshine: u8,
    rain: u8,
    snow: u8,
}

impl HourlySample {
    /// Maximum valid percentage
    pub const MAX: u8 = 100;

    /// Create a validated hourly sample
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any chance is greater than 100.
    pub fn new(sunshine: u8, rain: u8, snow: u8) -> Result<Self, DomainError> {
        for (series, value) in [
            (WeatherSeries::Sunshine, sunshine),
            (WeatherSeries::Rain, rain),
            (WeatherSeries::Snow, snow),
        ] {
            if value > Self::MAX {
                return Err(DomainError::ValidationError(format!(
                    "chance of {} is {value}% (must be 0-100)",
                    series.label().to_lowercase()
                )));
            }
        }
        Ok(Self {
            sunshine,
            rain,
            snow,
        })
    }

    /// Chance of sunshine
    #[must_use]
    pub const fn sunshine(&self) -> u8 {
        self.sunshine
    }

    /// Chance of rain
    #[must_use]
    pub const fn rain(&self) -> u8 {
        self.rain
    }

    /// Chance of snow
    #[must_use]
    pub const fn snow(&self) -> u8 {
        self.snow
    }
}

/// One of the three hourly chance series
///
/// The order of [`WeatherSeries::ALL`] is the tie-break precedence used by
/// [`DominantCondition::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherSeries {
    Sunshine,
    Rain,
    Snow,
}

impl WeatherSeries {
    /// All series in precedence order
    pub const ALL: [Self; 3] = [Self::Sunshine, Self::Rain, Self::Snow];

    /// Read this series' value from an hourly sample
    #[must_use]
    pub const fn extract(self, sample: &HourlySample) -> u8 {
        match self {
            Self::Sunshine => sample.sunshine,
            Self::Rain => sample.rain,
            Self::Snow => sample.snow,
        }
    }

    /// Human-readable label ("Sunshine", "Rain", "Snow")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sunshine => "Sunshine",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
        }
    }

    /// Condition shown when this series dominates
    #[must_use]
    pub const fn condition(self) -> DominantCondition {
        match self {
            Self::Sunshine => DominantCondition::Sun,
            Self::Rain => DominantCondition::Rain,
            Self::Snow => DominantCondition::Snow,
        }
    }

    /// Rounded mean of this series over `samples`
    ///
    /// Halves round up. Returns `None` for an empty slice.
    fn rounded_mean(self, samples: &[HourlySample]) -> Option<u8> {
        if samples.is_empty() {
            return None;
        }
        let count = samples.len() as u64;
        let sum: u64 = samples.iter().map(|s| u64::from(self.extract(s))).sum();
        let rounded = (2 * sum + count) / (2 * count);
        Some(u8::try_from(rounded).unwrap_or(u8::MAX))
    }
}

impl std::fmt::Display for WeatherSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Average chances for one day, each a rounded percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConditionChances {
    pub sunshine: u8,
    pub rain: u8,
    pub snow: u8,
}

impl ConditionChances {
    /// Average every series over the given samples
    ///
    /// # Errors
    ///
    /// Returns `InvalidSample` if `samples` is empty.
    pub fn from_samples(samples: &[HourlySample]) -> Result<Self, DomainError> {
        let mean = |series: WeatherSeries| {
            series.rounded_mean(samples).ok_or_else(|| {
                DomainError::InvalidSample(format!(
                    "cannot average chance of {} over zero hourly samples",
                    series.label().to_lowercase()
                ))
            })
        };

        Ok(Self {
            sunshine: mean(WeatherSeries::Sunshine)?,
            rain: mean(WeatherSeries::Rain)?,
            snow: mean(WeatherSeries::Snow)?,
        })
    }

    /// Value of a single series
    #[must_use]
    pub const fn get(&self, series: WeatherSeries) -> u8 {
        match series {
            WeatherSeries::Sunshine => self.sunshine,
            WeatherSeries::Rain => self.rain,
            WeatherSeries::Snow => self.snow,
        }
    }
}

/// The single condition judged most likely for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominantCondition {
    Sun,
    Rain,
    Snow,
}

impl DominantCondition {
    /// Pick the series with the greatest chance
    ///
    /// Ties go to the series checked first: sunshine, then rain, then snow.
    #[must_use]
    pub fn select(chances: &ConditionChances) -> Self {
        let highest = WeatherSeries::ALL
            .iter()
            .map(|series| chances.get(*series))
            .max()
            .unwrap_or_default();

        WeatherSeries::ALL
            .into_iter()
            .find(|series| chances.get(*series) == highest)
            .map_or(Self::Sun, WeatherSeries::condition)
    }

    /// Icon identifier of the animated icon set
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Sun => "summer",
            Self::Rain => "torrential-rain",
            Self::Snow => "light-snow",
        }
    }

    /// Accessible alternative text for the icon
    #[must_use]
    pub const fn alt_text(&self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Rain => "rain",
            Self::Snow => "snow",
        }
    }
}

impl std::fmt::Display for DominantCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.alt_text())
    }
}

/// Average a day's hourly samples and select its dominant condition
///
/// # Errors
///
/// Returns `InvalidSample` if `samples` is empty.
pub fn classify(
    samples: &[HourlySample],
) -> Result<(ConditionChances, DominantCondition), DomainError> {
    let chances = ConditionChances::from_samples(samples)?;
    let dominant = DominantCondition::select(&chances);
    Ok((chances, dominant))
}
