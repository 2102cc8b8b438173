use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One short-window forecast slot (3-hour resolution for OpenWeatherMap),
/// already decoded from the data source's wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    /// Local time at the forecast location, exactly as reported by the
    /// source. Grouping into days uses the date portion of this value
    /// verbatim; no timezone conversion happens anywhere downstream.
    pub timestamp: NaiveDateTime,
    pub temp_c: f64,
    /// Lowest temperature expected within this sample's window.
    pub temp_min_c: f64,
    /// Highest temperature expected within this sample's window.
    pub temp_max_c: f64,
    /// Numeric condition code (e.g. OpenWeatherMap's 800 = clear sky).
    pub condition_id: i64,
    pub icon: String,
    pub description: String,
}

/// The reduction of all samples sharing one calendar date: aggregate
/// temperature extremes plus a representative condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Serializes as `"YYYY-MM-DD"`.
    pub date: NaiveDate,
    pub temp_max_c: f64,
    pub temp_min_c: f64,
    pub icon: String,
    pub description: String,
}

/// Current weather for the searched city, shown alongside the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city: String,
    pub country: String,
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub icon: String,
    pub description: String,
}

/// A raw forecast entry that violates the data source contract. Decoding
/// fails fast on these instead of coercing missing fields, since a guessed
/// temperature or condition would silently corrupt the daily min/max.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("forecast entry '{timestamp}' has an empty weather condition list")]
    MissingCondition { timestamp: String },

    #[error("forecast entry has a malformed timestamp '{raw}'")]
    BadTimestamp {
        raw: String,
        #[source]
        source: chrono::format::ParseError,
    },
}
