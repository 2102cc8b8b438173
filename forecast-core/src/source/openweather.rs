use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{CurrentConditions, ForecastSample, SampleError};

use super::WeatherSource;

/// Timestamp format of the `dt_txt` field in forecast entries.
const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct OpenWeatherSource {
    api_key: String,
    language: Option<String>,
    http: Client,
}

impl OpenWeatherSource {
    pub fn new(api_key: String, language: Option<String>) -> Self {
        Self {
            api_key,
            language,
            http: Client::new(),
        }
    }

    fn query_params<'a>(&'a self, city: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut params = vec![
            ("q", city),
            ("appid", self.api_key.as_str()),
            ("units", "metric"),
        ];
        if let Some(lang) = self.language.as_deref() {
            params.push(("lang", lang));
        }
        params
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherSource {
    async fn current_weather(&self, city: &str) -> Result<CurrentConditions> {
        let url = "https://api.openweathermap.org/data/2.5/weather";

        debug!(city, "requesting current weather");

        let res = self
            .http
            .get(url)
            .query(&self.query_params(city))
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        let condition = parsed
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("OpenWeather current response contained no weather condition"))?;

        Ok(CurrentConditions {
            city: parsed.name,
            country: parsed.sys.country,
            temp_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            icon: condition.icon,
            description: condition.description,
        })
    }

    async fn forecast(&self, city: &str) -> Result<Vec<ForecastSample>> {
        let url = "https://api.openweathermap.org/data/2.5/forecast";

        debug!(city, "requesting 5-day forecast");

        let res = self
            .http
            .get(url)
            .query(&self.query_params(city))
            .send()
            .await
            .context("Failed to send request to OpenWeather (5-day forecast)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather forecast response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OwForecastResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather forecast JSON")?;

        debug!(entries = parsed.list.len(), "decoded forecast entries");

        parsed
            .list
            .into_iter()
            .map(|entry| entry.into_sample().map_err(anyhow::Error::from))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
    icon: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

impl OwForecastEntry {
    /// Decode one wire entry into a domain sample, failing fast on entries
    /// that break the contract instead of filling in guessed values.
    fn into_sample(self) -> Result<ForecastSample, SampleError> {
        let timestamp = NaiveDateTime::parse_from_str(&self.dt_txt, DT_TXT_FORMAT)
            .map_err(|source| SampleError::BadTimestamp { raw: self.dt_txt.clone(), source })?;

        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or(SampleError::MissingCondition { timestamp: self.dt_txt })?;

        Ok(ForecastSample {
            timestamp,
            temp_c: self.main.temp,
            temp_min_c: self.main.temp_min,
            temp_max_c: self.main.temp_max,
            condition_id: condition.id,
            icon: condition.icon,
            description: condition.description,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry_json(dt_txt: &str, weather: &str) -> String {
        format!(
            r#"{{
                "dt_txt": "{dt_txt}",
                "main": {{
                    "temp": 21.3,
                    "feels_like": 20.8,
                    "temp_min": 18.2,
                    "temp_max": 23.9,
                    "humidity": 54
                }},
                "weather": {weather}
            }}"#
        )
    }

    #[test]
    fn forecast_entry_decodes_into_sample() {
        let json = entry_json(
            "2024-06-01 09:00:00",
            r#"[{"id": 500, "icon": "10d", "description": "light rain"},
                {"id": 801, "icon": "02d", "description": "few clouds"}]"#,
        );
        let entry: OwForecastEntry = serde_json::from_str(&json).expect("entry must parse");

        let sample = entry.into_sample().expect("well-formed entry");

        assert_eq!(
            sample.timestamp.date(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert_eq!(sample.temp_min_c, 18.2);
        assert_eq!(sample.temp_max_c, 23.9);
        // Only the first condition entry counts.
        assert_eq!(sample.condition_id, 500);
        assert_eq!(sample.icon, "10d");
        assert_eq!(sample.description, "light rain");
    }

    #[test]
    fn empty_condition_list_is_rejected() {
        let json = entry_json("2024-06-01 09:00:00", "[]");
        let entry: OwForecastEntry = serde_json::from_str(&json).expect("entry must parse");

        let err = entry.into_sample().unwrap_err();

        assert!(matches!(err, SampleError::MissingCondition { .. }));
        assert!(err.to_string().contains("2024-06-01 09:00:00"));
    }

    #[test]
    fn malformed_timestamp_is_rejected() {
        let json = entry_json(
            "June 1st, 09:00",
            r#"[{"id": 800, "icon": "01d", "description": "clear sky"}]"#,
        );
        let entry: OwForecastEntry = serde_json::from_str(&json).expect("entry must parse");

        let err = entry.into_sample().unwrap_err();

        assert!(matches!(err, SampleError::BadTimestamp { .. }));
        assert!(err.to_string().contains("June 1st, 09:00"));
    }

    #[test]
    fn current_response_decodes() {
        let json = r#"{
            "name": "Seoul",
            "sys": {"country": "KR"},
            "main": {
                "temp": 23.4,
                "feels_like": 24.1,
                "temp_min": 21.0,
                "temp_max": 25.0,
                "humidity": 61
            },
            "weather": [{"id": 800, "icon": "01d", "description": "clear sky"}],
            "wind": {"speed": 3.2}
        }"#;

        let parsed: OwCurrentResponse = serde_json::from_str(json).expect("current must parse");

        assert_eq!(parsed.name, "Seoul");
        assert_eq!(parsed.sys.country, "KR");
        assert_eq!(parsed.main.humidity, 61);
        assert_eq!(parsed.weather[0].icon, "01d");
    }
}
