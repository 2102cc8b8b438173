//! Terminal rendering of the combined weather view.
//!
//! Rounding, unit labels and icon URLs belong here; the core hands over
//! unrounded values and bare icon identifiers.

use std::fmt::Write;

use forecast_core::{CurrentConditions, DaySummary};

/// Render the current-conditions card plus one line per forecast day.
pub fn render(current: &CurrentConditions, daily: &[DaySummary]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}, {}", current.city, current.country);
    let _ = writeln!(out, "  {}  ({})", current.description, icon_url(&current.icon));
    let _ = writeln!(
        out,
        "  Temperature: {:.1}°C (feels like {:.1}°C)",
        current.temp_c, current.feels_like_c
    );
    let _ = writeln!(out, "  Humidity:    {}%", current.humidity_pct);
    let _ = writeln!(out, "  Wind:        {:.1} m/s", current.wind_speed_mps);

    if daily.is_empty() {
        return out;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}-day forecast:", daily.len());
    for day in daily {
        let _ = writeln!(
            out,
            "  {}  high {:>3}°C  low {:>3}°C  {}",
            day.date.format("%Y-%m-%d"),
            round(day.temp_max_c),
            round(day.temp_min_c),
            day.description,
        );
    }

    out
}

/// Icon image as served by OpenWeatherMap.
pub fn icon_url(icon: &str) -> String {
    format!("https://openweathermap.org/img/wn/{icon}@2x.png")
}

fn round(temp_c: f64) -> i64 {
    temp_c.round() as i64
}
