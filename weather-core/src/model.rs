use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::{
    config::Units,
    format::{capitalize_words, format_date_time, icon_url},
    units::{UnitPreference, convert},
};

/// Current conditions for one location, in the units the service was asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub location_name: String,
    pub country: String,
    pub description: String,
    pub icon: String,
    pub temperature: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub feels_like: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    pub pressure_hpa: f64,
}

/// Display-ready text for every slot of the populated panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayReading {
    pub location: String,
    pub date_time: String,
    pub condition: String,
    pub icon_url: String,
    pub icon_alt: String,
    pub temperature: String,
    pub min_temp: String,
    pub max_temp: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind_speed: String,
    pub pressure: String,
}

impl DisplayReading {
    /// Format `reading`, fetched in `units`, for a viewer preferring `display` at instant `now`.
    pub fn new<Tz>(
        reading: &WeatherReading,
        units: Units,
        display: UnitPreference,
        now: &DateTime<Tz>,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let scale = units.temperature_unit();
        let degrees = |t: f64| format!("{}°", convert(t, scale, display).round() as i64);
        let condition = capitalize_words(&reading.description);

        Self {
            location: format!("{}, {}", reading.location_name, reading.country),
            date_time: format_date_time(now),
            icon_url: icon_url(&reading.icon),
            icon_alt: condition.clone(),
            condition,
            temperature: degrees(reading.temperature),
            min_temp: format!("Min {}", degrees(reading.temp_min)),
            max_temp: format!("Max {}", degrees(reading.temp_max)),
            feels_like: degrees(reading.feels_like),
            humidity: format!("{}%", reading.humidity_pct),
            wind_speed: format!("{} {}", reading.wind_speed, units.wind_speed_label()),
            pressure: format!("{} hPa", reading.pressure_hpa),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_reading() -> WeatherReading {
    WeatherReading {
        location_name: "Paris".to_string(),
        country: "FR".to_string(),
        description: "light rain".to_string(),
        icon: "10d".to_string(),
        temperature: 21.4,
        temp_min: 18.5,
        temp_max: 24.49,
        feels_like: 20.6,
        humidity_pct: 65,
        wind_speed: 3.6,
        pressure_hpa: 1013.0,
    }
}
