//! Temperature scale conversions.
//!
//! Every conversion rounds to the nearest whole degree, half away from zero on both
//! sides of zero: 36.5 becomes 37 and -8.5 becomes -9, never -8.

use serde::{Deserialize, Serialize};

/// Temperature scale a reading is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitPreference {
    Celsius,
    Fahrenheit,
}

impl UnitPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitPreference::Celsius => "celsius",
            UnitPreference::Fahrenheit => "fahrenheit",
        }
    }
}

impl std::fmt::Display for UnitPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UnitPreference {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "celsius" | "c" => Ok(UnitPreference::Celsius),
            "fahrenheit" | "f" => Ok(UnitPreference::Fahrenheit),
            _ => Err(anyhow::anyhow!(
                "Unknown temperature unit '{value}'. Supported units: celsius, fahrenheit."
            )),
        }
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    (celsius * 9.0 / 5.0 + 32.0).round()
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    ((fahrenheit - 32.0) * 5.0 / 9.0).round()
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    (kelvin - 273.15).round()
}

/// Convert `temp` between scales. Same-scale conversions return the input untouched, unrounded.
pub fn convert(temp: f64, from: UnitPreference, to: UnitPreference) -> f64 {
    match (from, to) {
        (UnitPreference::Celsius, UnitPreference::Fahrenheit) => celsius_to_fahrenheit(temp),
        (UnitPreference::Fahrenheit, UnitPreference::Celsius) => fahrenheit_to_celsius(temp),
        _ => temp,
    }
}
