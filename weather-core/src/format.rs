//! Human-readable strings for the display slots.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Render an instant as `Monday, January 15, 2024 at 02:30 PM` in its own time zone.
pub fn format_date_time<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format("%A, %B %-d, %Y at %I:%M %p").to_string()
}

/// Capitalize every space-separated word and lowercase the rest of it.
///
/// Splits on single spaces only, so runs of spaces survive as empty words.
pub fn capitalize_words(s: &str) -> String {
    s.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

pub fn icon_url(code: &str) -> String {
    format!("{ICON_BASE_URL}/{code}@4x.png")
}

/// Coarse period of the day for a local hour (0-23).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
