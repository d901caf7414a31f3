use std::{
    io::{self, Write},
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};

use chrono::{Local, Timelike};
use weather_core::{DisplayReading, ViewState, WeatherView, format::TimeOfDay};

const LOADING: &str = "Loading weather data...";

type Sink = Mutex<Box<dyn Write + Send>>;

/// Plain-text panels on stdout. The loading line and error messages go to stderr,
/// and the loading line is erased before anything replaces it.
pub struct TerminalView {
    out: Sink,
    err: Sink,
    loading_shown: AtomicBool,
}

impl std::fmt::Debug for TerminalView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalView")
            .field("loading_shown", &self.loading_shown)
            .finish_non_exhaustive()
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalView {
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }

    pub fn with_writers(
        out: impl Write + Send + 'static,
        err: impl Write + Send + 'static,
    ) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            loading_shown: AtomicBool::new(false),
        }
    }

    fn write_out(&self, text: &str) {
        self.clear_loading();
        write_to(&self.out, text);
    }

    fn write_err(&self, text: &str) {
        self.clear_loading();
        write_to(&self.err, text);
    }

    fn clear_loading(&self) {
        if self.loading_shown.swap(false, Ordering::SeqCst) {
            let blank = " ".repeat(LOADING.len());
            write_to(&self.err, &format!("\r{blank}\r"));
        }
    }
}

// Terminal output is best effort; a closed pipe must not fail a search.
fn write_to(sink: &Sink, text: &str) {
    let mut w = sink.lock().unwrap_or_else(PoisonError::into_inner);
    let _ = w.write_all(text.as_bytes());
    let _ = w.flush();
}

impl WeatherView for TerminalView {
    fn set_panel(&self, state: ViewState) {
        match state {
            ViewState::Initial => {
                let period = TimeOfDay::from_hour(Local::now().hour());
                self.write_out(&format!(
                    "Good {period}! Search for a city to see its current weather.\n"
                ));
            }
            ViewState::Loading => {
                if !self.loading_shown.swap(true, Ordering::SeqCst) {
                    write_to(&self.err, &format!("{LOADING}\r"));
                }
            }
            ViewState::Error | ViewState::Populated => self.clear_loading(),
        }
    }

    fn render(&self, reading: &DisplayReading) {
        self.write_out(&format!("{}\n", format_reading(reading)));
    }

    fn render_error(&self, message: &str) {
        self.write_err(&format!("Error: {message}\n"));
    }
}

fn format_reading(r: &DisplayReading) -> String {
    let rows = [
        ("Humidity", r.humidity.as_str()),
        ("Wind", r.wind_speed.as_str()),
        ("Pressure", r.pressure.as_str()),
    ];

    let mut out = format!(
        "{}\n{}\n\n  {}  {}\n  {} / {}  feels like {}\n  icon: {}\n",
        r.location,
        r.date_time,
        r.temperature,
        r.condition,
        r.min_temp,
        r.max_temp,
        r.feels_like,
        r.icon_url,
    );
    for (label, value) in rows {
        out.push_str(&format!("  {label:<10}{value}\n"));
    }
    out
}
