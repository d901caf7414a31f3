//! Core library for the `weather` city lookup.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeatherMap client behind the [`WeatherProvider`] trait
//! - Unit conversion, formatting and input validation
//! - The search workflow and the panel state it drives
//! - Durable recall of the last searched city
//!
//! It knows nothing about terminals or any other presentation technology; callers
//! implement [`WeatherView`] to draw.

pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod store;
pub mod units;
pub mod validate;
pub mod view;

pub use app::{Connectivity, SearchOutcome, WeatherApp};
pub use config::{ClientConfig, Config, Units};
pub use error::{ErrorKind, FetchError};
pub use model::{DisplayReading, WeatherReading};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use store::{FileStore, LastCityStore, MemoryStore};
pub use units::UnitPreference;
pub use view::{ViewState, ViewStateMachine, WeatherView};
