//! Search workflow: validate, fetch, render, remember.

use chrono::{DateTime, Local};
use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicU64, Ordering},
};
use tracing::{debug, error, info, warn};

use crate::{
    error::ErrorKind,
    model::{DisplayReading, WeatherReading},
    provider::WeatherProvider,
    store::LastCityStore,
    units::UnitPreference,
    validate::is_valid_city,
    view::{ViewState, ViewStateMachine, WeatherView},
};

pub type Clock = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;

/// Reported by the platform's network monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

/// How one call to [`WeatherApp::search`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Rendered(WeatherReading),
    Failed(ErrorKind),
    /// A newer search started before this one's response arrived; nothing was rendered.
    Superseded,
}

#[derive(Debug, Default)]
struct Session {
    panels: ViewStateMachine,
    current: Option<WeatherReading>,
    offline: bool,
}

/// Owns the view state and drives the provider, view and store for each search.
pub struct WeatherApp {
    provider: Arc<dyn WeatherProvider>,
    view: Arc<dyn WeatherView>,
    store: Arc<dyn LastCityStore>,
    display_unit: UnitPreference,
    clock: Clock,
    session: Mutex<Session>,
    latest_search: AtomicU64,
}

impl std::fmt::Debug for WeatherApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApp")
            .field("provider", &self.provider)
            .field("display_unit", &self.display_unit)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl WeatherApp {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        view: Arc<dyn WeatherView>,
        store: Arc<dyn LastCityStore>,
    ) -> Self {
        let display_unit = provider.units().temperature_unit();

        Self {
            provider,
            view,
            store,
            display_unit,
            clock: Arc::new(Local::now),
            session: Mutex::new(Session::default()),
            latest_search: AtomicU64::new(0),
        }
    }

    /// Show temperatures in `unit` regardless of the units the provider fetches in.
    pub fn with_display_unit(mut self, unit: UnitPreference) -> Self {
        self.display_unit = unit;
        self
    }

    pub fn with_clock(
        mut self,
        clock: impl Fn() -> DateTime<Local> + Send + Sync + 'static,
    ) -> Self {
        let clock: Clock = Arc::new(clock);
        self.clock = clock;
        self
    }

    /// Re-run the last successful search, or show the initial panel if there is none.
    pub async fn start(&self) -> Option<SearchOutcome> {
        match self.store.last_city() {
            Some(city) => {
                debug!(city = %city, "Restoring last searched city");
                Some(self.search(&city).await)
            }
            None => {
                self.show(ViewState::Initial);
                None
            }
        }
    }

    pub async fn search(&self, raw_city: &str) -> SearchOutcome {
        let ticket = self.latest_search.fetch_add(1, Ordering::SeqCst) + 1;
        let city = raw_city.trim();

        if !is_valid_city(Some(city)) {
            debug!(chars = city.chars().count(), "Rejected city input");
            self.fail(ErrorKind::InvalidInput);
            return SearchOutcome::Failed(ErrorKind::InvalidInput);
        }

        self.show(ViewState::Loading);

        let result = self.provider.fetch_current(city).await;

        if self.latest_search.load(Ordering::SeqCst) != ticket {
            debug!(city, ticket, "Discarding response for superseded search");
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(reading) => {
                let now = (self.clock)();
                let display =
                    DisplayReading::new(&reading, self.provider.units(), self.display_unit, &now);

                self.view.render(&display);
                self.session().current = Some(reading.clone());
                self.show(ViewState::Populated);

                if let Err(err) = self.store.set_last_city(city) {
                    warn!(city, error = %format!("{err:#}"), "Failed to remember last city");
                }

                SearchOutcome::Rendered(reading)
            }
            Err(err) => {
                let kind = if err.is_transport() && self.is_offline() {
                    ErrorKind::Offline
                } else {
                    err.kind()
                };

                error!(city, error = %err, "Error fetching weather");
                self.fail(kind);
                SearchOutcome::Failed(kind)
            }
        }
    }

    /// Going offline shows the offline error at once, whatever is in flight.
    pub fn connectivity_changed(&self, status: Connectivity) {
        match status {
            Connectivity::Offline => {
                self.session().offline = true;
                warn!("Connection lost");
                self.fail(ErrorKind::Offline);
            }
            Connectivity::Online => {
                self.session().offline = false;
                info!("Connection restored");
            }
        }
    }

    pub fn active_panel(&self) -> ViewState {
        self.session().panels.active()
    }

    /// Reading behind the populated panel, if any search has succeeded.
    pub fn current_reading(&self) -> Option<WeatherReading> {
        self.session().current.clone()
    }

    pub fn is_offline(&self) -> bool {
        self.session().offline
    }

    fn fail(&self, kind: ErrorKind) {
        self.view.render_error(&kind.to_string());
        self.show(ViewState::Error);
    }

    fn show(&self, state: ViewState) {
        self.session().panels.show(state);
        self.view.set_panel(state);
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
