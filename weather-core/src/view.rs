//! Panel visibility and the render port the presentation layer implements.

use crate::model::DisplayReading;

/// The four mutually exclusive panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    #[default]
    Initial,
    Loading,
    Error,
    Populated,
}

impl ViewState {
    pub const ALL: [ViewState; 4] =
        [ViewState::Initial, ViewState::Loading, ViewState::Error, ViewState::Populated];

    fn index(self) -> usize {
        match self {
            ViewState::Initial => 0,
            ViewState::Loading => 1,
            ViewState::Error => 2,
            ViewState::Populated => 3,
        }
    }
}

/// Tracks which panel is visible.
///
/// [`show`](Self::show) recomputes every panel's visibility from scratch, so any
/// state may follow any other and nothing stale stays on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewStateMachine {
    visible: [bool; 4],
}

impl Default for ViewStateMachine {
    fn default() -> Self {
        let mut machine = Self {
            visible: [false; 4],
        };
        machine.show(ViewState::Initial);
        machine
    }
}

impl ViewStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, state: ViewState) {
        for panel in ViewState::ALL {
            self.visible[panel.index()] = panel == state;
        }
    }

    pub fn is_visible(&self, state: ViewState) -> bool {
        self.visible[state.index()]
    }

    pub fn active(&self) -> ViewState {
        ViewState::ALL
            .into_iter()
            .find(|s| self.is_visible(*s))
            .unwrap_or_default()
    }
}

/// Presentation layer. Implementations draw; they never decide which panel to show.
pub trait WeatherView: Send + Sync {
    fn set_panel(&self, state: ViewState);

    /// Fill the populated panel's slots.
    fn render(&self, reading: &DisplayReading);

    fn render_error(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_count(machine: &ViewStateMachine) -> usize {
        ViewState::ALL.into_iter().filter(|s| machine.is_visible(*s)).count()
    }

    #[test]
    fn starts_on_initial() {
        let machine = ViewStateMachine::new();

        assert_eq!(machine.active(), ViewState::Initial);
        assert_eq!(visible_count(&machine), 1);
    }

    #[test]
    fn exactly_one_panel_after_any_transition() {
        let mut machine = ViewStateMachine::new();

        for from in ViewState::ALL {
            for to in ViewState::ALL {
                machine.show(from);
                machine.show(to);
                assert_eq!(machine.active(), to);
                assert_eq!(visible_count(&machine), 1);
            }
        }
    }

    #[test]
    fn show_is_idempotent() {
        let mut once = ViewStateMachine::new();
        once.show(ViewState::Error);

        let mut twice = ViewStateMachine::new();
        twice.show(ViewState::Error);
        twice.show(ViewState::Error);

        assert_eq!(once, twice);
    }
}
