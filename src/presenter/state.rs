//! Panel visibility state
//!
//! Three mutually exclusive panels share the content area: idle, loading
//! and result. `UiState` says which one is up; `PanelState::set` is the only
//! way to change it, so two panels can never be visible together.

/// Presenter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    ResultShown,
    ErrorShown,
}

/// Content-area panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Idle,
    Loading,
    /// Hosts both results and inline errors
    Result,
}

impl UiState {
    /// The single panel visible in this state
    pub fn visible_panel(self) -> Panel {
        match self {
            UiState::Idle => Panel::Idle,
            UiState::Loading => Panel::Loading,
            UiState::ResultShown | UiState::ErrorShown => Panel::Result,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Loading => "loading",
            UiState::ResultShown => "result",
            UiState::ErrorShown => "error",
        }
    }
}

/// Owner of the current `UiState`
#[derive(Debug, Default)]
pub struct PanelState {
    state: UiState,
}

impl PanelState {
    pub fn get(&self) -> UiState {
        self.state
    }

    /// Transition to `next`, returning the previous state
    pub fn set(&mut self, next: UiState) -> UiState {
        let prev = self.state;
        if prev != next {
            tracing::debug!("UI state: {} -> {}", prev.name(), next.name());
        }
        self.state = next;
        prev
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.state.visible_panel() == panel
    }
}
