use std::sync::{Arc, Mutex};

use engine::session::{GameOverReport, StateUpdate};

/// What the window is currently showing.
#[derive(Clone, Debug)]
pub enum AppState {
    /// In a session; `None` until the first frame arrives.
    Playing { update: Option<StateUpdate> },
    /// Terminal banner between sessions.
    GameOver { report: GameOverReport },
}

/// Snapshot store between the session task and the egui thread. The session
/// writes, the UI reads a clone each frame.
pub struct SharedState {
    state: Arc<Mutex<AppState>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::Playing { update: None })),
        }
    }

    pub fn begin_session(&self) {
        *self.state.lock().unwrap() = AppState::Playing { update: None };
    }

    pub fn set_update(&self, update: StateUpdate) {
        *self.state.lock().unwrap() = AppState::Playing {
            update: Some(update),
        };
    }

    pub fn set_game_over(&self, report: GameOverReport) {
        *self.state.lock().unwrap() = AppState::GameOver { report };
    }

    pub fn get_state(&self) -> AppState {
        self.state.lock().unwrap().clone()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
