use engine::session::{GameBroadcaster, GameOverReport, StateUpdate};

use crate::state::SharedState;

/// Render sink: every broadcast lands in the shared snapshot the egui
/// thread paints from.
#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, update: StateUpdate) {
        self.shared_state.set_update(update);
    }

    async fn broadcast_game_over(&self, report: GameOverReport) {
        self.shared_state.set_game_over(report);
    }
}
