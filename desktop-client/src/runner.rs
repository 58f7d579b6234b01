use tokio::sync::mpsc;

use engine::game::{GameOutcome, GameSettings};
use engine::log;
use engine::session::{SessionCommand, run_session};

use crate::broadcaster::LocalBroadcaster;
use crate::state::SharedState;

/// Session lifecycle: run a game, show the terminal banner for the fixed
/// delay, start over. A pinned seed replays the identical game each round.
pub async fn run_arcade(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    settings: GameSettings,
    fixed_seed: Option<u64>,
) {
    let broadcaster = LocalBroadcaster::new(shared_state.clone());

    loop {
        let seed = fixed_seed.unwrap_or_else(rand::random);
        shared_state.begin_session();

        let Some(report) =
            run_session(settings.clone(), seed, &mut command_rx, broadcaster.clone()).await
        else {
            log!("Session quit, shutting down");
            return;
        };

        let delay = match report.outcome {
            GameOutcome::Won => settings.win_restart_delay,
            GameOutcome::Died(_) => settings.death_restart_delay,
        };
        log!("Restarting in {:?}", delay);
        tokio::time::sleep(delay).await;
    }
}
