use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::time::interval;

use crate::SessionRng;
use crate::game::{GameOutcome, GameSettings, GameState, ParticleBurst};
use crate::log;
use super::{GameBroadcaster, GameOverReport, SessionCommand, StateUpdate};

const DEATH_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Drives one game from first tick to terminal signal. Returns `None` when
/// the session was quit from outside.
pub async fn run_session<B: GameBroadcaster>(
    settings: GameSettings,
    seed: u64,
    commands: &mut mpsc::UnboundedReceiver<SessionCommand>,
    broadcaster: B,
) -> Option<GameOverReport> {
    let mut rng = SessionRng::new(seed);
    let mut state = GameState::new(settings.clone(), &mut rng);
    let mut tick_timer = interval(settings.tick_interval);
    let mut tick = 0u64;

    log!("Session started with seed {}", rng.seed());

    let outcome = loop {
        tokio::select! {
            _ = tick_timer.tick() => {
                let now = Instant::now();
                state.update(now, &mut rng);
                tick += 1;
                broadcaster.broadcast_state(build_state_update(&state, tick, now)).await;

                if let Some(outcome) = state.outcome {
                    break outcome;
                }
            }
            Some(command) = commands.recv() => match command {
                SessionCommand::Turn(direction) => state.set_direction(direction),
                SessionCommand::Quit => return None,
            }
        }
    };

    if let GameOutcome::Died(reason) = outcome {
        log!("Snake died: {:?}", reason);
        run_death_animation(&state, tick, commands, &broadcaster, &mut rng).await?;
    }

    let report = GameOverReport {
        outcome,
        score: state.score,
    };
    log!("Game over. Final score: {}", report.score);
    broadcaster.broadcast_game_over(report).await;
    Some(report)
}

// The tick timer is gone by the time this runs; the ~60 fps animation
// interval is the only timer left on the task.
async fn run_death_animation<B: GameBroadcaster>(
    state: &GameState,
    mut tick: u64,
    commands: &mut mpsc::UnboundedReceiver<SessionCommand>,
    broadcaster: &B,
    rng: &mut SessionRng,
) -> Option<()> {
    let mut burst = ParticleBurst::from_snake(&state.snake, state.settings.cell_size_px, rng);
    let mut frame_timer = interval(DEATH_FRAME_INTERVAL);

    while !burst.is_finished() {
        tokio::select! {
            _ = frame_timer.tick() => {
                burst.step();
                tick += 1;

                let mut update = build_state_update(state, tick, Instant::now());
                update.snake.clear();
                update.particles = burst.particles().to_vec();
                broadcaster.broadcast_state(update).await;
            }
            Some(command) = commands.recv() => {
                if let SessionCommand::Quit = command {
                    return None;
                }
            }
        }
    }

    Some(())
}

fn build_state_update(state: &GameState, tick: u64, now: Instant) -> StateUpdate {
    StateUpdate {
        tick,
        grid_extent: state.grid.extent,
        cell_size_px: state.settings.cell_size_px,
        snake: state.snake.body.iter().copied().collect(),
        food: state.food,
        power_ups: state.power_ups.clone(),
        particles: Vec::new(),
        score: state.score,
        invincible: state.is_invincible(now),
        frozen: state.is_frozen(now),
    }
}
