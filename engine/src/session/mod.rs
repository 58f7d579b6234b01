mod arcade_session;

use std::future::Future;

use crate::game::{Direction, GameOutcome, Particle, Point, PowerUp};

pub use arcade_session::run_session;

#[derive(Clone, Copy, Debug)]
pub enum SessionCommand {
    Turn(Direction),
    Quit,
}

/// Read-only frame handed to the render sink.
#[derive(Clone, Debug)]
pub struct StateUpdate {
    pub tick: u64,
    pub grid_extent: i32,
    pub cell_size_px: f32,
    pub snake: Vec<Point>,
    pub food: Point,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub score: u32,
    pub invincible: bool,
    pub frozen: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct GameOverReport {
    pub outcome: GameOutcome,
    pub score: u32,
}

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, update: StateUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, report: GameOverReport) -> impl Future<Output = ()> + Send;
}
