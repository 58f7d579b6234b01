mod particles;
mod settings;
mod snake;
mod state;
mod types;

pub use particles::{Particle, ParticleBurst};
pub use settings::GameSettings;
pub use snake::Snake;
pub use state::GameState;
pub use types::{Axis, DeathReason, Direction, GameOutcome, Grid, Point, PowerUp, PowerUpKind};
