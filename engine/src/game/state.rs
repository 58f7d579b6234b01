use std::time::Instant;

use crate::SessionRng;
use crate::log;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{DeathReason, Direction, GameOutcome, Grid, Point, PowerUp, PowerUpKind};

#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food: Point,
    pub power_ups: Vec<PowerUp>,
    pub direction: Option<Direction>,
    pub pending_direction: Option<Direction>,
    pub score: u32,
    pub grid: Grid,
    pub outcome: Option<GameOutcome>,
    pub settings: GameSettings,
    invincible_until: Option<Instant>,
    frozen_until: Option<Instant>,
}

impl GameState {
    pub fn new(settings: GameSettings, rng: &mut SessionRng) -> Self {
        let grid = Grid::new(settings.grid_extent);
        let mut state = Self {
            snake: Snake::new(grid.center()),
            food: Point::new(grid.extent / 4, grid.extent / 4),
            power_ups: Vec::new(),
            direction: None,
            pending_direction: None,
            score: 0,
            grid,
            outcome: None,
            settings,
            invincible_until: None,
            frozen_until: None,
        };
        state.spawn_consumable(rng);
        state
    }

    pub fn is_alive(&self) -> bool {
        self.outcome.is_none()
    }

    pub fn is_invincible(&self, now: Instant) -> bool {
        self.invincible_until.is_some_and(|until| now < until)
    }

    pub fn is_frozen(&self, now: Instant) -> bool {
        self.frozen_until.is_some_and(|until| now < until)
    }

    // Turns are only accepted onto the axis the snake is not currently
    // moving along; the most recent accepted press before the next tick wins.
    pub fn set_direction(&mut self, direction: Direction) {
        let accepted = match self.direction {
            Some(current) => current.axis() != direction.axis(),
            None => true,
        };
        if accepted {
            self.pending_direction = Some(direction);
        }
    }

    pub fn update(&mut self, now: Instant, rng: &mut SessionRng) {
        if self.outcome.is_some() || self.is_frozen(now) {
            return;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = Some(direction);
        }

        let (dx, dy) = self.direction.map_or((0, 0), |d| d.delta());
        let new_head = self.snake.head().offset(dx, dy);

        if !self.grid.contains(new_head) && !self.is_invincible(now) {
            log!("Wall collision at ({}, {})", new_head.x, new_head.y);
            self.outcome = Some(GameOutcome::Died(DeathReason::WallCollision));
            return;
        }

        if new_head == self.food {
            self.snake.grow_head(new_head);
            self.score += self.settings.food_score;
            log!(
                "Ate food at ({}, {}). Score: {}",
                new_head.x,
                new_head.y,
                self.score
            );
            self.spawn_consumable(rng);

            if self.score % self.settings.invincibility_trigger_score == 0 {
                self.invincible_until = Some(now + self.settings.invincibility_duration);
                log!("Invincibility activated at score {}", self.score);
            }
        } else {
            self.snake.grow_head(new_head);
            self.snake.drop_tail();
        }

        self.apply_power_ups(new_head, now);
        if self.outcome.is_some() {
            return;
        }

        if self.snake.is_self_collided() && !self.is_invincible(now) {
            log!("Self collision at ({}, {})", new_head.x, new_head.y);
            self.outcome = Some(GameOutcome::Died(DeathReason::SelfCollision));
            return;
        }

        if self.snake.len() >= self.grid.cell_count() {
            log!("Grid filled. Final score: {}", self.score);
            self.outcome = Some(GameOutcome::Won);
        }
    }

    // One draw: 20% a new power-up, otherwise the food cell is re-rolled.
    // No collision avoidance; a power-up spawn leaves the old food in place.
    pub fn spawn_consumable(&mut self, rng: &mut SessionRng) {
        if rng.random::<f32>() < self.settings.power_up_chance {
            let kind = PowerUpKind::ALL[rng.random_range(0..PowerUpKind::ALL.len())];
            let pos = self.random_cell(rng);
            log!("Power-up {:?} spawned at ({}, {})", kind, pos.x, pos.y);
            self.power_ups.push(PowerUp { pos, kind });
        } else {
            self.food = self.random_cell(rng);
            log!("Food spawned at ({}, {})", self.food.x, self.food.y);
        }
    }

    fn random_cell(&self, rng: &mut SessionRng) -> Point {
        Point::new(
            rng.random_range(0..self.grid.extent),
            rng.random_range(0..self.grid.extent),
        )
    }

    // Every power-up sitting on the head is consumed this tick, in
    // insertion order. An explosive death ends the tick.
    fn apply_power_ups(&mut self, head: Point, now: Instant) {
        let consumed: Vec<PowerUp> = self
            .power_ups
            .iter()
            .copied()
            .filter(|p| p.pos == head)
            .collect();
        if consumed.is_empty() {
            return;
        }
        self.power_ups.retain(|p| p.pos != head);

        for power_up in consumed {
            log!("Consumed {:?} power-up at ({}, {})", power_up.kind, head.x, head.y);
            match power_up.kind {
                PowerUpKind::Golden => {
                    self.score += self.settings.golden_score;
                    self.snake.duplicate_tail();
                }
                PowerUpKind::Freeze => {
                    self.frozen_until = Some(now + self.settings.freeze_duration);
                }
                PowerUpKind::Explosive => {
                    if self.snake.len() <= self.settings.explosive_penalty {
                        self.outcome = Some(GameOutcome::Died(DeathReason::Exploded));
                        return;
                    }
                    for _ in 0..self.settings.explosive_penalty {
                        self.snake.drop_tail();
                    }
                }
            }
        }
    }
}
