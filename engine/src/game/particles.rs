use crate::SessionRng;
use super::snake::Snake;

const PARTICLES_PER_SEGMENT: usize = 10;
const VELOCITY_SPREAD: f32 = 4.0;
const SHRINK_FACTOR: f32 = 0.95;
const MIN_SIZE: f32 = 0.5;

/// One shard of the death explosion, in canvas pixel space.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    vx: f32,
    vy: f32,
}

/// Death animation state: a burst of shrinking particles seeded from the
/// snake's final body. The burst is finished when every particle has shrunk
/// below the visibility threshold.
#[derive(Clone, Debug)]
pub struct ParticleBurst {
    particles: Vec<Particle>,
}

impl ParticleBurst {
    pub fn from_snake(snake: &Snake, cell_size_px: f32, rng: &mut SessionRng) -> Self {
        let mut particles = Vec::with_capacity(snake.len() * PARTICLES_PER_SEGMENT);

        for segment in &snake.body {
            for _ in 0..PARTICLES_PER_SEGMENT {
                particles.push(Particle {
                    x: segment.x as f32 * cell_size_px,
                    y: segment.y as f32 * cell_size_px,
                    vx: (rng.random::<f32>() - 0.5) * VELOCITY_SPREAD,
                    vy: (rng.random::<f32>() - 0.5) * VELOCITY_SPREAD,
                    size: rng.random::<f32>() * 4.0 + 2.0,
                });
            }
        }

        Self { particles }
    }

    /// One animation frame: drift and shrink, then drop spent particles.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.x += particle.vx;
            particle.y += particle.vy;
            particle.size *= SHRINK_FACTOR;
        }
        self.particles.retain(|p| p.size > MIN_SIZE);
    }

    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Point;

    #[test]
    fn test_burst_spawns_ten_particles_per_segment() {
        let mut rng = SessionRng::new(42);
        let mut snake = Snake::new(Point::new(3, 3));
        snake.grow_head(Point::new(3, 2));
        snake.grow_head(Point::new(3, 1));

        let burst = ParticleBurst::from_snake(&snake, 20.0, &mut rng);

        assert_eq!(burst.particles().len(), 30);
        assert!(burst.particles().iter().all(|p| (2.0..6.0).contains(&p.size)));
    }

    #[test]
    fn test_burst_shrinks_to_nothing() {
        let mut rng = SessionRng::new(42);
        let snake = Snake::new(Point::new(5, 5));
        let mut burst = ParticleBurst::from_snake(&snake, 20.0, &mut rng);

        let mut frames = 0;
        while !burst.is_finished() {
            burst.step();
            frames += 1;
            assert!(frames < 1000, "burst should dissipate");
        }

        // size starts below 6.0 and decays by 5% per frame, so the burst
        // cannot outlive 0.95^n * 6.0 > 0.5.
        assert!(frames <= 49);
    }
}
