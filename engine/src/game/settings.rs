use std::time::Duration;

use crate::config::Validate;

/// Fixed arcade rules. These are constants of the game, not user-facing
/// difficulty knobs; `Default` is the canonical 400x400 px / 20 px cell setup.
#[derive(Clone, Debug)]
pub struct GameSettings {
    pub grid_extent: i32,
    pub cell_size_px: f32,
    pub tick_interval: Duration,
    pub power_up_chance: f32,
    pub food_score: u32,
    pub golden_score: u32,
    pub invincibility_trigger_score: u32,
    pub invincibility_duration: Duration,
    pub freeze_duration: Duration,
    pub explosive_penalty: usize,
    pub win_restart_delay: Duration,
    pub death_restart_delay: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_extent: 20,
            cell_size_px: 20.0,
            tick_interval: Duration::from_millis(100),
            power_up_chance: 0.2,
            food_score: 10,
            golden_score: 50,
            invincibility_trigger_score: 100,
            invincibility_duration: Duration::from_millis(15000),
            freeze_duration: Duration::from_millis(3000),
            explosive_penalty: 3,
            win_restart_delay: Duration::from_millis(15000),
            death_restart_delay: Duration::from_millis(5000),
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.grid_extent < 2 {
            return Err("Grid extent must be at least 2".to_string());
        }
        if self.cell_size_px <= 0.0 {
            return Err("Cell size must be positive".to_string());
        }
        if self.tick_interval < Duration::from_millis(10) {
            return Err("Tick interval must be at least 10ms".to_string());
        }
        if !(0.0..=1.0).contains(&self.power_up_chance) {
            return Err("Power-up chance must be between 0.0 and 1.0".to_string());
        }
        if self.invincibility_trigger_score == 0 {
            return Err("Invincibility trigger score must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        GameSettings::default().validate().expect("defaults should validate");
    }

    #[test]
    fn test_out_of_range_power_up_chance_is_rejected() {
        let settings = GameSettings {
            power_up_chance: 1.5,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
