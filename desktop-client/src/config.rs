use serde::{Deserialize, Serialize};

use engine::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Fixed RNG seed; every session replays the same game when set.
    pub seed: Option<u64>,
    pub log_prefix: Option<String>,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.log_prefix
            && prefix.is_empty()
        {
            return Err("log prefix must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        ClientConfig::default().validate().expect("default should validate");
    }

    #[test]
    fn test_empty_log_prefix_is_rejected() {
        let config = ClientConfig {
            log_prefix: Some(String::new()),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
