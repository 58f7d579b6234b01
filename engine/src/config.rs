use std::io::ErrorKind;

use serde::{Serialize, de::DeserializeOwned};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Loads a yaml config from `file_path`. A missing file yields the default
/// config; anything unreadable or invalid is an error.
pub fn load_yaml_config<T>(file_path: &str) -> Result<T, String>
where
    T: DeserializeOwned + Validate + Default,
{
    let content = match std::fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(format!("Failed to read config {}: {}", file_path, e)),
    };

    let config: T = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to parse config {}: {}", file_path, e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

pub fn save_yaml_config<T>(file_path: &str, config: &T) -> Result<(), String>
where
    T: Serialize + Validate,
{
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(file_path, content)
        .map_err(|e| format!("Failed to write config {}: {}", file_path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize, Default)]
    struct TestConfig {
        name: String,
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.name == "bad" {
                return Err("name must not be 'bad'".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_missing_file_yields_default() {
        let config: TestConfig =
            load_yaml_config("/nonexistent/path/config.yaml").expect("should fall back to default");
        assert_eq!(config, TestConfig::default());
    }

    #[test]
    fn test_saved_config_loads_back() {
        let config = TestConfig {
            name: "snake".to_string(),
        };
        let dir = std::env::temp_dir().join("snake_arcade_config_save_test");
        std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
        let path = dir.join("client.yaml");
        let path_str = path.to_str().expect("temp path should be utf-8");

        save_yaml_config(path_str, &config).expect("save should succeed");
        let loaded: TestConfig = load_yaml_config(path_str).expect("load should succeed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = TestConfig {
            name: "bad".to_string(),
        };
        let dir = std::env::temp_dir().join("snake_arcade_config_test");
        std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
        let path = dir.join("client.yaml");
        let path_str = path.to_str().expect("temp path should be utf-8");

        save_yaml_config(path_str, &config).expect_err("validation should fail on save");

        std::fs::write(&path, "name: bad\n").expect("temp file should be writable");
        load_yaml_config::<TestConfig>(path_str).expect_err("validation should fail on load");
    }
}
