use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

use multiply_four_engine::{Board, Difficulty};

pub const CONFIG_FILE: &str = "multiply_four_config.yaml";

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    /// Overrides the standard grid; must still be 6x6 distinct positive
    /// integers.
    pub board: Option<Vec<Vec<u32>>>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(rows) = &self.board {
            Board::from_rows(rows).map_err(|e| format!("Invalid board in config: {}", e))?;
        }
        Ok(())
    }
}

/// A missing file is not an error: defaults apply.
pub fn load_config(path: &str) -> Result<Config, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => return Err(format!("Failed to read config file: {}", err)),
    };
    let config: Config = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    Ok(config)
}

pub fn save_config(path: &str, config: &Config) -> Result<(), String> {
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
}
