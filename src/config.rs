use std::{fs, io, path::Path};

use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "fraction.json";
pub const DEFAULT_PRECISION: usize = 6;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    // print the float approximation next to fraction results
    pub show_float: bool,
    // digits after the decimal point for float output
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_float: false,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Missing files fall back to the defaults, malformed ones are an error.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, io::Error> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            log::warn!("Failed to read {}: {}", path.display(), err);
            return Ok(Config::default());
        }
    };
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
