use crate::error::{QuotzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "quotes.json";

/// Configuration for quotz, stored as config.json beside the data blob.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotzConfig {
    /// File name of the serialized quote collection.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Write the blob inline on every mutation instead of on the
    /// background writer. Slower per call, no crash window.
    #[serde(default)]
    pub eager_writes: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for QuotzConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            eager_writes: false,
        }
    }
}

impl QuotzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(QuotzError::Io)?;
        let config: QuotzConfig =
            serde_json::from_str(&content).map_err(QuotzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(QuotzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(QuotzError::Serialization)?;
        fs::write(config_path, content).map_err(QuotzError::Io)?;
        Ok(())
    }
}
