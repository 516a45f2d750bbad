use std::{fs, path::Path, str::FromStr};

use agent::{client::OPPONENT_NAME, config::StrategyConfig};
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::{Error, Result};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub player_name: String,
    pub opponent_name: String,
    pub strategy: StrategyConfig,
    pub log_level: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player_name: "Player".to_owned(),
            opponent_name: OPPONENT_NAME.to_owned(),
            strategy: StrategyConfig::default(),
            log_level: None,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::ParseConfig {
            path: path.to_owned(),
            source,
        })
    }

    pub fn log_level(&self) -> Result<Option<Level>> {
        self.log_level
            .as_deref()
            .map(|level| Level::from_str(level).map_err(|_| Error::InvalidLogLevel(level.to_owned())))
            .transpose()
    }
}
