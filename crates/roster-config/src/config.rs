use roster_types::{demo_users, User, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// A seed row from `[[users]]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEntry {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl From<&UserEntry> for User {
    fn from(entry: &UserEntry) -> Self {
        let mut user = User::new(entry.id, entry.name.clone(), entry.email.clone());
        if !entry.active {
            user.deactivate();
        }
        user
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

impl Config {
    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// The configured seed users, or the demo roster when none are configured.
    pub fn roster(&self) -> Vec<User> {
        if self.users.is_empty() {
            return demo_users();
        }

        let mut seen = HashSet::new();
        for entry in &self.users {
            if !seen.insert(entry.id) {
                warn!(
                    "Duplicate user id {} in config, lookups return the first entry",
                    entry.id
                );
            }
        }

        self.users.iter().map(User::from).collect()
    }
}
