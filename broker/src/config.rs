use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

fn default_inbox_capacity() -> usize {
    256
}

/// Broker configuration, loaded from a YAML file and overridable through
/// environment variables under a configurable prefix
/// (`<PREFIX>SERVER__HOST`, `<PREFIX>STORAGE__RETENTION_DAYS`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    /// Root path; the broker keeps `messages/` and `subscriptions/` under it.
    pub directory: PathBuf,
    pub retention_days: i64,
    pub deletion_buffer_days: i64,
    pub deletion_interval_hours: i64,
    /// Capacity of each subscription's bounded inbox.
    #[serde(default = "default_inbox_capacity")]
    pub inbox_capacity: usize,
}

impl Config {
    /// Loads the YAML file at `path`, applies environment overrides, then
    /// validates. Any failure here is fatal to startup.
    pub fn load(path: &Path, env_prefix: &str) -> Result<Self, Error> {
        let file = std::fs::File::open(path).map_err(|err| {
            Error::Config(format!(
                "could not open config file {}: {err}",
                path.display()
            ))
        })?;
        let mut config: Config = serde_yaml::from_reader(file).map_err(|err| {
            Error::Config(format!(
                "could not parse config file {}: {err}",
                path.display()
            ))
        })?;
        config.apply_env(env_prefix)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self, prefix: &str) -> Result<(), Error> {
        if let Some(host) = env_var(prefix, "SERVER__HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_var(prefix, "SERVER__PORT") {
            self.server.port = parse_env("SERVER__PORT", &port)?;
        }
        if let Some(directory) = env_var(prefix, "STORAGE__DIRECTORY") {
            self.storage.directory = PathBuf::from(directory);
        }
        if let Some(days) = env_var(prefix, "STORAGE__RETENTION_DAYS") {
            self.storage.retention_days = parse_env("STORAGE__RETENTION_DAYS", &days)?;
        }
        if let Some(days) = env_var(prefix, "STORAGE__DELETION_BUFFER_DAYS") {
            self.storage.deletion_buffer_days = parse_env("STORAGE__DELETION_BUFFER_DAYS", &days)?;
        }
        if let Some(hours) = env_var(prefix, "STORAGE__DELETION_INTERVAL_HOURS") {
            self.storage.deletion_interval_hours =
                parse_env("STORAGE__DELETION_INTERVAL_HOURS", &hours)?;
        }
        if let Some(capacity) = env_var(prefix, "STORAGE__INBOX_CAPACITY") {
            self.storage.inbox_capacity = parse_env("STORAGE__INBOX_CAPACITY", &capacity)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), Error> {
        if self.server.host.is_empty() {
            return Err(Error::Config("server.host must not be empty".to_string()));
        }
        if self.storage.retention_days <= 1 {
            return Err(Error::Config(
                "storage.retentionDays must be greater than 1".to_string(),
            ));
        }
        if self.storage.deletion_buffer_days <= 1 {
            return Err(Error::Config(
                "storage.deletionBufferDays must be greater than 1".to_string(),
            ));
        }
        if self.storage.deletion_interval_hours <= 1 || self.storage.deletion_interval_hours >= 24 {
            return Err(Error::Config(
                "storage.deletionIntervalHours must be between 1 and 24 exclusive".to_string(),
            ));
        }
        if self.storage.inbox_capacity == 0 {
            return Err(Error::Config(
                "storage.inboxCapacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_var(prefix: &str, name: &str) -> Option<String> {
    std::env::var(format!("{prefix}{name}")).ok()
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T, Error>
where
    T::Err: Display,
{
    value
        .parse()
        .map_err(|err| Error::Config(format!("invalid value for {name}: {err}")))
}
