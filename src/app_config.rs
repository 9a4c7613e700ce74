use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::Level;

pub const DEFAULT_FEED_URL: &str = "https://buzzvel-interviews.s3.eu-west-1.amazonaws.com/hotels.json";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    feed: Feed,
    #[serde(default)]
    format: Format,
    log: Log,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("feed.url", DEFAULT_FEED_URL)?
            .set_default("feed.timeout", "10s")?
            .set_default("log.level", "info")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("HOTEL_FINDER").prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    pub fn log(&self) -> &Log {
        &self.log
    }
}

#[derive(Debug, Deserialize)]
pub struct Feed {
    url: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Feed {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Format {
    thousands_separator: Option<char>,
}

impl Format {
    pub fn thousands_separator(&self) -> Option<char> {
        self.thousands_separator
    }
}

#[derive(Debug, Deserialize)]
pub struct Log {
    level: String,
}

impl Log {
    pub fn level(&self) -> Result<Level, InvalidLogLevel> {
        self.level.parse().map_err(|_| InvalidLogLevel(self.level.clone()))
    }

    /// The configured level, or `fallback` when the configured level is invalid.
    pub fn level_or(&self, fallback: Level) -> Level {
        self.level().unwrap_or(fallback)
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("invalid log level '{0}', expected one of trace, debug, info, warn or error")]
pub struct InvalidLogLevel(String);

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                feed: Feed {
                    url: "https://feed.url/hotels.json".to_string(),
                    timeout: Duration::from_secs(5),
                },
                format: Format::default(),
                log: Log { level: "debug".to_string() },
            },
        }
    }

    pub fn feed_url(mut self, url: String) -> Self {
        self.config.feed.url = url;
        self
    }

    pub fn feed_timeout(mut self, timeout: Duration) -> Self {
        self.config.feed.timeout = timeout;
        self
    }

    pub fn thousands_separator(mut self, separator: char) -> Self {
        self.config.format.thousands_separator = Some(separator);
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
