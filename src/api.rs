// API client module: a small blocking HTTP client that fetches the raw user
// list from the configured endpoint. Parsing lives in `users`.

use crate::error::LoadError;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const USER_AGENT: &str = "users-console/1.0";

/// Runtime settings for the console. Only the endpoint can be overridden
/// from the environment; the intervals are exposed so tests can shrink them.
#[derive(Clone, Debug)]
pub struct Config {
    pub users_url: String,
    pub clock_interval: Duration,
    pub shake_interval: Duration,
    /// Show an `indicatif` spinner on stderr while loading.
    pub spinner: bool,
    /// Clear the clock line with terminal escapes instead of `\r`.
    pub clear_line: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            users_url: DEFAULT_USERS_URL.into(),
            clock_interval: Duration::from_secs(1),
            shake_interval: Duration::from_millis(500),
            spinner: false,
            clear_line: false,
        }
    }
}

impl Config {
    /// Build a config from the environment variable `USERS_API_URL` or
    /// fall back to the public jsonplaceholder endpoint.
    pub fn from_env() -> Self {
        let users_url = std::env::var("USERS_API_URL").unwrap_or_else(|_| DEFAULT_USERS_URL.into());
        Config {
            users_url,
            ..Config::default()
        }
    }
}

/// Anything that can produce the raw JSON body of the user list.
pub trait UserSource {
    fn fetch(&self) -> Result<String, LoadError>;

    /// Human-readable origin, shown in the startup banner.
    fn describe(&self) -> String {
        "an unnamed source".into()
    }
}

/// Fetches users with one GET per call. No retries, no timeout beyond the
/// reqwest defaults.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    url: String,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(HttpFetcher {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.users_url.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl UserSource for HttpFetcher {
    fn fetch(&self) -> Result<String, LoadError> {
        let res = self.client.get(&self.url).send()?;
        let status = res.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus(status.as_u16()));
        }
        Ok(res.text()?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
