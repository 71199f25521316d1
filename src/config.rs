use std::env;

use chrono::Duration;

use crate::error::{config_error, Error};
use crate::viewport::Platform;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub platform: Platform,
    pub loader_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://eagle_guide.db".into(),
            platform: Platform::Android,
            loader_delay: Duration::milliseconds(6000),
        }
    }
}

impl Config {
    /// Reads `EAGLE_GUIDE_*` variables, after loading a `.env` file when one
    /// is present. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let mut config = Self::default();

        if let Some(url) = optional_var("EAGLE_GUIDE_DATABASE_URL")? {
            config.database_url = url;
        }

        if let Some(platform) = optional_var("EAGLE_GUIDE_PLATFORM")? {
            config.platform = platform.parse()?;
        }

        if let Some(millis) = optional_var("EAGLE_GUIDE_LOADER_MS")? {
            let millis: i64 = millis.parse().map_err(|_| config_error())?;
            config.loader_delay = Duration::milliseconds(millis);
        }

        Ok(config)
    }
}

fn optional_var(key: &str) -> Result<Option<String>, Error> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

pub fn init_tracing() {
    if tracing_subscriber::fmt().try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[test]
fn tracing_can_be_initialised_twice() {
    init_tracing();
    init_tracing();

    tracing::info!("subscriber installed");
}

#[test]
fn reads_overrides_from_env() {
    env::set_var("EAGLE_GUIDE_PLATFORM", "ios");
    env::set_var("EAGLE_GUIDE_LOADER_MS", "1500");

    let config = Config::from_env().unwrap();

    assert_eq!(config.platform, Platform::Ios);
    assert_eq!(config.loader_delay, Duration::milliseconds(1500));

    env::set_var("EAGLE_GUIDE_LOADER_MS", "soon");
    assert!(Config::from_env().is_err());

    env::remove_var("EAGLE_GUIDE_PLATFORM");
    env::remove_var("EAGLE_GUIDE_LOADER_MS");
}
