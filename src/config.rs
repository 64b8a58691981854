use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

const DEFAULT_DATA_DIR: &str = ".watchshop";

/// Merchant WhatsApp number in international format, overridable per
/// deployment.
const DEFAULT_WA_NUMBER: &str = "2348066775722";

pub struct Config {
    pub data_dir: String,
    pub wa_number: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            data_dir: try_load("WATCHSHOP_DATA_DIR", DEFAULT_DATA_DIR),
            wa_number: try_load("WATCHSHOP_WA_NUMBER", DEFAULT_WA_NUMBER),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
