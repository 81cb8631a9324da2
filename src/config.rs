//! Runtime configuration read from the environment once at startup.

use crate::storage::resolve_data_path;
use std::{env, net::SocketAddr, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    /// `PORT`, falling back to 8080 when unset or unparsable.
    pub port: u16,
    /// `APP_DATA_PATH`, the JSON file holding the activity log.
    pub data_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(crate::storage::DEFAULT_DATA_PATH),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: parse_port(env::var("PORT").ok().as_deref()),
            data_path: resolve_data_path(),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}
