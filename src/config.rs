use std::{env, net::SocketAddr, path::PathBuf};
use tracing::warn;

const DEFAULT_DATA_PATH: &str = "data/habits.json";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub port: u16,
}

impl Config {
    /// Reads `APP_DATA_PATH` and `PORT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            data_path: resolve_data_path(env::var("APP_DATA_PATH").ok()),
            port: resolve_port(env::var("PORT").ok()),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

pub fn resolve_data_path(value: Option<String>) -> PathBuf {
    match value {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DATA_PATH),
    }
}

fn resolve_port(value: Option<String>) -> u16 {
    match value {
        Some(value) => parse_port(&value).unwrap_or_else(|| {
            warn!("ignoring invalid PORT {value:?}, using {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    }
}

fn parse_port(value: &str) -> Option<u16> {
    value.trim().parse::<u16>().ok()
}
