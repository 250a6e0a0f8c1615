//! Service configuration from the environment (`.env` is honoured).

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::{Result, StorefrontError};

const DEFAULT_PORT: u16 = 8083;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// JSON array of shops seeding the in-memory directory.
    pub shops_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { bind_addr: IpAddr::from([0, 0, 0, 0]), port: DEFAULT_PORT, shops_file: None }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| StorefrontError::Config(format!("invalid PORT: {raw}")))?,
            None => defaults.port,
        };
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().map_err(|_| StorefrontError::Config(format!("invalid BIND_ADDR: {raw}")))?,
            None => defaults.bind_addr,
        };
        let shops_file = lookup("SHOPS_FILE").filter(|s| !s.is_empty()).map(PathBuf::from);
        Ok(Self { bind_addr, port, shops_file })
    }

    pub fn socket_addr(&self) -> SocketAddr { SocketAddr::new(self.bind_addr, self.port) }
}
