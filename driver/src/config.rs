use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

static SERVER_HOST: &str = "SERVER_HOST";
static SERVER_PORT: &str = "SERVER_PORT";
static SEED_CATALOG: &str = "SEED_CATALOG";

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ServerConfig {
    host: IpAddr,
    port: u16,
    seed_catalog: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed_catalog: true,
        }
    }
}

impl ServerConfig {
    /// Reads `SERVER_HOST`, `SERVER_PORT` and `SEED_CATALOG`, honouring a `.env` file.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let default = Self::default();
        Ok(Self {
            host: parse_or(SERVER_HOST, default.host).convert_error()?,
            port: parse_or(SERVER_PORT, default.port).convert_error()?,
            seed_catalog: parse_or(SEED_CATALOG, default.seed_catalog).convert_error()?,
        })
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn seed_catalog(&self) -> bool {
        self.seed_catalog
    }
}

fn parse_or<T>(key: &str, default: T) -> Result<T, DriverError>
where
    T: FromStr,
    T::Err: Display,
{
    match env(key)? {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|error| DriverError::Parse {
                key: key.to_string(),
                reason: error.to_string(),
                value,
            })
        }
    }
}
