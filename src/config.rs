use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::error::{config_error, Error};

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub listen_addr: SocketAddr,
    pub google_maps_api_base: String,
    pub google_maps_api_key: String,
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let host: IpAddr = parse_or("HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port: u16 = parse_or("PORT", 3000)?;

        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 5)?,
            listen_addr: SocketAddr::new(host, port),
            google_maps_api_base: env::var("GOOGLE_MAPS_API_BASE")
                .unwrap_or_else(|_| "maps.googleapis.com".into()),
            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY")?,
        })
    }
}

fn parse_or<T: FromStr>(name: &str, default: T) -> Result<T, Error> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| config_error(name)),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err.into()),
    }
}
