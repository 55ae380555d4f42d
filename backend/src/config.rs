//! Environment-driven service configuration.
//!
//! Every setting has a default so the service starts with no environment at
//! all. Reads go through [`mockable::Env`] so tests can inject values.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use mockable::Env;

use crate::outbound::persistence::{DEFAULT_STORE_PORT, StoreConfig};

const PORT_ENV: &str = "PORT";
const BIND_HOST_ENV: &str = "BIND_HOST";
const DB_HOST_ENV: &str = "DB_HOST";
const DB_PORT_ENV: &str = "DB_PORT";
const DB_USER_ENV: &str = "DB_USER";
const DB_PASSWORD_ENV: &str = "DB_PASSWORD";
const DB_NAME_ENV: &str = "DB_NAME";
const PUBLIC_DIR_ENV: &str = "PUBLIC_DIR";
const APP_ENV_ENV: &str = "APP_ENV";

/// Default HTTP listen port.
pub const DEFAULT_HTTP_PORT: u16 = 3000;
const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_USER: &str = "myuser";
const DEFAULT_DB_PASSWORD: &str = "mypassword";
const DEFAULT_DB_NAME: &str = "mydatabase";
const TEST_MODE: &str = "test";
const PORT_EXPECTED: &str = "an integer between 0 and 65535";
const HOST_EXPECTED: &str = "an IPv4 or IPv6 address";

/// Errors raised while reading configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Resolved settings for one process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listen address.
    pub bind_addr: SocketAddr,
    /// Record store connection settings.
    pub store: StoreConfig,
    /// Directory holding the frontend assets.
    pub public_dir: PathBuf,
    /// When set, the binary prepares everything but never listens.
    pub suppress_listen: bool,
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mockable::MockEnv;
    /// use users_api::config::AppConfig;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "PORT" => Some("8080".to_string()),
    ///     _ => None,
    /// });
    ///
    /// let config = AppConfig::from_env(&env).expect("valid configuration");
    /// assert_eq!(config.bind_addr.port(), 8080);
    /// assert_eq!(config.store.database(), "mydatabase");
    /// ```
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidEnv`] when a port or host does not parse.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ConfigError> {
        let port = parse_env(env, PORT_ENV, PORT_EXPECTED)?.unwrap_or(DEFAULT_HTTP_PORT);
        let host = parse_env(env, BIND_HOST_ENV, HOST_EXPECTED)?.unwrap_or(DEFAULT_BIND_HOST);
        let db_port = parse_env(env, DB_PORT_ENV, PORT_EXPECTED)?.unwrap_or(DEFAULT_STORE_PORT);

        let store = StoreConfig::new(
            string_or(env, DB_HOST_ENV, DEFAULT_DB_HOST),
            string_or(env, DB_USER_ENV, DEFAULT_DB_USER),
            string_or(env, DB_PASSWORD_ENV, DEFAULT_DB_PASSWORD),
            string_or(env, DB_NAME_ENV, DEFAULT_DB_NAME),
        )
        .with_port(db_port);

        let public_dir = env
            .string(PUBLIC_DIR_ENV)
            .map_or_else(default_public_dir, PathBuf::from);
        let suppress_listen = env.string(APP_ENV_ENV).as_deref() == Some(TEST_MODE);

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            store,
            public_dir,
            suppress_listen,
        })
    }
}

/// The `public/` directory shipped next to this crate's manifest.
pub fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

fn string_or<E: Env>(env: &E, name: &str, default: &str) -> String {
    env.string(name).unwrap_or_else(|| default.to_owned())
}

fn parse_env<E, T>(
    env: &E,
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError>
where
    E: Env,
    T: std::str::FromStr,
{
    let Some(raw) = env.string(name) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv {
            name,
            value: raw,
            expected,
        })
}
