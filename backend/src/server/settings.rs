//! Application settings loaded via OrthoConfig.
//!
//! Values come from command-line flags, `PMP_*` environment variables and
//! configuration files, in ascending precedence of files, environment, CLI.

use std::ffi::OsString;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use pmp_backend::outbound::persistence::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_CONNECTIONS, PoolConfig,
};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Server and persistence settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PMP")]
pub struct AppSettings {
    /// Address to bind. Defaults to `0.0.0.0`.
    pub host: Option<IpAddr>,
    /// Port to bind. Defaults to 8080.
    pub port: Option<u16>,
    /// PostgreSQL URL. Without it the server keeps records in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Seconds to wait for a pooled connection before failing the request.
    /// Zero is raised to the pool's one-second minimum.
    pub db_connection_timeout_secs: Option<u64>,
}

/// Load settings from `args` layered over configuration files and the
/// environment.
///
/// # Errors
/// Returns [`std::io::Error`] when a source cannot be read or a value fails to
/// parse.
pub fn load_settings<I, T>(args: I) -> std::io::Result<AppSettings>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    AppSettings::load_from_iter(args)
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))
}

impl AppSettings {
    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Pool configuration, or `None` when no database URL is set.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref().filter(|url| !url.trim().is_empty())?;
        let timeout = self
            .db_connection_timeout_secs
            .map_or(DEFAULT_CONNECTION_TIMEOUT, Duration::from_secs);
        Some(
            PoolConfig::new(url)
                .with_max_size(self.db_max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS))
                .with_connection_timeout(timeout),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Settings resolution from the environment.

    use super::*;

    use env_lock::lock_env;
    use pmp_backend::outbound::persistence::MIN_CONNECTION_TIMEOUT;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "PMP_HOST",
        "PMP_PORT",
        "PMP_DATABASE_URL",
        "PMP_DB_MAX_CONNECTIONS",
        "PMP_DB_CONNECTION_TIMEOUT_SECS",
    ];

    fn load_from_empty_args() -> AppSettings {
        load_settings([OsString::from("pmp-backend")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("addr"));
        assert!(settings.pool_config().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PMP_HOST", Some("127.0.0.1".to_owned())),
            ("PMP_PORT", Some("9090".to_owned())),
            (
                "PMP_DATABASE_URL",
                Some("postgres://pmp@localhost/pmp".to_owned()),
            ),
            ("PMP_DB_MAX_CONNECTIONS", Some("4".to_owned())),
            ("PMP_DB_CONNECTION_TIMEOUT_SECS", Some("5".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:9090".parse().expect("addr"));
        let pool = settings.pool_config().expect("pool config");
        assert_eq!(pool.database_url(), "postgres://pmp@localhost/pmp");
        assert_eq!(pool.max_size(), 4);
        assert_eq!(pool.connection_timeout(), Duration::from_secs(5));
    }

    #[rstest]
    fn zero_connection_timeout_is_raised_to_minimum() {
        let mut vars = VARS.map(|name| (name, None::<String>));
        vars[2].1 = Some("postgres://pmp@localhost/pmp".to_owned());
        vars[4].1 = Some("0".to_owned());
        let _guard = lock_env(vars);

        let pool = load_from_empty_args().pool_config().expect("pool config");
        assert_eq!(pool.connection_timeout(), MIN_CONNECTION_TIMEOUT);
    }

    #[rstest]
    fn command_line_overrides_environment() {
        let mut vars = VARS.map(|name| (name, None::<String>));
        vars[1].1 = Some("9090".to_owned());
        let _guard = lock_env(vars);

        let settings = load_settings(["pmp-backend", "--port", "7070"]).expect("config should load");
        assert_eq!(settings.bind_addr().port(), 7070);
    }

    #[rstest]
    fn blank_database_url_keeps_memory_storage() {
        let mut vars = VARS.map(|name| (name, None::<String>));
        vars[2].1 = Some("  ".to_owned());
        let _guard = lock_env(vars);

        assert!(load_from_empty_args().pool_config().is_none());
    }
}
