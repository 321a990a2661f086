use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use serde::Deserialize;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of config files, layered in order.
pub const CONFIG_PATHS_ENV: &str = "FOLIO_CONFIG";

/// Prefix of environment variables overriding single values, e.g.
/// `FOLIO__HTTP__PORT=8080`.
pub const ENV_PREFIX: &str = "FOLIO";

/// Load the config from the files listed in `FOLIO_CONFIG`, falling back to
/// [`DEFAULT_CONFIG_PATH`].
pub fn load() -> anyhow::Result<Config> {
    let paths = match std::env::var_os(CONFIG_PATHS_ENV) {
        Some(paths) => std::env::split_paths(&paths).collect(),
        None => vec![PathBuf::from(DEFAULT_CONFIG_PATH)],
    };
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    pub request_timeout: Duration,
    /// Origins allowed to call the API from a browser. `"*"` allows any
    /// origin, a missing list disables CORS headers.
    pub allowed_origins: Option<Vec<String>>,
    pub real_ip: Option<RealIpConfig>,
}

/// Trust a client IP header, but only on requests coming from `set_from`.
#[derive(Debug, Deserialize)]
pub struct RealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

#[cfg(test)]
mod tests {
    use std::time::Duration as StdDuration;

    use super::*;

    #[test]
    fn load_default_config() {
        load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
    }

    #[test]
    fn later_files_override_earlier_ones() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("folio-config-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let overrides = dir.join("overrides.toml");
        std::fs::write(
            &overrides,
            "[http]\nport = 9000\nrequest_timeout = \"1m 30s\"\nallowed_origins = [\"https://example.com\"]\n",
        )
        .unwrap();

        // Act
        let config = load_paths(&[PathBuf::from(DEFAULT_CONFIG_PATH), overrides]).unwrap();

        // Assert
        assert_eq!(config.http.port, 9000);
        assert_eq!(*config.http.request_timeout, StdDuration::from_secs(90));
        assert_eq!(
            config.http.allowed_origins.as_deref(),
            Some(&["https://example.com".to_owned()][..])
        );

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_file() {
        let err = load_paths(&[Path::new("/nonexistent/folio.toml")]).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config file"));
    }
}
