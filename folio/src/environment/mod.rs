use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::http::HeaderValue;
use folio_api_rest::{RestServerConfig, RestServerCorsConfig, RestServerRealIpConfig};
use folio_config::Config;
use folio_di::provider;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        ..config: ConfigProvider {
            // API
            RestServerConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider) -> Self {
        Self {
            _cache: Default::default(),
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // API
        rest_server_config: RestServerConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let cors = config
            .http
            .allowed_origins
            .as_deref()
            .map(cors_config)
            .transpose()?
            .map(Arc::new);

        let rest_server_config = RestServerConfig {
            addr: SocketAddr::new(config.http.host, config.http.port),
            request_timeout: *config.http.request_timeout,
            cors,
            real_ip_config: config.http.real_ip.as_ref().map(|real_ip_config| {
                Arc::new(RestServerRealIpConfig {
                    header: real_ip_config.header.clone(),
                    set_from: real_ip_config.set_from,
                })
            }),
        };

        Ok(Self {
            _cache: Default::default(),
            rest_server_config,
        })
    }
}

fn cors_config(allowed_origins: &[String]) -> anyhow::Result<RestServerCorsConfig> {
    if allowed_origins.iter().any(|origin| origin == "*") {
        return Ok(RestServerCorsConfig::AnyOrigin);
    }

    allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid allowed origin {origin:?}"))
        })
        .collect::<anyhow::Result<_>>()
        .map(RestServerCorsConfig::Origins)
}

#[cfg(test)]
mod tests {
    use folio_core_contact_contracts::ContactFeatureService;
    use folio_demo::contact::JANE;
    use folio_di::Provide;
    use folio_persistence_contracts::contact::ContactRepository;

    use super::{types::*, *};

    fn config() -> Config {
        folio_config::load_paths(&[folio_config::DEFAULT_CONFIG_PATH]).unwrap()
    }

    #[test]
    fn provide_rest_server() {
        let mut provider = Provider::new(ConfigProvider::new(&config()).unwrap());
        let _: RestServer = provider.provide();
    }

    #[test]
    fn default_config_allows_any_origin() {
        let provider = ConfigProvider::new(&config()).unwrap();
        assert_eq!(
            provider.rest_server_config.cors.as_deref(),
            Some(&RestServerCorsConfig::AnyOrigin)
        );
    }

    #[test]
    fn explicit_origins() {
        // Act
        let cors = cors_config(&["https://portfolio.example".into()]).unwrap();

        // Assert
        assert_eq!(
            cors,
            RestServerCorsConfig::Origins(vec![HeaderValue::from_static(
                "https://portfolio.example"
            )])
        );
    }

    #[test]
    fn invalid_origin() {
        let err = cors_config(&["https://bad\norigin".into()]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid allowed origin"));
    }

    #[tokio::test]
    async fn components_share_one_store() {
        // Arrange
        let mut provider = Provider::new(ConfigProvider::new(&config()).unwrap());
        let feature: ContactFeature = provider.provide();
        let repo: ContactRepo = provider.provide();

        // Act
        let submission = feature.submit_message(JANE.clone()).await.unwrap();

        // Assert
        assert_eq!(repo.get(submission.id).await.unwrap(), Some(submission));
    }
}
