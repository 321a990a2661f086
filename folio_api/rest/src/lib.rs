use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
    time::Duration,
};

use axum::{
    http::{HeaderValue, StatusCode},
    Router,
};
use folio_core_contact_contracts::ContactFeatureService;
use folio_di::Build;
use folio_utils::Apply;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Contact> {
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub addr: SocketAddr,
    pub request_timeout: Duration,
    pub cors: Option<Arc<RestServerCorsConfig>>,
    pub real_ip_config: Option<Arc<RestServerRealIpConfig>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestServerCorsConfig {
    AnyOrigin,
    Origins(Vec<HeaderValue>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestServerRealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactFeatureService,
{
    pub async fn serve(self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(self.config.addr).await?;
        info!("Listening on {}", listener.local_addr()?);

        let router = self.router();
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let RestServerConfig {
            request_timeout,
            cors,
            real_ip_config,
            ..
        } = self.config;

        Router::new()
            .merge(routes::contact::router(self.contact.into()))
            .apply(middlewares::panic_handler::add)
            .apply_map(cors, middlewares::cors::add)
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                request_timeout,
            ))
            .apply(middlewares::trace::add)
            .apply(middlewares::client_ip::add(real_ip_config))
            .apply(middlewares::request_id::add)
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(err) => tracing::error!("Failed to listen for shutdown signal: {err}"),
    }
}
