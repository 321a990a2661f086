use folio_config::Config;
use folio_di::Provide;
use tracing::info;

use crate::environment::{types::RestServer, ConfigProvider, Provider};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let config_provider = ConfigProvider::new(&config)?;
    let mut provider = Provider::new(config_provider);
    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve().await
}
