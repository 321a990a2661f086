use axum::{
    http::{header, Method},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::RestServerCorsConfig;

pub fn add<S: Clone + Send + Sync + 'static>(
    router: Router<S>,
    cors_config: impl AsRef<RestServerCorsConfig>,
) -> Router<S> {
    let allow_origin = match cors_config.as_ref() {
        RestServerCorsConfig::AnyOrigin => AllowOrigin::any(),
        RestServerCorsConfig::Origins(origins) => AllowOrigin::list(origins.iter().cloned()),
    };

    router.layer(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
