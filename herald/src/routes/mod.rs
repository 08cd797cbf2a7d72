pub mod announcement;
pub mod v1;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::post,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{config::Config, state::AppState};

pub fn create_routes(config: &Config) -> Router<AppState> {
    Router::new()
        .nest("/api/v1", v1::create_routes())
        .route(
            "/api/announcement",
            post(announcement::publish_announcement)
                .options(announcement::preflight)
                .fallback(announcement::method_not_allowed),
        )
        .layer(cors_layer(config))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.allowed_origin == "*" {
        AllowOrigin::any()
    } else {
        HeaderValue::from_str(&config.allowed_origin)
            .map(AllowOrigin::exact)
            .unwrap_or_else(|_| AllowOrigin::any())
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-admin-pass"),
        ])
}
