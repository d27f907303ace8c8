use std::sync::Arc;

use crate::{
    middlewares::auth::auth_middleware,
    routes::apply_routes,
    services::{
        openaq_client::openaq_service::{OpenAqService, OpenAqServiceConfig},
        station_lookup::sources::{InMemoryReadingCache, ReadingCache},
    },
    types::app_state::AppState,
};
use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

pub use crate::utils::config::AppConfig;

pub fn gen_app(config: AppConfig) -> Router {
    let cors_middleware = CorsLayer::permissive();
    let reading_cache = if config.reading_cache {
        Some(Arc::new(InMemoryReadingCache::new()) as Arc<dyn ReadingCache>)
    } else {
        None
    };
    let state = AppState {
        openaq_service: OpenAqService::new(OpenAqServiceConfig {
            api_key: config.openaq_key,
            host: config.openaq_host,
        }),
        lookup_policy: config.lookup_policy,
        default_position: config.default_position,
        reading_cache,
        auth_key: config.auth_key,
    };

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}

async fn root() -> &'static str {
    "Air quality service is running"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub openaq_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    gen_mock_app_with(|_| {}).await
}

#[cfg(test)]
pub async fn gen_mock_app_with(customize: impl FnOnce(&mut AppConfig)) -> MockApp {
    let openaq_server = mockito::Server::new_async().await;

    let mut config = AppConfig {
        openaq_host: openaq_server.url(),
        ..AppConfig::for_tests()
    };
    customize(&mut config);

    MockApp {
        app: gen_app(config),
        openaq_server,
    }
}
