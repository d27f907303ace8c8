use std::sync::Arc;

use crate::{
    services::{
        openaq_client::openaq_service::OpenAqService,
        station_lookup::{policy::LookupPolicy, sources::ReadingCache},
    },
    types::coordinate::Coordinate,
};

#[derive(Clone)]
pub struct AppState {
    pub openaq_service: OpenAqService,
    pub lookup_policy: LookupPolicy,
    pub default_position: Option<Coordinate>,
    pub reading_cache: Option<Arc<dyn ReadingCache>>,
    pub auth_key: Option<String>,
}
