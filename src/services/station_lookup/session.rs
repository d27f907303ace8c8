use thiserror::Error;
use tracing::{debug, warn};

use super::{
    lookup::{lookup, LookupError},
    policy::LookupPolicy,
    sources::{CachedReading, CoordinateSource, GeolocationError, ReadingCache, StationSource},
};
use crate::types::{coordinate::Coordinate, station_reading::StationReading};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    GeolocationUnavailable(#[from] GeolocationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Lookup from {origin} did not finish within the time limit")]
    TimedOut { origin: Coordinate },
}

pub async fn resolve_reading(
    coordinates: &dyn CoordinateSource,
    cache: Option<&dyn ReadingCache>,
    stations: &dyn StationSource,
    policy: &LookupPolicy,
) -> Result<StationReading, SessionError> {
    let origin = coordinates.current_position().await?;

    if let Some(entry) = cache.and_then(|c| c.load()) {
        if entry.origin == origin {
            debug!("Serving cached reading for {}", origin);
            return Ok(entry.reading);
        }
    }

    let search = lookup(stations, origin, policy);
    let reading = match policy.timeout {
        Some(limit) => tokio::time::timeout(limit, search).await.map_err(|_| {
            warn!("Lookup from {} timed out after {:?}", origin, limit);
            SessionError::TimedOut { origin }
        })??,
        None => search.await?,
    };

    if let Some(cache) = cache {
        cache.store(CachedReading {
            origin,
            reading: reading.clone(),
        });
    }

    Ok(reading)
}
