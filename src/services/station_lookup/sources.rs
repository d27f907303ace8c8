use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use thiserror::Error;

use crate::types::{coordinate::Coordinate, station_reading::StationReading};

pub struct Measurement {
    pub parameter: String,
    pub value: f64,
    pub last_updated: DateTime<Utc>,
}

pub struct Station {
    pub location: String,
    pub measurements: Vec<Measurement>,
}

#[derive(Debug, Error)]
#[error("{0}")]
pub struct StationSourceError(pub String);

#[async_trait]
pub trait StationSource: Send + Sync {
    async fn nearest_station(
        &self,
        coordinate: Coordinate,
        radius_meters: u32,
    ) -> Result<Option<Station>, StationSourceError>;
}

#[derive(Debug, Error)]
#[error("Position unavailable: {0}")]
pub struct GeolocationError(pub String);

#[async_trait]
pub trait CoordinateSource: Send + Sync {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError>;
}

pub struct FixedCoordinateSource {
    coordinate: Option<Coordinate>,
}

impl FixedCoordinateSource {
    pub fn new(coordinate: Option<Coordinate>) -> Self {
        FixedCoordinateSource { coordinate }
    }
}

#[async_trait]
impl CoordinateSource for FixedCoordinateSource {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        self.coordinate
            .ok_or_else(|| GeolocationError("no position fix configured".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CachedReading {
    pub origin: Coordinate,
    pub reading: StationReading,
}

pub trait ReadingCache: Send + Sync {
    fn load(&self) -> Option<CachedReading>;
    fn store(&self, entry: CachedReading);
}

#[derive(Default)]
pub struct InMemoryReadingCache {
    slot: RwLock<Option<CachedReading>>,
}

impl InMemoryReadingCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReadingCache for InMemoryReadingCache {
    fn load(&self) -> Option<CachedReading> {
        self.slot.read().clone()
    }

    fn store(&self, entry: CachedReading) {
        *self.slot.write() = Some(entry);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn reading(location: &str) -> StationReading {
        StationReading {
            location: location.to_string(),
            pm25_value: 12.0,
            last_updated: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            coordinates: Coordinate::new(1.0, 1.0),
        }
    }

    #[tokio::test]
    async fn fixed_source_without_position_is_unavailable() {
        let source = FixedCoordinateSource::new(None);

        assert!(source.current_position().await.is_err());
    }

    #[tokio::test]
    async fn fixed_source_returns_its_position() {
        let source = FixedCoordinateSource::new(Some(Coordinate::new(13.75, 100.5)));

        assert_eq!(
            source.current_position().await.unwrap(),
            Coordinate::new(13.75, 100.5)
        );
    }

    #[test]
    fn cache_keeps_only_last_entry() {
        let cache = InMemoryReadingCache::new();
        assert!(cache.load().is_none());

        cache.store(CachedReading {
            origin: Coordinate::new(1.0, 1.0),
            reading: reading("first"),
        });
        cache.store(CachedReading {
            origin: Coordinate::new(2.0, 2.0),
            reading: reading("second"),
        });

        let entry = cache.load().unwrap();
        assert_eq!(entry.origin, Coordinate::new(2.0, 2.0));
        assert_eq!(entry.reading.location, "second");
    }
}
