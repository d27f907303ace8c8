use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;

use super::sources::{Measurement, Station, StationSource, StationSourceError};
use crate::types::coordinate::Coordinate;

pub type Reply = Result<Option<Station>, StationSourceError>;

pub struct ScriptedStations {
    replies: Mutex<VecDeque<Reply>>,
    queried: Mutex<Vec<Coordinate>>,
}

impl ScriptedStations {
    pub fn new(replies: Vec<Reply>) -> Self {
        ScriptedStations {
            replies: Mutex::new(replies.into()),
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn queried(&self) -> Vec<Coordinate> {
        self.queried.lock().clone()
    }
}

#[async_trait]
impl StationSource for ScriptedStations {
    async fn nearest_station(
        &self,
        coordinate: Coordinate,
        _radius_meters: u32,
    ) -> Result<Option<Station>, StationSourceError> {
        self.queried.lock().push(coordinate);
        self.replies.lock().pop_front().unwrap_or(Ok(None))
    }
}

pub fn station(location: &str, measurements: &[(&str, f64)]) -> Station {
    Station {
        location: location.to_string(),
        measurements: measurements
            .iter()
            .map(|(parameter, value)| Measurement {
                parameter: parameter.to_string(),
                value: *value,
                last_updated: Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap(),
            })
            .collect(),
    }
}
