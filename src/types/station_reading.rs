use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationReading {
    pub location: String,
    pub pm25_value: f64,
    pub last_updated: DateTime<Utc>,
    pub coordinates: Coordinate,
}
