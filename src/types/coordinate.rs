use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Shifts both axes by the same number of degrees. No wrapping or clamping
    /// is applied; out-of-range values are left for the upstream to reject.
    pub fn offset(&self, step_degrees: f64) -> Self {
        Coordinate {
            latitude: self.latitude + step_degrees,
            longitude: self.longitude + step_degrees,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
