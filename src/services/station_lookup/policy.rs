use std::time::Duration;

pub const DEFAULT_STEP_DEGREES: f64 = 0.25;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;
pub const DEFAULT_RADIUS_METERS: u32 = 25_000;

#[derive(Debug, Clone, PartialEq)]
pub struct LookupPolicy {
    pub step_degrees: f64,
    /// Total queries allowed, the first one included. Treated as at least 1.
    pub max_attempts: u32,
    pub radius_meters: u32,
    /// Upper bound on the whole search, not on a single attempt.
    pub timeout: Option<Duration>,
}

impl Default for LookupPolicy {
    fn default() -> Self {
        LookupPolicy {
            step_degrees: DEFAULT_STEP_DEGREES,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            radius_meters: DEFAULT_RADIUS_METERS,
            timeout: None,
        }
    }
}
