use thiserror::Error;
use tracing::{debug, info, warn};

use super::{policy::LookupPolicy, sources::StationSource};
use crate::types::{coordinate::Coordinate, station_reading::StationReading};

pub const PM25_PARAMETER: &str = "pm25";

#[derive(Debug, Error, PartialEq)]
pub enum LookupError {
    #[error("No station found after {attempts} attempts (last position {coordinate})")]
    ExhaustedRetries {
        coordinate: Coordinate,
        attempts: u32,
    },

    #[error("Station {location} near {coordinate} reports no pm25 measurement")]
    NoPm25Measurement {
        coordinate: Coordinate,
        location: String,
    },

    #[error("Station query at {coordinate} failed: {message}")]
    Transport {
        coordinate: Coordinate,
        message: String,
    },
}

impl LookupError {
    pub fn reason(&self) -> &'static str {
        match self {
            LookupError::ExhaustedRetries { .. } => "exhausted retries",
            LookupError::NoPm25Measurement { .. } => "no pm25 measurement",
            LookupError::Transport { .. } => "transport error",
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        match self {
            LookupError::ExhaustedRetries { coordinate, .. }
            | LookupError::NoPm25Measurement { coordinate, .. }
            | LookupError::Transport { coordinate, .. } => *coordinate,
        }
    }
}

/// Searches for the nearest station reporting PM2.5.
///
/// An empty result moves the position by `policy.step_degrees` on both axes
/// and queries again, up to `policy.max_attempts` queries in total. A station
/// without a pm25 measurement or a failed query ends the search at once.
pub async fn lookup<S>(
    source: &S,
    origin: Coordinate,
    policy: &LookupPolicy,
) -> Result<StationReading, LookupError>
where
    S: StationSource + ?Sized,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut coordinate = origin;
    let mut attempt = 1;

    loop {
        debug!("Lookup attempt {} at {}", attempt, coordinate);

        let station = source
            .nearest_station(coordinate, policy.radius_meters)
            .await
            .map_err(|e| {
                warn!("Station query at {} failed: {}", coordinate, e);
                LookupError::Transport {
                    coordinate,
                    message: e.to_string(),
                }
            })?;

        let station = match station {
            Some(station) => station,
            None if attempt < max_attempts => {
                coordinate = coordinate.offset(policy.step_degrees);
                attempt += 1;
                info!("Retrying with new coords: {}", coordinate);
                continue;
            }
            None => {
                return Err(LookupError::ExhaustedRetries {
                    coordinate,
                    attempts: attempt,
                })
            }
        };

        return match station
            .measurements
            .into_iter()
            .find(|m| m.parameter == PM25_PARAMETER)
        {
            Some(m) => Ok(StationReading {
                location: station.location,
                pm25_value: m.value,
                last_updated: m.last_updated,
                coordinates: coordinate,
            }),
            None => Err(LookupError::NoPm25Measurement {
                coordinate,
                location: station.location,
            }),
        };
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::services::station_lookup::{
        fakes::{station, ScriptedStations},
        sources::StationSourceError,
    };

    fn origin() -> Coordinate {
        Coordinate::new(13.75, 100.5)
    }

    #[tokio::test]
    async fn first_hit_returns_reading() {
        let source = ScriptedStations::new(vec![Ok(Some(station(
            "Din Daeng",
            &[("pm10", 55.0), ("pm25", 31.5)],
        )))]);

        let reading = lookup(&source, origin(), &LookupPolicy::default())
            .await
            .unwrap();

        assert_eq!(reading.location, "Din Daeng");
        assert_eq!(reading.pm25_value, 31.5);
        assert_eq!(reading.coordinates, origin());
        assert_eq!(source.queried(), vec![origin()]);
    }

    #[tokio::test]
    #[traced_test]
    async fn empty_results_move_the_position() {
        let source = ScriptedStations::new(vec![
            Ok(None),
            Ok(None),
            Ok(Some(station("Pathum Wan", &[("pm25", 20.0)]))),
        ]);

        let reading = lookup(&source, origin(), &LookupPolicy::default())
            .await
            .unwrap();

        let expected = Coordinate::new(14.25, 101.0);
        assert_eq!(reading.coordinates, expected);
        assert_eq!(
            source.queried(),
            vec![origin(), Coordinate::new(14.0, 100.75), expected]
        );
        assert!(logs_contain("Retrying with new coords"));
    }

    #[tokio::test]
    async fn stops_after_max_attempts() {
        let source = ScriptedStations::new(vec![]);
        let policy = LookupPolicy::default();

        let err = lookup(&source, origin(), &policy).await.unwrap_err();

        assert_eq!(source.queried().len(), policy.max_attempts as usize);
        assert_eq!(err.reason(), "exhausted retries");
        assert_eq!(
            err,
            LookupError::ExhaustedRetries {
                coordinate: Coordinate::new(15.0, 101.75),
                attempts: 6,
            }
        );
    }

    #[tokio::test]
    async fn hit_on_last_allowed_attempt_succeeds() {
        let mut replies: Vec<_> = (0..5).map(|_| Ok(None)).collect();
        replies.push(Ok(Some(station("Lop Buri", &[("pm25", 44.0)]))));
        let source = ScriptedStations::new(replies);

        let reading = lookup(&source, origin(), &LookupPolicy::default())
            .await
            .unwrap();

        assert_eq!(source.queried().len(), 6);
        assert_eq!(reading.location, "Lop Buri");
        assert_eq!(reading.coordinates, Coordinate::new(15.0, 101.75));
    }

    #[tokio::test]
    async fn missing_pm25_is_not_retried() {
        let source = ScriptedStations::new(vec![
            Ok(Some(station("Bang Na", &[("pm10", 70.0), ("o3", 0.02)]))),
            Ok(Some(station("unused", &[("pm25", 1.0)]))),
        ]);

        let err = lookup(&source, origin(), &LookupPolicy::default())
            .await
            .unwrap_err();

        assert_eq!(err.reason(), "no pm25 measurement");
        assert_eq!(source.queried().len(), 1);
    }

    #[tokio::test]
    async fn transport_failure_ends_search() {
        let source = ScriptedStations::new(vec![
            Ok(None),
            Err(StationSourceError("connection reset".to_string())),
            Ok(Some(station("unused", &[("pm25", 1.0)]))),
        ]);

        let err = lookup(&source, origin(), &LookupPolicy::default())
            .await
            .unwrap_err();

        assert_eq!(err.reason(), "transport error");
        assert_eq!(err.coordinate(), Coordinate::new(14.0, 100.75));
        assert_eq!(source.queried().len(), 2);
    }

    #[tokio::test]
    async fn custom_policy_is_honoured() {
        let source = ScriptedStations::new(vec![]);
        let policy = LookupPolicy {
            step_degrees: 0.001,
            max_attempts: 2,
            ..LookupPolicy::default()
        };

        lookup(&source, Coordinate::new(0.0, 0.0), &policy)
            .await
            .unwrap_err();

        assert_eq!(
            source.queried(),
            vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.001, 0.001)]
        );
    }

    #[tokio::test]
    async fn zero_attempts_still_queries_once() {
        let source = ScriptedStations::new(vec![]);
        let policy = LookupPolicy {
            max_attempts: 0,
            ..LookupPolicy::default()
        };

        let err = lookup(&source, origin(), &policy).await.unwrap_err();

        assert_eq!(source.queried().len(), 1);
        assert_eq!(err.coordinate(), origin());
    }
}
