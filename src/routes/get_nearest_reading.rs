use crate::{
    routes::get_air_quality::MISSING_COORDINATES,
    services::station_lookup::{
        lookup::LookupError,
        session::{resolve_reading, SessionError},
        sources::FixedCoordinateSource,
    },
    types::{app_state::AppState, coordinate::Coordinate, station_reading::StationReading},
    utils::{
        app_error::AppError,
        messages::{describe_session_error, Locale},
        validated_query::ValidatedQuery,
    },
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetNearestReadingPayload {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub lat: Option<f64>,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub long: Option<f64>,

    #[serde(default)]
    pub lang: Locale,
}

#[derive(Serialize, Deserialize)]
pub struct GetNearestReadingResponse {
    pub data: StationReading,
}

fn session_error_status(err: &SessionError) -> (StatusCode, &'static str) {
    match err {
        SessionError::GeolocationUnavailable(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "position unavailable")
        }
        SessionError::TimedOut { .. } => (StatusCode::GATEWAY_TIMEOUT, "timed out"),
        SessionError::Lookup(e @ LookupError::Transport { .. }) => {
            (StatusCode::BAD_GATEWAY, e.reason())
        }
        SessionError::Lookup(e) => (StatusCode::NOT_FOUND, e.reason()),
    }
}

pub async fn get_nearest_reading(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetNearestReadingPayload>,
) -> Result<Response, AppError> {
    let position = match (payload.lat, payload.long) {
        (Some(lat), Some(long)) => Some(Coordinate::new(lat, long)),
        (None, None) => state.default_position,
        _ => return Err(AppError::new(StatusCode::BAD_REQUEST, MISSING_COORDINATES)),
    };

    let reading = resolve_reading(
        &FixedCoordinateSource::new(position),
        state.reading_cache.as_deref(),
        &state.openaq_service,
        &state.lookup_policy,
    )
    .await
    .map_err(|e| {
        let (code, reason) = session_error_status(&e);
        if code.is_server_error() {
            error!("Failed to find nearest reading: {}", e);
        } else {
            warn!("No nearest reading: {}", e);
        }
        AppError::new(code, &describe_session_error(&e, payload.lang)).with_reason(reason)
    })?;

    info!(
        "Nearest reading at {}: {} ({})",
        reading.coordinates, reading.pm25_value, reading.location
    );

    Ok((StatusCode::OK, Json(GetNearestReadingResponse { data: reading })).into_response())
}
