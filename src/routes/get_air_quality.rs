use crate::{
    types::{app_state::AppState, coordinate::Coordinate},
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::Deserialize;
use tracing::{error, warn};
use validator::Validate;

pub const MISSING_COORDINATES: &str = "Latitude and Longitude are required";

#[derive(Validate, Deserialize)]
pub struct GetAirQualityPayload {
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_air_quality(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetAirQualityPayload>,
) -> Result<Response, AppError> {
    let (lat, long) = payload
        .lat
        .zip(payload.long)
        .ok_or_else(|| AppError::new(StatusCode::BAD_REQUEST, MISSING_COORDINATES))?;

    let upstream = state
        .openaq_service
        .fetch_latest_raw(Coordinate::new(lat, long), state.lookup_policy.radius_meters)
        .await
        .map_err(|e| {
            error!("Failed to fetch air quality: {}", e);
            AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        })?;

    if !upstream.status.is_success() {
        warn!("OpenAQ responded with {}", upstream.status);
        return Err(AppError::new(
            upstream.status,
            "Failed to fetch data from OpenAQ",
        ));
    }

    let content_type = upstream
        .content_type
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));

    Ok((
        upstream.status,
        [(header::CONTENT_TYPE, content_type)],
        upstream.body,
    )
        .into_response())
}
