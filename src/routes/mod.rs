use axum::{routing::get, Router};

use crate::types::app_state::AppState;

pub mod get_air_quality;
pub mod get_nearest_reading;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/airquality", get(get_air_quality::get_air_quality))
        .route(
            "/air-quality/nearest",
            get(get_nearest_reading::get_nearest_reading),
        )
}
