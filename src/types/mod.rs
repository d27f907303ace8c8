pub mod app_state;
pub mod coordinate;
pub mod station_reading;
