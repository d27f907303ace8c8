pub mod app_error;
pub mod config;
pub mod messages;
pub mod validated_query;
