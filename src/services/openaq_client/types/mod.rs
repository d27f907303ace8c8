pub mod openaq_latest_response;
pub mod openaq_service_error;
