pub mod openaq_service;
pub mod types;
