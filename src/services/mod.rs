pub mod openaq_client;
pub mod station_lookup;
