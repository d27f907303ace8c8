#![allow(non_snake_case)]
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OpenAqLatestResponseMeasurement {
    pub parameter: String,
    pub value: f64,
    pub lastUpdated: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OpenAqLatestResponseResult {
    pub location: String,
    pub measurements: Vec<OpenAqLatestResponseMeasurement>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OpenAqLatestResponse {
    pub results: Vec<OpenAqLatestResponseResult>,
}
