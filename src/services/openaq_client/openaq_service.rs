use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, CONTENT_TYPE},
    StatusCode,
};
use tracing::debug;
use urlencoding::encode;

use super::types::{
    openaq_latest_response::{OpenAqLatestResponse, OpenAqLatestResponseResult},
    openaq_service_error::OpenAqServiceError,
};
use crate::{
    services::station_lookup::sources::{Measurement, Station, StationSource, StationSourceError},
    types::coordinate::Coordinate,
};

#[derive(Clone)]
pub struct OpenAqServiceConfig {
    pub api_key: String,
    pub host: String,
}

#[derive(Clone)]
pub struct OpenAqService {
    config: OpenAqServiceConfig,
    client: reqwest::Client,
}

pub struct RawLatestResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Vec<u8>,
}

impl OpenAqService {
    pub fn new(config: OpenAqServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn latest_url(&self, coordinate: Coordinate, radius_meters: u32) -> String {
        format!(
            "{}/v2/latest?coordinates={}&radius={}&order_by=distance&sort=asc&limit=1",
            self.config.host.trim_end_matches('/'),
            encode(&coordinate.to_string()),
            radius_meters
        )
    }

    async fn send_latest(
        &self,
        coordinate: Coordinate,
        radius_meters: u32,
    ) -> Result<reqwest::Response, OpenAqServiceError> {
        let url = self.latest_url(coordinate, radius_meters);
        debug!("Requesting nearest station at {}", coordinate);

        Ok(self
            .client
            .get(&url)
            .header("x-api-key", &self.config.api_key)
            .send()
            .await?)
    }

    pub async fn fetch_latest_raw(
        &self,
        coordinate: Coordinate,
        radius_meters: u32,
    ) -> Result<RawLatestResponse, OpenAqServiceError> {
        let resp = self.send_latest(coordinate, radius_meters).await?;
        let status = resp.status();
        let content_type = resp.headers().get(CONTENT_TYPE).cloned();
        let body = resp
            .bytes()
            .await
            .map_err(|e| OpenAqServiceError::Body(e.to_string()))?
            .to_vec();

        Ok(RawLatestResponse {
            status,
            content_type,
            body,
        })
    }

    pub async fn fetch_nearest(
        &self,
        coordinate: Coordinate,
        radius_meters: u32,
    ) -> Result<Option<OpenAqLatestResponseResult>, OpenAqServiceError> {
        let resp = self.send_latest(coordinate, radius_meters).await?;

        if !resp.status().is_success() {
            return Err(OpenAqServiceError::Status(resp.status()));
        }

        let body = resp
            .json::<OpenAqLatestResponse>()
            .await
            .map_err(|e| OpenAqServiceError::Body(e.to_string()))?;

        Ok(body.results.into_iter().next())
    }
}

#[async_trait]
impl StationSource for OpenAqService {
    async fn nearest_station(
        &self,
        coordinate: Coordinate,
        radius_meters: u32,
    ) -> Result<Option<Station>, StationSourceError> {
        let result = self
            .fetch_nearest(coordinate, radius_meters)
            .await
            .map_err(|e| StationSourceError(e.to_string()))?;

        Ok(result.map(|r| Station {
            location: r.location,
            measurements: r
                .measurements
                .into_iter()
                .map(|m| Measurement {
                    parameter: m.parameter,
                    value: m.value,
                    last_updated: m.lastUpdated,
                })
                .collect(),
        }))
    }
}
