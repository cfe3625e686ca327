use crate::model::{GeocodeResponse, OptimizationRequest, OptimizationResponse};
use crate::OrsError;
use geo_types::Point;

pub const GEOCODE_SEARCH_URL: &str = "https://api.openrouteservice.org/geocode/search";
pub const OPTIMIZATION_URL: &str = "https://api.openrouteservice.org/optimization";

/// synchronous client for the two ORS endpoints used by fieldroute. one
/// instance is shared across a run; every call is a single blocking round
/// trip with no retry, rate limiting, or caching.
pub struct OrsClient {
    api_key: String,
    geocode_url: String,
    optimization_url: String,
    http: reqwest::blocking::Client,
}

impl OrsClient {
    pub fn new(api_key: String, geocode_url: String, optimization_url: String) -> OrsClient {
        OrsClient {
            api_key,
            geocode_url,
            optimization_url,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// looks up coordinates for a free-text address, returning the first
    /// candidate as a point with x=longitude and y=latitude, or None when
    /// the provider has no match or rejects the query. blank input
    /// short-circuits without a network call.
    pub fn geocode(&self, address: &str) -> Result<Option<Point<f64>>, OrsError> {
        if address.trim().is_empty() {
            return Ok(None);
        }
        let response = self
            .http
            .get(&self.geocode_url)
            .query(&[("api_key", self.api_key.as_str()), ("text", address)])
            .send()
            .map_err(|e| OrsError::GeocodeRequestError {
                address: String::from(address),
                source: e,
            })?;
        if !response.status().is_success() {
            log::debug!("geocode of '{address}' returned status {}", response.status());
            return Ok(None);
        }
        let collection: GeocodeResponse = response
            .json()
            .map_err(|e| OrsError::DeserializationError(String::from("geocode"), e.to_string()))?;
        Ok(collection.first_point())
    }

    /// submits the job/vehicle payload for optimization. any non-success
    /// status is an error carrying the provider's status code and body text.
    pub fn optimize(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResponse, OrsError> {
        let response = self
            .http
            .post(&self.optimization_url)
            .header("Authorization", &self.api_key)
            .json(request)
            .send()
            .map_err(|e| OrsError::OptimizationRequestError { source: e })?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(OrsError::OptimizationRejected {
                status: status.as_u16(),
                body,
            });
        }
        response.json().map_err(|e| {
            OrsError::DeserializationError(String::from("optimization"), e.to_string())
        })
    }
}
