#[derive(thiserror::Error, Debug)]
pub enum OrsError {
    #[error("geocode request for '{address}' failed: {source}")]
    GeocodeRequestError {
        address: String,
        source: reqwest::Error,
    },
    #[error("optimization request failed: {source}")]
    OptimizationRequestError { source: reqwest::Error },
    #[error("optimization request rejected with status {status}: {body}")]
    OptimizationRejected { status: u16, body: String },
    #[error("failure decoding {0} response: {1}")]
    DeserializationError(String, String),
}
