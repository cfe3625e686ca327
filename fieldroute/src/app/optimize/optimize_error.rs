use fieldroute_ors::OrsError;

#[derive(thiserror::Error, Debug)]
pub enum OptimizeError {
    #[error("required environment variable {0} not set")]
    MissingConfiguration(String),
    #[error("failure reading configuration: {0}")]
    ConfigurationError(String),
    #[error("service call CSV is missing required columns: {0}")]
    MissingColumns(String),
    #[error("failure reading service call CSV: {0}")]
    CsvReadError(String),
    #[error("not enough valid locations to optimize the route ({0} geocoded, need at least 2); please check the addresses provided")]
    TooFewLocations(usize),
    #[error("could not geocode starting address: {0}")]
    StartAddressNotFound(String),
    #[error("no route found in optimization result")]
    NoRouteFound,
    #[error("failure writing itinerary to {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("failure reading {0}: {1}")]
    FileReadError(String, String),
    #[error("ORS API failure: {0}")]
    OrsApiError(#[from] OrsError),
}
