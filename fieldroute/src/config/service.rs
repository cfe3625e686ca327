use crate::app::optimize::OptimizeError;
use config::Config;
use std::path::PathBuf;

/// environment variable carrying the shared ORS credential.
pub const ORS_API_KEY_VAR: &str = "ORS_API_KEY";

/// runtime configuration for one fieldroute invocation. resolved once at
/// startup and injected into the orchestrator; request handling never
/// reads the environment.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub api_key: String,
    pub geocode_url: String,
    pub optimization_url: String,
    pub output_directory: PathBuf,
}

impl ServiceConfig {
    /// builds a configuration from the process environment. `ORS_API_KEY`
    /// is required; `ORS_GEOCODE_URL` and `ORS_OPTIMIZATION_URL` override
    /// the production endpoints.
    pub fn from_env(output_directory: &str) -> Result<ServiceConfig, OptimizeError> {
        let env = Config::builder()
            .add_source(config::Environment::default())
            .build()
            .map_err(|e| OptimizeError::ConfigurationError(e.to_string()))?;
        let api_key = env
            .get_string("ors_api_key")
            .map_err(|_| OptimizeError::MissingConfiguration(String::from(ORS_API_KEY_VAR)))?;
        let geocode_url = env
            .get_string("ors_geocode_url")
            .unwrap_or_else(|_| String::from(fieldroute_ors::client::GEOCODE_SEARCH_URL));
        let optimization_url = env
            .get_string("ors_optimization_url")
            .unwrap_or_else(|_| String::from(fieldroute_ors::client::OPTIMIZATION_URL));
        Ok(ServiceConfig {
            api_key,
            geocode_url,
            optimization_url,
            output_directory: PathBuf::from(output_directory),
        })
    }
}
