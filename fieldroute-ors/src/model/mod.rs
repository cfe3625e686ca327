mod geocode;
mod optimization;

pub use geocode::{FeatureGeometry, GeocodeFeature, GeocodeResponse};
pub use optimization::{
    Job, OptimizationRequest, OptimizationResponse, OrsRoute, RequestOptions, RouteStep, Vehicle,
    DRIVING_CAR, JOB_STEP_TYPE,
};
