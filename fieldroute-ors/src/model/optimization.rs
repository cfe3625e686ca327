use geo_types::Point;
use serde::{Deserialize, Serialize};

/// routing profile submitted with the (single) vehicle.
pub const DRIVING_CAR: &str = "driving-car";

/// step type marking a visit to a submitted job; other step types such as
/// "start" and "end" are provider bookkeeping.
pub const JOB_STEP_TYPE: &str = "job";

/// body of the optimization POST: the job set, one round-trip vehicle, and
/// the geometry flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationRequest {
    pub jobs: Vec<Job>,
    pub vehicles: Vec<Vehicle>,
    pub options: RequestOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    /// [longitude, latitude]
    pub location: [f64; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u64,
    pub profile: String,
    pub start: [f64; 2],
    pub end: [f64; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestOptions {
    pub g: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResponse {
    #[serde(default)]
    pub routes: Vec<OrsRoute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrsRoute {
    pub steps: Vec<RouteStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStep {
    #[serde(rename = "type")]
    pub step_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<u64>,
}

impl OptimizationRequest {
    pub fn new(jobs: Vec<Job>, vehicle: Vehicle) -> OptimizationRequest {
        OptimizationRequest {
            jobs,
            vehicles: vec![vehicle],
            options: RequestOptions { g: true },
        }
    }
}

impl Job {
    pub fn new(id: u64, location: &Point<f64>) -> Job {
        Job {
            id,
            location: [location.x(), location.y()],
        }
    }
}

impl Vehicle {
    /// the single synthetic vehicle: departs from and returns to the same
    /// coordinates.
    pub fn round_trip(start: &Point<f64>) -> Vehicle {
        Vehicle {
            id: 1,
            profile: String::from(DRIVING_CAR),
            start: [start.x(), start.y()],
            end: [start.x(), start.y()],
        }
    }
}

impl RouteStep {
    /// true for steps that visit a submitted job.
    pub fn is_job(&self) -> bool {
        self.step_type == JOB_STEP_TYPE
    }
}
