use super::constants;
use geo_types::{point, Point};

/// one geocoded service call. `job_id` is provisional (CSV row ordering)
/// until [`super::location_ops::plan_job_order`] reassigns ids over the
/// partitioned visit order.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub job_id: u64,
    pub address: String,
    pub client: String,
    pub is_sample: bool,
    pub lab_category: String,
    /// x=longitude, y=latitude
    pub point: Point<f64>,
}

impl Location {
    pub fn longitude(&self) -> f64 {
        self.point.x()
    }

    pub fn latitude(&self) -> f64 {
        self.point.y()
    }

    /// anchor for the start and end of the route, built from the
    /// user-supplied starting address once it has been geocoded.
    pub fn start(address: String, point: Point<f64>) -> Location {
        Location {
            job_id: 0,
            address,
            client: String::from(constants::START_CLIENT),
            is_sample: false,
            lab_category: String::new(),
            point,
        }
    }

    /// the fixed lab drop-off stop. never part of the optimizer job set.
    pub fn lab_stop() -> Location {
        Location {
            job_id: 0,
            address: String::from(constants::LAB_ADDRESS),
            client: String::from(constants::LAB_CLIENT),
            is_sample: false,
            lab_category: String::new(),
            point: point!(x: constants::LAB_LONGITUDE, y: constants::LAB_LATITUDE),
        }
    }
}

/// a row whose address could not be geocoded. reported to the operator and
/// excluded from optimization; never fatal while enough locations remain.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedLocation {
    pub client: String,
    pub address: String,
}
