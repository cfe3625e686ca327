mod import;
mod itinerary;
mod optimize_error;
mod run;

pub use import::{read_service_calls, RawRecord};
pub use itinerary::{build_itinerary, write_itinerary};
pub use optimize_error::OptimizeError;
pub use run::{run, RoutePlanRequest};
