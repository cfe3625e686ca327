pub mod constants;
pub mod location_ops;

mod location;
mod stop;

pub use location::{FailedLocation, Location};
pub use stop::{OptimizedStop, END_LABEL, START_LABEL};
