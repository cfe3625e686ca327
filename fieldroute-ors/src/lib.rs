pub mod client;
pub mod model;

mod error;

pub use client::OrsClient;
pub use error::OrsError;
