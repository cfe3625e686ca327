pub mod optimize;

mod route_cli;

pub use route_cli::{RouteCliArguments, RouteOperation};
