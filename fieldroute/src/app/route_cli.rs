use crate::app::optimize::{self, OptimizeError, RoutePlanRequest};
use crate::config::ServiceConfig;
use clap::{Parser, Subcommand};

/// command line tool for planning field service routes
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RouteCliArguments {
    /// select the operation to run
    #[command(subcommand)]
    pub op: RouteOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum RouteOperation {
    /// optimizes the visit order for a CSV of service calls, writing the
    /// itinerary to <label>_optimized_route.csv
    Optimize {
        /// path to the service call CSV file
        #[arg(short, long)]
        csv_file: String,
        /// address the vehicle departs from and returns to
        #[arg(short, long)]
        start_address: String,
        /// label used to name the output file
        #[arg(short, long)]
        label: String,
        /// directory the itinerary CSV is written to
        #[arg(short, long, default_value_t = String::from("."))]
        output_directory: String,
    },
}

impl RouteOperation {
    pub fn run(&self) -> Result<(), OptimizeError> {
        match self {
            RouteOperation::Optimize {
                csv_file,
                start_address,
                label,
                output_directory,
            } => {
                let config = ServiceConfig::from_env(output_directory)?;
                let csv = std::fs::read(csv_file).map_err(|e| {
                    OptimizeError::FileReadError(csv_file.clone(), e.to_string())
                })?;
                let request = RoutePlanRequest {
                    csv,
                    start_address: start_address.clone(),
                    label: label.clone(),
                };
                let rows = optimize::run(&request, &config)?;
                for row in rows.iter() {
                    println!("{row}");
                }
                Ok(())
            }
        }
    }
}
