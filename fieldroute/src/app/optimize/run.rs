use super::{import, itinerary, OptimizeError, RawRecord};
use crate::config::ServiceConfig;
use crate::model::{constants, location_ops, FailedLocation, Location, OptimizedStop};
use crate::util::address;
use fieldroute_ors::model::{Job, OptimizationRequest, Vehicle};
use fieldroute_ors::OrsClient;
use kdam::tqdm;

/// typed input for one optimization request: the uploaded CSV bytes plus
/// the two user-entered strings. the CLI (or any other serving boundary)
/// is a thin adapter over this.
#[derive(Debug, Clone)]
pub struct RoutePlanRequest {
    pub csv: Vec<u8>,
    pub start_address: String,
    pub label: String,
}

/// runs the full pipeline for one request: import and validate the CSV,
/// geocode each row, partition regular stops ahead of sample stops,
/// geocode the starting address, submit the optimization request, map the
/// returned steps to an itinerary, and export it as
/// `<label>_optimized_route.csv`. returns the rows that were written.
pub fn run(
    request: &RoutePlanRequest,
    config: &ServiceConfig,
) -> Result<Vec<OptimizedStop>, OptimizeError> {
    let client = OrsClient::new(
        config.api_key.clone(),
        config.geocode_url.clone(),
        config.optimization_url.clone(),
    );

    let records = import::read_service_calls(&request.csv)?;
    let (locations, failed) = geocode_records(&records, &client);
    report_failures(&failed);
    let job_order = location_ops::plan_job_order(locations)?;

    let start = geocode_start(&request.start_address, &client)?;
    let lab_stop = job_order
        .iter()
        .any(|location| location.is_sample)
        .then(Location::lab_stop);
    if lab_stop.is_some() {
        log::info!(
            "sample stops present, {} will be the final stop before returning to start",
            constants::LAB_CLIENT
        );
    }

    let jobs = job_order
        .iter()
        .map(|location| Job::new(location.job_id, &location.point))
        .collect::<Vec<_>>();
    let payload = OptimizationRequest::new(jobs, Vehicle::round_trip(&start.point));
    log::info!("submitting optimization request with {} jobs", payload.jobs.len());
    let response = client.optimize(&payload)?;
    let route = response.routes.first().ok_or(OptimizeError::NoRouteFound)?;

    let rows = itinerary::build_itinerary(route, &job_order, &start, lab_stop.as_ref());
    let out_path = itinerary::write_itinerary(&rows, &request.label, &config.output_directory)?;
    log::info!("optimized route written to {}", out_path.to_string_lossy());
    Ok(rows)
}

/// cleans, classifies, and geocodes each imported row in sequence. rows the
/// provider cannot resolve, and rows whose lookup fails in transit, are
/// collected as failures rather than ending the run. provisional job ids
/// follow row order; they are reassigned during partitioning.
fn geocode_records(
    records: &[RawRecord],
    client: &OrsClient,
) -> (Vec<Location>, Vec<FailedLocation>) {
    let mut locations = vec![];
    let mut failed = vec![];
    for (index, record) in tqdm!(
        records.iter().enumerate(),
        desc = "geocode service calls",
        total = records.len()
    ) {
        let cleaned = address::normalize_address(&record.address);
        let (is_sample, lab_category) =
            location_ops::classify_lab_category(record.lab_category.as_deref());
        match client.geocode(&cleaned) {
            Ok(Some(point)) => {
                log::debug!("geocoded '{}' to ({}, {})", cleaned, point.y(), point.x());
                locations.push(Location {
                    job_id: index as u64 + 1,
                    address: cleaned,
                    client: record.client.clone(),
                    is_sample,
                    lab_category,
                    point,
                });
            }
            Ok(None) => {
                failed.push(FailedLocation {
                    client: record.client.clone(),
                    address: cleaned,
                });
            }
            Err(e) => {
                log::debug!("geocode transport failure for '{cleaned}': {e}");
                failed.push(FailedLocation {
                    client: record.client.clone(),
                    address: cleaned,
                });
            }
        }
    }
    eprintln!();
    log::info!(
        "successfully geocoded {} of {} service calls",
        locations.len(),
        records.len()
    );
    (locations, failed)
}

fn report_failures(failed: &[FailedLocation]) {
    if failed.is_empty() {
        return;
    }
    log::warn!("{} addresses could not be geocoded:", failed.len());
    for failure in failed.iter() {
        log::warn!("  - {} (client: {})", failure.address, failure.client);
    }
}

fn geocode_start(start_address: &str, client: &OrsClient) -> Result<Location, OptimizeError> {
    let cleaned = address::normalize_address(start_address);
    log::info!("geocoding starting address: {cleaned}");
    match client.geocode(&cleaned)? {
        Some(point) => {
            log::info!("starting address geocoded to ({}, {})", point.y(), point.x());
            Ok(Location::start(cleaned, point))
        }
        None => Err(OptimizeError::StartAddressNotFound(cleaned)),
    }
}
