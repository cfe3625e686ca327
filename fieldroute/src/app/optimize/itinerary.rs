use super::OptimizeError;
use crate::model::{Location, OptimizedStop, END_LABEL, START_LABEL};
use fieldroute_ors::model::OrsRoute;
use std::path::{Path, PathBuf};

/// reconstructs the human-readable itinerary from the optimizer's step
/// sequence: a start anchor, one numbered row per recognized job step in
/// provider order, the lab drop-off when one was prepared, and an end
/// anchor mirroring the start.
///
/// steps referencing a job id that was never submitted produce no row and
/// do not advance the stop counter. the lab stop is always rendered after
/// all job rows, wherever the optimizer might have placed it spatially.
pub fn build_itinerary(
    route: &OrsRoute,
    job_order: &[Location],
    start: &Location,
    lab_stop: Option<&Location>,
) -> Vec<OptimizedStop> {
    let mut rows = vec![OptimizedStop::anchor(START_LABEL, start)];
    let mut stop_counter: usize = 0;
    for step in route.steps.iter() {
        if !step.is_job() {
            continue;
        }
        match step.job.and_then(|id| find_location_by_id(id, job_order)) {
            Some(location) => {
                stop_counter += 1;
                log::debug!(
                    "stop {}: {} (sample: {})",
                    stop_counter,
                    location.address,
                    location.is_sample
                );
                rows.push(OptimizedStop::numbered(stop_counter, location));
            }
            None => {
                log::warn!("step references unknown job id {:?}, skipped", step.job);
            }
        }
    }
    if let Some(lab) = lab_stop {
        stop_counter += 1;
        rows.push(OptimizedStop::numbered(stop_counter, lab));
    }
    rows.push(OptimizedStop::anchor(END_LABEL, start));
    rows
}

// linear scan is fine at tens to low hundreds of stops
fn find_location_by_id(job_id: u64, locations: &[Location]) -> Option<&Location> {
    locations.iter().find(|location| location.job_id == job_id)
}

/// writes the itinerary to `<label>_optimized_route.csv` under `directory`,
/// returning the path written. an existing file under the same label is
/// overwritten.
pub fn write_itinerary(
    rows: &[OptimizedStop],
    label: &str,
    directory: &Path,
) -> Result<PathBuf, OptimizeError> {
    let path = directory.join(format!("{label}_optimized_route.csv"));
    let path_str = path.to_string_lossy().to_string();
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(&path)
        .map_err(|e| OptimizeError::CsvWriteError(path_str.clone(), e))?;
    for row in rows.iter() {
        writer
            .serialize(row)
            .map_err(|e| OptimizeError::CsvWriteError(path_str.clone(), e))?;
    }
    writer
        .flush()
        .map_err(|e| OptimizeError::CsvWriteError(path_str.clone(), csv::Error::from(e)))?;
    Ok(path)
}
