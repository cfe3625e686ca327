use super::Location;
use crate::app::optimize::OptimizeError;

/// minimum geocoded stops required before an optimization is attempted.
pub const MIN_LOCATIONS: usize = 2;

/// derives the sample classification from a raw lab category cell. blank or
/// missing means a regular stop; anything else marks the visit as a sample
/// pickup labeled by the trimmed value.
pub fn classify_lab_category(raw: Option<&str>) -> (bool, String) {
    match raw {
        Some(value) if !value.trim().is_empty() => (true, value.trim().to_string()),
        _ => (false, String::new()),
    }
}

/// orders locations for dispatch: all regular stops first, then all sample
/// stops, relative input order preserved within each group, and job ids
/// reassigned 1..=N over the result.
pub fn plan_job_order(locations: Vec<Location>) -> Result<Vec<Location>, OptimizeError> {
    if locations.len() < MIN_LOCATIONS {
        return Err(OptimizeError::TooFewLocations(locations.len()));
    }
    let (samples, non_samples): (Vec<Location>, Vec<Location>) =
        locations.into_iter().partition(|loc| loc.is_sample);
    log::info!(
        "planning job order over {} regular and {} sample stops",
        non_samples.len(),
        samples.len()
    );
    let mut ordered = non_samples;
    ordered.extend(samples);
    for (index, location) in ordered.iter_mut().enumerate() {
        location.job_id = index as u64 + 1;
    }
    Ok(ordered)
}

#[cfg(test)]
mod tests {
    use super::{classify_lab_category, plan_job_order};
    use crate::app::optimize::OptimizeError;
    use crate::model::Location;
    use geo_types::point;

    fn location(client: &str, is_sample: bool) -> Location {
        Location {
            job_id: 99,
            address: format!("{client} address"),
            client: String::from(client),
            is_sample,
            lab_category: if is_sample {
                String::from("A")
            } else {
                String::new()
            },
            point: point!(x: -78.8, y: 35.8),
        }
    }

    #[test]
    fn classify_blank_and_missing_cells_as_regular() {
        assert_eq!(classify_lab_category(None), (false, String::new()));
        assert_eq!(classify_lab_category(Some("")), (false, String::new()));
        assert_eq!(classify_lab_category(Some("   ")), (false, String::new()));
    }

    #[test]
    fn classify_trims_the_category_label() {
        assert_eq!(
            classify_lab_category(Some("  B-12 ")),
            (true, String::from("B-12"))
        );
    }

    #[test]
    fn partition_preserves_count_and_relative_order() {
        let locations = vec![
            location("a", false),
            location("b", true),
            location("c", false),
            location("d", true),
        ];
        let ordered = plan_job_order(locations).expect("should plan order");
        assert_eq!(ordered.len(), 4);
        let clients = ordered.iter().map(|l| l.client.as_str()).collect::<Vec<_>>();
        assert_eq!(clients, vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn job_ids_are_contiguous_and_samples_sort_last() {
        let locations = vec![
            location("a", true),
            location("b", false),
            location("c", true),
        ];
        let ordered = plan_job_order(locations).expect("should plan order");
        let ids = ordered.iter().map(|l| l.job_id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
        let max_regular_id = ordered
            .iter()
            .filter(|l| !l.is_sample)
            .map(|l| l.job_id)
            .max()
            .expect("one regular stop");
        let min_sample_id = ordered
            .iter()
            .filter(|l| l.is_sample)
            .map(|l| l.job_id)
            .min()
            .expect("sample stops");
        assert!(max_regular_id < min_sample_id);
    }

    #[test]
    fn fewer_than_two_locations_is_an_error() {
        match plan_job_order(vec![location("only", false)]) {
            Err(OptimizeError::TooFewLocations(1)) => {}
            other => panic!("expected TooFewLocations, got {other:?}"),
        }
    }
}
