use super::Location;
use serde::{Deserialize, Serialize};

pub const START_LABEL: &str = "Start Location";
pub const END_LABEL: &str = "End Location";

/// one row of the rendered itinerary. serialized field names are the
/// column headers of the exported CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedStop {
    #[serde(rename = "Stop Number")]
    pub stop_number: String,
    #[serde(rename = "Client")]
    pub client: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Is Sample")]
    pub is_sample: String,
    #[serde(rename = "Lab Category")]
    pub lab_category: String,
}

impl OptimizedStop {
    /// a start or end anchor row; never a sample, never categorized.
    pub fn anchor(label: &str, start: &Location) -> OptimizedStop {
        OptimizedStop {
            stop_number: String::from(label),
            client: start.client.clone(),
            address: start.address.clone(),
            is_sample: String::from("No"),
            lab_category: String::new(),
        }
    }

    /// the nth visited stop, labeled "Stop <n>" with n 1-based.
    pub fn numbered(counter: usize, location: &Location) -> OptimizedStop {
        OptimizedStop {
            stop_number: format!("Stop {counter}"),
            client: location.client.clone(),
            address: location.address.clone(),
            is_sample: String::from(if location.is_sample { "Yes" } else { "No" }),
            lab_category: location.lab_category.clone(),
        }
    }
}

impl std::fmt::Display for OptimizedStop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<14} | {} | {} (sample: {})",
            self.stop_number, self.client, self.address, self.is_sample
        )
    }
}
