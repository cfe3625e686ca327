/// fixed drop-off location for collected samples. not submitted to the
/// optimizer; appended client-side after all job stops.
pub const LAB_ADDRESS: &str = "104 Woodwinds Industrial Ct Suite A, Cary, NC 27511";
pub const LAB_CLIENT: &str = "Eurofins Lab";
pub const LAB_LATITUDE: f64 = 35.761890;
pub const LAB_LONGITUDE: f64 = -78.818657;

/// client label on the start and end anchor rows of the itinerary.
pub const START_CLIENT: &str = "START";
