use geo_types::{point, Point};
use serde::{Deserialize, Serialize};

/// subset of the Pelias-style GeoJSON feature collection returned by the
/// geocode search endpoint. only the first candidate's coordinates are
/// consumed; all other properties are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub features: Vec<GeocodeFeature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeFeature {
    pub geometry: FeatureGeometry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureGeometry {
    /// provider ordering is [longitude, latitude]
    pub coordinates: [f64; 2],
}

impl GeocodeResponse {
    /// coordinates of the best candidate, as a point with x=longitude and
    /// y=latitude, or None when the provider found no match.
    pub fn first_point(&self) -> Option<Point<f64>> {
        self.features.first().map(|feature| {
            let [lon, lat] = feature.geometry.coordinates;
            point!(x: lon, y: lat)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::GeocodeResponse;

    #[test]
    fn reads_first_candidate_coordinates() {
        let body = serde_json::json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [-78.644257, 35.787743] },
                    "properties": { "label": "Raleigh, NC, USA" }
                },
                {
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [-122.0, 45.0] },
                    "properties": { "label": "somewhere else" }
                }
            ]
        });
        let response: GeocodeResponse = serde_json::from_value(body).expect("should deserialize");
        match response.first_point() {
            Some(point) => {
                assert_eq!(point.x(), -78.644257);
                assert_eq!(point.y(), 35.787743);
            }
            None => panic!("expected a candidate point"),
        }
    }

    #[test]
    fn empty_feature_collection_has_no_point() {
        let body = serde_json::json!({ "type": "FeatureCollection", "features": [] });
        let response: GeocodeResponse = serde_json::from_value(body).expect("should deserialize");
        assert!(response.first_point().is_none());
    }

    #[test]
    fn missing_features_key_has_no_point() {
        let body = serde_json::json!({ "type": "FeatureCollection" });
        let response: GeocodeResponse = serde_json::from_value(body).expect("should deserialize");
        assert!(response.first_point().is_none());
    }
}
