use serde::{Deserialize, Serialize};

use crate::query::QueryValues;

/// One US Reverse Geocoding API lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverseGeoLookup {
    pub latitude: f64,
    pub longitude: f64,
}

impl ReverseGeoLookup {
    pub fn apply_query(&mut self, values: &QueryValues) {
        self.latitude = values.get_f64("latitude");
        self.longitude = values.get_f64("longitude");
    }

    /// Both coordinates must be non-zero.
    pub fn is_populated(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }
}
