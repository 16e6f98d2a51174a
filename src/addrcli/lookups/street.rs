use serde::{Deserialize, Serialize};

use crate::query::QueryValues;

/// One US Street API lookup. Batch-capable: a raw payload may carry a
/// JSON array of these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreetLookup {
    pub street: String,
    pub street2: String,
    pub secondary: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub lastline: String,
    pub addressee: String,
    pub urbanization: String,
    pub input_id: String,
    pub candidates: i64,
    #[serde(rename = "match")]
    pub match_strategy: String,
}

impl StreetLookup {
    pub fn apply_query(&mut self, values: &QueryValues) {
        self.street = values.get("street").to_string();
        self.street2 = values.get("street2").to_string();
        self.secondary = values.get("secondary").to_string();
        self.city = values.get("city").to_string();
        self.state = values.get("state").to_string();
        self.zipcode = values.get("zipcode").to_string();
        self.lastline = values.get("lastline").to_string();
        self.addressee = values.get("addressee").to_string();
        self.urbanization = values.get("urbanization").to_string();
        self.input_id = values.get("input_id").to_string();
        self.candidates = values.get_i64("candidates");
        self.match_strategy = values.get("match").to_string();
    }

    pub fn is_populated(&self) -> bool {
        !self.street.is_empty()
    }
}
