use serde::{Deserialize, Serialize};

use crate::query::QueryValues;

/// One US ZIP Code API lookup. Batch-capable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZipCodeLookup {
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub input_id: String,
}

impl ZipCodeLookup {
    pub fn apply_query(&mut self, values: &QueryValues) {
        self.city = values.get("city").to_string();
        self.state = values.get("state").to_string();
        self.zipcode = values.get("zipcode").to_string();
        self.input_id = values.get("input_id").to_string();
    }

    /// Any one of city, state, or zipcode is enough.
    pub fn is_populated(&self) -> bool {
        !self.city.is_empty() || !self.state.is_empty() || !self.zipcode.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_of_city_state_or_zipcode_satisfies_presence() {
        let mut lookup = ZipCodeLookup::default();
        assert!(!lookup.is_populated());

        lookup.state = "IL".into();
        assert!(lookup.is_populated());

        let zip_only = ZipCodeLookup {
            zipcode: "62701".into(),
            ..Default::default()
        };
        assert!(zip_only.is_populated());
    }

    #[test]
    fn input_id_alone_is_not_presence() {
        let lookup = ZipCodeLookup {
            input_id: "record-9".into(),
            ..Default::default()
        };
        assert!(!lookup.is_populated());
    }

    #[test]
    fn query_mapping() {
        let values = QueryValues::from_query("city=Springfield&state=IL&zipcode=62701");
        let mut lookup = ZipCodeLookup::default();
        lookup.apply_query(&values);
        assert_eq!(lookup.city, "Springfield");
        assert_eq!(lookup.state, "IL");
        assert_eq!(lookup.zipcode, "62701");
    }
}
