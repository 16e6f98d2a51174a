use serde::{Deserialize, Serialize};

use crate::query::{split_list, QueryValues};

/// Geolocation precision for autocomplete suggestions.
///
/// Absent input and "city" both mean city precision; "none" disables
/// geolocation. Any other text maps to no precision at all (the field
/// is omitted from the request) — intentionally preserved behavior
/// rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geolocation {
    City,
    State,
    None,
}

impl Geolocation {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "" | "city" => Some(Self::City),
            "state" => Some(Self::State),
            "none" => Some(Self::None),
            _ => Option::None,
        }
    }
}

/// One US Autocomplete API lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteLookup {
    pub prefix: String,
    pub suggestions: i64,
    pub city_filter: Vec<String>,
    pub state_filter: Vec<String>,
    pub prefer: Vec<String>,
    pub prefer_ratio: f64,
    #[serde(rename = "geolocate_precision", skip_serializing_if = "Option::is_none")]
    pub geolocation: Option<Geolocation>,
}

impl AutocompleteLookup {
    pub fn apply_query(&mut self, values: &QueryValues) {
        self.prefix = values.get("prefix").to_string();
        self.suggestions = values.get_i64("suggestions");
        self.city_filter = split_list(values.get("city_filter"), ',');
        self.state_filter = split_list(values.get("state_filter"), ',');
        self.prefer = split_list(values.get("prefer"), ';');
        self.prefer_ratio = values.get_f64("prefer_ratio");
        self.geolocation = Geolocation::parse(values.get("geolocate_precision"));
    }

    pub fn is_populated(&self) -> bool {
        !self.prefix.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geolocation_precision_mapping() {
        assert_eq!(Geolocation::parse(""), Some(Geolocation::City));
        assert_eq!(Geolocation::parse("city"), Some(Geolocation::City));
        assert_eq!(Geolocation::parse("state"), Some(Geolocation::State));
        assert_eq!(Geolocation::parse("none"), Some(Geolocation::None));
        assert_eq!(Geolocation::parse("county"), Option::None);
    }

    #[test]
    fn presence_requires_a_prefix() {
        let mut lookup = AutocompleteLookup::default();
        assert!(!lookup.is_populated());
        lookup.prefix = "1600 Penn".into();
        assert!(lookup.is_populated());
    }

    #[test]
    fn filters_split_on_comma_preferences_on_semicolon() {
        let values = QueryValues::from_query(
            "prefix=main&city_filter=Provo,Orem&state_filter=UT&prefer=Provo;Orem&prefer_ratio=0.5",
        );
        let mut lookup = AutocompleteLookup::default();
        lookup.apply_query(&values);

        assert_eq!(lookup.city_filter, vec!["Provo", "Orem"]);
        assert_eq!(lookup.state_filter, vec!["UT"]);
        assert_eq!(lookup.prefer, vec!["Provo", "Orem"]);
        assert_eq!(lookup.prefer_ratio, 0.5);
    }

    #[test]
    fn empty_filter_input_yields_one_empty_element() {
        let mut lookup = AutocompleteLookup::default();
        lookup.apply_query(&QueryValues::from_query("prefix=main"));
        assert_eq!(lookup.city_filter, vec![""]);
        assert_eq!(lookup.prefer, vec![""]);
    }

    #[test]
    fn unknown_precision_is_omitted_from_serialization() {
        let mut lookup = AutocompleteLookup::default();
        lookup.apply_query(&QueryValues::from_query("prefix=main&geolocate_precision=county"));
        let json = serde_json::to_value(&lookup).unwrap();
        assert!(json.get("geolocate_precision").is_none());
    }
}
