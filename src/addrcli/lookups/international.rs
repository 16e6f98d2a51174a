use serde::{Deserialize, Serialize};

use crate::query::QueryValues;

/// One International Street API lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternationalLookup {
    pub country: String,
    pub language: String,
    pub freeform: String,
    pub address1: String,
    pub address2: String,
    pub address3: String,
    pub address4: String,
    pub organization: String,
    pub locality: String,
    pub administrative_area: String,
    pub postal_code: String,
    pub geocode: bool,
}

impl InternationalLookup {
    pub fn apply_query(&mut self, values: &QueryValues) {
        self.country = values.get("country").to_string();
        self.language = values.get("language").to_string();
        self.freeform = values.get("freeform").to_string();
        self.address1 = values.get("address1").to_string();
        self.address2 = values.get("address2").to_string();
        self.address3 = values.get("address3").to_string();
        self.address4 = values.get("address4").to_string();
        self.organization = values.get("organization").to_string();
        self.locality = values.get("locality").to_string();
        self.administrative_area = values.get("administrative_area").to_string();
        self.postal_code = values.get("postal_code").to_string();
        self.geocode = values.get("geocode") == "true";
    }

    /// A freeform address or a first address line is enough.
    pub fn is_populated(&self) -> bool {
        !self.freeform.is_empty() || !self.address1.is_empty()
    }
}

/// Canned example lookups selectable with `--example <label>`. A match
/// takes precedence over every other input source.
pub fn example(label: &str) -> Option<InternationalLookup> {
    let lookup = match label {
        "ireland1" => InternationalLookup {
            address1: "45/47 Nassau Street".into(),
            locality: "Dublin".into(),
            country: "IRL".into(),
            geocode: true,
            ..Default::default()
        },
        "brazil-mtc" => InternationalLookup {
            address1: "R. Antônio Lopes Martin, 121".into(),
            locality: "São Paulo".into(),
            administrative_area: "SP".into(),
            postal_code: "02516-040".into(),
            country: "BRA".into(),
            geocode: true,
            ..Default::default()
        },
        "brazil-maceio" => InternationalLookup {
            address1: "Av. Dom Antônio Brandão, No. 333 Sala 402".into(),
            address2: "Farol - Maceió, AL 57021-190".into(),
            country: "BRA".into(),
            geocode: true,
            ..Default::default()
        },
        "japan1" => InternationalLookup {
            address1: "〒100-8994".into(),
            address2: "東京都中央区八重洲1-5-3".into(),
            address3: "東京中央郵便局".into(),
            country: "JPN".into(),
            geocode: true,
            ..Default::default()
        },
        "japan2" => InternationalLookup {
            address1: "Tokyo Central Post Office".into(),
            address2: "5-3, Yaesu 1-Chome".into(),
            address3: "Chuo-ku".into(),
            locality: "Tokyo".into(),
            postal_code: "100-8994".into(),
            country: "JPN".into(),
            geocode: true,
            ..Default::default()
        },
        "jetbrains" => InternationalLookup {
            address1: "Na hřebenech II 1718/10".into(),
            address2: "14000 Prague 4".into(),
            country: "Czech Republic".into(),
            geocode: true,
            ..Default::default()
        },
        _ => return None,
    };
    Some(lookup)
}

/// Labels for the `--example` flag's help text.
pub const EXAMPLE_LABELS: &[&str] = &[
    "brazil-maceio",
    "brazil-mtc",
    "ireland1",
    "japan1",
    "japan2",
    "jetbrains",
];
