use serde::{Deserialize, Serialize};

use crate::query::QueryValues;

/// One US Extract API lookup: freeform text from which addresses are
/// extracted remotely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractLookup {
    pub text: String,
    /// "", "true", or "false"; the remote service derives it when blank.
    pub html: String,
    pub aggressive: bool,
    pub addr_line_breaks: bool,
    pub addr_per_line: i64,
}

impl ExtractLookup {
    pub fn apply_query(&mut self, values: &QueryValues) {
        self.text = values.get("text").to_string();
        self.html = values.get("html").to_string();
        self.aggressive = values.get_bool("aggressive");
        self.addr_line_breaks = values.get_bool("addr_line_breaks");
        self.addr_per_line = values.get_i64("addr_per_line");
    }

    pub fn is_populated(&self) -> bool {
        !self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_requires_text() {
        let mut lookup = ExtractLookup::default();
        assert!(!lookup.is_populated());
        lookup.text = "meet me at 1600 Pennsylvania Ave".into();
        assert!(lookup.is_populated());
    }

    #[test]
    fn query_mapping_with_permissive_booleans() {
        let values = QueryValues::from_query(
            "text=some+text&html=true&aggressive=yes&addr_line_breaks=true&addr_per_line=2",
        );
        let mut lookup = ExtractLookup::default();
        lookup.apply_query(&values);

        assert_eq!(lookup.text, "some text");
        assert_eq!(lookup.html, "true");
        // "yes" is not a bool; permissive parsing reads it as false.
        assert!(!lookup.aggressive);
        assert!(lookup.addr_line_breaks);
        assert_eq!(lookup.addr_per_line, 2);
    }
}
