//! Query-string extraction shared by the `--query` and `--url` sources.
//!
//! Values are deliberately permissive: a missing key reads as the empty
//! string, and unparsable numeric or boolean text reads as the type's
//! zero value. Lookups populated this way fall through to the next
//! source when the presence rule is not met, so hard parse failures
//! here would only get in the way.

use std::collections::HashMap;
use url::Url;

#[derive(Debug, Clone, Default)]
pub struct QueryValues {
    values: HashMap<String, String>,
}

impl QueryValues {
    /// Parse a raw `application/x-www-form-urlencoded` query string.
    /// For repeated keys the first value wins.
    pub fn from_query(raw: &str) -> Self {
        let mut values = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            values
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self { values }
    }

    /// Parse the query-string portion of a full URL. An unparsable URL
    /// yields no values at all, which reads as an unpopulated lookup.
    pub fn from_url(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(parsed) => Self::from_query(parsed.query().unwrap_or("")),
            Err(_) => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First value for the key, or "" when absent.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn get_i64(&self, key: &str) -> i64 {
        self.get(key).parse().unwrap_or_default()
    }

    pub fn get_f64(&self, key: &str) -> f64 {
        self.get(key).parse().unwrap_or_default()
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).parse().unwrap_or_default()
    }
}

/// Split a delimited field value. An empty input still yields `[""]`;
/// downstream treats a single empty element as "no filter".
pub fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_empty() {
        let values = QueryValues::from_query("city=Provo");
        assert_eq!(values.get("city"), "Provo");
        assert_eq!(values.get("state"), "");
    }

    #[test]
    fn repeated_key_first_value_wins() {
        let values = QueryValues::from_query("city=Provo&city=Orem");
        assert_eq!(values.get("city"), "Provo");
    }

    #[test]
    fn percent_encoding_is_decoded() {
        let values = QueryValues::from_query("street=1600+Pennsylvania%20Ave");
        assert_eq!(values.get("street"), "1600 Pennsylvania Ave");
    }

    #[test]
    fn unparsable_numbers_read_as_zero() {
        let values = QueryValues::from_query("candidates=lots&ratio=much");
        assert_eq!(values.get_i64("candidates"), 0);
        assert_eq!(values.get_f64("ratio"), 0.0);
        assert!(!values.get_bool("missing"));
    }

    #[test]
    fn parsable_numbers_come_through() {
        let values = QueryValues::from_query("candidates=7&ratio=0.5&geocode=true");
        assert_eq!(values.get_i64("candidates"), 7);
        assert_eq!(values.get_f64("ratio"), 0.5);
        assert!(values.get_bool("geocode"));
    }

    #[test]
    fn url_query_is_extracted() {
        let values = QueryValues::from_url("https://example.com/lookup?city=Provo&state=UT");
        assert_eq!(values.get("city"), "Provo");
        assert_eq!(values.get("state"), "UT");
    }

    #[test]
    fn unparsable_url_yields_no_values() {
        assert!(QueryValues::from_url("not a url").is_empty());
        assert!(QueryValues::from_url("").is_empty());
    }

    #[test]
    fn split_list_empty_input_yields_one_empty_element() {
        assert_eq!(split_list("", ','), vec![""]);
    }

    #[test]
    fn split_list_splits_on_separator() {
        assert_eq!(split_list("a,b", ','), vec!["a", "b"]);
        assert_eq!(split_list("x;y;z", ';'), vec!["x", "y", "z"]);
    }
}
