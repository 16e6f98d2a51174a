//! The HTTP collaborator. Resolution happens entirely before anything
//! here runs; a transport error is fatal and propagated verbatim, with
//! no retry.

use serde::Serialize;
use serde_json::Value;

use crate::credentials::Credentials;
use crate::error::Result;

pub const US_STREET_URL: &str = "https://us-street.api.smarty.com/street-address";
pub const US_ZIPCODE_URL: &str = "https://us-zipcode.api.smarty.com/lookup";
pub const US_AUTOCOMPLETE_URL: &str = "https://us-autocomplete.api.smarty.com/suggest";
pub const US_EXTRACT_URL: &str = "https://us-extract.api.smarty.com/";
pub const INTERNATIONAL_STREET_URL: &str = "https://international-street.api.smarty.com/verify";
pub const US_REVERSE_GEO_URL: &str = "https://us-reverse-geo.api.smarty.com/lookup";

/// Seam between the resolution pipeline and the network. Responses are
/// returned verbatim as JSON; for batches, result order matches
/// submission order positionally.
pub trait Transport {
    fn send_lookup(&self, endpoint: &str, query: &[(String, String)]) -> Result<Value>;
    fn send_batch(&self, endpoint: &str, body: &Value) -> Result<Value>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
    credentials: Credentials,
}

impl HttpTransport {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            credentials,
        }
    }

    fn auth_pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("auth-id", self.credentials.auth_id.as_str()),
            ("auth-token", self.credentials.auth_token.as_str()),
        ]
    }
}

impl Transport for HttpTransport {
    fn send_lookup(&self, endpoint: &str, query: &[(String, String)]) -> Result<Value> {
        let response = self
            .client
            .get(endpoint)
            .query(&self.auth_pairs())
            .query(query)
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }

    fn send_batch(&self, endpoint: &str, body: &Value) -> Result<Value> {
        let response = self
            .client
            .post(endpoint)
            .query(&self.auth_pairs())
            .json(body)
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}

/// Project a lookup into url-encoded query pairs.
///
/// Empty strings and zero numbers are omitted: they carry no
/// information. Booleans are always emitted — a `false` can be an
/// explicit choice against a remote default, so dropping it would
/// invert the request. Lists join with "," (";" for `prefer`), and a
/// join that comes out empty — the `[""]` "no filter" case — is
/// omitted too.
pub fn query_pairs(lookup: &impl Serialize) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(lookup)?;
    let mut pairs = Vec::new();
    if let Value::Object(fields) = value {
        for (key, field) in fields {
            let rendered = match field {
                Value::String(text) => text,
                Value::Bool(flag) => flag.to_string(),
                Value::Number(number) => {
                    if number.as_f64() == Some(0.0) {
                        continue;
                    }
                    number.to_string()
                }
                Value::Array(items) => {
                    let separator = if key == "prefer" { ";" } else { "," };
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .collect::<Vec<_>>()
                        .join(separator)
                }
                Value::Null | Value::Object(_) => continue,
            };
            if rendered.is_empty() {
                continue;
            }
            pairs.push((key, rendered));
        }
    }
    Ok(pairs)
}
