//! The input-resolution core.
//!
//! Every subcommand assembles its lookup the same way: an ordered list
//! of candidate sources (query string, URL query string, flags) is
//! tried in turn, and the first one that yields a populated lookup
//! wins. Sources are never mixed: each attempt starts from a fresh
//! default record, so fields from a rejected source cannot leak into
//! the one that ultimately succeeds. When every source is exhausted
//! the command fails, naming the unmet field.
//!
//! Batch-capable APIs short-circuit before any of that: a raw payload
//! that parses as a non-empty JSON array of lookups is submitted as-is.
//! Empty, absent, or malformed raw text is treated as "no batch" and
//! falls through to single-lookup resolution, wrapped in a one-element
//! batch for uniform downstream handling.

use serde::de::DeserializeOwned;

use crate::error::{AddrError, Result};

/// Try each source in order, returning the first lookup that satisfies
/// the presence rule. Exhausting all sources is the only failure mode.
pub fn resolve<L, P>(
    sources: &[&dyn Fn(&mut L)],
    populated: P,
    required: &'static str,
) -> Result<L>
where
    L: Default,
    P: Fn(&L) -> bool,
{
    for source in sources {
        let mut lookup = L::default();
        source(&mut lookup);
        if populated(&lookup) {
            return Ok(lookup);
        }
    }
    Err(AddrError::MissingInput(required))
}

/// Batch dispatch: a non-empty JSON array of lookups wins outright.
/// Anything else falls through to the single-lookup resolution given
/// by `single`, whose result is wrapped in a one-element batch.
pub fn resolve_batch<L, F>(raw: &str, single: F) -> Result<Vec<L>>
where
    L: DeserializeOwned,
    F: FnOnce() -> Result<L>,
{
    if !raw.is_empty() {
        if let Ok(lookups) = serde_json::from_str::<Vec<L>>(raw) {
            if !lookups.is_empty() {
                return Ok(lookups);
            }
        }
    }
    Ok(vec![single()?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookups::zipcode::ZipCodeLookup;
    use crate::query::QueryValues;

    fn run(
        query: &QueryValues,
        url_query: &QueryValues,
        flags: &ZipCodeLookup,
    ) -> Result<ZipCodeLookup> {
        let sources: [&dyn Fn(&mut ZipCodeLookup); 3] = [
            &|l| l.apply_query(query),
            &|l| l.apply_query(url_query),
            &|l| *l = flags.clone(),
        ];
        resolve(&sources, ZipCodeLookup::is_populated, "city, state, or zipcode")
    }

    fn flags_springfield() -> ZipCodeLookup {
        ZipCodeLookup {
            city: "Springfield".into(),
            state: "IL".into(),
            ..Default::default()
        }
    }

    #[test]
    fn flags_alone_satisfy_presence() {
        let empty = QueryValues::default();
        let resolved = run(&empty, &empty, &flags_springfield()).unwrap();
        assert_eq!(resolved.city, "Springfield");
        assert_eq!(resolved.state, "IL");
        assert_eq!(resolved.zipcode, "");
    }

    #[test]
    fn query_string_wins_over_flags() {
        let query = QueryValues::from_query("city=Provo&state=UT");
        let resolved = run(&query, &QueryValues::default(), &flags_springfield()).unwrap();
        assert_eq!(resolved.city, "Provo");
        assert_eq!(resolved.state, "UT");
    }

    #[test]
    fn url_query_wins_over_flags_when_query_is_absent() {
        let url_query = QueryValues::from_url("https://example.com/?zipcode=84604");
        let resolved = run(&QueryValues::default(), &url_query, &flags_springfield()).unwrap();
        assert_eq!(resolved.zipcode, "84604");
        assert_eq!(resolved.city, "");
    }

    #[test]
    fn rejected_source_fields_do_not_leak() {
        // The query string carries data but never enough to satisfy
        // presence; the winning flags source must not inherit it.
        let query = QueryValues::from_query("input_id=abc123");
        let resolved = run(&query, &QueryValues::default(), &flags_springfield()).unwrap();
        assert_eq!(resolved.input_id, "");
        assert_eq!(resolved.city, "Springfield");
    }

    #[test]
    fn exhausted_sources_name_the_missing_field() {
        let empty = QueryValues::default();
        let err = run(&empty, &empty, &ZipCodeLookup::default()).unwrap_err();
        assert_eq!(err.to_string(), "No city, state, or zipcode provided.");
    }

    #[test]
    fn resolution_is_idempotent() {
        let query = QueryValues::from_query("city=Provo");
        let first = run(&query, &QueryValues::default(), &flags_springfield()).unwrap();
        let second = run(&query, &QueryValues::default(), &flags_springfield()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn raw_batch_wins_over_everything() {
        let raw = r#"[{"city":"Provo"},{"city":"Orem"},{"zipcode":"84604"}]"#;
        let batch: Vec<ZipCodeLookup> = resolve_batch(raw, || {
            panic!("single-lookup resolution must not run when a batch is present")
        })
        .unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].city, "Provo");
        assert_eq!(batch[2].zipcode, "84604");
    }

    #[test]
    fn malformed_batch_falls_through_to_single() {
        let batch: Vec<ZipCodeLookup> =
            resolve_batch("{not json", || Ok(flags_springfield())).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].city, "Springfield");
    }

    #[test]
    fn empty_array_falls_through_to_single() {
        let batch: Vec<ZipCodeLookup> = resolve_batch("[]", || Ok(flags_springfield())).unwrap();
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn absent_batch_propagates_single_resolution_failure() {
        let result: Result<Vec<ZipCodeLookup>> =
            resolve_batch("", || Err(AddrError::MissingInput("city, state, or zipcode")));
        assert!(result.is_err());
    }
}
