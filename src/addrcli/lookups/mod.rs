//! One lookup record per API family.
//!
//! Every record carries the external field-name vocabulary via serde
//! renames, so raw batch JSON, query strings, and the outgoing request
//! all share one schema. `#[serde(default)]` keeps every key optional
//! when parsing batch payloads. Each record supplies two pieces of the
//! resolution pipeline: `apply_query` (the per-API field-mapping table
//! for the query-string and URL sources) and `is_populated` (the
//! presence rule deciding whether a source attempt succeeded).

pub mod autocomplete;
pub mod extract;
pub mod international;
pub mod reverse_geo;
pub mod street;
pub mod zipcode;
