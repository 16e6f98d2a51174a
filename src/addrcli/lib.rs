//! # addrcli
//!
//! Command-line lookups against a family of address verification and
//! geocoding web APIs. Each subcommand builds one request (or a small
//! batch), sends it, and pretty-prints the JSON response.
//!
//! The interesting part is input resolution. Every subcommand accepts
//! the same competing input sources, tried in fixed precedence order:
//!
//! 1. `--raw` — a JSON array of lookups (batch-capable APIs only); a
//!    non-empty array wins outright.
//! 2. `--query` — a raw query string.
//! 3. `--url` — a full URL whose query string is reused.
//! 4. Per-field flags — always present, the terminal fallback.
//!
//! Resolution stops at the first source that yields a lookup satisfying
//! that API's presence rule; each attempt starts from a fresh record so
//! sources are never mixed. Only when every source fails does the
//! command abort, before any network traffic, naming the unmet field.
//!
//! ## Module Overview
//!
//! - [`resolve`]: the source-precedence engine and batch dispatch
//! - [`lookups`]: one record per API family, with its field-mapping
//!   table and presence rule
//! - [`query`]: query-string/URL extraction with permissive scalars
//! - [`credentials`]: auth flags with environment fallback
//! - [`transport`]: the HTTP seam (trait + blocking reqwest impl)
//! - [`error`]: error types
//!
//! Everything from [`resolve`] inward is synchronous, in-memory, and
//! free of terminal or network assumptions; the binary's `main.rs` is
//! the only place that prints or exits.

pub mod credentials;
pub mod error;
pub mod lookups;
pub mod query;
pub mod resolve;
pub mod transport;
