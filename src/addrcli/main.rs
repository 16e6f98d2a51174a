use std::env;

use clap::Parser;
use colored::*;
use serde::Serialize;
use serde_json::Value;

use addrcli::credentials::Credentials;
use addrcli::error::Result;
use addrcli::lookups::autocomplete::AutocompleteLookup;
use addrcli::lookups::extract::ExtractLookup;
use addrcli::lookups::international::{self, InternationalLookup};
use addrcli::lookups::reverse_geo::ReverseGeoLookup;
use addrcli::lookups::street::StreetLookup;
use addrcli::lookups::zipcode::ZipCodeLookup;
use addrcli::query::QueryValues;
use addrcli::resolve::{resolve, resolve_batch};
use addrcli::transport::{
    query_pairs, HttpTransport, Transport, INTERNATIONAL_STREET_URL, US_AUTOCOMPLETE_URL,
    US_EXTRACT_URL, US_REVERSE_GEO_URL, US_STREET_URL, US_ZIPCODE_URL,
};

mod args;
use args::{
    AutocompleteArgs, Cli, Commands, CommonArgs, ExtractArgs, InternationalArgs, ReverseGeoArgs,
    StreetArgs, ZipCodeArgs,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::UsStreet { common, args } => handle_us_street(&common, &args),
        Commands::UsZipCode { common, args } => handle_us_zipcode(&common, &args),
        Commands::UsAutocomplete { common, args } => handle_us_autocomplete(&common, &args),
        Commands::UsExtract { common, args } => handle_us_extract(&common, &args),
        Commands::InternationalStreet { common, args } => handle_international(&common, &args),
        Commands::UsReverseGeo { common, args } => handle_us_reverse_geo(&common, &args),
    }
}

fn handle_us_street(common: &CommonArgs, args: &StreetArgs) -> Result<()> {
    let query = QueryValues::from_query(&common.query);
    let url_query = QueryValues::from_url(&common.url);

    let batch = resolve_batch(&args.raw, || {
        let sources: [&dyn Fn(&mut StreetLookup); 3] = [
            &|l| l.apply_query(&query),
            &|l| l.apply_query(&url_query),
            &|l| *l = StreetLookup::from(args),
        ];
        resolve(&sources, StreetLookup::is_populated, "street")
    })?;

    send_batch(common, US_STREET_URL, &batch)
}

fn handle_us_zipcode(common: &CommonArgs, args: &ZipCodeArgs) -> Result<()> {
    let query = QueryValues::from_query(&common.query);
    let url_query = QueryValues::from_url(&common.url);

    let batch = resolve_batch(&args.raw, || {
        let sources: [&dyn Fn(&mut ZipCodeLookup); 3] = [
            &|l| l.apply_query(&query),
            &|l| l.apply_query(&url_query),
            &|l| *l = ZipCodeLookup::from(args),
        ];
        resolve(&sources, ZipCodeLookup::is_populated, "city, state, or zipcode")
    })?;

    send_batch(common, US_ZIPCODE_URL, &batch)
}

fn handle_us_autocomplete(common: &CommonArgs, args: &AutocompleteArgs) -> Result<()> {
    let query = QueryValues::from_query(&common.query);
    let url_query = QueryValues::from_url(&common.url);

    let sources: [&dyn Fn(&mut AutocompleteLookup); 3] = [
        &|l| l.apply_query(&query),
        &|l| l.apply_query(&url_query),
        &|l| *l = AutocompleteLookup::from(args),
    ];
    let lookup = resolve(&sources, AutocompleteLookup::is_populated, "prefix")?;

    send_lookup(common, US_AUTOCOMPLETE_URL, &lookup, &[])
}

fn handle_us_extract(common: &CommonArgs, args: &ExtractArgs) -> Result<()> {
    let query = QueryValues::from_query(&common.query);
    let url_query = QueryValues::from_url(&common.url);

    let sources: [&dyn Fn(&mut ExtractLookup); 3] = [
        &|l| l.apply_query(&query),
        &|l| l.apply_query(&url_query),
        &|l| *l = ExtractLookup::from(args),
    ];
    let lookup = resolve(&sources, ExtractLookup::is_populated, "text")?;

    send_lookup(common, US_EXTRACT_URL, &lookup, &[])
}

fn handle_international(common: &CommonArgs, args: &InternationalArgs) -> Result<()> {
    let query = QueryValues::from_query(&common.query);
    let url_query = QueryValues::from_url(&common.url);

    let lookup = match international::example(&args.example) {
        Some(example) => example,
        None => {
            let sources: [&dyn Fn(&mut InternationalLookup); 3] = [
                &|l| l.apply_query(&query),
                &|l| l.apply_query(&url_query),
                &|l| *l = InternationalLookup::from(args),
            ];
            resolve(
                &sources,
                InternationalLookup::is_populated,
                "freeform or address1",
            )?
        }
    };

    let endpoint = base_url(
        &args.base_url,
        "SMARTY_INTERNATIONAL_STREET_API",
        INTERNATIONAL_STREET_URL,
    );
    send_lookup(common, &endpoint, &lookup, &[])
}

fn handle_us_reverse_geo(common: &CommonArgs, args: &ReverseGeoArgs) -> Result<()> {
    let query = QueryValues::from_query(&common.query);
    let url_query = QueryValues::from_url(&common.url);

    let sources: [&dyn Fn(&mut ReverseGeoLookup); 3] = [
        &|l| l.apply_query(&query),
        &|l| l.apply_query(&url_query),
        &|l| *l = ReverseGeoLookup::from(args),
    ];
    let lookup = resolve(
        &sources,
        ReverseGeoLookup::is_populated,
        "latitude and longitude",
    )?;

    let endpoint = base_url(&args.base_url, "SMARTY_US_REVERSE_GEO_API", US_REVERSE_GEO_URL);
    send_lookup(common, &endpoint, &lookup, &args.license_pairs())
}

/// Endpoint precedence: flag, then environment, then the built-in host.
fn base_url(flag: &str, env_var: &str, fallback: &str) -> String {
    if !flag.is_empty() {
        return flag.to_string();
    }
    env::var(env_var).unwrap_or_else(|_| fallback.to_string())
}

fn send_batch<L: Serialize>(common: &CommonArgs, endpoint: &str, batch: &[L]) -> Result<()> {
    let body = serde_json::to_value(batch)?;
    if common.dry_run {
        return print_json(&body);
    }

    let transport = HttpTransport::new(Credentials::resolve(&common.auth_id, &common.auth_token));
    let response = transport.send_batch(endpoint, &body)?;
    eprintln!("{}", "Formatted Result:".dimmed());
    print_json(&response)
}

fn send_lookup<L: Serialize>(
    common: &CommonArgs,
    endpoint: &str,
    lookup: &L,
    extra_pairs: &[(String, String)],
) -> Result<()> {
    if common.dry_run {
        return print_json(&serde_json::to_value(lookup)?);
    }

    let mut pairs = query_pairs(lookup)?;
    pairs.extend_from_slice(extra_pairs);

    let transport = HttpTransport::new(Credentials::resolve(&common.auth_id, &common.auth_token));
    let response = transport.send_lookup(endpoint, &pairs)?;
    eprintln!("{}", "Formatted Result:".dimmed());
    print_json(&response)
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
