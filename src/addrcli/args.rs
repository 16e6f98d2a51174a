use clap::{Args, Parser, Subcommand};

use addrcli::lookups::autocomplete::{AutocompleteLookup, Geolocation};
use addrcli::lookups::extract::ExtractLookup;
use addrcli::lookups::international::InternationalLookup;
use addrcli::lookups::reverse_geo::ReverseGeoLookup;
use addrcli::lookups::street::StreetLookup;
use addrcli::lookups::zipcode::ZipCodeLookup;
use addrcli::query::split_list;

#[derive(Parser, Debug)]
#[command(name = "addrcli")]
#[command(about = "Command-line lookups against address verification and geocoding APIs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify US street addresses (batch-capable)
    #[command(name = "us-street")]
    UsStreet {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        args: StreetArgs,
    },

    /// Look up US city/state/ZIP combinations (batch-capable)
    #[command(name = "us-zipcode")]
    UsZipCode {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        args: ZipCodeArgs,
    },

    /// Suggest US address completions for a prefix
    #[command(name = "us-autocomplete")]
    UsAutocomplete {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        args: AutocompleteArgs,
    },

    /// Extract addresses from freeform text
    #[command(name = "us-extract")]
    UsExtract {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        args: ExtractArgs,
    },

    /// Verify international street addresses
    #[command(name = "international-street")]
    InternationalStreet {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        args: InternationalArgs,
    },

    /// Find US addresses near a coordinate pair
    #[command(name = "us-reverse-geo")]
    UsReverseGeo {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        args: ReverseGeoArgs,
    },
}

/// Input sources and credentials shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct CommonArgs {
    /// The auth-id value; defaults to SMARTY_AUTH_ID when set
    #[arg(long, default_value = "")]
    pub auth_id: String,

    /// The auth-token value; defaults to SMARTY_AUTH_TOKEN when set
    #[arg(long, default_value = "")]
    pub auth_token: String,

    /// A query string with input values (any auth values in it are ignored)
    #[arg(long, default_value = "")]
    pub query: String,

    /// A URL whose query string supplies input values
    #[arg(long, default_value = "")]
    pub url: String,

    /// Print the resolved request as JSON instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Default)]
pub struct StreetArgs {
    /// A JSON array of lookups; a non-empty array wins over every other source
    #[arg(long, default_value = "")]
    pub raw: String,

    /// The street field
    #[arg(long, default_value = "")]
    pub street: String,

    /// The street2 field
    #[arg(long, default_value = "")]
    pub street2: String,

    /// The secondary field
    #[arg(long, default_value = "")]
    pub secondary: String,

    /// The city field
    #[arg(long, default_value = "")]
    pub city: String,

    /// The state field
    #[arg(long, default_value = "")]
    pub state: String,

    /// The ZIP Code field
    #[arg(long, default_value = "")]
    pub zipcode: String,

    /// The lastline field
    #[arg(long, default_value = "")]
    pub lastline: String,

    /// The addressee field
    #[arg(long, default_value = "")]
    pub addressee: String,

    /// The urbanization field
    #[arg(long, default_value = "")]
    pub urbanization: String,

    /// An identifier echoed back with the result
    #[arg(long, default_value = "")]
    pub input_id: String,

    /// The max candidate count
    #[arg(long, default_value_t = 10)]
    pub candidates: i64,

    /// The match strategy (strict, invalid, enhanced)
    #[arg(long = "match", default_value = "strict")]
    pub match_strategy: String,
}

impl From<&StreetArgs> for StreetLookup {
    fn from(args: &StreetArgs) -> Self {
        Self {
            street: args.street.clone(),
            street2: args.street2.clone(),
            secondary: args.secondary.clone(),
            city: args.city.clone(),
            state: args.state.clone(),
            zipcode: args.zipcode.clone(),
            lastline: args.lastline.clone(),
            addressee: args.addressee.clone(),
            urbanization: args.urbanization.clone(),
            input_id: args.input_id.clone(),
            candidates: args.candidates,
            match_strategy: args.match_strategy.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ZipCodeArgs {
    /// A JSON array of lookups; a non-empty array wins over every other source
    #[arg(long, default_value = "")]
    pub raw: String,

    /// The city field
    #[arg(long, default_value = "")]
    pub city: String,

    /// The state field
    #[arg(long, default_value = "")]
    pub state: String,

    /// The ZIP Code field
    #[arg(long, default_value = "")]
    pub zipcode: String,

    /// An identifier echoed back with the result
    #[arg(long, default_value = "")]
    pub input_id: String,
}

impl From<&ZipCodeArgs> for ZipCodeLookup {
    fn from(args: &ZipCodeArgs) -> Self {
        Self {
            city: args.city.clone(),
            state: args.state.clone(),
            zipcode: args.zipcode.clone(),
            input_id: args.input_id.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct AutocompleteArgs {
    /// The address prefix to complete
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// The max suggestion count
    #[arg(long, default_value_t = 10)]
    pub suggestions: i64,

    /// Geolocation precision: city, state, or none
    #[arg(long, default_value = "city")]
    pub geolocate_precision: String,

    /// Cities to prefer, separated by ";"
    #[arg(long, default_value = "")]
    pub prefer: String,

    /// The share of results reserved for preferred cities
    #[arg(long, default_value_t = 1.0 / 3.0)]
    pub prefer_ratio: f64,

    /// Cities to filter by, separated by ","
    #[arg(long, default_value = "")]
    pub city_filter: String,

    /// States to filter by, separated by ","
    #[arg(long, default_value = "")]
    pub state_filter: String,
}

impl From<&AutocompleteArgs> for AutocompleteLookup {
    fn from(args: &AutocompleteArgs) -> Self {
        Self {
            prefix: args.prefix.clone(),
            suggestions: args.suggestions,
            city_filter: split_list(&args.city_filter, ','),
            state_filter: split_list(&args.state_filter, ','),
            prefer: split_list(&args.prefer, ';'),
            prefer_ratio: args.prefer_ratio,
            geolocation: Geolocation::parse(&args.geolocate_precision),
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ExtractArgs {
    /// The freeform text to extract addresses from
    #[arg(long, default_value = "")]
    pub text: String,

    /// Whether the text is HTML: true, false, or blank to let the
    /// service decide
    #[arg(long, default_value = "")]
    pub html: String,

    /// Extract addresses aggressively
    #[arg(long)]
    pub aggressive: bool,

    /// Whether addresses in the text span line breaks
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set, value_name = "BOOL")]
    pub addr_line_breaks: bool,

    /// The max addresses per line (0 for no limit)
    #[arg(long, default_value_t = 0)]
    pub addr_per_line: i64,
}

impl From<&ExtractArgs> for ExtractLookup {
    fn from(args: &ExtractArgs) -> Self {
        Self {
            text: args.text.clone(),
            html: args.html.clone(),
            aggressive: args.aggressive,
            addr_line_breaks: args.addr_line_breaks,
            addr_per_line: args.addr_per_line,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct InternationalArgs {
    /// The label of a canned example lookup (brazil-maceio, brazil-mtc,
    /// ireland1, japan1, japan2, jetbrains); wins over every other source
    #[arg(long, default_value = "")]
    pub example: String,

    /// Override the API endpoint; defaults to
    /// SMARTY_INTERNATIONAL_STREET_API when set
    #[arg(long, default_value = "")]
    pub base_url: String,

    /// The country field
    #[arg(long, default_value = "")]
    pub country: String,

    /// The language field
    #[arg(long, default_value = "")]
    pub language: String,

    /// The freeform address field
    #[arg(long, default_value = "")]
    pub freeform: String,

    /// The address1 field
    #[arg(long, default_value = "")]
    pub address1: String,

    /// The address2 field
    #[arg(long, default_value = "")]
    pub address2: String,

    /// The address3 field
    #[arg(long, default_value = "")]
    pub address3: String,

    /// The address4 field
    #[arg(long, default_value = "")]
    pub address4: String,

    /// The organization field
    #[arg(long, default_value = "")]
    pub organization: String,

    /// The locality field
    #[arg(long, default_value = "")]
    pub locality: String,

    /// The administrative_area field
    #[arg(long, default_value = "")]
    pub administrative_area: String,

    /// The postal_code field
    #[arg(long, default_value = "")]
    pub postal_code: String,

    /// Geocode the verified address
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set, value_name = "BOOL")]
    pub geocode: bool,
}

impl From<&InternationalArgs> for InternationalLookup {
    fn from(args: &InternationalArgs) -> Self {
        Self {
            country: args.country.clone(),
            language: args.language.clone(),
            freeform: args.freeform.clone(),
            address1: args.address1.clone(),
            address2: args.address2.clone(),
            address3: args.address3.clone(),
            address4: args.address4.clone(),
            organization: args.organization.clone(),
            locality: args.locality.clone(),
            administrative_area: args.administrative_area.clone(),
            postal_code: args.postal_code.clone(),
            geocode: args.geocode,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ReverseGeoArgs {
    /// Override the API endpoint; defaults to SMARTY_US_REVERSE_GEO_API
    /// when set
    #[arg(long, default_value = "")]
    pub base_url: String,

    /// License values to send, separated by ","
    #[arg(long, default_value = "us-reverse-geocoding-cloud")]
    pub licenses: String,

    /// The latitude field
    #[arg(long, default_value_t = 40.25, allow_hyphen_values = true)]
    pub latitude: f64,

    /// The longitude field
    #[arg(long, default_value_t = -111.67, allow_hyphen_values = true)]
    pub longitude: f64,
}

impl From<&ReverseGeoArgs> for ReverseGeoLookup {
    fn from(args: &ReverseGeoArgs) -> Self {
        Self {
            latitude: args.latitude,
            longitude: args.longitude,
        }
    }
}

impl ReverseGeoArgs {
    /// One `license` query pair per comma-separated value; empty
    /// entries carry no information and are dropped.
    pub fn license_pairs(&self) -> Vec<(String, String)> {
        split_list(&self.licenses, ',')
            .into_iter()
            .filter(|license| !license.is_empty())
            .map(|license| ("license".to_string(), license))
            .collect()
    }
}
