//! featuredict: command-line interface for featuredict-core
//!
//! Looks up iD presets from a directory of preset JSON files.
//!
//! Usage examples
//! --------------
//!
//! - Show a preset, localized in German with English and unlocalized fallback
//!   $ featuredict --locale de,en,none id shop/bakery
//!
//! - Which preset does this tag set represent?
//!   $ featuredict tags amenity=fast_food cuisine=burger
//!
//! - Search, including brands of a country
//!   $ featuredict --brands data/brands --country US-NY term "mcdo"
//!
//! Set `RUST_LOG` (or pass `-v`) to see which files and indices get loaded.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use featuredict_core::{
    Feature, FeatureDictionary, GeometryType, IdQuery, Locale, Tags, TagsQuery, TermQuery,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let locales = parse_locales(&args.locales)?;
    // First concrete locale of the chain, or English
    let default_locale = locales
        .iter()
        .flatten()
        .next()
        .cloned()
        .unwrap_or_else(|| Locale::new("en"));
    let explicit_locales = (!locales.is_empty()).then_some(locales);

    let dictionary =
        FeatureDictionary::create(&args.presets, args.brands.as_deref(), default_locale)
            .with_context(|| format!("loading presets from {}", args.presets.display()))?;
    debug!(locale = %dictionary.default_locale(), "dictionary ready");

    match args.command {
        Commands::Id { id } => {
            let query = IdQuery {
                locales: explicit_locales,
                country_code: args.country,
            };
            match dictionary.get_by_id(&id, &query)? {
                Some(feature) => print_details(&feature),
                None => eprintln!("No feature found with id: {id}"),
            }
        }

        Commands::Tags { tags, filter } => {
            let query = TagsQuery {
                geometry: parse_geometry(filter.geometry.as_deref())?,
                locales: explicit_locales,
                country_code: args.country,
                suggestion: filter.suggestion(),
            };
            let found = dictionary.find_by_tags(&parse_tags(&tags)?, &query)?;
            print_list(&found, "No feature matches these tags");
        }

        Commands::Term {
            text,
            limit,
            filter,
        } => {
            let query = TermQuery {
                geometry: parse_geometry(filter.geometry.as_deref())?,
                locales: explicit_locales,
                country_code: args.country,
                suggestion: filter.suggestion(),
                ..TermQuery::default()
            }
            .limit(limit);
            let found = dictionary.find_by_term(&text, &query)?;
            print_list(&found, &format!("No feature found matching: {text}"));
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `none` (any case) maps to the unlocalized entry.
fn parse_locales(values: &[String]) -> anyhow::Result<Vec<Option<Locale>>> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| {
            if v.eq_ignore_ascii_case("none") {
                Ok(None)
            } else {
                Ok(Some(v.parse::<Locale>()?))
            }
        })
        .collect()
}

fn parse_tags(pairs: &[String]) -> anyhow::Result<Tags> {
    let mut tags = Tags::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("expected key=value, got: {pair}");
        };
        tags.insert(key.trim().to_owned(), value.trim().to_owned());
    }
    Ok(tags)
}

fn parse_geometry(value: Option<&str>) -> anyhow::Result<Option<GeometryType>> {
    Ok(value.map(str::parse).transpose()?)
}

fn print_list(features: &[Feature], empty_message: &str) {
    if features.is_empty() {
        println!("{empty_message}");
        return;
    }
    for f in features {
        let marker = if f.is_suggestion() { " (brand)" } else { "" };
        println!("{} [{}]{}", f.name(), f.id(), marker);
    }
}

fn print_details(f: &Feature) {
    println!("Feature: {}", f.name());
    println!("Id: {}", f.id());
    if let Some(locale) = f.locale() {
        println!("Locale: {locale}");
    }
    println!("Tags: {}", format_tags(f.ordered_tags()));
    if f.add_tags() != f.tags() {
        let add_tags = f.add_tags().iter().map(|(k, v)| (k.as_str(), v.as_str()));
        println!("Add tags: {}", format_tags(add_tags));
    }
    let geometry: Vec<&str> = f.geometry().iter().map(|g| g.as_str()).collect();
    println!("Geometry: {}", geometry.join(", "));
    if f.names().len() > 1 {
        println!("Aliases: {}", f.names()[1..].join(", "));
    }
    if !f.terms().is_empty() {
        println!("Terms: {}", f.terms().join(", "));
    }
    if let Some(icon) = f.icon() {
        println!("Icon: {icon}");
    }
    if f.is_country_restricted() {
        println!(
            "Countries: +[{}] -[{}]",
            f.include_country_codes().join(", "),
            f.exclude_country_codes().join(", ")
        );
    }
    println!("Match score: {}", f.match_score());
    println!("Searchable: {}", f.is_searchable());
    println!("Brand: {}", f.is_suggestion());
}

fn format_tags<'a>(tags: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    tags.into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(" ")
}
