use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for featuredict
#[derive(Debug, Parser)]
#[command(
    name = "featuredict",
    version,
    about = "Look up OSM map features (iD presets) by id, tags or search term"
)]
pub struct CliArgs {
    /// Directory with presets.json and translations (de.json, pt-BR.json, ...)
    #[arg(short = 'p', long = "presets", global = true, default_value = "data/presets")]
    pub presets: PathBuf,

    /// Optional directory with brand presets (presets.json, presets-DE.json, ...)
    #[arg(short = 'b', long = "brands", global = true)]
    pub brands: Option<PathBuf>,

    /// Comma-separated locale fallback chain, highest priority first.
    /// `none` stands for the unlocalized presets (e.g. de-AT,en,none)
    #[arg(short = 'l', long = "locale", global = true, value_delimiter = ',')]
    pub locales: Vec<String>,

    /// ISO 3166-1 alpha-2 or ISO 3166-2 code of the place (e.g. DE, US-NY)
    #[arg(short = 'c', long = "country", global = true)]
    pub country: Option<String>,

    /// Log lazily built indices and loaded files
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the feature with the given id
    Id {
        /// Preset id (e.g. amenity/cafe)
        id: String,
    },

    /// Find the features matching a set of tags
    Tags {
        /// Tags as key=value pairs (e.g. amenity=cafe cuisine=coffee_shop)
        #[arg(required = true)]
        tags: Vec<String>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Search features by name, alias or term
    Term {
        /// Search text (e.g. "bakery")
        text: String,

        /// Maximum number of results, 0 for unlimited
        #[arg(short = 'n', long = "limit", default_value_t = 50)]
        limit: i64,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Only features for this geometry (point, vertex, line, area, relation)
    #[arg(short = 'g', long = "geometry")]
    pub geometry: Option<String>,

    /// Only brand suggestions
    #[arg(long = "suggestions", conflicts_with = "no_suggestions")]
    pub suggestions: bool,

    /// No brand suggestions
    #[arg(long = "no-suggestions")]
    pub no_suggestions: bool,
}

impl FilterArgs {
    pub fn suggestion(&self) -> Option<bool> {
        match (self.suggestions, self.no_suggestions) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
