// crates/featuredict-core/src/lib.rs

//! Find OSM map features (iD presets) by id, by tags or by search term,
//! localized and filtered by country.
//!
//! ```no_run
//! use featuredict_core::{FeatureDictionary, Locale, TermQuery};
//!
//! let dictionary = FeatureDictionary::create("data/presets", None, Locale::new("en"))?;
//! for feature in dictionary.find_by_term("bakery", &TermQuery::new().limit(5))? {
//!     println!("{} ({})", feature.name(), feature.id());
//! }
//! # Ok::<(), featuredict_core::FeatureError>(())
//! ```

pub mod cache;
pub mod collection;
pub mod country;
pub mod dictionary;
pub mod error;
pub mod index;
pub mod loader; // presets files and content sources
pub mod locale;
pub mod model;
pub mod text;
pub mod traits;
// Serde shapes of the iD JSON files
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{FeatureError, Result};
pub use crate::locale::Locale;
pub use collection::{IdBrandFeatureCollection, IdLocalizedFeatureCollection};
pub use dictionary::{FeatureDictionary, IdQuery, TagsQuery, TermQuery, DEFAULT_TERM_LIMIT};
pub use loader::{FileSystemSource, MemorySource};
pub use model::{BaseFeature, Feature, GeometryType, LocalizedFeature, Tags};
pub use traits::{ContentSource, LocalizedFeatureCollection, PerCountryFeatureCollection};
