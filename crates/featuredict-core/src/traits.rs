// crates/featuredict-core/src/traits.rs
use crate::error::Result;
use crate::locale::Locale;
use crate::model::Feature;
use std::io::Read;

/// Name-indexed access to catalog files.
///
/// Names are plain file names such as `presets.json`, `de-AT.json` or
/// `presets-US-NY.json`; where they come from (a directory, memory, an
/// archive) is up to the implementor.
///
/// # Examples
/// ```rust
/// use featuredict_core::loader::MemorySource;
/// use featuredict_core::traits::ContentSource;
///
/// let source = MemorySource::new().with_file("presets.json", "{}");
/// assert!(source.exists("presets.json"));
/// assert!(!source.exists("de.json"));
/// ```
pub trait ContentSource: Send + Sync {
    fn exists(&self, name: &str) -> bool;

    /// Opens `name` for reading. Fails if it does not exist or is unreadable.
    fn open(&self, name: &str) -> Result<Box<dyn Read + Send>>;
}

/// Features resolved through a locale fallback chain.
///
/// A locale list is ordered by priority, highest first. `None` in the list
/// stands for the unlocalized base features.
pub trait LocalizedFeatureCollection: Send + Sync {
    /// All features that have a representation in any of `locales`, each
    /// in the highest-priority locale available.
    fn get_all(&self, locales: &[Option<Locale>]) -> Result<Vec<Feature>>;

    fn get(&self, id: &str, locales: &[Option<Locale>]) -> Result<Option<Feature>>;
}

/// Features grouped by country code (`None` = not country specific).
pub trait PerCountryFeatureCollection: Send + Sync {
    /// Union of the features of all given country codes.
    fn get_all(&self, country_codes: &[Option<String>]) -> Result<Vec<Feature>>;

    /// The feature with `id` from the first country code (in the given
    /// order) that has one.
    fn get(&self, id: &str, country_codes: &[Option<String>]) -> Result<Option<Feature>>;
}
