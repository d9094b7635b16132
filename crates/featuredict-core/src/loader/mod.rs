// crates/featuredict-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, memory, decompression) behind the
//! [`ContentSource`] trait and delegates to the JSON parsers.

use crate::error::{FeatureError, Result};
use crate::locale::Locale;
use crate::model::{convert, BaseFeature, FeatureMap};
use crate::raw::{PresetsRaw, TranslationsRaw};
use crate::traits::ContentSource;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

pub mod common_io;

/// File name of the base catalog and of the global brand catalog.
pub const PRESETS_FILE: &str = "presets.json";

/// `de-AT` -> `de-AT.json`
pub fn translation_filename(locale: &Locale) -> String {
    format!("{}.json", locale.language_tag())
}

/// `None` -> `presets.json`, `Some("US-NY")` -> `presets-US-NY.json`
pub fn country_presets_filename(country_code: Option<&str>) -> String {
    match country_code {
        None => PRESETS_FILE.to_owned(),
        Some(cc) => format!("presets-{cc}.json"),
    }
}

/// Read and convert a presets catalog. The file must exist.
pub fn load_presets(
    source: &dyn ContentSource,
    name: &str,
    is_suggestion: bool,
) -> Result<Vec<BaseFeature>> {
    let reader = source.open(name)?;
    let raw: PresetsRaw = serde_json::from_reader(reader)?;
    Ok(convert::from_raw(raw, is_suggestion))
}

/// Read a translation overlay for `locale`. A missing file yields an empty
/// map; a present but unparsable one is an error.
pub fn load_translations(
    source: &dyn ContentSource,
    locale: &Locale,
    base: &FeatureMap,
) -> Result<FeatureMap> {
    let name = translation_filename(locale);
    if !source.exists(&name) {
        return Ok(FeatureMap::default());
    }
    let reader = source.open(&name)?;
    let raw: TranslationsRaw = serde_json::from_reader(reader)?;
    Ok(convert::localized_from_raw(raw, locale, base))
}

/// Files in a directory on disk.
///
/// With the `compact` feature, `<name>.gz` is used when `<name>` is absent.
#[derive(Clone, Debug)]
pub struct FileSystemSource {
    base_dir: PathBuf,
}

impl FileSystemSource {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let path = self.base_dir.join(name);
        if path.is_file() {
            return Some(path);
        }

        #[cfg(feature = "compact")]
        {
            let gz = common_io::gzip_path(&path);
            if gz.is_file() {
                return Some(gz);
            }
        }

        None
    }
}

impl ContentSource for FileSystemSource {
    fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read + Send>> {
        let path = self.resolve(name).ok_or_else(|| {
            FeatureError::NotFound(format!("{} in {}", name, self.base_dir.display()))
        })?;
        common_io::open_stream(&path)
    }
}

/// Files held in memory, e.g. embedded with `include_str!` or built in tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: &str, content: impl Into<Vec<u8>>) -> Self {
        self.insert(name, content);
        self
    }

    pub fn insert(&mut self, name: &str, content: impl Into<Vec<u8>>) {
        self.files.insert(name.to_owned(), content.into());
    }
}

impl ContentSource for MemorySource {
    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read + Send>> {
        let bytes = self
            .files
            .get(name)
            .ok_or_else(|| FeatureError::NotFound(name.to_owned()))?;
        Ok(Box::new(Cursor::new(bytes.clone())))
    }
}
