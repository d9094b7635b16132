// crates/featuredict-core/src/raw.rs

//! Raw JSON shapes of the iD tagging-schema files, as they come from disk.
//!
//! These mirror the external data format and are converted into the model by
//! [`crate::model::convert`]; nothing here is used by the query engine.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// A JSON object read as a list of entries in document order.
#[derive(Debug)]
pub struct Entries<T>(pub Vec<(String, T)>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
            type Value = Entries<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    out.push((key, value));
                }
                Ok(Entries(out))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Entries(Vec::new())
    }
}

/// `presets.json`: preset id -> preset.
pub type PresetsRaw = Entries<PresetRaw>;

/// One preset of `presets.json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetRaw {
    #[serde(default)]
    pub tags: Entries<String>,
    #[serde(default)]
    pub add_tags: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub remove_tags: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub geometry: Vec<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub terms: Vec<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub searchable: Option<bool>,
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub location_set: Option<LocationSetRaw>,
}

/// `locationSet`: entries are usually country codes, but may also be M49
/// region codes, geojson file names or `[lon, lat, radius]` arrays.
#[derive(Debug, Default, Deserialize)]
pub struct LocationSetRaw {
    #[serde(default)]
    pub include: Vec<Value>,
    #[serde(default)]
    pub exclude: Vec<Value>,
}

/// `<locale>.json`:
/// `{ "de": { "presets": { "presets": { "<id>": { ... } } } } }`
pub type TranslationsRaw = Entries<LanguageRaw>;

#[derive(Debug, Deserialize)]
pub struct LanguageRaw {
    #[serde(default)]
    pub presets: Option<PresetsContainerRaw>,
}

#[derive(Debug, Deserialize)]
pub struct PresetsContainerRaw {
    #[serde(default)]
    pub presets: Option<Entries<PresetTranslationRaw>>,
}

/// Translated strings of one preset. `aliases` is newline separated,
/// `terms` comma separated.
#[derive(Debug, Deserialize)]
pub struct PresetTranslationRaw {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub aliases: Option<String>,
    #[serde(default)]
    pub terms: Option<String>,
}
