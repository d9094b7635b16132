// crates/featuredict-core/tests/common/mod.rs
#![allow(dead_code)]

use featuredict_core::{
    ContentSource, FeatureDictionary, IdBrandFeatureCollection, IdLocalizedFeatureCollection,
    Locale, MemorySource, Result, Tags,
};
use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};

pub const PRESETS: &str = r#"{
    "point": {
        "tags": {},
        "geometry": ["point"],
        "name": "Point"
    },
    "amenity/fast_food": {
        "tags": {"amenity": "fast_food"},
        "geometry": ["point", "area"],
        "name": "Fast Food",
        "terms": ["restaurant"]
    },
    "amenity/fast_food/burger": {
        "tags": {"amenity": "fast_food", "cuisine": "burger"},
        "geometry": ["point", "area"],
        "name": "Burger Fast Food",
        "terms": ["hamburger"]
    },
    "shop/bakery": {
        "tags": {"shop": "bakery"},
        "geometry": ["point", "area"],
        "name": "Bakery",
        "terms": ["bread", "baker"]
    },
    "shop/pastry": {
        "tags": {"shop": "pastry"},
        "geometry": ["point", "area"],
        "name": "Bakery Shop"
    },
    "shop/confectionery": {
        "tags": {"shop": "confectionery"},
        "geometry": ["point", "area"],
        "name": "Candy Store",
        "terms": ["bakery goods", "sweets"]
    },
    "craft/baker": {
        "tags": {"craft": "bakery"},
        "geometry": ["point", "area"],
        "name": "Artisan Oven"
    },
    "shop/outlet": {
        "tags": {"shop": "outlet"},
        "geometry": ["point"],
        "name": "Bakery Outlet",
        "searchable": false
    },
    "amenity/post_box": {
        "tags": {"amenity": "post_box"},
        "geometry": ["point", "vertex"],
        "name": "Mailbox"
    },
    "amenity/letter_box": {
        "tags": {"amenity": "letter_box"},
        "geometry": ["point", "vertex"],
        "name": "Letter Box",
        "locationSet": {"include": ["gb"]}
    },
    "amenity/post_box/local": {
        "tags": {"amenity": "post_box", "operator": "Local Post"},
        "geometry": ["point", "vertex"],
        "name": "Local Post Box",
        "locationSet": {"include": ["Q123"]}
    }
}"#;

pub const BRANDS: &str = r#"{
    "amenity/fast_food/burger/mcdonalds": {
        "tags": {"amenity": "fast_food", "cuisine": "burger", "brand": "McDonald's"},
        "addTags": {"amenity": "fast_food", "cuisine": "burger", "brand": "McDonald's", "name": "McDonald's"},
        "geometry": ["point", "area"],
        "name": "McDonald's",
        "matchScore": 2
    }
}"#;

pub const BRANDS_DE: &str = r#"{
    "shop/bakery/backwerk": {
        "tags": {"shop": "bakery", "brand": "BackWerk"},
        "geometry": ["point", "area"],
        "name": "BackWerk",
        "locationSet": {"include": ["de"]}
    }
}"#;

pub const BRANDS_US_NY: &str = r#"{
    "shop/bakery/ny_bakery": {
        "tags": {"shop": "bakery", "brand": "NY Bakery"},
        "geometry": ["point", "area"],
        "name": "NY Bakery",
        "locationSet": {"include": ["us-ny"]}
    }
}"#;

pub const DE: &str = r#"{
    "de": {
        "presets": {
            "presets": {
                "shop/bakery": {"name": "Bäckerei", "terms": "Brot, Brötchen"},
                "amenity/fast_food": {"name": "Schnellimbiss", "aliases": "Imbiss\nImbissbude"},
                "unknown/id": {"name": "Unbekannt"}
            }
        }
    }
}"#;

pub fn tags(pairs: &[(&str, &str)]) -> Tags {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn ids(features: &[featuredict_core::Feature]) -> Vec<&str> {
    features.iter().map(|f| f.id()).collect()
}

pub fn presets_source() -> MemorySource {
    MemorySource::new()
        .with_file("presets.json", PRESETS)
        .with_file("de.json", DE)
}

pub fn brands_source() -> MemorySource {
    MemorySource::new()
        .with_file("presets.json", BRANDS)
        .with_file("presets-DE.json", BRANDS_DE)
        .with_file("presets-US-NY.json", BRANDS_US_NY)
}

pub fn dictionary() -> FeatureDictionary {
    let presets = IdLocalizedFeatureCollection::new(presets_source()).unwrap();
    let brands = IdBrandFeatureCollection::new(brands_source()).unwrap();
    FeatureDictionary::new(Box::new(presets), Some(Box::new(brands)), Locale::new("en")).unwrap()
}

/// Wraps a source and counts how often each file is opened.
#[derive(Clone, Default)]
pub struct CountingSource {
    inner: MemorySource,
    opened: Arc<Mutex<HashMap<String, usize>>>,
}

impl CountingSource {
    pub fn new(inner: MemorySource) -> Self {
        Self {
            inner,
            opened: Arc::default(),
        }
    }

    pub fn open_count(&self, name: &str) -> usize {
        self.opened.lock().unwrap().get(name).copied().unwrap_or(0)
    }
}

impl ContentSource for CountingSource {
    fn exists(&self, name: &str) -> bool {
        self.inner.exists(name)
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read + Send>> {
        *self.opened.lock().unwrap().entry(name.to_owned()).or_default() += 1;
        self.inner.open(name)
    }
}
