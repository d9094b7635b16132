// crates/featuredict-core/src/collection/brand.rs
use crate::cache::LazyCache;
use crate::error::Result;
use crate::loader;
use crate::model::{Feature, FeatureMap};
use crate::traits::{ContentSource, PerCountryFeatureCollection};
use std::sync::Arc;
use tracing::debug;

/// Brand (suggestion) features from iD presets JSON, split per country.
///
/// `presets.json` holds the features that are not country specific,
/// `presets-DE.json`, `presets-US-NY.json` etc. the ones for a country or
/// subdivision. Every file is optional and loaded on first use.
pub struct IdBrandFeatureCollection {
    source: Box<dyn ContentSource>,
    by_country: LazyCache<Option<String>, Arc<FeatureMap>>,
    merged: LazyCache<Vec<Option<String>>, Arc<FeatureMap>>,
}

impl IdBrandFeatureCollection {
    /// Loads the global brand file right away so a broken one is reported
    /// on construction.
    pub fn new(source: impl ContentSource + 'static) -> Result<Self> {
        let collection = Self {
            source: Box::new(source),
            by_country: LazyCache::new(),
            merged: LazyCache::new(),
        };
        collection.country_features(&None)?;
        Ok(collection)
    }

    fn country_features(&self, country_code: &Option<String>) -> Result<Arc<FeatureMap>> {
        self.by_country.get_or_try_init(country_code, |cc| {
            let name = loader::country_presets_filename(cc.as_deref());
            if !self.source.exists(&name) {
                return Ok(Arc::new(FeatureMap::default()));
            }
            let features: FeatureMap = loader::load_presets(self.source.as_ref(), &name, true)?
                .into_iter()
                .map(Feature::from)
                .collect();
            debug!(file = %name, features = features.len(), "loaded brand presets");
            Ok(Arc::new(features))
        })
    }
}

impl PerCountryFeatureCollection for IdBrandFeatureCollection {
    fn get_all(&self, country_codes: &[Option<String>]) -> Result<Vec<Feature>> {
        let merged = self.merged.get_or_try_init(&country_codes.to_vec(), |codes| {
            let mut out = FeatureMap::default();
            for cc in codes {
                out.extend(self.country_features(cc)?.features().iter().cloned());
            }
            Ok(Arc::new(out))
        })?;
        Ok(merged.features().to_vec())
    }

    fn get(&self, id: &str, country_codes: &[Option<String>]) -> Result<Option<Feature>> {
        for cc in country_codes {
            if let Some(feature) = self.country_features(cc)?.get(id) {
                return Ok(Some(feature.clone()));
            }
        }
        Ok(None)
    }
}
