// crates/featuredict-core/src/collection/localized.rs
use crate::cache::LazyCache;
use crate::error::Result;
use crate::loader::{self, PRESETS_FILE};
use crate::locale::Locale;
use crate::model::{Feature, FeatureMap};
use crate::traits::{ContentSource, LocalizedFeatureCollection};
use std::sync::Arc;
use tracing::{debug, info};

/// Localized feature collection backed by iD presets JSON.
///
/// The source must contain `presets.json` with all features. Translations
/// are looked up next to it as `de.json`, `pt-BR.json`, `sr-Latn.json`, ...
/// and loaded on first use.
pub struct IdLocalizedFeatureCollection {
    source: Box<dyn ContentSource>,
    base: FeatureMap,
    /// Single overlay file per locale component (`de`, `de-AT`, ...).
    translations: LazyCache<Locale, Arc<FeatureMap>>,
    /// Merged result per fallback chain.
    merged: LazyCache<Vec<Option<Locale>>, Arc<FeatureMap>>,
}

impl IdLocalizedFeatureCollection {
    /// Loads the base catalog. Fails if `presets.json` is missing or broken.
    pub fn new(source: impl ContentSource + 'static) -> Result<Self> {
        let base: FeatureMap = loader::load_presets(&source, PRESETS_FILE, false)?
            .into_iter()
            .map(Feature::from)
            .collect();
        info!(features = base.len(), "loaded presets catalog");

        Ok(Self {
            source: Box::new(source),
            base,
            translations: LazyCache::new(),
            merged: LazyCache::new(),
        })
    }

    /// The unlocalized catalog.
    pub fn base_features(&self) -> &FeatureMap {
        &self.base
    }

    fn merged(&self, locales: &[Option<Locale>]) -> Result<Arc<FeatureMap>> {
        self.merged
            .get_or_try_init(&locales.to_vec(), |locales| self.merge(locales))
    }

    /// Walk the chain from lowest to highest priority so that higher
    /// priority entries overwrite lower ones.
    fn merge(&self, locales: &[Option<Locale>]) -> Result<Arc<FeatureMap>> {
        let mut out = FeatureMap::with_capacity(self.base.len());
        for locale in locales.iter().rev() {
            match locale {
                Some(locale) => {
                    for component in locale.components() {
                        let overlay = self.translation(&component)?;
                        out.extend(overlay.features().iter().cloned());
                    }
                }
                None => out.extend(self.base.features().iter().cloned()),
            }
        }
        debug!(?locales, features = out.len(), "merged localized features");
        Ok(Arc::new(out))
    }

    fn translation(&self, locale: &Locale) -> Result<Arc<FeatureMap>> {
        self.translations.get_or_try_init(locale, |locale| {
            let overlay = loader::load_translations(self.source.as_ref(), locale, &self.base)?;
            debug!(locale = %locale, features = overlay.len(), "loaded translation");
            Ok(Arc::new(overlay))
        })
    }
}

impl LocalizedFeatureCollection for IdLocalizedFeatureCollection {
    fn get_all(&self, locales: &[Option<Locale>]) -> Result<Vec<Feature>> {
        Ok(self.merged(locales)?.features().to_vec())
    }

    fn get(&self, id: &str, locales: &[Option<Locale>]) -> Result<Option<Feature>> {
        Ok(self.merged(locales)?.get(id).cloned())
    }
}
