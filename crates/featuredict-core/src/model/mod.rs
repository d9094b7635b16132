// crates/featuredict-core/src/model/mod.rs
pub mod convert;
pub mod feature;
pub mod geometry;

pub use feature::{BaseFeature, Feature, LocalizedFeature, Tags, WILDCARD};
pub use geometry::GeometryType;

use std::collections::HashMap;

/// Insertion-ordered `id -> Feature` map.
///
/// Inserting an id that is already present replaces the feature but keeps
/// the position of the first insertion, so iteration order stays the
/// catalog order no matter how many overlays were merged in.
#[derive(Clone, Debug, Default)]
pub struct FeatureMap {
    features: Vec<Feature>,
    positions: HashMap<String, usize>,
}

impl FeatureMap {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            features: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, feature: Feature) {
        match self.positions.get(feature.id()) {
            Some(&i) => self.features[i] = feature,
            None => {
                self.positions.insert(feature.id().to_owned(), self.features.len());
                self.features.push(feature);
            }
        }
    }

    pub fn extend<I: IntoIterator<Item = Feature>>(&mut self, features: I) {
        for feature in features {
            self.insert(feature);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Feature> {
        self.positions.get(id).map(|&i| &self.features[i])
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl FromIterator<Feature> for FeatureMap {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut map = FeatureMap::default();
        map.extend(iter);
        map
    }
}
