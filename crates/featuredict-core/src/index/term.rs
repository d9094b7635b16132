// crates/featuredict-core/src/index/term.rs
use super::PrefixIndex;
use crate::model::Feature;
use std::collections::BTreeSet;

/// Prefix search over strings extracted from each feature.
///
/// The extractor decides what is searchable (names, words of names, terms,
/// tag values); it is expected to return canonical strings and nothing for
/// features that are not searchable.
#[derive(Clone, Debug)]
pub struct TermIndex {
    features: Vec<Feature>,
    index: PrefixIndex<usize>,
}

impl TermIndex {
    pub fn new<F>(features: Vec<Feature>, extract: F) -> Self
    where
        F: Fn(&Feature) -> Vec<String>,
    {
        let entries: Vec<(String, usize)> = features
            .iter()
            .enumerate()
            .flat_map(|(i, f)| extract(f).into_iter().map(move |term| (term, i)))
            .collect();
        Self {
            index: PrefixIndex::new(entries),
            features,
        }
    }

    /// Features with at least one extracted string starting with
    /// `canonical_query`, each once, in snapshot order.
    pub fn get_all(&self, canonical_query: &str) -> Vec<Feature> {
        let hits: BTreeSet<usize> = self.index.get_all(canonical_query).into_iter().copied().collect();
        hits.into_iter().map(|i| self.features[i].clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
