// crates/featuredict-core/src/index/tags.rs
use crate::model::{Feature, Tags, WILDCARD};
use std::collections::{BTreeSet, HashMap};

/// Finds the features whose defining tags are all present in a tag set.
///
/// Features are bucketed by each of their `(key, value)` pairs; wildcard
/// values are bucketed under `(key, "*")`. A query only looks at the buckets
/// of its own tags and then checks each candidate in full.
#[derive(Clone, Debug)]
pub struct TagIndex {
    features: Vec<Feature>,
    buckets: HashMap<String, HashMap<String, Vec<usize>>>,
}

impl TagIndex {
    pub fn new(features: Vec<Feature>) -> Self {
        let mut buckets: HashMap<String, HashMap<String, Vec<usize>>> = HashMap::new();
        for (i, feature) in features.iter().enumerate() {
            for (key, value) in feature.tags() {
                buckets
                    .entry(key.clone())
                    .or_default()
                    .entry(value.clone())
                    .or_default()
                    .push(i);
            }
        }
        Self { features, buckets }
    }

    /// Features whose every tag is satisfied by `tags`, in snapshot order.
    /// Tags of the query the feature does not mention are ignored.
    pub fn get_all(&self, tags: &Tags) -> Vec<Feature> {
        let mut candidates = BTreeSet::new();
        for (key, value) in tags {
            let Some(values) = self.buckets.get(key) else {
                continue;
            };
            for v in [value.as_str(), WILDCARD] {
                if let Some(bucket) = values.get(v) {
                    candidates.extend(bucket.iter().copied());
                }
            }
        }
        candidates
            .into_iter()
            .map(|i| &self.features[i])
            .filter(|f| is_subset(f.tags(), tags))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Every `(key, value)` of `feature_tags` is in `tags`, where a wildcard
/// value only needs the key to be present. An empty `feature_tags` never
/// matches.
pub fn is_subset(feature_tags: &Tags, tags: &Tags) -> bool {
    !feature_tags.is_empty()
        && feature_tags.iter().all(|(key, value)| match tags.get(key) {
            Some(v) => value == WILDCARD || v == value,
            None => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BaseFeature;

    fn tags(pairs: &[(&str, &str)]) -> Tags {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn feature(id: &str, t: &[(&str, &str)]) -> Feature {
        BaseFeature::new(id, tags(t), vec![], vec![]).into()
    }

    fn ids(features: &[Feature]) -> Vec<&str> {
        features.iter().map(Feature::id).collect()
    }

    fn index() -> TagIndex {
        TagIndex::new(vec![
            feature("amenity", &[("amenity", "*")]),
            feature("amenity/fast_food", &[("amenity", "fast_food")]),
            feature("amenity/fast_food/burger", &[("amenity", "fast_food"), ("cuisine", "burger")]),
            feature("shop/bakery", &[("shop", "bakery")]),
            feature("empty", &[]),
        ])
    }

    #[test]
    fn matches_subsets_and_wildcards() {
        let found = index().get_all(&tags(&[("amenity", "fast_food"), ("name", "Foo")]));
        assert_eq!(ids(&found), ["amenity", "amenity/fast_food"]);
    }

    #[test]
    fn needs_all_feature_tags() {
        let found = index().get_all(&tags(&[("amenity", "fast_food"), ("cuisine", "burger")]));
        assert_eq!(ids(&found), ["amenity", "amenity/fast_food", "amenity/fast_food/burger"]);

        let found = index().get_all(&tags(&[("cuisine", "burger")]));
        assert!(found.is_empty());
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert!(index().get_all(&Tags::new()).is_empty());
    }

    #[test]
    fn subset_check() {
        assert!(is_subset(&tags(&[("a", "*")]), &tags(&[("a", "x")])));
        assert!(!is_subset(&tags(&[("a", "y")]), &tags(&[("a", "x")])));
        assert!(!is_subset(&Tags::new(), &tags(&[("a", "x")])));
    }
}
