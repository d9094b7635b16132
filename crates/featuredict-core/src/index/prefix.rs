// crates/featuredict-core/src/index/prefix.rs
use std::collections::HashMap;

/// Finds all items whose key starts with a given prefix.
///
/// Entries are bucketed by the first character of their key; each bucket is
/// sorted by key, so all keys sharing a prefix form one contiguous run found
/// by binary search. Keys are compared as-is, callers canonicalize before
/// inserting and querying. The same key may map to many items.
///
/// # Examples
/// ```rust
/// use featuredict_core::index::PrefixIndex;
///
/// let index = PrefixIndex::new(vec![
///     ("anything".to_string(), 1),
///     ("anybody".to_string(), 2),
///     ("more".to_string(), 3),
/// ]);
/// let mut hits: Vec<i32> = index.get_all("any").into_iter().copied().collect();
/// hits.sort();
/// assert_eq!(hits, [1, 2]);
/// assert!(index.get_all("").is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct PrefixIndex<T> {
    buckets: HashMap<char, Vec<(String, T)>>,
}

impl<T> PrefixIndex<T> {
    pub fn new<I: IntoIterator<Item = (String, T)>>(entries: I) -> Self {
        let mut buckets: HashMap<char, Vec<(String, T)>> = HashMap::new();
        for (key, item) in entries {
            if let Some(first) = key.chars().next() {
                buckets.entry(first).or_default().push((key, item));
            }
        }
        for bucket in buckets.values_mut() {
            bucket.sort_by(|a, b| a.0.cmp(&b.0));
        }
        Self { buckets }
    }

    /// Every item whose key starts with `prefix`. An empty prefix matches
    /// nothing. Items are returned in key order.
    pub fn get_all(&self, prefix: &str) -> Vec<&T> {
        let Some(first) = prefix.chars().next() else {
            return Vec::new();
        };
        let Some(bucket) = self.buckets.get(&first) else {
            return Vec::new();
        };
        let start = bucket.partition_point(|(key, _)| key.as_str() < prefix);
        bucket[start..]
            .iter()
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(_, item)| item)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
