// crates/featuredict-core/src/dictionary/mod.rs

//! # Feature Dictionary
//!
//! Lookup of features by id, by a set of tags, or by a search term, with
//! lazily built and cached indices per locale chain and per country.

mod query;

pub use query::{IdQuery, TagsQuery, TermQuery, DEFAULT_TERM_LIMIT};

use crate::cache::LazyCache;
use crate::collection::{IdBrandFeatureCollection, IdLocalizedFeatureCollection};
use crate::country::{dissect_country_code, is_feature_matching};
use crate::error::Result;
use crate::index::{TagIndex, TermIndex};
use crate::loader::FileSystemSource;
use crate::locale::Locale;
use crate::model::{Feature, Tags, WILDCARD};
use crate::text::{canonicalize, name_words};
use crate::traits::{LocalizedFeatureCollection, PerCountryFeatureCollection};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

type LocaleKey = Vec<Option<Locale>>;
type CountryKey = Vec<Option<String>>;

pub struct FeatureDictionary {
    collection: Box<dyn LocalizedFeatureCollection>,
    brand_collection: Option<Box<dyn PerCountryFeatureCollection>>,
    default_locale: Locale,

    tags_indexes: LazyCache<LocaleKey, Arc<TagIndex>>,
    names_indexes: LazyCache<LocaleKey, Arc<TermIndex>>,
    terms_indexes: LazyCache<LocaleKey, Arc<TermIndex>>,
    tag_values_indexes: LazyCache<LocaleKey, Arc<TermIndex>>,
    brand_tags_indexes: LazyCache<CountryKey, Arc<TagIndex>>,
    brand_names_indexes: LazyCache<CountryKey, Arc<TermIndex>>,
}

impl FeatureDictionary {
    /// Create a dictionary over the given collections.
    ///
    /// The tags, names and terms indices of `default_locale` are built right
    /// away so the first query does not pay for them.
    pub fn new(
        collection: Box<dyn LocalizedFeatureCollection>,
        brand_collection: Option<Box<dyn PerCountryFeatureCollection>>,
        default_locale: Locale,
    ) -> Result<Self> {
        let dictionary = Self {
            collection,
            brand_collection,
            default_locale,
            tags_indexes: LazyCache::new(),
            names_indexes: LazyCache::new(),
            terms_indexes: LazyCache::new(),
            tag_values_indexes: LazyCache::new(),
            brand_tags_indexes: LazyCache::new(),
            brand_names_indexes: LazyCache::new(),
        };

        let localized = vec![Some(dictionary.default_locale.clone())];
        let with_unlocalized = vec![Some(dictionary.default_locale.clone()), None];
        dictionary.tags_index(&with_unlocalized)?;
        dictionary.names_index(&localized)?;
        dictionary.terms_index(&localized)?;
        Ok(dictionary)
    }

    /// Create a dictionary reading iD presets from `presets_dir` (with
    /// `presets.json` and translation files) and, optionally, brand presets
    /// from `brand_presets_dir`.
    pub fn create(
        presets_dir: impl AsRef<Path>,
        brand_presets_dir: Option<&Path>,
        default_locale: Locale,
    ) -> Result<Self> {
        let collection = IdLocalizedFeatureCollection::new(FileSystemSource::new(presets_dir))?;
        let brand_collection = match brand_presets_dir {
            Some(dir) => Some(Box::new(IdBrandFeatureCollection::new(FileSystemSource::new(dir))?)
                as Box<dyn PerCountryFeatureCollection>),
            None => None,
        };
        Self::new(Box::new(collection), brand_collection, default_locale)
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    // -----------------------------------------------------------------------
    // BY ID
    // -----------------------------------------------------------------------

    /// The feature with the given id, looked up among the localized presets
    /// first and then among the brand presets of the query's country.
    pub fn get_by_id(&self, id: &str, query: &IdQuery) -> Result<Option<Feature>> {
        let locales = self.locales_or_default(&query.locales, true);
        if let Some(feature) = self.collection.get(id, &locales)? {
            return Ok(Some(feature));
        }
        let Some(brands) = &self.brand_collection else {
            return Ok(None);
        };
        brands.get(id, &dissect_country_code(query.country_code.as_deref()))
    }

    // -----------------------------------------------------------------------
    // BY TAGS
    // -----------------------------------------------------------------------

    /// Features matching the given tags, most specific first.
    ///
    /// In rare cases a tag set matches several unrelated features (e.g.
    /// `shop=deli` + `amenity=cafe`), hence a list. When a feature and one
    /// of its ancestors both match (`amenity/fast_food/burger` and
    /// `amenity/fast_food`), only the descendant is returned.
    pub fn find_by_tags(&self, tags: &Tags, query: &TagsQuery) -> Result<Vec<Feature>> {
        if tags.is_empty() {
            return Ok(Vec::new());
        }
        let locales = self.locales_or_default(&query.locales, true);
        let country_code = query.country_code.as_deref();

        let mut found = Vec::new();
        if query.suggestion != Some(true) {
            found.extend(self.tags_index(&locales)?.get_all(tags));
        }
        if query.suggestion != Some(false) {
            let country_codes = dissect_country_code(country_code);
            found.extend(self.brand_tags_index(&country_codes)?.get_all(tags));
        }
        found.retain(|f| is_feature_matching(f, query.geometry, country_code));

        if found.len() > 1 {
            let ancestors: HashSet<String> = found
                .iter()
                .flat_map(|f| f.ancestor_ids())
                .map(str::to_owned)
                .collect();
            found.retain(|f| !ancestors.contains(f.id()));
        }

        let unlocalized_only = locales == [None];
        found.sort_by(|a, b| {
            // more matching tags first
            b.tags()
                .len()
                .cmp(&a.tags().len())
                .then_with(|| {
                    if unlocalized_only {
                        // not country specific first
                        (!b.is_country_restricted()).cmp(&!a.is_country_restricted())
                    } else {
                        Ordering::Equal
                    }
                })
                // more query tags also in addTags first (iD #7927)
                .then_with(|| matched_add_tags(b, tags).cmp(&matched_add_tags(a, tags)))
                .then_with(|| b.match_score().total_cmp(&a.match_score()))
        });
        Ok(found)
    }

    // -----------------------------------------------------------------------
    // BY TERM
    // -----------------------------------------------------------------------

    /// Features matching a search term, in blocks: name matches, brand name
    /// matches, term (keyword) matches, tag value matches.
    pub fn find_by_term(&self, search: &str, query: &TermQuery) -> Result<Vec<Feature>> {
        let locales = self.locales_or_default(&query.locales, false);
        let canonical = canonicalize(search);
        let country_code = query.country_code.as_deref();
        // Some(0) is as unlimited as None
        let limit = query.limit.filter(|&l| l > 0);
        let with_presets = query.suggestion != Some(true);
        let with_brands = query.suggestion != Some(false);

        let matching = |f: &Feature| is_feature_matching(f, query.geometry, country_code);
        let limit_reached = |result: &Vec<Feature>| limit.is_some_and(|l| result.len() >= l);
        let by_name = |a: &Feature, b: &Feature| compare_by_name(a, b, search, &canonical);

        let mut result: Vec<Feature> = Vec::new();

        if with_presets {
            let mut found = self.names_index(&locales)?.get_all(&canonical);
            found.retain(|f| matching(f));
            found.sort_by(by_name);
            result.extend(found);
            if limit_reached(&result) {
                return Ok(truncated(result, limit));
            }
        }

        if with_brands {
            let country_codes = dissect_country_code(country_code);
            let mut found = self.brand_names_index(&country_codes)?.get_all(&canonical);
            found.retain(|f| matching(f));
            found.sort_by(by_name);
            result.extend(found);
            if limit_reached(&result) {
                return Ok(truncated(result, limit));
            }
        }

        if with_presets {
            let mut found = self.terms_index(&locales)?.get_all(&canonical);
            let seen = ids_of(&result);
            found.retain(|f| matching(f) && !seen.contains(f.id()));
            found.sort_by(|a, b| b.match_score().total_cmp(&a.match_score()));
            result.extend(found);
            if limit_reached(&result) {
                return Ok(truncated(result, limit));
            }

            let mut found = self.tag_values_index(&locales)?.get_all(&canonical);
            let seen = ids_of(&result);
            found.retain(|f| matching(f) && !seen.contains(f.id()));
            result.extend(found);
        }

        Ok(truncated(result, limit))
    }

    // -----------------------------------------------------------------------
    // LAZILY BUILT INDICES
    // -----------------------------------------------------------------------

    fn tags_index(&self, locales: &[Option<Locale>]) -> Result<Arc<TagIndex>> {
        self.tags_indexes.get_or_try_init(&locales.to_vec(), |locales| {
            let features = self.collection.get_all(locales)?;
            debug!(?locales, features = features.len(), "built tags index");
            Ok(Arc::new(TagIndex::new(features)))
        })
    }

    fn names_index(&self, locales: &[Option<Locale>]) -> Result<Arc<TermIndex>> {
        self.term_index(&self.names_indexes, locales, "names", name_terms)
    }

    fn terms_index(&self, locales: &[Option<Locale>]) -> Result<Arc<TermIndex>> {
        self.term_index(&self.terms_indexes, locales, "terms", search_terms)
    }

    fn tag_values_index(&self, locales: &[Option<Locale>]) -> Result<Arc<TermIndex>> {
        self.term_index(&self.tag_values_indexes, locales, "tag values", tag_value_terms)
    }

    fn term_index(
        &self,
        cache: &LazyCache<LocaleKey, Arc<TermIndex>>,
        locales: &[Option<Locale>],
        kind: &'static str,
        extract: fn(&Feature) -> Vec<String>,
    ) -> Result<Arc<TermIndex>> {
        cache.get_or_try_init(&locales.to_vec(), |locales| {
            let features = self.collection.get_all(locales)?;
            debug!(kind, ?locales, features = features.len(), "built term index");
            Ok(Arc::new(TermIndex::new(features, extract)))
        })
    }

    fn brand_tags_index(&self, country_codes: &[Option<String>]) -> Result<Arc<TagIndex>> {
        self.brand_tags_indexes.get_or_try_init(&country_codes.to_vec(), |codes| {
            let features = self.brand_features(codes)?;
            debug!(?codes, features = features.len(), "built brand tags index");
            Ok(Arc::new(TagIndex::new(features)))
        })
    }

    fn brand_names_index(&self, country_codes: &[Option<String>]) -> Result<Arc<TermIndex>> {
        self.brand_names_indexes.get_or_try_init(&country_codes.to_vec(), |codes| {
            let features = self.brand_features(codes)?;
            debug!(?codes, features = features.len(), "built brand names index");
            Ok(Arc::new(TermIndex::new(features, brand_name_terms)))
        })
    }

    fn brand_features(&self, country_codes: &[Option<String>]) -> Result<Vec<Feature>> {
        match &self.brand_collection {
            Some(brands) => brands.get_all(country_codes),
            None => Ok(Vec::new()),
        }
    }

    fn locales_or_default(
        &self,
        locales: &Option<Vec<Option<Locale>>>,
        with_unlocalized: bool,
    ) -> Vec<Option<Locale>> {
        match locales {
            Some(locales) => locales.clone(),
            None if with_unlocalized => vec![Some(self.default_locale.clone()), None],
            None => vec![Some(self.default_locale.clone())],
        }
    }
}

// ---------------------------------------------------------------------------
// TERM EXTRACTORS
// ---------------------------------------------------------------------------

/// Canonical names plus each word of multi-word names.
fn name_terms(feature: &Feature) -> Vec<String> {
    if !feature.is_searchable() {
        return Vec::new();
    }
    let names = feature.canonical_names();
    let mut out = names.to_vec();
    for name in names.iter().filter(|n| n.contains(' ')) {
        out.extend(name_words(name));
    }
    out
}

fn search_terms(feature: &Feature) -> Vec<String> {
    if !feature.is_searchable() {
        return Vec::new();
    }
    feature.canonical_terms().to_vec()
}

fn tag_value_terms(feature: &Feature) -> Vec<String> {
    if !feature.is_searchable() {
        return Vec::new();
    }
    feature
        .ordered_tags()
        .into_iter()
        .filter(|(_, v)| *v != WILDCARD)
        .map(|(_, v)| canonicalize(v))
        .collect()
}

fn brand_name_terms(feature: &Feature) -> Vec<String> {
    if !feature.is_searchable() {
        return Vec::new();
    }
    feature.canonical_names().to_vec()
}

// ---------------------------------------------------------------------------
// RANKING HELPERS
// ---------------------------------------------------------------------------

/// Order of name matches: exact name, exact canonical name, canonical name
/// starting with the search, higher match score, shorter name.
fn compare_by_name(a: &Feature, b: &Feature, search: &str, canonical: &str) -> Ordering {
    let exact = |f: &Feature| f.names().iter().any(|n| n == search);
    let canonical_exact = |f: &Feature| f.canonical_names().iter().any(|n| n == canonical);
    let starts_with = |f: &Feature| f.canonical_names().iter().any(|n| n.starts_with(canonical));

    exact(b)
        .cmp(&exact(a))
        .then_with(|| canonical_exact(b).cmp(&canonical_exact(a)))
        .then_with(|| starts_with(b).cmp(&starts_with(a)))
        .then_with(|| b.match_score().total_cmp(&a.match_score()))
        .then_with(|| a.name().chars().count().cmp(&b.name().chars().count()))
}

/// How many of the query's tags the feature would also add.
fn matched_add_tags(feature: &Feature, tags: &Tags) -> usize {
    tags.iter()
        .filter(|(k, v)| feature.add_tags().get(*k) == Some(*v))
        .count()
}

fn ids_of(features: &[Feature]) -> HashSet<String> {
    features.iter().map(|f| f.id().to_owned()).collect()
}

fn truncated(mut features: Vec<Feature>, limit: Option<usize>) -> Vec<Feature> {
    if let Some(limit) = limit.filter(|&l| l > 0) {
        features.truncate(limit);
    }
    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BaseFeature, GeometryType};

    fn feature(id: &str, tags: &[(&str, &str)], names: &[&str]) -> BaseFeature {
        let tags = tags.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        let names = names.iter().map(|n| n.to_string()).collect();
        BaseFeature::new(id, tags, vec![GeometryType::Point], names)
    }

    #[test]
    fn name_terms_include_words_of_multi_word_names() {
        let f = Feature::from(feature("a", &[("shop", "x")], &["Fast Food (Burger)"]));
        let terms = name_terms(&f);
        assert!(terms.contains(&"fast food (burger)".to_string()));
        assert!(terms.contains(&"food".to_string()));
        assert!(terms.contains(&"burger".to_string()));
    }

    #[test]
    fn unsearchable_features_extract_nothing() {
        let f = Feature::from(feature("a", &[("shop", "x")], &["Bakery"]).with_searchable(false));
        assert!(name_terms(&f).is_empty());
        assert!(tag_value_terms(&f).is_empty());
        assert!(brand_name_terms(&f).is_empty());
    }

    #[test]
    fn tag_values_skip_wildcard() {
        let f = Feature::from(feature("a", &[("shop", "*"), ("amenity", "Café")], &["x"]));
        assert_eq!(tag_value_terms(&f), vec!["cafe".to_string()]);
    }

    #[test]
    fn name_ordering() {
        let exact = Feature::from(feature("a", &[("k", "v")], &["Bar"]));
        let prefix = Feature::from(feature("b", &[("k", "v")], &["Barber"]));
        let word = Feature::from(feature("c", &[("k", "v")], &["Cocktail Bar"]));

        let mut found = vec![word.clone(), prefix.clone(), exact.clone()];
        found.sort_by(|a, b| compare_by_name(a, b, "Bar", "bar"));
        let ids: Vec<&str> = found.iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn shorter_name_wins_on_tie() {
        let long = Feature::from(feature("a", &[("k", "v")], &["Barbecue"]));
        let short = Feature::from(feature("b", &[("k", "v")], &["Barber"]));
        assert_eq!(compare_by_name(&short, &long, "bar", "bar"), Ordering::Less);
    }

    #[test]
    fn add_tags_matching() {
        let add_tags: Tags = [
            ("amenity".to_string(), "cafe".to_string()),
            ("cuisine".to_string(), "coffee".to_string()),
        ]
        .into();
        let f = Feature::from(feature("a", &[("amenity", "cafe")], &["x"]).with_add_tags(add_tags));
        let query: Tags = [
            ("amenity".to_string(), "cafe".to_string()),
            ("cuisine".to_string(), "coffee".to_string()),
            ("name".to_string(), "X".to_string()),
        ]
        .into();
        assert_eq!(matched_add_tags(&f, &query), 2);
    }

    #[test]
    fn truncation() {
        let fs: Vec<Feature> = (0..5)
            .map(|i| Feature::from(feature(&i.to_string(), &[("k", "v")], &["x"])))
            .collect();
        assert_eq!(truncated(fs.clone(), Some(2)).len(), 2);
        assert_eq!(truncated(fs.clone(), Some(0)).len(), 5);
        assert_eq!(truncated(fs, None).len(), 5);
    }
}
