// crates/featuredict-core/src/model/feature.rs
use super::GeometryType;
use crate::locale::Locale;
use crate::text::canonicalize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Tag map of a feature. A value of `"*"` means "any value".
pub type Tags = BTreeMap<String, String>;

/// Tag value that matches any value of its key.
pub const WILDCARD: &str = "*";

/// A feature as defined in the base (unlocalized) catalog.
///
/// Canonical names and terms are derived once on construction; use the
/// `with_*` setters to build one by hand.
#[derive(Clone, Debug)]
pub struct BaseFeature {
    pub id: String,
    pub tags: Tags,
    pub geometry: Vec<GeometryType>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub include_country_codes: Vec<String>,
    pub exclude_country_codes: Vec<String>,
    pub searchable: bool,
    pub match_score: f64,
    pub add_tags: Tags,
    pub remove_tags: Tags,
    /// Set for brand features loaded from a per-country collection.
    pub is_suggestion: bool,
    /// Keys of `tags` in catalog order.
    tag_order: Vec<String>,
    names: Vec<String>,
    terms: Vec<String>,
    canonical_names: Vec<String>,
    canonical_terms: Vec<String>,
}

impl BaseFeature {
    /// A searchable feature with `matchScore` 1.0 and no country restriction.
    /// `add_tags` and `remove_tags` default to `tags`.
    pub fn new(id: &str, tags: Tags, geometry: Vec<GeometryType>, names: Vec<String>) -> Self {
        Self {
            id: id.to_owned(),
            add_tags: tags.clone(),
            remove_tags: tags.clone(),
            tag_order: tags.keys().cloned().collect(),
            tags,
            geometry,
            icon: None,
            image_url: None,
            include_country_codes: Vec::new(),
            exclude_country_codes: Vec::new(),
            searchable: true,
            match_score: 1.0,
            is_suggestion: false,
            canonical_names: canonicalize_all(&names),
            names,
            terms: Vec::new(),
            canonical_terms: Vec::new(),
        }
    }

    pub fn with_terms(mut self, terms: Vec<String>) -> Self {
        self.canonical_terms = canonicalize_all(&terms);
        self.terms = terms;
        self
    }

    pub fn with_countries(mut self, include: Vec<String>, exclude: Vec<String>) -> Self {
        self.include_country_codes = include;
        self.exclude_country_codes = exclude;
        self
    }

    /// Order in which `tags` were listed in the catalog.
    pub fn with_tag_order(mut self, keys: Vec<String>) -> Self {
        self.tag_order = keys;
        self
    }

    /// `tags` in catalog order. Keys missing from the recorded order (added
    /// to `tags` afterwards) follow in key order.
    pub fn ordered_tags(&self) -> Vec<(&str, &str)> {
        let listed = self
            .tag_order
            .iter()
            .filter_map(|k| self.tags.get_key_value(k));
        let rest = self
            .tags
            .iter()
            .filter(|(k, _)| !self.tag_order.contains(k));
        listed
            .chain(rest)
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    pub fn with_add_tags(mut self, add_tags: Tags) -> Self {
        self.add_tags = add_tags;
        self
    }

    pub fn with_match_score(mut self, match_score: f64) -> Self {
        self.match_score = match_score;
        self
    }

    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn with_suggestion(mut self, is_suggestion: bool) -> Self {
        self.is_suggestion = is_suggestion;
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn canonical_names(&self) -> &[String] {
        &self.canonical_names
    }

    pub fn canonical_terms(&self) -> &[String] {
        &self.canonical_terms
    }
}

/// The display strings of a [`BaseFeature`] in one locale.
#[derive(Clone, Debug)]
pub struct LocalizedFeature {
    base: Arc<BaseFeature>,
    locale: Locale,
    names: Vec<String>,
    terms: Vec<String>,
    canonical_names: Vec<String>,
    canonical_terms: Vec<String>,
}

impl LocalizedFeature {
    pub fn new(base: Arc<BaseFeature>, locale: Locale, names: Vec<String>, terms: Vec<String>) -> Self {
        Self {
            base,
            locale,
            canonical_names: canonicalize_all(&names),
            canonical_terms: canonicalize_all(&terms),
            names,
            terms,
        }
    }

    pub fn base(&self) -> &Arc<BaseFeature> {
        &self.base
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// A feature as returned by lookups: either the base record or a localized
/// overlay of it. Cloning is cheap.
///
/// Everything a translation cannot change (tags, geometry, country lists,
/// score, searchability) is always read from the base record.
#[derive(Clone, Debug)]
pub enum Feature {
    Base(Arc<BaseFeature>),
    Localized(Arc<LocalizedFeature>),
}

impl Feature {
    pub fn base(&self) -> &Arc<BaseFeature> {
        match self {
            Feature::Base(b) => b,
            Feature::Localized(l) => &l.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn tags(&self) -> &Tags {
        &self.base().tags
    }

    /// Defining tags in catalog order.
    pub fn ordered_tags(&self) -> Vec<(&str, &str)> {
        self.base().ordered_tags()
    }

    pub fn geometry(&self) -> &[GeometryType] {
        &self.base().geometry
    }

    /// Primary name, or `""` if the feature has none.
    pub fn name(&self) -> &str {
        self.names().first().map(String::as_str).unwrap_or("")
    }

    pub fn names(&self) -> &[String] {
        match self {
            Feature::Base(b) => &b.names,
            Feature::Localized(l) => &l.names,
        }
    }

    pub fn terms(&self) -> &[String] {
        match self {
            Feature::Base(b) => &b.terms,
            Feature::Localized(l) => &l.terms,
        }
    }

    pub fn canonical_names(&self) -> &[String] {
        match self {
            Feature::Base(b) => &b.canonical_names,
            Feature::Localized(l) => &l.canonical_names,
        }
    }

    pub fn canonical_terms(&self) -> &[String] {
        match self {
            Feature::Base(b) => &b.canonical_terms,
            Feature::Localized(l) => &l.canonical_terms,
        }
    }

    pub fn icon(&self) -> Option<&str> {
        self.base().icon.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.base().image_url.as_deref()
    }

    pub fn include_country_codes(&self) -> &[String] {
        &self.base().include_country_codes
    }

    pub fn exclude_country_codes(&self) -> &[String] {
        &self.base().exclude_country_codes
    }

    /// True if the feature is limited to (or excluded from) some countries.
    pub fn is_country_restricted(&self) -> bool {
        !self.include_country_codes().is_empty() || !self.exclude_country_codes().is_empty()
    }

    pub fn is_searchable(&self) -> bool {
        self.base().searchable
    }

    pub fn match_score(&self) -> f64 {
        self.base().match_score
    }

    pub fn add_tags(&self) -> &Tags {
        &self.base().add_tags
    }

    pub fn remove_tags(&self) -> &Tags {
        &self.base().remove_tags
    }

    pub fn is_suggestion(&self) -> bool {
        self.base().is_suggestion
    }

    /// Locale of the overlay this feature's strings came from, `None` for
    /// base features.
    pub fn locale(&self) -> Option<&Locale> {
        match self {
            Feature::Base(_) => None,
            Feature::Localized(l) => Some(&l.locale),
        }
    }

    /// `"amenity/fast_food/burger"` -> `Some("amenity/fast_food")`.
    pub fn parent_id(&self) -> Option<&str> {
        parent_id(self.id())
    }

    /// All ancestors of this feature's id, nearest first.
    pub fn ancestor_ids(&self) -> Vec<&str> {
        ancestor_ids(self.id())
    }
}

impl From<BaseFeature> for Feature {
    fn from(b: BaseFeature) -> Self {
        Feature::Base(Arc::new(b))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

pub fn parent_id(id: &str) -> Option<&str> {
    id.rfind('/').map(|i| &id[..i])
}

pub fn ancestor_ids(id: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut current = id;
    while let Some(parent) = parent_id(current) {
        out.push(parent);
        current = parent;
    }
    out
}

fn canonicalize_all(strings: &[String]) -> Vec<String> {
    strings.iter().map(|s| canonicalize(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> Tags {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn walks_ancestors() {
        assert_eq!(ancestor_ids("amenity/fast_food/burger"), vec!["amenity/fast_food", "amenity"]);
        assert!(ancestor_ids("amenity").is_empty());
    }

    #[test]
    fn localized_falls_through_to_base() {
        let base = Arc::new(
            BaseFeature::new(
                "shop/bakery",
                tags(&[("shop", "bakery")]),
                vec![GeometryType::Point],
                vec!["Bakery".into()],
            )
            .with_match_score(0.5),
        );
        let f = Feature::Localized(Arc::new(LocalizedFeature::new(
            base,
            Locale::new("de"),
            vec!["Bäckerei".into()],
            vec!["Brot".into()],
        )));

        assert_eq!(f.name(), "Bäckerei");
        assert_eq!(f.canonical_names(), ["backerei"]);
        assert_eq!(f.canonical_terms(), ["brot"]);
        assert_eq!(f.tags(), &tags(&[("shop", "bakery")]));
        assert_eq!(f.match_score(), 0.5);
        assert_eq!(f.locale(), Some(&Locale::new("de")));
    }

    #[test]
    fn ordered_tags_follow_recorded_order() {
        let mut b = BaseFeature::new(
            "shop/bakery/x",
            tags(&[("shop", "bakery"), ("brand", "X")]),
            vec![],
            vec![],
        )
        .with_tag_order(vec!["shop".into(), "brand".into()]);
        assert_eq!(b.ordered_tags(), [("shop", "bakery"), ("brand", "X")]);

        b.tags.insert("amenity".into(), "cafe".into());
        assert_eq!(
            Feature::from(b).ordered_tags(),
            [("shop", "bakery"), ("brand", "X"), ("amenity", "cafe")]
        );
    }

    #[test]
    fn add_tags_default_to_tags() {
        let b = BaseFeature::new("a/b", tags(&[("a", "b")]), vec![], vec![]);
        assert_eq!(b.add_tags, b.tags);
        assert_eq!(Feature::from(b).name(), "");
    }
}
