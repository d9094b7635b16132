// crates/featuredict-core/src/dictionary/query.rs

//! Options of the three lookups. Every field has a documented default, so
//! `IdQuery::default()` & co. are valid queries on their own.

use crate::locale::Locale;
use crate::model::GeometryType;

/// Default number of results of a term search.
pub const DEFAULT_TERM_LIMIT: usize = 50;

/// Options of [`FeatureDictionary::get_by_id`](super::FeatureDictionary::get_by_id).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdQuery {
    /// Fallback chain of locales, highest priority first; `None` entries
    /// stand for unlocalized features.
    /// Default: `[<dictionary default locale>, None]`.
    pub locales: Option<Vec<Option<Locale>>>,
    /// ISO 3166-1 alpha-2 (`"US"`) or ISO 3166-2 (`"US-NY"`) code of the
    /// place. Default: none, i.e. only brand features that are not country
    /// specific are found.
    pub country_code: Option<String>,
}

impl IdQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locales(mut self, locales: Vec<Option<Locale>>) -> Self {
        self.locales = Some(locales);
        self
    }

    pub fn in_country(mut self, country_code: &str) -> Self {
        self.country_code = Some(country_code.to_owned());
        self
    }
}

/// Options of [`FeatureDictionary::find_by_tags`](super::FeatureDictionary::find_by_tags).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagsQuery {
    /// Only features applicable to this geometry. Default: any.
    pub geometry: Option<GeometryType>,
    /// Default: `[<dictionary default locale>, None]`.
    pub locales: Option<Vec<Option<Locale>>>,
    /// Default: none, i.e. country specific features are excluded.
    pub country_code: Option<String>,
    /// `Some(true)`: only brand suggestions, `Some(false)`: no suggestions,
    /// `None` (default): both.
    pub suggestion: Option<bool>,
}

impl TagsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_geometry(mut self, geometry: GeometryType) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn locales(mut self, locales: Vec<Option<Locale>>) -> Self {
        self.locales = Some(locales);
        self
    }

    pub fn in_country(mut self, country_code: &str) -> Self {
        self.country_code = Some(country_code.to_owned());
        self
    }

    pub fn suggestion(mut self, suggestion: Option<bool>) -> Self {
        self.suggestion = suggestion;
        self
    }
}

/// Options of [`FeatureDictionary::find_by_term`](super::FeatureDictionary::find_by_term).
#[derive(Clone, Debug, PartialEq)]
pub struct TermQuery {
    /// Only features applicable to this geometry. Default: any.
    pub geometry: Option<GeometryType>,
    /// Default: `[<dictionary default locale>]`, i.e. unlocalized
    /// features are not searched.
    pub locales: Option<Vec<Option<Locale>>>,
    /// Default: none, i.e. country specific features are excluded.
    pub country_code: Option<String>,
    /// `Some(true)`: only brand suggestions, `Some(false)`: no suggestions,
    /// `None` (default): both.
    pub suggestion: Option<bool>,
    /// Maximum number of results, `None` (or `Some(0)`) for unlimited.
    /// Default: [`DEFAULT_TERM_LIMIT`].
    pub limit: Option<usize>,
}

impl Default for TermQuery {
    fn default() -> Self {
        Self {
            geometry: None,
            locales: None,
            country_code: None,
            suggestion: None,
            limit: Some(DEFAULT_TERM_LIMIT),
        }
    }
}

impl TermQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_geometry(mut self, geometry: GeometryType) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn locales(mut self, locales: Vec<Option<Locale>>) -> Self {
        self.locales = Some(locales);
        self
    }

    pub fn in_country(mut self, country_code: &str) -> Self {
        self.country_code = Some(country_code.to_owned());
        self
    }

    pub fn suggestion(mut self, suggestion: Option<bool>) -> Self {
        self.suggestion = suggestion;
        self
    }

    /// `limit <= 0` means unlimited.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = usize::try_from(limit).ok().filter(|&l| l > 0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_defaults() {
        let q = TermQuery::default();
        assert_eq!(q.limit, Some(50));
        assert_eq!(q.suggestion, None);
        assert_eq!(q.locales, None);
    }

    #[test]
    fn non_positive_limit_is_unlimited() {
        assert_eq!(TermQuery::new().limit(-1).limit, None);
        assert_eq!(TermQuery::new().limit(0).limit, None);
        assert_eq!(TermQuery::new().limit(3).limit, Some(3));
    }
}
