// crates/featuredict-core/src/country.rs

//! ISO 3166 country code handling: fallback dissection and the
//! include/exclude applicability filter.

use crate::model::{Feature, GeometryType};
use once_cell::sync::Lazy;
use regex::Regex;

/// ISO 3166-1 alpha-2, optionally followed by an ISO 3166-2 subdivision.
static COUNTRY_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]{2})(?:-([A-Z0-9]{1,3}))?$").expect("valid regex"));

/// True for `"US"` and `"US-NY"`, false for `"USA"`, `"us"`, `"150"`.
pub fn is_valid_country_code(code: &str) -> bool {
    COUNTRY_CODE.is_match(code)
}

/// Country-code fallback chain, least specific first.
///
/// Always starts with `None` (the global / unrestricted entry); a valid code
/// adds its alpha-2 part and, for subdivisions, the full code. Malformed
/// codes yield only `[None]`.
///
/// ```rust
/// use featuredict_core::country::dissect_country_code;
///
/// assert_eq!(
///     dissect_country_code(Some("US-NY")),
///     vec![None, Some("US".to_string()), Some("US-NY".to_string())]
/// );
/// assert_eq!(dissect_country_code(Some("usa")), vec![None]);
/// ```
pub fn dissect_country_code(country_code: Option<&str>) -> Vec<Option<String>> {
    let mut out = vec![None];
    let Some(caps) = country_code.and_then(|cc| COUNTRY_CODE.captures(cc)) else {
        return out;
    };
    out.push(Some(caps[1].to_owned()));
    if caps.get(2).is_some() {
        out.push(Some(caps[0].to_owned()));
    }
    out
}

/// `query` is the code of the place being looked at, `feature_code` one
/// entry of a feature's include/exclude list. A subdivision query also
/// matches its country.
pub fn matches_country_code(query: &str, feature_code: &str) -> bool {
    query == feature_code || query.get(..2) == Some(feature_code)
}

pub fn matches_any_country_code(query: &str, feature_codes: &[String]) -> bool {
    feature_codes.iter().any(|fc| matches_country_code(query, fc))
}

/// Whether `feature` applies to the given geometry and country.
///
/// A feature with a country restriction never matches when no country or
/// a malformed one is given.
pub fn is_feature_matching(
    feature: &Feature,
    geometry: Option<GeometryType>,
    country_code: Option<&str>,
) -> bool {
    if let Some(g) = geometry {
        if !feature.geometry().contains(&g) {
            return false;
        }
    }
    if !feature.is_country_restricted() {
        return true;
    }
    let Some(cc) = country_code.filter(|cc| is_valid_country_code(cc)) else {
        return false;
    };
    let include = feature.include_country_codes();
    if !include.is_empty() && !matches_any_country_code(cc, include) {
        return false;
    }
    !matches_any_country_code(cc, feature.exclude_country_codes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BaseFeature, Tags};

    fn restricted(include: &[&str], exclude: &[&str]) -> Feature {
        BaseFeature::new("x", Tags::new(), vec![GeometryType::Point], vec![])
            .with_countries(
                include.iter().map(|s| s.to_string()).collect(),
                exclude.iter().map(|s| s.to_string()).collect(),
            )
            .into()
    }

    #[test]
    fn dissects_plain_and_subdivision_codes() {
        assert_eq!(dissect_country_code(None), vec![None]);
        assert_eq!(dissect_country_code(Some("DE")), vec![None, Some("DE".into())]);
        assert_eq!(
            dissect_country_code(Some("US-NY")),
            vec![None, Some("US".into()), Some("US-NY".into())]
        );
    }

    #[test]
    fn malformed_codes_only_yield_global() {
        for cc in ["", "U", "usa", "USA", "US-ABCD", "1A"] {
            assert_eq!(dissect_country_code(Some(cc)), vec![None], "{cc}");
        }
    }

    #[test]
    fn include_matches_subdivision() {
        let f = restricted(&["US"], &[]);
        assert!(is_feature_matching(&f, None, Some("US-NY")));
        assert!(is_feature_matching(&f, None, Some("US")));
        assert!(!is_feature_matching(&f, None, Some("DE")));
        assert!(!is_feature_matching(&f, None, None));
    }

    #[test]
    fn exclude_matches_subdivision() {
        let f = restricted(&[], &["US"]);
        assert!(!is_feature_matching(&f, None, Some("US-NY")));
        assert!(is_feature_matching(&f, None, Some("DE")));
    }

    #[test]
    fn malformed_query_codes_only_match_unrestricted() {
        let include = restricted(&["GB"], &[]);
        let exclude = restricted(&[], &["FR"]);
        let unrestricted = restricted(&[], &[]);
        for cc in ["GBR", "GB-LONDON", "gb", ""] {
            assert!(!is_feature_matching(&include, None, Some(cc)), "{cc}");
            assert!(!is_feature_matching(&exclude, None, Some(cc)), "{cc}");
            assert!(is_feature_matching(&unrestricted, None, Some(cc)), "{cc}");
        }
    }

    #[test]
    fn subdivision_feature_does_not_match_whole_country() {
        let f = restricted(&["US-NY"], &[]);
        assert!(!is_feature_matching(&f, None, Some("US")));
        assert!(is_feature_matching(&f, None, Some("US-NY")));
    }

    #[test]
    fn geometry_filter() {
        let f = restricted(&[], &[]);
        assert!(is_feature_matching(&f, Some(GeometryType::Point), None));
        assert!(!is_feature_matching(&f, Some(GeometryType::Area), None));
    }

    #[test]
    fn short_query_codes_do_not_panic() {
        assert!(!matches_country_code("U", "US"));
    }
}
