// crates/featuredict-core/src/model/convert.rs
use super::{BaseFeature, Feature, FeatureMap, GeometryType, LocalizedFeature, Tags};
use crate::country::is_valid_country_code;
use crate::locale::Locale;
use crate::raw::{PresetRaw, PresetTranslationRaw, PresetsRaw, TranslationsRaw};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// `locationSet` entry standing for the whole world.
const WORLD: &str = "001";

/// Convert a parsed `presets.json` into base features, in document order.
///
/// Presets without tags (generic point/line/area fallbacks) and presets with
/// a `locationSet` that cannot be expressed as country codes are skipped.
pub fn from_raw(raw: PresetsRaw, is_suggestion: bool) -> Vec<BaseFeature> {
    raw.0
        .into_iter()
        .filter_map(|(id, preset)| feature_from_raw(&id, preset, is_suggestion))
        .collect()
}

fn feature_from_raw(id: &str, p: PresetRaw, is_suggestion: bool) -> Option<BaseFeature> {
    if p.tags.0.is_empty() {
        return None;
    }

    let (include, exclude) = match &p.location_set {
        Some(ls) => match (parse_country_codes(&ls.include), parse_country_codes(&ls.exclude)) {
            (Some(include), Some(exclude)) => (include, exclude),
            _ => {
                debug!(id, "skipping preset with unsupported locationSet");
                return None;
            }
        },
        None => (Vec::new(), Vec::new()),
    };

    // Unknown geometry names are dropped rather than failing the whole file.
    let geometry: Vec<GeometryType> = p.geometry.iter().filter_map(|g| g.parse().ok()).collect();

    let mut names = Vec::with_capacity(p.aliases.len() + 1);
    names.push(p.name.unwrap_or_default());
    names.extend(p.aliases);

    let mut tag_order: Vec<String> = Vec::with_capacity(p.tags.0.len());
    let mut tags = Tags::new();
    for (key, value) in p.tags.0 {
        if !tag_order.contains(&key) {
            tag_order.push(key.clone());
        }
        tags.insert(key, value);
    }

    let add_tags: Tags = p.add_tags.unwrap_or_else(|| tags.clone());
    let remove_tags: Tags = p.remove_tags.unwrap_or_else(|| add_tags.clone());

    let mut feature = BaseFeature::new(id, tags, geometry, names)
        .with_tag_order(tag_order)
        .with_terms(p.terms)
        .with_countries(include, exclude)
        .with_add_tags(add_tags)
        .with_searchable(p.searchable.unwrap_or(true))
        .with_match_score(p.match_score.unwrap_or(1.0))
        .with_suggestion(is_suggestion);
    feature.remove_tags = remove_tags;
    feature.icon = p.icon;
    feature.image_url = p.image_url;
    Some(feature)
}

/// Upper-cased country codes, or `None` if any entry is not one
/// (M49 region codes, geojson ids, coordinate circles).
fn parse_country_codes(values: &[Value]) -> Option<Vec<String>> {
    let mut out = Vec::with_capacity(values.len());
    for v in values {
        let cc = v.as_str()?.to_ascii_uppercase();
        if cc == WORLD {
            continue;
        }
        if !is_valid_country_code(&cc) {
            return None;
        }
        out.push(cc);
    }
    Some(out)
}

/// Convert a parsed `<locale>.json` into localized features of `base`.
///
/// Translations of ids not in `base` are ignored. A base feature whose
/// primary name is a `{other/id}` placeholder receives the translation of
/// `other/id`.
pub fn localized_from_raw(raw: TranslationsRaw, locale: &Locale, base: &FeatureMap) -> FeatureMap {
    let Some(presets) = raw
        .0
        .into_iter()
        .next()
        .and_then(|(_, language)| language.presets)
        .and_then(|container| container.presets)
    else {
        return FeatureMap::default();
    };

    let mut out = FeatureMap::with_capacity(presets.0.len());
    for (id, translation) in presets.0 {
        let Some(b) = base.get(&id) else { continue };
        if let Some(f) = localize(b.base(), locale, translation) {
            out.insert(Feature::Localized(Arc::new(f)));
        }
    }

    let placeholders: Vec<Feature> = base
        .features()
        .iter()
        .filter_map(|b| {
            let target = placeholder_id(b.name())?;
            let Feature::Localized(l) = out.get(target)? else {
                return None;
            };
            let f = LocalizedFeature::new(
                Arc::clone(b.base()),
                locale.clone(),
                l.names().to_vec(),
                l.terms().to_vec(),
            );
            Some(Feature::Localized(Arc::new(f)))
        })
        .collect();
    out.extend(placeholders);
    out
}

fn localize(base: &Arc<BaseFeature>, locale: &Locale, t: PresetTranslationRaw) -> Option<LocalizedFeature> {
    let name = t.name.filter(|n| !n.is_empty())?;

    let mut names = vec![name];
    for alias in t.aliases.as_deref().unwrap_or("").split('\n') {
        let alias = alias.trim();
        if !alias.is_empty() && !names.iter().any(|n| n == alias) {
            names.push(alias.to_owned());
        }
    }

    let terms: Vec<String> = t
        .terms
        .as_deref()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect();

    Some(LocalizedFeature::new(Arc::clone(base), locale.clone(), names, terms))
}

fn placeholder_id(name: &str) -> Option<&str> {
    name.strip_prefix('{')?.strip_suffix('}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presets(json: &str) -> Vec<BaseFeature> {
        from_raw(serde_json::from_str(json).unwrap(), false)
    }

    #[test]
    fn converts_full_preset() {
        let f = presets(
            r#"{
                "shop/bakery": {
                    "tags": {"shop": "bakery"},
                    "addTags": {"shop": "bakery", "craft": "bakery"},
                    "geometry": ["point", "area", "banana"],
                    "name": "Bakery",
                    "aliases": ["Baker"],
                    "terms": ["Bread", "Cake"],
                    "icon": "maki-bakery",
                    "imageURL": "https://example.org/b.png",
                    "searchable": false,
                    "matchScore": 0.8,
                    "locationSet": {"include": ["de", "001"], "exclude": ["de-by"]}
                }
            }"#,
        );
        assert_eq!(f.len(), 1);
        let f = &f[0];
        assert_eq!(f.id, "shop/bakery");
        assert_eq!(f.names(), ["Bakery", "Baker"]);
        assert_eq!(f.canonical_terms(), ["bread", "cake"]);
        assert_eq!(f.geometry, vec![GeometryType::Point, GeometryType::Area]);
        assert_eq!(f.include_country_codes, vec!["DE"]);
        assert_eq!(f.exclude_country_codes, vec!["DE-BY"]);
        assert_eq!(f.add_tags.len(), 2);
        assert_eq!(f.remove_tags, f.add_tags);
        assert!(!f.searchable);
        assert_eq!(f.match_score, 0.8);
        assert_eq!(f.icon.as_deref(), Some("maki-bakery"));
    }

    #[test]
    fn keeps_catalog_order_of_tags() {
        let f = presets(
            r#"{
                "shop/bakery/x": {
                    "tags": {"shop": "bakery", "brand": "X", "amenity": "cafe"},
                    "geometry": ["point"]
                }
            }"#,
        );
        assert_eq!(
            f[0].ordered_tags(),
            [("shop", "bakery"), ("brand", "X"), ("amenity", "cafe")]
        );
        assert_eq!(f[0].tags.len(), 3);
    }

    #[test]
    fn keeps_document_order_and_defaults() {
        let f = presets(
            r#"{
                "z/z": {"tags": {"z": "z"}, "geometry": ["point"]},
                "a/a": {"tags": {"a": "a"}, "geometry": ["point"], "name": "A"}
            }"#,
        );
        let ids: Vec<&str> = f.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["z/z", "a/a"]);
        assert_eq!(f[0].names(), [""]);
        assert!(f[0].searchable);
        assert_eq!(f[0].match_score, 1.0);
        assert_eq!(f[0].add_tags, f[0].tags);
    }

    #[test]
    fn skips_untagged_and_unsupported_location_sets() {
        let f = presets(
            r#"{
                "point": {"tags": {}, "geometry": ["point"]},
                "m49": {"tags": {"a": "b"}, "locationSet": {"include": ["150"]}},
                "geojson": {"tags": {"a": "b"}, "locationSet": {"include": ["x.geojson"]}},
                "circle": {"tags": {"a": "b"}, "locationSet": {"include": [[8.0, 47.0, 5]]}},
                "ok": {"tags": {"a": "b"}, "locationSet": {"include": ["001"]}}
            }"#,
        );
        let ids: Vec<&str> = f.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["ok"]);
        assert!(f[0].include_country_codes.is_empty());
    }

    #[test]
    fn localizes_with_aliases_terms_and_placeholders() {
        let base: FeatureMap = presets(
            r#"{
                "shop/bakery": {"tags": {"shop": "bakery"}, "name": "Bakery"},
                "shop/pastry": {"tags": {"shop": "pastry"}, "name": "{shop/bakery}"},
                "shop/butcher": {"tags": {"shop": "butcher"}, "name": "Butcher"}
            }"#,
        )
        .into_iter()
        .map(Feature::from)
        .collect();

        let raw: TranslationsRaw = serde_json::from_str(
            r#"{"de": {"presets": {"presets": {
                "shop/bakery": {"name": "Bäckerei", "aliases": "Backstube\n\nBäckerei", "terms": " Brot, Kuchen ,"},
                "shop/butcher": {"name": ""},
                "unknown/id": {"name": "Unbekannt"}
            }}}}"#,
        )
        .unwrap();

        let de = Locale::new("de");
        let out = localized_from_raw(raw, &de, &base);

        assert_eq!(out.len(), 2);
        let bakery = out.get("shop/bakery").unwrap();
        assert_eq!(bakery.names(), ["Bäckerei", "Backstube"]);
        assert_eq!(bakery.terms(), ["Brot", "Kuchen"]);
        assert_eq!(bakery.locale(), Some(&de));
        assert_eq!(out.get("shop/pastry").unwrap().name(), "Bäckerei");
        assert_eq!(out.get("shop/pastry").unwrap().tags().get("shop").unwrap(), "pastry");
        assert!(out.get("shop/butcher").is_none());
    }

    #[test]
    fn translation_without_presets_is_empty() {
        let raw: TranslationsRaw = serde_json::from_str(r#"{"de": {"fields": {}}}"#).unwrap();
        assert!(localized_from_raw(raw, &Locale::new("de"), &FeatureMap::default()).is_empty());
    }
}
