// demos/basic_usage.rs
//
// Run with: cargo run --example basic_usage

use featuredict_core::{
    FeatureDictionary, IdBrandFeatureCollection, IdLocalizedFeatureCollection, IdQuery, Locale,
    MemorySource, Tags, TagsQuery, TermQuery,
};

const PRESETS: &str = r#"{
    "amenity/cafe": {
        "tags": {"amenity": "cafe"},
        "geometry": ["point", "area"],
        "name": "Cafe",
        "terms": ["coffee", "tea"]
    },
    "shop/bakery": {
        "tags": {"shop": "bakery"},
        "geometry": ["point", "area"],
        "name": "Bakery",
        "terms": ["bread"]
    }
}"#;

const DE: &str = r#"{
    "de": {"presets": {"presets": {
        "amenity/cafe": {"name": "Café", "terms": "Kaffee, Kuchen"},
        "shop/bakery": {"name": "Bäckerei", "aliases": "Backstube"}
    }}}
}"#;

const BRANDS_DE: &str = r#"{
    "shop/bakery/backwerk": {
        "tags": {"shop": "bakery", "brand": "BackWerk"},
        "geometry": ["point", "area"],
        "name": "BackWerk",
        "locationSet": {"include": ["de"]}
    }
}"#;

fn main() -> featuredict_core::Result<()> {
    let presets = IdLocalizedFeatureCollection::new(
        MemorySource::new()
            .with_file("presets.json", PRESETS)
            .with_file("de.json", DE),
    )?;
    let brands =
        IdBrandFeatureCollection::new(MemorySource::new().with_file("presets-DE.json", BRANDS_DE))?;
    let dictionary =
        FeatureDictionary::new(Box::new(presets), Some(Box::new(brands)), Locale::new("de"))?;

    // By id
    if let Some(cafe) = dictionary.get_by_id("amenity/cafe", &IdQuery::new())? {
        println!("amenity/cafe -> {}", cafe.name());
    }

    // By tags: the brand wins over its category inside Germany
    let tags: Tags = [
        ("shop".to_string(), "bakery".to_string()),
        ("brand".to_string(), "BackWerk".to_string()),
    ]
    .into();
    for country in [None, Some("DE")] {
        let mut query = TagsQuery::new();
        if let Some(cc) = country {
            query = query.in_country(cc);
        }
        let found = dictionary.find_by_tags(&tags, &query)?;
        let names: Vec<&str> = found.iter().map(|f| f.name()).collect();
        println!("tags in {:?} -> {:?}", country.unwrap_or("anywhere"), names);
    }

    // By term: accents and case do not matter
    for text in ["backer", "KAFFEE", "back"] {
        let found = dictionary.find_by_term(text, &TermQuery::new().in_country("DE").limit(5))?;
        let names: Vec<&str> = found.iter().map(|f| f.name()).collect();
        println!("term {text:?} -> {names:?}");
    }

    Ok(())
}
