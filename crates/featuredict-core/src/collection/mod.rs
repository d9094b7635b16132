// crates/featuredict-core/src/collection/mod.rs

//! Feature collections: where features come from before they are indexed.

mod brand;
mod localized;

pub use brand::IdBrandFeatureCollection;
pub use localized::IdLocalizedFeatureCollection;
