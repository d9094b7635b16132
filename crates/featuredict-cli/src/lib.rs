//! featuredict-cli
//! ===============
//!
//! Command-line interface for the `featuredict-core` preset dictionary.
//!
//! This crate primarily provides a binary (`featuredict`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! featuredict --presets data/presets id amenity/cafe
//! featuredict --locale de,none tags amenity=cafe cuisine=coffee_shop
//! featuredict --brands data/brands --country DE term backw --limit 5
//! ```
//!
//! For programmatic access use the [`featuredict-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
