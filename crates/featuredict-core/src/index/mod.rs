// crates/featuredict-core/src/index/mod.rs

//! Immutable lookup structures built from a feature snapshot.

mod prefix;
mod tags;
mod term;

pub use prefix::PrefixIndex;
pub use tags::{is_subset, TagIndex};
pub use term::TermIndex;
