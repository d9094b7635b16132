// crates/featuredict-core/src/model/geometry.rs
use crate::error::FeatureError;
use std::fmt;
use std::str::FromStr;

/// The spatial primitive a feature may be applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
    /// A standalone node.
    Point,
    /// A node that is part of a way.
    Vertex,
    Line,
    Area,
    Relation,
}

impl GeometryType {
    pub const ALL: [GeometryType; 5] = [
        GeometryType::Point,
        GeometryType::Vertex,
        GeometryType::Line,
        GeometryType::Area,
        GeometryType::Relation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "point",
            GeometryType::Vertex => "vertex",
            GeometryType::Line => "line",
            GeometryType::Area => "area",
            GeometryType::Relation => "relation",
        }
    }
}

impl FromStr for GeometryType {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeometryType::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FeatureError::InvalidData(format!("unknown geometry type: {s}")))
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_names() {
        for g in GeometryType::ALL {
            assert_eq!(g.as_str().parse::<GeometryType>().unwrap(), g);
        }
        assert_eq!(" Area ".parse::<GeometryType>().unwrap(), GeometryType::Area);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!("polygon".parse::<GeometryType>().is_err());
        assert!("".parse::<GeometryType>().is_err());
    }
}
