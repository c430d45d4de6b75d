//! Geometry keywords recognized as WKT starts
//!
//! Matching is always done on a whole alphabetic run, never on a prefix or
//! substring, so `ENDPOINT` or `POINTS` are not mistaken for `POINT`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The marker that denotes a geometry without coordinates (`POINT EMPTY`)
pub const EMPTY_MARKER: &[u8] = b"EMPTY";

/// A top-level WKT geometry tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    /// All kinds, in the order they are documented
    pub const ALL: [GeometryKind; 7] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
        GeometryKind::GeometryCollection,
    ];

    /// Canonical upper-case tag as written in WKT
    pub fn as_str(self) -> &'static str {
        match self {
            GeometryKind::Point => "POINT",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::MultiPoint => "MULTIPOINT",
            GeometryKind::MultiLineString => "MULTILINESTRING",
            GeometryKind::MultiPolygon => "MULTIPOLYGON",
            GeometryKind::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Look up a whole alphabetic run, ignoring ASCII case.
    ///
    /// The comparison folds case per byte, so no upper-cased copy of the
    /// input is ever built.
    pub fn from_word(word: &[u8]) -> Option<GeometryKind> {
        Self::ALL
            .into_iter()
            .find(|kind| word.eq_ignore_ascii_case(kind.as_str().as_bytes()))
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the geometry tags
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown geometry kind: {0}")]
pub struct UnknownGeometryKind(pub String);

impl FromStr for GeometryKind {
    type Err = UnknownGeometryKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeometryKind::from_word(s.as_bytes()).ok_or_else(|| UnknownGeometryKind(s.to_string()))
    }
}

/// Words allowed inside a geometry body: the geometry tags and `EMPTY`
pub fn is_body_word(word: &[u8]) -> bool {
    word.eq_ignore_ascii_case(EMPTY_MARKER) || GeometryKind::from_word(word).is_some()
}

/// Whether `EMPTY` (any case) starts at `pos`
pub fn empty_marker_at(bytes: &[u8], pos: usize) -> bool {
    bytes
        .get(pos..pos + EMPTY_MARKER.len())
        .is_some_and(|window| window.eq_ignore_ascii_case(EMPTY_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_word_matches_every_tag() {
        for kind in GeometryKind::ALL {
            assert_eq!(GeometryKind::from_word(kind.as_str().as_bytes()), Some(kind));
        }
    }

    #[test]
    fn test_from_word_ignores_case() {
        assert_eq!(GeometryKind::from_word(b"point"), Some(GeometryKind::Point));
        assert_eq!(
            GeometryKind::from_word(b"GeometryCollection"),
            Some(GeometryKind::GeometryCollection)
        );
        assert_eq!(
            GeometryKind::from_word(b"multiLineString"),
            Some(GeometryKind::MultiLineString)
        );
    }

    #[test]
    fn test_from_word_rejects_partial_words() {
        assert_eq!(GeometryKind::from_word(b"ENDPOINT"), None);
        assert_eq!(GeometryKind::from_word(b"POINTS"), None);
        assert_eq!(GeometryKind::from_word(b"POIN"), None);
        assert_eq!(GeometryKind::from_word(b"MULTI"), None);
        assert_eq!(GeometryKind::from_word(b""), None);
    }

    #[test]
    fn test_empty_is_not_a_geometry_kind() {
        assert_eq!(GeometryKind::from_word(b"EMPTY"), None);
    }

    #[test]
    fn test_body_words() {
        assert!(is_body_word(b"EMPTY"));
        assert!(is_body_word(b"empty"));
        assert!(is_body_word(b"LineString"));
        assert!(!is_body_word(b"this"));
        assert!(!is_body_word(b"e"));
    }

    #[test]
    fn test_empty_marker_at() {
        let text = b"POINT empty";
        assert!(empty_marker_at(text, 6));
        assert!(!empty_marker_at(text, 5));
        assert!(!empty_marker_at(text, 7));
        assert!(!empty_marker_at(b"EMPT", 0));
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(GeometryKind::MultiPolygon.to_string(), "MULTIPOLYGON");
        assert_eq!("polygon".parse::<GeometryKind>(), Ok(GeometryKind::Polygon));
        assert!("circle".parse::<GeometryKind>().is_err());
    }

    #[test]
    fn test_serializes_as_tag() {
        let json = serde_json::to_string(&GeometryKind::LineString).unwrap();
        assert_eq!(json, "\"LINESTRING\"");
    }
}
