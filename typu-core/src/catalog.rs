//! Webfonts catalog data model (made by FontLab https://www.fontlab.com/)

use serde::{Deserialize, Serialize};

/// One variable-font axis: a registered tag and its supported range.
///
/// The range is inclusive on both ends. Catalog numerals are rendered
/// through `f64`, which prints integral values without a fractional part
/// (`300`, not `300.0`) and keeps fractional ones intact (`62.5`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontAxis {
    pub tag: String,
    pub start: f64,
    pub end: f64,
}

/// One catalog entry: a family plus its discrete variants and/or axes.
///
/// A record with a non-empty `axes` list is a variable font; otherwise the
/// `variants` tokens (`"regular"`, `"700"`, `"700italic"`, ...) describe a
/// static family. Absent and empty sequences are equivalent, and unknown
/// catalog fields (category, files, version, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontRecord {
    pub family: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub axes: Vec<FontAxis>,
}

impl FontRecord {
    pub fn is_variable(&self) -> bool {
        !self.axes.is_empty()
    }
}

/// The shape shared by the webfonts API response and the bundled snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebfontsSnapshot {
    pub items: Vec<FontRecord>,
}

/// Find the first record whose family matches exactly (case-sensitive).
///
/// The catalog does not enforce family uniqueness; on duplicates the
/// earliest entry wins.
pub fn find_family<'a>(catalog: &'a [FontRecord], family: &str) -> Option<&'a FontRecord> {
    catalog.iter().find(|record| record.family == family)
}
