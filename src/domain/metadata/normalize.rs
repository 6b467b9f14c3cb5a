// SPDX-License-Identifier: MPL-2.0
//! Raw tag map normalization and category split.
//!
//! The decoder produces an unordered map of tag name -> descriptor. The
//! normalizer reduces each descriptor to its value and emits the items in a
//! stable, deterministic order so repeated uploads of the same image always
//! render identically.

use super::types::{MetadataItem, TagValue};
use std::cmp::Ordering;
use std::collections::HashMap;

/// One decoder-supplied tag descriptor.
///
/// Decoders attach extra fields besides the value, such as a pre-rendered
/// human-readable string. Normalization keeps only the value; rendering is
/// the formatter's job.
#[derive(Debug, Clone, PartialEq)]
pub struct TagDescriptor {
    pub value: Option<TagValue>,
    pub description: Option<String>,
}

impl TagDescriptor {
    /// Creates a descriptor carrying only a value.
    #[must_use]
    pub fn from_value(value: TagValue) -> Self {
        Self {
            value: Some(value),
            description: None,
        }
    }
}

/// Unordered tag map as produced by the decoder. Tag names are unique.
pub type RawTagMap = HashMap<String, TagDescriptor>;

/// Reduces a raw tag map to an ordered list of key/value items.
///
/// Every key in the input appears exactly once in the output; the order is a
/// pure function of the key set (values never affect it), so the operation
/// is idempotent across permutation-equivalent inputs.
///
/// Decode failures never reach this function: the decoder surfaces them as a
/// single [`crate::error::Error::Decode`] before a map exists, so there are
/// no partial results to normalize.
#[must_use]
pub fn normalize(raw: RawTagMap) -> Vec<MetadataItem> {
    let mut items: Vec<MetadataItem> = raw
        .into_iter()
        .map(|(key, descriptor)| MetadataItem::new(key, descriptor.value))
        .collect();
    items.sort_by(|a, b| compare_keys(&a.key, &b.key));
    items
}

/// Pinned key collation: case-folded codepoint order, raw codepoints as the
/// tiebreak.
///
/// The upstream behavior this replaces is host-locale `localeCompare`, whose
/// collation varies by platform. For the ASCII names EXIF uses the two agree;
/// the divergence for non-ASCII keys is accepted in exchange for an order
/// that is identical on every machine.
#[must_use]
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// Keys excluded from display entirely.
///
/// `MakerNote` is an opaque vendor blob and `UserComment` a free-text payload;
/// both are too large for generic rendering. They are filtered here at the
/// presentation boundary - [`normalize`] still emits them, matching the wire
/// contract.
pub const EXCLUDED_KEYS: &[&str] = &["MakerNote", "UserComment"];

/// Ordered metadata partitioned for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataGroups {
    /// Items whose key does not start with `GPS`, input order preserved.
    pub general: Vec<MetadataItem>,
    /// Items whose key starts with `GPS`, input order preserved.
    pub gps: Vec<MetadataItem>,
}

/// Splits ordered metadata into the general and GPS display groups.
///
/// Every item that is not in [`EXCLUDED_KEYS`] lands in exactly one group,
/// and both groups preserve the relative order of the input.
#[must_use]
pub fn split_groups(items: Vec<MetadataItem>) -> MetadataGroups {
    let mut groups = MetadataGroups::default();
    for item in items {
        if EXCLUDED_KEYS.contains(&item.key.as_str()) {
            continue;
        }
        if item.is_gps() {
            groups.gps.push(item);
        } else {
            groups.general.push(item);
        }
    }
    groups
}
