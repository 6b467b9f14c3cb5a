// SPDX-License-Identifier: MPL-2.0
//! EXIF decoder adapter.
//!
//! Reads EXIF data from an in-memory image and produces the raw tag map the
//! normalizer consumes. A failure to parse the container is a single
//! [`Error::Decode`](crate::error::Error::Decode) for the whole input; there
//! is no per-tag partial failure.

use crate::domain::metadata::{RawTagMap, Rational, TagDescriptor, TagValue};
use crate::error::Result;
use std::io::Cursor;

/// Decodes all EXIF tags of the primary image into a raw tag map.
///
/// Tag names come from the EXIF registry (e.g. `GPSLatitude`, `FNumber`);
/// thumbnail-image duplicates are skipped so names stay unique. Each
/// descriptor carries the raw value plus the decoder's own display rendition,
/// which normalization discards.
///
/// # Errors
///
/// Returns [`Error::Decode`](crate::error::Error::Decode) when the bytes are
/// not a supported container or carry no readable EXIF segment.
pub fn decode_tags(bytes: &[u8]) -> Result<RawTagMap> {
    let mut reader = Cursor::new(bytes);
    let exif = exif::Reader::new().read_from_container(&mut reader)?;

    let mut raw = RawTagMap::new();
    for field in exif.fields() {
        if field.ifd_num != exif::In::PRIMARY {
            continue;
        }
        let name = field.tag.to_string();
        let descriptor = TagDescriptor {
            value: convert_value(&field.value),
            description: Some(field.display_value().to_string()),
        };
        // First occurrence wins; EXIF files occasionally repeat a tag.
        raw.entry(name).or_insert(descriptor);
    }
    Ok(raw)
}

/// Maps a decoder value onto the domain model.
///
/// Single-element numeric vectors collapse to scalars (EXIF stores `ISO 100`
/// as a one-element array); longer vectors stay lists. `Undefined` payloads
/// (`MakerNote`, `UserComment`) stay byte lists so downstream exclusion sees
/// the same shape the original decoder produced.
fn convert_value(value: &exif::Value) -> Option<TagValue> {
    use exif::Value;

    match value {
        Value::Byte(v) => Some(collapse(integers(v.iter().map(|&n| i64::from(n))))),
        Value::SByte(v) => Some(collapse(integers(v.iter().map(|&n| i64::from(n))))),
        Value::Short(v) => Some(collapse(integers(v.iter().map(|&n| i64::from(n))))),
        Value::SShort(v) => Some(collapse(integers(v.iter().map(|&n| i64::from(n))))),
        Value::Long(v) => Some(collapse(integers(v.iter().map(|&n| i64::from(n))))),
        Value::SLong(v) => Some(collapse(integers(v.iter().map(|&n| i64::from(n))))),
        Value::Ascii(lines) => Some(TagValue::Text(join_ascii(lines))),
        Value::Rational(v) => Some(collapse(
            v.iter()
                .map(|r| TagValue::Rational(Rational::new(i64::from(r.num), i64::from(r.denom))))
                .collect(),
        )),
        Value::SRational(v) => Some(collapse(
            v.iter()
                .map(|r| TagValue::Rational(Rational::new(i64::from(r.num), i64::from(r.denom))))
                .collect(),
        )),
        Value::Float(v) => Some(collapse(
            v.iter().map(|&f| TagValue::Float(f64::from(f))).collect(),
        )),
        Value::Double(v) => Some(collapse(
            v.iter().map(|&f| TagValue::Float(f)).collect(),
        )),
        Value::Undefined(bytes, _) => Some(TagValue::List(
            bytes.iter().map(|&b| TagValue::Integer(i64::from(b))).collect(),
        )),
        Value::Unknown(..) => None,
    }
}

fn integers(values: impl Iterator<Item = i64>) -> Vec<TagValue> {
    values.map(TagValue::Integer).collect()
}

fn collapse(mut items: Vec<TagValue>) -> TagValue {
    if items.len() == 1 {
        items.swap_remove(0)
    } else {
        TagValue::List(items)
    }
}

/// Joins the ASCII components of a text tag, dropping the NUL terminators
/// EXIF writers sometimes leave in place.
fn join_ascii(lines: &[Vec<u8>]) -> String {
    lines
        .iter()
        .map(|line| {
            String::from_utf8_lossy(line)
                .trim_end_matches('\0')
                .to_string()
        })
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
