// SPDX-License-Identifier: MPL-2.0
//! Display formatting for metadata values.
//!
//! Turns one normalized key/value pair into a human-readable string. Keys
//! prefixed `GPS` get unit conversion (altitude in meters, coordinates in
//! decimal degrees or DMS); everything else is stringified by shape.
//! Formatting never fails: malformed values degrade to the generic
//! stringification instead of erroring.

use super::types::{GpsFormat, MetadataItem, TagValue};
use std::fmt::Write as _;

/// Formats one metadata item for display.
///
/// `gps_format` is only consulted for keys starting with `GPS`; it is
/// ignored otherwise. A missing value renders as `"N/A"`.
///
/// # Example
///
/// ```
/// use exif_lens::domain::metadata::{format, GpsFormat, MetadataItem, Rational, TagValue};
///
/// let altitude = MetadataItem::new(
///     "GPSAltitude",
///     Some(TagValue::Rational(Rational::new(150, 10))),
/// );
/// assert_eq!(format(&altitude, GpsFormat::default()), "15.00 meters");
/// ```
#[must_use]
pub fn format(item: &MetadataItem, gps_format: GpsFormat) -> String {
    let Some(value) = item.value.as_ref() else {
        return "N/A".to_string();
    };
    if item.is_gps() {
        format_gps(&item.key, value, gps_format)
    } else {
        stringify(value)
    }
}

/// GPS-specific rendering. Checked in order; the first matching rule wins,
/// and anything that does not fit falls through to [`stringify`].
fn format_gps(key: &str, value: &TagValue, gps_format: GpsFormat) -> String {
    match key {
        "GPSAltitude" => format!("{:.2} meters", value.as_number()),
        "GPSAltitudeRef" => if value.is_zero() {
            "Above sea level"
        } else {
            "Below sea level"
        }
        .to_string(),
        "GPSLatitude" | "GPSLongitude" => {
            format_coordinate(value, gps_format).unwrap_or_else(|| stringify(value))
        }
        _ => stringify(value),
    }
}

/// Renders a coordinate stored as `[degrees, minutes, seconds]`.
///
/// Returns `None` when the value is not a 3-element list; the caller falls
/// back to generic stringification.
fn format_coordinate(value: &TagValue, gps_format: GpsFormat) -> Option<String> {
    let TagValue::List(parts) = value else {
        return None;
    };
    let [degrees, minutes, seconds] = parts.as_slice() else {
        return None;
    };
    let d = degrees.as_number();
    let m = minutes.as_number();
    let s = seconds.as_number();

    Some(match gps_format {
        GpsFormat::Decimal => format!("{:.6}", d + m / 60.0 + s / 3600.0),
        GpsFormat::Dms => format!("{}° {}' {:.2}\"", number_text(d), number_text(m), s),
    })
}

/// Generic shape-directed stringification.
fn stringify(value: &TagValue) -> String {
    match value {
        TagValue::List(elements) => elements
            .iter()
            .map(element_text)
            .collect::<Vec<_>>()
            .join(", "),
        TagValue::Struct(_) | TagValue::Rational(_) => to_json_pretty(value),
        scalar => scalar_text(scalar),
    }
}

/// One list element: scalars render plainly, compound values as compact JSON.
fn element_text(value: &TagValue) -> String {
    match value {
        TagValue::List(_) | TagValue::Struct(_) | TagValue::Rational(_) => to_json_compact(value),
        scalar => scalar_text(scalar),
    }
}

fn scalar_text(value: &TagValue) -> String {
    match value {
        TagValue::Integer(n) => n.to_string(),
        TagValue::Float(f) => number_text(*f),
        TagValue::Text(s) => s.clone(),
        // Compound shapes are routed through the JSON printers before we
        // get here; an empty string is the safe degenerate answer.
        _ => String::new(),
    }
}

/// Shortest decimal rendering of a float: `100`, `2.2`, `46.3`.
fn number_text(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{f}")
    }
}

// =============================================================================
// JSON printing
// =============================================================================
//
// The domain layer carries its own small printer instead of a serializer
// dependency: display output wants two cosmetic styles (compact for list
// elements, 2-space indented for standalone records) and the exact
// whitespace is not a wire contract.

fn to_json_compact(value: &TagValue) -> String {
    let mut out = String::new();
    write_json(value, false, 0, &mut out);
    out
}

fn to_json_pretty(value: &TagValue) -> String {
    let mut out = String::new();
    write_json(value, true, 0, &mut out);
    out
}

fn write_json(value: &TagValue, pretty: bool, depth: usize, out: &mut String) {
    match value {
        TagValue::Integer(n) => {
            let _ = write!(out, "{n}");
        }
        TagValue::Float(f) if f.is_finite() => {
            let _ = write!(out, "{f}");
        }
        // Non-finite numbers have no JSON representation.
        TagValue::Float(_) => out.push_str("null"),
        TagValue::Text(s) => write_json_string(s, out),
        TagValue::Rational(r) => {
            let fields = [
                ("numerator", TagValue::Integer(r.numerator)),
                ("denominator", TagValue::Integer(r.denominator)),
            ];
            write_json_object(fields.iter().map(|(k, v)| (*k, v)), pretty, depth, out);
        }
        TagValue::Struct(map) => {
            write_json_object(map.iter().map(|(k, v)| (k.as_str(), v)), pretty, depth, out);
        }
        TagValue::List(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                if pretty {
                    out.push('\n');
                    push_indent(depth + 1, out);
                }
                write_json(item, pretty, depth + 1, out);
            }
            if pretty {
                out.push('\n');
                push_indent(depth, out);
            }
            out.push(']');
        }
    }
}

fn write_json_object<'a>(
    entries: impl Iterator<Item = (&'a str, &'a TagValue)>,
    pretty: bool,
    depth: usize,
    out: &mut String,
) {
    out.push('{');
    let mut empty = true;
    for (key, value) in entries {
        if !empty {
            out.push(',');
        }
        empty = false;
        if pretty {
            out.push('\n');
            push_indent(depth + 1, out);
        }
        write_json_string(key, out);
        out.push(':');
        if pretty {
            out.push(' ');
        }
        write_json(value, pretty, depth + 1, out);
    }
    if !empty && pretty {
        out.push('\n');
        push_indent(depth, out);
    }
    out.push('}');
}

fn write_json_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metadata::types::Rational;
    use std::collections::BTreeMap;

    fn item(key: &str, value: TagValue) -> MetadataItem {
        MetadataItem::new(key, Some(value))
    }

    #[test]
    fn missing_value_renders_as_na() {
        let make = MetadataItem::new("Make", None);
        assert_eq!(format(&make, GpsFormat::default()), "N/A");
    }

    #[test]
    fn altitude_converts_rational_to_meters() {
        let altitude = item("GPSAltitude", TagValue::Rational(Rational::new(150, 10)));
        assert_eq!(format(&altitude, GpsFormat::default()), "15.00 meters");
    }

    #[test]
    fn altitude_accepts_plain_numbers() {
        let altitude = item("GPSAltitude", TagValue::Integer(15));
        assert_eq!(format(&altitude, GpsFormat::default()), "15.00 meters");
    }

    #[test]
    fn altitude_ref_distinguishes_sea_level() {
        let above = item("GPSAltitudeRef", TagValue::Integer(0));
        let below = item("GPSAltitudeRef", TagValue::Integer(1));
        assert_eq!(format(&above, GpsFormat::default()), "Above sea level");
        assert_eq!(format(&below, GpsFormat::default()), "Below sea level");
    }

    #[test]
    fn latitude_decimal_mode() {
        let latitude = item(
            "GPSLatitude",
            TagValue::List(vec![
                TagValue::Integer(40),
                TagValue::Integer(26),
                TagValue::Float(46.3),
            ]),
        );
        assert_eq!(format(&latitude, GpsFormat::Decimal), "40.446194");
    }

    #[test]
    fn latitude_dms_mode() {
        let latitude = item(
            "GPSLatitude",
            TagValue::List(vec![
                TagValue::Integer(40),
                TagValue::Integer(26),
                TagValue::Float(46.3),
            ]),
        );
        assert_eq!(format(&latitude, GpsFormat::Dms), "40° 26' 46.30\"");
    }

    #[test]
    fn coordinate_accepts_rational_components() {
        let longitude = item(
            "GPSLongitude",
            TagValue::List(vec![
                TagValue::Rational(Rational::new(40, 1)),
                TagValue::Rational(Rational::new(26, 1)),
                TagValue::Rational(Rational::new(463, 10)),
            ]),
        );
        assert_eq!(format(&longitude, GpsFormat::Decimal), "40.446194");
        assert_eq!(format(&longitude, GpsFormat::Dms), "40° 26' 46.30\"");
    }

    #[test]
    fn coordinate_with_wrong_arity_falls_back() {
        let latitude = item(
            "GPSLatitude",
            TagValue::List(vec![TagValue::Integer(40), TagValue::Integer(26)]),
        );
        assert_eq!(format(&latitude, GpsFormat::Decimal), "40, 26");
    }

    #[test]
    fn unrecognized_gps_key_uses_generic_rules() {
        let method = item("GPSProcessingMethod", TagValue::from("GPS"));
        assert_eq!(format(&method, GpsFormat::Decimal), "GPS");
    }

    #[test]
    fn scalar_values_render_plainly() {
        assert_eq!(
            format(&item("ISO", TagValue::Integer(100)), GpsFormat::default()),
            "100"
        );
        assert_eq!(
            format(&item("FNumber", TagValue::Float(2.2)), GpsFormat::default()),
            "2.2"
        );
        assert_eq!(
            format(&item("Make", TagValue::from("Sony")), GpsFormat::default()),
            "Sony"
        );
    }

    #[test]
    fn list_of_scalars_joins_with_comma() {
        let iso = item(
            "ISO",
            TagValue::List(vec![TagValue::Integer(100), TagValue::Integer(200)]),
        );
        assert_eq!(format(&iso, GpsFormat::default()), "100, 200");
    }

    #[test]
    fn list_elements_with_structure_render_as_compact_json() {
        let timestamps = item(
            "ShutterLog",
            TagValue::List(vec![
                TagValue::Rational(Rational::new(1, 250)),
                TagValue::Integer(3),
            ]),
        );
        assert_eq!(
            format(&timestamps, GpsFormat::default()),
            "{\"numerator\":1,\"denominator\":250}, 3"
        );
    }

    #[test]
    fn standalone_rational_pretty_prints() {
        let exposure = item("ExposureTime", TagValue::Rational(Rational::new(1, 250)));
        assert_eq!(
            format(&exposure, GpsFormat::default()),
            "{\n  \"numerator\": 1,\n  \"denominator\": 250\n}"
        );
    }

    #[test]
    fn struct_pretty_prints_with_two_space_indent() {
        let mut fields = BTreeMap::new();
        fields.insert("id".to_string(), TagValue::Integer(7));
        fields.insert("name".to_string(), TagValue::from("lens"));
        let value = item("LensInfo", TagValue::Struct(fields));

        assert_eq!(
            format(&value, GpsFormat::default()),
            "{\n  \"id\": 7,\n  \"name\": \"lens\"\n}"
        );
    }

    #[test]
    fn empty_compounds_render_degenerately() {
        // An empty list joins to nothing; an empty record prints as "{}".
        assert_eq!(
            format(&item("Empty", TagValue::List(vec![])), GpsFormat::default()),
            ""
        );
        assert_eq!(
            format(
                &item("Empty", TagValue::Struct(BTreeMap::new())),
                GpsFormat::default()
            ),
            "{}"
        );
    }

    #[test]
    fn nested_list_pretty_and_compact_styles() {
        let nested = TagValue::List(vec![
            TagValue::Integer(1),
            TagValue::List(vec![TagValue::Integer(2), TagValue::Integer(3)]),
        ]);
        // As a list, elements stringify individually: the nested list is a
        // compound element and renders compactly.
        assert_eq!(
            format(&item("Matrix", nested), GpsFormat::default()),
            "1, [2,3]"
        );
    }

    #[test]
    fn json_strings_are_escaped() {
        let mut fields = BTreeMap::new();
        fields.insert("note".to_string(), TagValue::from("line\n\"quoted\""));
        let value = item("Comment", TagValue::Struct(fields));
        assert_eq!(
            format(&value, GpsFormat::default()),
            "{\n  \"note\": \"line\\n\\\"quoted\\\"\"\n}"
        );
    }

    #[test]
    fn gps_format_is_ignored_for_non_gps_keys() {
        let iso = item("ISO", TagValue::Integer(200));
        assert_eq!(
            format(&iso, GpsFormat::Decimal),
            format(&iso, GpsFormat::Dms)
        );
    }
}
