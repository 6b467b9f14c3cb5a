// SPDX-License-Identifier: MPL-2.0
//! Core metadata value types.
//!
//! EXIF tag values are heterogeneous: integers, floats, rational fractions,
//! text, arrays of any of those, and occasionally nested records. [`TagValue`]
//! models that shape as a sum type so the rest of the pipeline can match on
//! it instead of inspecting runtime types.

// =============================================================================
// Rational
// =============================================================================

/// A fraction as stored by EXIF for non-integer numeric fields.
///
/// EXIF never stores floating point for things like exposure time or GPS
/// coordinates; it stores an explicit numerator/denominator pair.
///
/// # Example
///
/// ```
/// use exif_lens::domain::metadata::Rational;
///
/// let altitude = Rational::new(150, 10);
/// assert!((altitude.to_f64() - 15.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

impl Rational {
    /// Creates a new rational value.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the value as a floating point number.
    ///
    /// A zero denominator yields infinity, mirroring plain division; callers
    /// that care must check [`f64::is_finite`].
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

// =============================================================================
// TagValue
// =============================================================================

/// The value of one metadata tag.
///
/// The source data is dynamically shaped, so this enum covers every form the
/// decoder can hand us. Integral and floating point numbers are separate
/// variants so that integral EXIF values (ISO, pixel dimensions, byte
/// payloads) keep their integer identity on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Integer(i64),
    Float(f64),
    Rational(Rational),
    Text(String),
    List(Vec<TagValue>),
    Struct(std::collections::BTreeMap<String, TagValue>),
}

impl TagValue {
    /// Best-effort conversion to a number.
    ///
    /// Numbers convert as-is, rationals divide out, and text is parsed for a
    /// leading float (`"12.5 mm"` -> `12.5`). Anything else degrades to `0.0`;
    /// this conversion never fails.
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            TagValue::Integer(n) => *n as f64,
            TagValue::Float(f) => *f,
            TagValue::Rational(r) => r.to_f64(),
            TagValue::Text(s) => parse_leading_f64(s).unwrap_or(0.0),
            TagValue::List(_) | TagValue::Struct(_) => 0.0,
        }
    }

    /// Returns `true` for numeric zero, the distinguished value of
    /// `GPSAltitudeRef`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            TagValue::Integer(n) => *n == 0,
            TagValue::Float(f) => *f == 0.0,
            _ => false,
        }
    }
}

impl From<Rational> for TagValue {
    fn from(r: Rational) -> Self {
        TagValue::Rational(r)
    }
}

impl From<i64> for TagValue {
    fn from(n: i64) -> Self {
        TagValue::Integer(n)
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Text(s.to_string())
    }
}

/// Parses the longest leading float out of a string.
///
/// Matches `parseFloat` behavior: leading whitespace is skipped, an optional
/// sign, digits with at most one decimal point, and an optional exponent are
/// consumed, and trailing garbage is ignored. Returns `None` when no digits
/// were found.
fn parse_leading_f64(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if matches!(bytes.first().copied(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }

    // Optional exponent; only consumed when a digit follows.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end).copied(), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        if matches!(bytes.get(exp_end).copied(), Some(b'0'..=b'9')) {
            while matches!(bytes.get(exp_end).copied(), Some(b'0'..=b'9')) {
                exp_end += 1;
            }
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

// =============================================================================
// MetadataItem
// =============================================================================

/// One normalized key/value pair.
///
/// `value` is `None` when the decoder supplied a tag without a usable value;
/// the formatter renders that as `"N/A"`. Items are immutable after creation
/// and recomputed on every upload.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataItem {
    pub key: String,
    pub value: Option<TagValue>,
}

impl MetadataItem {
    /// Creates a new metadata item.
    #[must_use]
    pub fn new(key: impl Into<String>, value: Option<TagValue>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Returns `true` if this item belongs to the GPS group.
    #[must_use]
    pub fn is_gps(&self) -> bool {
        self.key.starts_with("GPS")
    }
}

// =============================================================================
// GpsFormat
// =============================================================================

/// Display style for GPS coordinates.
///
/// A session-scoped viewer preference, never persisted. Only consulted for
/// keys prefixed `GPS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GpsFormat {
    /// Decimal degrees, e.g. `40.446194`.
    Decimal,
    /// Degrees-minutes-seconds, e.g. `40° 26' 46.30"`.
    #[default]
    Dms,
}

impl GpsFormat {
    /// Resolves a request-supplied mode name.
    ///
    /// Anything other than the literal `"decimal"` selects DMS, including an
    /// absent mode.
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("decimal") => GpsFormat::Decimal,
            _ => GpsFormat::Dms,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
