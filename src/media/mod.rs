// SPDX-License-Identifier: MPL-2.0
//! Media handling: the boundary between image bytes and domain values.
//!
//! The only member today is the EXIF decoder adapter. Container parsing
//! (JPEG/TIFF/PNG/WebP/HEIF framing) is delegated entirely to the `exif`
//! crate; this module translates its dynamically shaped field values into
//! the domain's [`TagValue`](crate::domain::metadata::TagValue) model.

pub mod exif;

pub use self::exif::decode_tags;
