// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types and operations.
//!
//! Everything here is a pure transformation over in-memory values:
//!
//! - [`types`]: the tag value model ([`TagValue`], [`Rational`],
//!   [`MetadataItem`], [`GpsFormat`])
//! - [`normalize`]: raw tag map -> ordered metadata, plus the GPS/general
//!   category split
//! - [`format`]: display formatting with GPS unit conversion
//!
//! The decoder that produces the raw tag map lives in [`crate::media`];
//! this module never touches the container format.

pub mod format;
pub mod normalize;
pub mod types;

pub use format::format;
pub use normalize::{normalize, split_groups, MetadataGroups, RawTagMap, TagDescriptor};
pub use types::{GpsFormat, MetadataItem, Rational, TagValue};
