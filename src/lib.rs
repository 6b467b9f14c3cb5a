// SPDX-License-Identifier: MPL-2.0
//! `exif_lens` is a small web service that extracts embedded technical
//! metadata (EXIF/GPS tags) from uploaded images.
//!
//! It normalizes the raw tag map produced by the EXIF decoder into a stable,
//! ordered structure and renders human-readable display values, including
//! GPS coordinate conversion between decimal degrees and
//! degrees-minutes-seconds notation.

#![doc(html_root_url = "https://docs.rs/exif_lens/0.2.0")]

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
