// SPDX-License-Identifier: MPL-2.0
//! HTTP surface of the service.
//!
//! Two upload endpoints wrap the core pipeline:
//!
//! - `POST /api/photo/metadata` - normalized metadata in wire order
//! - `POST /api/photo/display` - metadata split into general/GPS groups with
//!   formatted display strings (`?gps=decimal|dms` selects coordinate style)
//!
//! Everything else served is static frontend content with an SPA-style
//! index fallback. Handlers are stateless; each request is decoded,
//! normalized, and dropped.

use crate::config::Config;
use crate::domain::metadata::{
    format, normalize, split_groups, GpsFormat, MetadataItem, TagValue,
};
use crate::media;
use axum::extract::{DefaultBodyLimit, Multipart, Query};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

/// Builds the service router.
pub fn create_router(config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = config.static_dir();
    let index = static_dir.join("index.html");

    Router::new()
        .route("/api/photo/metadata", post(photo_metadata))
        .route("/api/photo/display", post(photo_display))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .fallback_service(ServeDir::new(&static_dir).not_found_service(ServeFile::new(index)))
}

async fn photo_metadata(mut multipart: Multipart) -> (StatusCode, Json<JsonValue>) {
    let Some(bytes) = read_photo_field(&mut multipart).await else {
        return missing_file_response();
    };

    match media::decode_tags(&bytes) {
        Ok(raw) => {
            let items = normalize(raw);
            debug!(tags = items.len(), "extracted metadata");
            (
                StatusCode::OK,
                Json(json!({ "metadata": items_to_json(&items) })),
            )
        }
        Err(err) => decode_failure_response(&err),
    }
}

#[derive(Debug, Deserialize)]
struct DisplayParams {
    /// GPS coordinate style; anything other than `decimal` means DMS.
    gps: Option<String>,
}

async fn photo_display(
    Query(params): Query<DisplayParams>,
    mut multipart: Multipart,
) -> (StatusCode, Json<JsonValue>) {
    let Some(bytes) = read_photo_field(&mut multipart).await else {
        return missing_file_response();
    };

    let gps_format = GpsFormat::from_name(params.gps.as_deref());
    match media::decode_tags(&bytes) {
        Ok(raw) => {
            let groups = split_groups(normalize(raw));
            debug!(
                general = groups.general.len(),
                gps = groups.gps.len(),
                "extracted display metadata"
            );
            (
                StatusCode::OK,
                Json(json!({
                    "general": display_entries(&groups.general, gps_format),
                    "gps": display_entries(&groups.gps, gps_format),
                })),
            )
        }
        Err(err) => decode_failure_response(&err),
    }
}

/// Pulls the bytes of the `photo` multipart field, if present.
async fn read_photo_field(multipart: &mut Multipart) -> Option<Vec<u8>> {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("photo") {
            return field.bytes().await.ok().map(|bytes| bytes.to_vec());
        }
    }
    None
}

fn missing_file_response() -> (StatusCode, Json<JsonValue>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "No file uploaded. Use field name \"photo\"." })),
    )
}

fn decode_failure_response(err: &crate::error::Error) -> (StatusCode, Json<JsonValue>) {
    warn!("metadata extraction failed: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Failed to extract metadata",
            "details": err.to_string(),
        })),
    )
}

// =============================================================================
// Wire conversion
// =============================================================================

fn items_to_json(items: &[MetadataItem]) -> JsonValue {
    JsonValue::Array(items.iter().map(item_to_json).collect())
}

fn item_to_json(item: &MetadataItem) -> JsonValue {
    json!({ "key": item.key, "value": value_to_json(item.value.as_ref()) })
}

fn display_entries(items: &[MetadataItem], gps_format: GpsFormat) -> JsonValue {
    JsonValue::Array(
        items
            .iter()
            .map(|item| {
                json!({
                    "key": item.key,
                    "value": value_to_json(item.value.as_ref()),
                    "display": format(item, gps_format),
                })
            })
            .collect(),
    )
}

fn value_to_json(value: Option<&TagValue>) -> JsonValue {
    match value {
        None => JsonValue::Null,
        Some(TagValue::Integer(n)) => json!(n),
        Some(TagValue::Float(f)) => json!(f),
        Some(TagValue::Text(s)) => json!(s),
        Some(TagValue::Rational(r)) => json!({
            "numerator": r.numerator,
            "denominator": r.denominator,
        }),
        Some(TagValue::List(items)) => {
            JsonValue::Array(items.iter().map(|v| value_to_json(Some(v))).collect())
        }
        Some(TagValue::Struct(map)) => map
            .iter()
            .map(|(key, v)| (key.clone(), value_to_json(Some(v))))
            .collect::<serde_json::Map<_, _>>()
            .into(),
    }
}
