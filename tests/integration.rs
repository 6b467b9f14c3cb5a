// SPDX-License-Identifier: MPL-2.0
use exif_lens::domain::metadata::{
    format, normalize, split_groups, GpsFormat, RawTagMap, Rational, TagDescriptor, TagValue,
};

fn descriptor(value: TagValue) -> TagDescriptor {
    TagDescriptor::from_value(value)
}

fn sample_raw_map() -> RawTagMap {
    let mut raw = RawTagMap::new();
    raw.insert("Model".into(), descriptor(TagValue::from("ILCE-7M3")));
    raw.insert(
        "GPSLatitude".into(),
        descriptor(TagValue::List(vec![
            TagValue::Rational(Rational::new(40, 1)),
            TagValue::Rational(Rational::new(26, 1)),
            TagValue::Rational(Rational::new(463, 10)),
        ])),
    );
    raw.insert("Make".into(), descriptor(TagValue::from("Sony")));
    raw.insert(
        "GPSAltitude".into(),
        descriptor(TagValue::Rational(Rational::new(150, 10))),
    );
    raw.insert("GPSAltitudeRef".into(), descriptor(TagValue::Integer(0)));
    raw.insert(
        "MakerNote".into(),
        descriptor(TagValue::List(vec![
            TagValue::Integer(1),
            TagValue::Integer(2),
        ])),
    );
    raw
}

#[test]
fn pipeline_orders_splits_and_formats() {
    let items = normalize(sample_raw_map());

    // Every decoded tag survives normalization, excluded ones included.
    assert_eq!(items.len(), 6);
    let keys: Vec<&str> = items.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "GPSAltitude",
            "GPSAltitudeRef",
            "GPSLatitude",
            "Make",
            "MakerNote",
            "Model",
        ]
    );

    let groups = split_groups(items);

    // MakerNote disappears at the presentation boundary.
    let general: Vec<&str> = groups.general.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(general, vec!["Make", "Model"]);

    let gps: Vec<&str> = groups.gps.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(gps, vec!["GPSAltitude", "GPSAltitudeRef", "GPSLatitude"]);

    let displays: Vec<String> = groups
        .gps
        .iter()
        .map(|item| format(item, GpsFormat::Decimal))
        .collect();
    assert_eq!(
        displays,
        vec!["15.00 meters", "Above sea level", "40.446194"]
    );
}

#[test]
fn pipeline_is_idempotent_for_equivalent_inputs() {
    let first = normalize(sample_raw_map());
    let second = normalize(sample_raw_map());
    assert_eq!(first, second);
}

#[test]
fn dms_rendering_matches_viewer_expectations() {
    let items = normalize(sample_raw_map());
    let latitude = items
        .iter()
        .find(|item| item.key == "GPSLatitude")
        .expect("latitude present");
    assert_eq!(format(latitude, GpsFormat::Dms), "40° 26' 46.30\"");
}

#[test]
fn decoder_failure_carries_no_partial_results() {
    let result = exif_lens::media::decode_tags(b"not an image at all");
    match result {
        Err(exif_lens::error::Error::Decode(_)) => {}
        other => panic!("expected a decode error, got {other:?}"),
    }
}
