#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_consts() {
    let c = StickerConfig::default();
    assert_eq!(c.trigger_band_px, 60.0);
    assert_eq!(c.ease, 0.2);
    assert_eq!(c.snap_px, 0.5);
    assert_eq!(c.flat_px, 1.0);
    assert_eq!(c.peel_threshold_ratio, 0.1);
}

#[test]
fn default_validates() {
    assert!(StickerConfig::default().validate().is_ok());
}

#[test]
fn partial_json_keeps_defaults() {
    let c = StickerConfig::from_json(r##"{ "ease": 0.5, "rear_fill": "#fff" }"##).unwrap();
    assert_eq!(c.ease, 0.5);
    assert_eq!(c.rear_fill, "#fff");
    assert_eq!(c.trigger_band_px, 60.0);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(StickerConfig::from_json("{}").unwrap(), StickerConfig::default());
}

#[test]
fn malformed_json_is_parse_error() {
    let err = StickerConfig::from_json("{ ease: ").unwrap_err();
    assert!(matches!(err, StickerError::Config(_)));
}

#[test]
fn ease_out_of_range_rejected() {
    for raw in [r#"{ "ease": 0.0 }"#, r#"{ "ease": 1.5 }"#, r#"{ "ease": -0.2 }"#] {
        let err = StickerConfig::from_json(raw).unwrap_err();
        assert!(matches!(err, StickerError::InvalidConfig(_)), "{raw}");
    }
}

#[test]
fn ease_of_one_is_allowed() {
    assert!(StickerConfig::from_json(r#"{ "ease": 1.0 }"#).is_ok());
}

#[test]
fn threshold_ratio_must_be_fraction() {
    assert!(StickerConfig::from_json(r#"{ "peel_threshold_ratio": 1.0 }"#).is_err());
    assert!(StickerConfig::from_json(r#"{ "peel_threshold_ratio": 0.0 }"#).is_err());
}

#[test]
fn non_positive_band_rejected() {
    let err = StickerConfig::from_json(r#"{ "trigger_band_px": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("trigger_band_px"));
}

#[test]
fn negative_blur_rejected() {
    assert!(StickerConfig::from_json(r#"{ "shadow_blur_px": -1 }"#).is_err());
}

#[test]
fn serializes_round_trip_through_json() {
    let c = StickerConfig { max_width: 320.0, ..StickerConfig::default() };
    let raw = serde_json::to_string(&c).unwrap();
    assert_eq!(StickerConfig::from_json(&raw).unwrap(), c);
}
