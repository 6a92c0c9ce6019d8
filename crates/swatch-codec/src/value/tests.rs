//! Tests for color value parsing and serialization.

use super::*;
use swatch_common::ParseFailure;

fn hex(text: &str) -> HexColor {
    HexColor::parse(text).unwrap()
}

fn solid(text: &str, percent: Option<u8>) -> ColorValue {
    ColorValue::Solid(SolidColor::new(
        hex(text),
        percent.map(|p| Opacity::from_percent(p).unwrap()),
    ))
}

#[test]
fn parses_plain_solid() {
    assert_eq!(parse_color_value("#2e2e2e").unwrap(), solid("#2e2e2e", None));
}

#[test]
fn parses_solid_with_opacity() {
    let value = parse_color_value("#2e2e2e(20%)").unwrap();
    assert_eq!(value, solid("#2e2e2e", Some(20)));
    let ColorValue::Solid(solid) = value else {
        panic!("expected solid");
    };
    assert_eq!(solid.opacity.unwrap().fraction(), 0.2);
    assert_eq!(solid.color().a, 51);
}

#[test]
fn full_opacity_normalizes_to_none() {
    assert_eq!(parse_color_value("#fff(100%)").unwrap(), solid("#fff", None));
}

#[test]
fn solid_round_trip() {
    let value = solid("#2e2e2e", None);
    assert_eq!(serialize_color_value(&value), "#2e2e2e");
    assert_eq!(parse_color_value("#2e2e2e").unwrap(), value);

    let value = ColorValue::Solid(SolidColor::new(
        hex("#2e2e2e"),
        Opacity::from_fraction(0.2),
    ));
    assert_eq!(serialize_color_value(&value), "#2e2e2e(20%)");
    assert_eq!(parse_color_value("#2e2e2e(20%)").unwrap(), value);
}

#[test]
fn gradient_stops_are_sorted() {
    let value = parse_color_value("#cbff2e(90%) 1-#2e2e2e 0").unwrap();
    let ColorValue::Gradient(gradient) = &value else {
        panic!("expected gradient");
    };
    let stops = gradient.stops();
    assert_eq!(stops.len(), 2);
    assert_eq!(stops[0].position, 0.0);
    assert_eq!(stops[0].hex.as_str(), "#2e2e2e");
    assert_eq!(stops[0].opacity, None);
    assert_eq!(stops[1].position, 1.0);
    assert_eq!(stops[1].hex.as_str(), "#cbff2e");
    assert_eq!(stops[1].opacity.unwrap().fraction(), 0.9);

    assert_eq!(serialize_color_value(&value), "#2e2e2e 0-#cbff2e(90%) 1");
}

#[test]
fn gradient_ties_keep_input_order() {
    let value = parse_color_value("#111 0.5-#222 0.5-#000 0").unwrap();
    let ColorValue::Gradient(gradient) = value else {
        panic!("expected gradient");
    };
    let order: Vec<&str> = gradient.stops().iter().map(|s| s.hex.as_str()).collect();
    assert_eq!(order, ["#000", "#111", "#222"]);
}

#[test]
fn gradient_accepts_loose_spacing_and_fractions() {
    let value = parse_color_value(" #000 0 - #888 .25 - #fff 1 ").unwrap();
    assert_eq!(value.stop_count(), 3);
    assert_eq!(serialize_color_value(&value), "#000 0-#888 0.25-#fff 1");
}

#[test]
fn malformed_gradient_is_rejected_whole() {
    let err = parse_color_value("#2e2e2e 0-notahex 1").unwrap_err();
    assert_eq!(
        err,
        ParseFailure::InvalidColorValue {
            input: "#2e2e2e 0-notahex 1".into(),
            offending: "notahex 1".into(),
        }
    );
}

#[test]
fn gradient_stop_without_position_is_invalid() {
    let err = parse_color_value("#000 0-#fff").unwrap_err();
    assert!(matches!(
        err,
        ParseFailure::InvalidColorValue { ref offending, .. } if offending == "#fff"
    ));
}

#[test]
fn position_out_of_range_is_invalid() {
    let err = parse_color_value("#000 0-#fff 1.5").unwrap_err();
    assert_eq!(err.reason(), "invalid-color-value");
}

#[test]
fn single_stop_with_position_is_degenerate() {
    let err = parse_color_value("#fff 0").unwrap_err();
    assert_eq!(err.reason(), "degenerate-gradient");
    assert!(err.is_invalid_color_value());
}

#[test]
fn rejects_bad_solids() {
    for raw in [
        "",
        "2e2e2e",
        "#ggg",
        "#12345",
        "#1234567",
        "#fff(101%)",
        "#fff(20)",
        "#fff (20%)",
    ] {
        let err = parse_color_value(raw).unwrap_err();
        assert_eq!(err.reason(), "invalid-color-value", "input {raw:?}");
    }
}

#[test]
fn trailing_dash_is_invalid() {
    let err = parse_color_value("#fff-").unwrap_err();
    assert!(matches!(
        err,
        ParseFailure::InvalidColorValue { ref offending, .. } if offending.is_empty()
    ));
}

#[test]
fn hex_color_keeps_spelling() {
    let value = hex("#CBFF2E");
    assert_eq!(value.as_str(), "#CBFF2E");
    assert_eq!(value.color(), swatch_common::Color::from_rgba(203, 255, 46, 255));
    assert!(HexColor::parse("CBFF2E").is_none());
}

#[test]
fn gradient_needs_two_stops() {
    let stop = GradientStop::new(0.0, hex("#000"), None).unwrap();
    assert!(Gradient::new(vec![stop.clone()]).is_none());
    assert!(Gradient::new(vec![stop.clone(), stop]).is_some());
    assert!(GradientStop::new(-0.1, hex("#000"), None).is_none());
}
