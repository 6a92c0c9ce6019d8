mod color;
mod kinds;
mod opacity;

pub use color::*;
pub use kinds::*;
pub use opacity::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_short_forms() {
        assert_eq!(
            Color::from_hex("#f80").unwrap(),
            Color::from_rgba(255, 136, 0, 255)
        );
        assert_eq!(
            Color::from_hex("#f808").unwrap(),
            Color::from_rgba(255, 136, 0, 136)
        );
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("00ff00").unwrap();
        assert_eq!(c, Color::from_rgba(0, 255, 0, 255));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abcde").is_none());
        assert!(Color::from_hex("#ab").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn color_to_hex_opaque() {
        let c = Color::from_rgba(255, 0, 128, 255);
        assert_eq!(c.to_hex(), "#ff0080");
    }

    #[test]
    fn color_to_hex_with_alpha() {
        let c = Color::from_rgba(255, 0, 128, 128);
        assert_eq!(c.to_hex(), "#ff008080");
        assert_eq!(c.to_rgb_hex(), "#ff0080");
    }

    #[test]
    fn color_with_opacity_replaces_alpha() {
        let c = Color::from_rgba(46, 46, 46, 255).with_opacity(Opacity::from_percent(20).unwrap());
        assert_eq!(c.a, 51);
        assert!((c.alpha_fraction() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn opacity_percent_conversions() {
        assert_eq!(Opacity::from_alpha(255).percent(), 100);
        assert_eq!(Opacity::from_alpha(0).percent(), 0);
        assert_eq!(Opacity::from_alpha(128).percent(), 50);
        assert_eq!(Opacity::from_percent(90).unwrap().alpha(), 230);
        assert!(Opacity::from_percent(101).is_none());
    }

    #[test]
    fn opacity_fraction_round_trip_for_whole_percentages() {
        for percent in 0..=100u8 {
            let opacity = Opacity::from_percent(percent).unwrap();
            assert_eq!(Opacity::from_fraction(opacity.fraction()), Some(opacity));
            assert_eq!(Opacity::from_alpha(opacity.alpha()), opacity);
        }
        assert_eq!(Opacity::from_fraction(0.9).unwrap().fraction(), 0.9);
        assert!(Opacity::from_fraction(1.5).is_none());
        assert!(Opacity::from_fraction(f64::NAN).is_none());
    }

    #[test]
    fn gradient_type_parse_and_display() {
        assert_eq!("linear".parse::<GradientType>().unwrap(), GradientType::Linear);
        assert_eq!("radial".parse::<GradientType>().unwrap(), GradientType::Radial);
        assert!("conic".parse::<GradientType>().is_err());
        assert_eq!(GradientType::Radial.to_string(), "radial");
    }

    #[test]
    fn gradient_type_serialization() {
        let json = serde_json::to_string(&GradientType::Linear).unwrap();
        assert_eq!(json, "\"linear\"");
        let parsed: GradientType = serde_json::from_str("\"radial\"").unwrap();
        assert_eq!(parsed, GradientType::Radial);
    }

    #[test]
    fn contrast_mode_variants() {
        assert_eq!(ContrastMode::default(), ContrastMode::Pointwise);
        for mode in [ContrastMode::Pointwise, ContrastMode::Average] {
            let json = serde_json::to_string(&mode).unwrap();
            let parsed: ContrastMode = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, mode);
            assert_eq!(mode.as_str().parse::<ContrastMode>().unwrap(), mode);
        }
    }
}
