use std::fmt;

/// Opacity as a whole percentage, `0..=100`.
///
/// Color names carry opacity as `(NN%)`, the host stores an 8-bit alpha and
/// the JSON interchange uses a `0..=1` fraction. Whole percentages convert
/// losslessly to and from fractions; alpha conversions round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Opacity(u8);

impl Opacity {
    pub const OPAQUE: Opacity = Opacity(100);

    pub fn from_percent(percent: u8) -> Option<Self> {
        (percent <= 100).then_some(Self(percent))
    }

    pub fn from_fraction(fraction: f64) -> Option<Self> {
        if !(0.0..=1.0).contains(&fraction) {
            return None;
        }
        Some(Self((fraction * 100.0).round() as u8))
    }

    pub fn from_alpha(alpha: u8) -> Self {
        Self((f64::from(alpha) / 255.0 * 100.0).round() as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn alpha(self) -> u8 {
        (f64::from(self.0) / 100.0 * 255.0).round() as u8
    }

    pub fn is_opaque(self) -> bool {
        self.0 == 100
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
