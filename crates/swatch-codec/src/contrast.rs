//! Black or white text over a color swatch.
//!
//! The swatch is treated as painted over a white backdrop: its luminance is
//! composited with white by its alpha, and text is black when the result is
//! brighter than the midpoint.

use swatch_common::{Color, ContrastMode};

use crate::value::ColorValue;

/// Composite luminance above which black text is used.
pub const BLACK_TEXT_THRESHOLD: f64 = 0.5;

/// Where a gradient is sampled in [`ContrastMode::Pointwise`] mode by default.
pub const DEFAULT_SAMPLE_POSITION: f64 = 0.5;

/// A gradient stop for contrast math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

/// Channels in `0.0..=255.0`, alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Sample {
    fn of(color: Color) -> Self {
        Self {
            r: f64::from(color.r),
            g: f64::from(color.g),
            b: f64::from(color.b),
            a: color.alpha_fraction(),
        }
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |from: f64, to: f64| from + (to - from) * t;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    fn black_text(self) -> bool {
        should_use_black_text(self.r, self.g, self.b, self.a)
    }
}

/// Weighted luminance of 0-255 channels, in `0.0..=1.0`.
pub fn relative_luminance(r: f64, g: f64, b: f64) -> f64 {
    0.2126 * (r / 255.0) + 0.7152 * (g / 255.0) + 0.0722 * (b / 255.0)
}

/// Luminance seen when a color with this luminance and alpha sits on white.
pub fn composite_over_white(luminance: f64, alpha: f64) -> f64 {
    luminance * alpha + (1.0 - alpha)
}

pub fn should_use_black_text(r: f64, g: f64, b: f64, alpha: f64) -> bool {
    composite_over_white(relative_luminance(r, g, b), alpha) > BLACK_TEXT_THRESHOLD
}

pub fn should_use_black_text_for_color(color: Color) -> bool {
    Sample::of(color).black_text()
}

/// Text decision for a gradient, by sampling or by averaging.
///
/// `position` only matters for [`ContrastMode::Pointwise`] and defaults to
/// [`DEFAULT_SAMPLE_POSITION`].
///
/// # Panics
///
/// Pointwise needs at least one stop with a numeric position, average at
/// least two.
pub fn should_use_black_text_for_gradient(
    stops: &[ColorStop],
    mode: ContrastMode,
    position: Option<f64>,
) -> bool {
    match mode {
        ContrastMode::Pointwise => {
            should_use_black_text_at(stops, position.unwrap_or(DEFAULT_SAMPLE_POSITION))
        }
        ContrastMode::Average => should_use_black_text_average(stops),
    }
}

/// Interpolate the gradient at `position` and decide on that color.
///
/// Positions outside the stops clamp to the first or last stop. Stops whose
/// position is NaN are ignored.
///
/// # Panics
///
/// If no stop has a position that is a number.
pub fn should_use_black_text_at(stops: &[ColorStop], position: f64) -> bool {
    sample_at(stops, position).black_text()
}

/// Average the gradient stop-to-stop (trapezoids weighted by the distance
/// between stops) and decide on the average color. Stops whose position is
/// NaN are ignored.
///
/// # Panics
///
/// If fewer than two stops have a position that is a number.
pub fn should_use_black_text_average(stops: &[ColorStop]) -> bool {
    average(stops).black_text()
}

/// Text decision for any parsed color value.
pub fn should_use_black_text_for_value(
    value: &ColorValue,
    mode: ContrastMode,
    position: Option<f64>,
) -> bool {
    match value {
        ColorValue::Solid(solid) => should_use_black_text_for_color(solid.color()),
        ColorValue::Gradient(gradient) => {
            let stops: Vec<ColorStop> = gradient
                .stops()
                .iter()
                .map(|stop| ColorStop {
                    position: stop.position,
                    color: stop.color(),
                })
                .collect();
            should_use_black_text_for_gradient(&stops, mode, position)
        }
    }
}

/// Stops with a NaN position are left out.
fn sorted(stops: &[ColorStop]) -> Vec<ColorStop> {
    let mut sorted: Vec<ColorStop> = stops
        .iter()
        .copied()
        .filter(|stop| !stop.position.is_nan())
        .collect();
    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
    sorted
}

fn sample_at(stops: &[ColorStop], position: f64) -> Sample {
    let stops = sorted(stops);
    assert!(!stops.is_empty(), "cannot sample a gradient with no stops");
    let first = stops[0];
    let last = stops[stops.len() - 1];

    let position = if position.is_nan() {
        DEFAULT_SAMPLE_POSITION
    } else {
        position
    };
    let position = position.clamp(first.position, last.position);

    let (start, end) = stops
        .windows(2)
        .find(|pair| position >= pair[0].position && position <= pair[1].position)
        .map(|pair| (pair[0], pair[1]))
        .unwrap_or((first, last));

    let span = end.position - start.position;
    let progress = if span == 0.0 {
        0.0
    } else {
        (position - start.position) / span
    };

    Sample::of(start.color).lerp(Sample::of(end.color), progress)
}

fn average(stops: &[ColorStop]) -> Sample {
    let stops = sorted(stops);
    assert!(
        stops.len() >= 2,
        "gradient average needs at least 2 stops, got {}",
        stops.len()
    );

    let mut total = Sample {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
    let mut total_weight = 0.0;

    for pair in stops.windows(2) {
        let (current, next) = (Sample::of(pair[0].color), Sample::of(pair[1].color));
        let weight = pair[1].position - pair[0].position;
        total.r += (current.r + next.r) / 2.0 * weight;
        total.g += (current.g + next.g) / 2.0 * weight;
        total.b += (current.b + next.b) / 2.0 * weight;
        total.a += (current.a + next.a) / 2.0 * weight;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        // Every stop sits at one position: plain mean.
        let n = stops.len() as f64;
        return stops.iter().map(|s| Sample::of(s.color)).fold(total, |acc, s| Sample {
            r: acc.r + s.r / n,
            g: acc.g + s.g / n,
            b: acc.b + s.b / n,
            a: acc.a + s.a / n,
        });
    }

    Sample {
        r: total.r / total_weight,
        g: total.g / total_weight,
        b: total.b / total_weight,
        a: total.a / total_weight,
    }
}
