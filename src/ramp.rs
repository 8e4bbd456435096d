//! Construction of positive-white-negative ramps.
//!
//! Each side of the ramp goes from the neutral color to an extreme
//! color.  When the range straddles the white point, the longer side
//! gets all the requested levels and the shorter one a proportional
//! number, so that a color step covers the same value span on both
//! sides.

use crate::color::Color;
use crate::options::Config;

/// How the levels of a side are spread between white and the extreme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Spacing {
    /// Equal steps.
    Linear,
    /// Logarithmic steps with the given (non-zero) warp factor.
    /// Positive factors compress the colors near white, negative
    /// factors expand them.  Channels are rounded to 4 decimals.
    Log(f64),
}

impl Spacing {
    /// Whether `f` can be used as a log warp factor: non-zero and small
    /// enough for `10^f` to be finite.
    pub fn valid_factor(f: f64) -> bool {
        f != 0. && f.is_finite() && 10f64.powf(f).is_finite()
    }
}

/// Round to 4 decimal places.
fn round4(x: f64) -> f64 { (x * 1e4).round() / 1e4 }

/// Combine the channels of `a` and `b` pairwise.
fn zip_with(a: Color, b: Color, f: impl Fn(f64, f64) -> f64) -> Color {
    Color { r: f(a.r, b.r), g: f(a.g, b.g), b: f(a.b, b.b) }
}

/// An iterator yielding the `n` colors of a side, from white to the
/// extreme (both included).
pub struct Side {
    white: Color,
    extreme: Color,
    spacing: Spacing,
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl Side {
    pub fn new(white: Color, extreme: Color, n: usize, spacing: Spacing)
               -> Self {
        if n == 0 {
            Side { white, extreme, spacing, flast: 0., last: 0,
                   i: 1, j: 0 } // Empty iterator
        } else {
            Side { white, extreme, spacing, flast: (n - 1) as f64,
                   last: n - 1, i: 0, j: n - 1 }
        }
    }

    /// Return the color of the position `k` (assuming it is in the
    /// range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> Color {
        if k == 0 {
            self.white
        } else if k == self.last {
            self.extreme
        } else {
            match self.spacing {
                Spacing::Linear => {
                    let alpha = (self.last - k) as f64;
                    let beta = k as f64;
                    zip_with(self.white, self.extreme,
                             |w, e| (alpha * w + beta * e) / self.flast)
                }
                Spacing::Log(f) => {
                    let x = (1. + k as f64 * (10f64.powf(f) - 1.)
                             / self.flast).log10();
                    zip_with(self.white, self.extreme,
                             |w, e| round4((e - w) / f * x + w))
                }
            }
        }
    }
}

impl Iterator for Side {
    type Item = Color;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Side {
    fn len(&self) -> usize {
        if self.i <= self.j { self.j - self.i + 1 } else { 0 }
    }
}

impl DoubleEndedIterator for Side {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Which sides a ramp has and their number of levels (white included).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Only white → positive.
    Positive(usize),
    /// Only negative → white.
    Negative(usize),
    /// Negative → white → positive.
    Both { negative: usize, positive: usize },
}

impl Layout {
    /// Decide the sides of the ramp for `config`.
    pub fn of(config: &Config) -> Layout {
        let n = config.levels;
        if !config.full && config.low >= 0. {
            return Layout::Positive(n)
        }
        if !config.full && config.high <= 0. {
            return Layout::Negative(n)
        }
        // Halved so that wide ranges do not overflow.
        let dn = config.white_point / 2. - config.low / 2.;
        let dp = config.high / 2. - config.white_point / 2.;
        // Rounds half away from zero.
        let factored = |ratio: f64| ((ratio * n as f64).round() as usize).max(1);
        let layout = if dn >= dp {
            Layout::Both { negative: n, positive: factored(dp / dn) }
        } else {
            Layout::Both { negative: factored(dn / dp), positive: n }
        };
        tracing::debug!(?layout, low = config.low, high = config.high,
                        white_point = config.white_point, "ramp layout");
        layout
    }

    /// Number of colors of the assembled ramp.
    pub fn len(&self) -> usize {
        match *self {
            Layout::Positive(n) | Layout::Negative(n) => n,
            Layout::Both { negative, positive } =>
                negative.saturating_add(positive) - 1,
        }
    }
}

/// An ordered sequence of colors, from the lowest value to the highest.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRamp {
    colors: Vec<Color>,
    white_index: usize,
}

impl ColorRamp {
    /// Build the ramp described by `config`.
    pub fn new(config: &Config) -> Self {
        let side = |extreme, n| Side::new(config.white, extreme, n,
                                          config.spacing);
        let layout = Layout::of(config);
        match layout {
            Layout::Positive(n) => {
                ColorRamp { colors: side(config.positive, n).collect(),
                            white_index: 0 }
            }
            Layout::Negative(n) => {
                ColorRamp { colors: side(config.negative, n).rev().collect(),
                            white_index: n.saturating_sub(1) }
            }
            Layout::Both { negative, positive } => {
                let mut colors = Vec::with_capacity(layout.len());
                colors.extend(side(config.negative, negative).rev()
                              .take(negative - 1));
                colors.push(config.white);
                colors.extend(side(config.positive, positive).skip(1));
                ColorRamp { colors, white_index: negative - 1 }
            }
        }
    }

    /// Returns the number of colors in the ramp.
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Position of the neutral color.
    pub fn white_index(&self) -> usize { self.white_index }

    /// Returns the colors of the ramp.
    pub fn colors(&self) -> &[Color] { &self.colors }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> { self.colors.iter() }

    pub fn into_vec(self) -> Vec<Color> { self.colors }
}

impl<'a> IntoIterator for &'a ColorRamp {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter { self.colors.iter() }
}
