//! Typed configuration of a ramp.
//!
//! [`Options`] collects the optional settings with their defaults;
//! [`Options::resolve`] validates them against a range and produces
//! the [`Config`] consumed by [`crate::ramp`] and [`crate::legend`].

use std::fmt;
use crate::color::{self, Color};
use crate::error::{Error, Result};
use crate::ramp::Spacing;

/// Default number of levels of the longer side of the ramp.
pub const LEVELS: usize = 128;

/// Largest accepted number of levels.
pub const MAX_LEVELS: usize = 1 << 16;

/// Where the neutral color sits.
#[derive(Clone, Copy, Debug, PartialEq)]
enum WhitePoint {
    /// At zero, and only when the range straddles it.
    Zero,
    /// Full spectrum centered on the middle of the range.
    Mean,
    /// Full spectrum centered on the given value.
    At(f64),
}

/// Optional settings of a ramp.
///
/// # Example
///
/// ```
/// use pwn_colormap::Options;
/// let config = Options::new().level(20).log().resolve(-1., 2.)?;
/// assert_eq!(config.levels, 20);
/// # Ok::<(), pwn_colormap::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Options {
    levels: usize,
    positive: Option<Color>,
    negative: Option<Color>,
    white: Color,
    spacing: Spacing,
    white_point: WhitePoint,
    reverse: bool,
    label: Option<String>,
    off: bool,
}

impl Default for Options {
    fn default() -> Self { Self::new() }
}

impl Options {
    /// Default options: 128 levels, dark red for positive values, dark
    /// blue for negative ones, white in between and linear spacing.
    pub fn new() -> Self {
        Options {
            levels: LEVELS,
            positive: None,
            negative: None,
            white: color::WHITE,
            spacing: Spacing::Linear,
            white_point: WhitePoint::Zero,
            reverse: false,
            label: None,
            off: false,
        }
    }

    /// Number of levels of the longer side of the ramp.
    pub fn level(mut self, n: usize) -> Self {
        self.levels = n;
        self
    }

    /// Color of the positive extreme.
    pub fn positive(mut self, c: Color) -> Self {
        self.positive = Some(c);
        self
    }

    /// Color of the negative extreme.
    pub fn negative(mut self, c: Color) -> Self {
        self.negative = Some(c);
        self
    }

    /// Neutral color.
    pub fn white(mut self, c: Color) -> Self {
        self.white = c;
        self
    }

    /// Logarithmic spacing with a warp factor of 1.
    pub fn log(self) -> Self { self.log_factor(1.) }

    /// Logarithmic spacing with warp factor `f`.  Positive factors
    /// compress the colors near white, negative ones expand them.
    pub fn log_factor(mut self, f: f64) -> Self {
        self.spacing = Spacing::Log(f);
        self
    }

    /// Use both sides of the ramp whatever the sign of the range, with
    /// white in the middle of the range.
    pub fn full(mut self) -> Self {
        self.white_point = WhitePoint::Mean;
        self
    }

    /// Use both sides of the ramp with white at `x`, which must be
    /// strictly inside the range.
    pub fn full_at(mut self, x: f64) -> Self {
        self.white_point = WhitePoint::At(x);
        self
    }

    /// Swap the default positive and negative colors.  Explicit colors
    /// take precedence.
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Label of the legend.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Only compute the ramp; leave the surface alone.
    pub fn off(mut self) -> Self {
        self.off = true;
        self
    }

    /// Validate the options for the range `low ..= high`.
    pub fn resolve(&self, low: f64, high: f64) -> Result<Config> {
        if !(low < high) || !low.is_finite() || !high.is_finite() {
            return Err(Error::Range { low, high })
        }
        if self.levels == 0 || self.levels > MAX_LEVELS {
            return Err(Error::Level(self.levels as f64))
        }
        if let Spacing::Log(f) = self.spacing {
            if !Spacing::valid_factor(f) {
                return Err(Error::LogFactor(f))
            }
        }
        let (full, white_point) = match self.white_point {
            WhitePoint::Zero => (false, 0.),
            WhitePoint::Mean => (true, low / 2. + high / 2.),
            WhitePoint::At(x) => {
                if !(low < x && x < high) {
                    return Err(Error::WhitePoint { white: x, low, high })
                }
                (true, x)
            }
        };

        let mut warnings = Vec::new();
        let (default_p, default_n) =
            if self.reverse { (color::NEGATIVE, color::POSITIVE) }
            else { (color::POSITIVE, color::NEGATIVE) };
        let positive = match self.positive {
            Some(c) => {
                if self.reverse {
                    warnings.push(Warning::ReverseOverridden("colorP"));
                }
                color::check("colorP", c)?
            }
            None => default_p,
        };
        let negative = match self.negative {
            Some(c) => {
                if self.reverse {
                    warnings.push(Warning::ReverseOverridden("colorN"));
                }
                color::check("colorN", c)?
            }
            None => default_n,
        };
        let white = color::check("colorW", self.white)?;
        for w in &warnings {
            tracing::warn!("{}", w);
        }

        Ok(Config {
            low, high, white_point, full,
            levels: self.levels,
            positive, negative, white,
            spacing: self.spacing,
            label: self.label.clone(),
            off: self.off,
            warnings,
        })
    }
}

/// Non-fatal conditions met while resolving [`Options`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Warning {
    /// An explicit color (named by the field) was given together with
    /// the reversal flag and takes precedence over it.
    ReverseOverridden(&'static str),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::ReverseOverridden(option) => write!(
                f, "{option} was given explicitly and overrides “rev”"),
        }
    }
}

/// Validated settings of a ramp.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Lower bound of the range.
    pub low: f64,
    /// Upper bound of the range.
    pub high: f64,
    /// Value mapped to the neutral color.
    pub white_point: f64,
    /// Whether both sides are used whatever the sign of the range.
    pub full: bool,
    /// Number of levels of the longer side.
    pub levels: usize,
    pub positive: Color,
    pub negative: Color,
    pub white: Color,
    pub spacing: Spacing,
    pub label: Option<String>,
    /// Whether the surface should be left alone.
    pub off: bool,
    pub warnings: Vec<Warning>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB;

    #[test]
    fn defaults() {
        let c = Options::new().resolve(-2., 2.).unwrap();
        assert_eq!(c.levels, LEVELS);
        assert_eq!(c.positive, color::POSITIVE);
        assert_eq!(c.negative, color::NEGATIVE);
        assert_eq!(c.white, color::WHITE);
        assert_eq!(c.white_point, 0.);
        assert!(!c.full && !c.off);
        assert!(c.warnings.is_empty());
    }

    #[test]
    fn range() {
        assert!(matches!(Options::new().resolve(5., 2.),
                         Err(Error::Range { .. })));
        assert!(matches!(Options::new().resolve(1., 1.),
                         Err(Error::Range { .. })));
        assert!(matches!(Options::new().resolve(f64::NAN, 1.),
                         Err(Error::Range { .. })));
    }

    #[test]
    fn level_and_log() {
        assert!(matches!(Options::new().level(0).resolve(-1., 1.),
                         Err(Error::Level(_))));
        assert!(matches!(Options::new().log_factor(0.).resolve(-1., 1.),
                         Err(Error::LogFactor(_))));
        let c = Options::new().log().resolve(-1., 1.).unwrap();
        assert_eq!(c.spacing, Spacing::Log(1.));
    }

    #[test]
    fn bounded_inputs() {
        assert!(matches!(Options::new().level(MAX_LEVELS + 1).resolve(-1., 1.),
                         Err(Error::Level(_))));
        assert!(Options::new().level(MAX_LEVELS).resolve(-1., 1.).is_ok());
        // 10^400 is not representable.
        assert!(matches!(Options::new().log_factor(400.).resolve(-1., 1.),
                         Err(Error::LogFactor(_))));
        assert!(Options::new().log_factor(300.).resolve(-1., 1.).is_ok());
        assert!(Options::new().log_factor(-400.).resolve(-1., 1.).is_ok());
    }

    #[test]
    fn white_point() {
        let c = Options::new().full().resolve(2., 6.).unwrap();
        assert!(c.full);
        assert_eq!(c.white_point, 4.);
        let c = Options::new().full_at(3.).resolve(2., 6.).unwrap();
        assert_eq!(c.white_point, 3.);
        for x in [2., 6., 7.] {
            assert!(matches!(Options::new().full_at(x).resolve(2., 6.),
                             Err(Error::WhitePoint { .. })));
        }
    }

    #[test]
    fn reverse() {
        let c = Options::new().reverse().resolve(-2., 2.).unwrap();
        assert_eq!(c.positive, color::NEGATIVE);
        assert_eq!(c.negative, color::POSITIVE);
        assert!(c.warnings.is_empty());

        let p = RGB { r: 0.6, g: 0.4, b: 0.3 };
        let c = Options::new().reverse().positive(p).resolve(-2., 2.).unwrap();
        assert_eq!(c.positive, p);
        assert_eq!(c.negative, color::POSITIVE);
        assert_eq!(c.warnings, vec![Warning::ReverseOverridden("colorP")]);
    }

    #[test]
    fn bad_color() {
        let c = RGB { r: 0., g: -0.1, b: 0. };
        assert!(matches!(Options::new().white(c).resolve(-1., 1.),
                         Err(Error::ColorChannel { option: "colorW", .. })));
    }
}
