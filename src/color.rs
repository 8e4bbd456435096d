//! Colors with channels in \[0, 1\].

use rgb::{RGB, RGB8};
use crate::error::{Error, Result};

/// A color whose red, green and blue channels are in \[0, 1\].
pub type Color = RGB<f64>;

/// Default color of the positive extreme (dark red).
pub const POSITIVE: Color = RGB { r: 0.7, g: 0., b: 0. };

/// Default color of the negative extreme (dark blue).
pub const NEGATIVE: Color = RGB { r: 0., g: 0., b: 0.7 };

/// Default neutral color.
pub const WHITE: Color = RGB { r: 1., g: 1., b: 1. };

/// Build a color from a row of channels, checking that it has exactly
/// three entries, each in \[0, 1\].  `option` names the setting in
/// error messages.
pub fn from_slice(option: &'static str, c: &[f64]) -> Result<Color> {
    match *c {
        [r, g, b] => check(option, RGB { r, g, b }),
        _ => Err(Error::ColorShape { option, len: c.len() }),
    }
}

/// Check that every channel of `c` is in \[0, 1\].
pub fn check(option: &'static str, c: Color) -> Result<Color> {
    for value in [c.r, c.g, c.b] {
        if !(0. ..= 1.).contains(&value) {
            return Err(Error::ColorChannel { option, value })
        }
    }
    Ok(c)
}

/// Convert to 8 bits per channel.
pub fn to_rgb8(c: Color) -> RGB8 {
    let q = |x: f64| (255. * x.clamp(0., 1.)).round() as u8;
    RGB8 { r: q(c.r), g: q(c.g), b: q(c.b) }
}

/// CSS hexadecimal notation, e.g. `#ff0000`.
pub fn css_string(c: Color) -> String {
    let c = to_rgb8(c);
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Convert the color to grayscale.
pub fn to_gray(c: Color) -> Color {
    // Integer weights keep white and black exact.
    let x = (299. * c.r + 587. * c.g + 114. * c.b) / 1000.;
    RGB { r: x, g: x, b: x }
}
