//! Positive-white-negative color ramps.
//!
//! A diverging ramp goes from a negative-extreme color, through a
//! neutral (white) color, to a positive-extreme color.  Given a range
//! of values, [`build`] decides how many levels fall on each side of
//! the white point so that both sides change color at the same rate
//! per unit value, optionally warps the spacing logarithmically, and
//! assembles the ordered list of colors.
//!
//! - [`Options`] configures the ramp (levels, colors, log warp, white
//!   point, reversal).
//! - [`ColorRamp`] is the result.
//! - [`Surface`] is the seam to a plotting system; [`build_and_apply`]
//!   sets its color scale and creates a legend.  [`HtmlSurface`]
//!   renders the legend as HTML.
//! - [`args`] resolves flat option lists such as
//!   `-1 2 level 20 colorP 0.6,0.4,0.3`.
//!
//! # Example
//!
//! ```
//! use pwn_colormap::{build, Options, color};
//! let ramp = build(-1., 2., &Options::new().level(20))?;
//! assert_eq!(ramp.len(), 29);
//! assert_eq!(ramp.colors()[ramp.white_index()], color::WHITE);
//! # Ok::<(), pwn_colormap::Error>(())
//! ```

pub mod args;
pub mod color;
pub mod error;
pub mod html;
pub mod legend;
pub mod options;
pub mod ramp;

pub use color::Color;
pub use error::{Error, Result};
pub use html::HtmlSurface;
pub use legend::{LegendHandle, Outcome, Outputs, Surface};
pub use options::{Config, Options, Warning};
pub use ramp::{ColorRamp, Spacing};

/// Build the ramp for the range `low ..= high`.
pub fn build(low: f64, high: f64, options: &Options) -> Result<ColorRamp> {
    Ok(ColorRamp::new(&options.resolve(low, high)?))
}

/// Build the ramp for the range `low ..= high` and, unless the options
/// are switched [`off`](Options::off), make it the color scale of
/// `surface` and create a legend.  `outputs` selects what is returned.
pub fn build_and_apply<S>(surface: &mut S, low: f64, high: f64,
                          options: &Options, outputs: Outputs)
                          -> Result<Outcome>
where S: Surface + ?Sized {
    legend::apply(Some(surface), &options.resolve(low, high)?, outputs)
}
