//! Applying a ramp to a plotting surface.
//!
//! The host graphics system is reached through the [`Surface`] trait.
//! [`apply`] builds the ramp, hands it to the surface together with the
//! range and creates the legend.

use crate::error::{Error, Result};
use crate::options::{Config, Warning};
use crate::ramp::ColorRamp;

/// Identifier of a legend created by a [`Surface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LegendHandle(pub u64);

/// A plotting surface with a color scale and legends.
pub trait Surface {
    /// Make `ramp` the active color scale.
    fn set_color_scale(&mut self, ramp: &ColorRamp) -> Result<()>;

    /// Bind the first and last colors of the scale to `low` and `high`.
    fn set_limits(&mut self, low: f64, high: f64) -> Result<()>;

    /// Create a legend bound to the surface.
    fn create_legend(&mut self) -> Result<LegendHandle>;

    /// Set the (rich-text) label of a legend.
    fn set_legend_label(&mut self, legend: LegendHandle, label: &str)
                        -> Result<()>;
}

/// What the caller of [`apply`] wants back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Outputs {
    /// The ramp only.
    Ramp,
    /// The legend handle only.
    #[default]
    Legend,
    /// Both the legend handle and the ramp.
    LegendAndRamp,
}

impl Outputs {
    fn legend(self) -> bool { matches!(self, Outputs::Legend | Outputs::LegendAndRamp) }
    fn ramp(self) -> bool { matches!(self, Outputs::Ramp | Outputs::LegendAndRamp) }
}

/// Result of [`apply`].
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub ramp: Option<ColorRamp>,
    pub legend: Option<LegendHandle>,
    pub warnings: Vec<Warning>,
}

/// Build the ramp for `config` and, unless `config.off` is set, apply
/// it to `surface`.
///
/// When the surface is switched off only the ramp can be returned:
/// asking for a legend is an error.
pub fn apply<S>(surface: Option<&mut S>, config: &Config, outputs: Outputs)
                -> Result<Outcome>
where S: Surface + ?Sized {
    let ramp = ColorRamp::new(config);
    if config.off {
        if outputs.legend() {
            return Err(Error::Outputs(
                "a legend cannot be returned when the surface is off"))
        }
        return Ok(Outcome { ramp: Some(ramp), legend: None,
                            warnings: config.warnings.clone() })
    }
    let surface = match surface {
        Some(s) => s,
        None => return Err(Error::Outputs(
            "no surface to apply the ramp to; use “off” to only get the ramp")),
    };
    surface.set_color_scale(&ramp)?;
    surface.set_limits(config.low, config.high)?;
    let legend = surface.create_legend()?;
    if let Some(label) = &config.label {
        surface.set_legend_label(legend, label)?;
    }
    tracing::debug!(?legend, len = ramp.len(), "color scale applied");
    Ok(Outcome {
        ramp: if outputs.ramp() { Some(ramp) } else { None },
        legend: if outputs.legend() { Some(legend) } else { None },
        warnings: config.warnings.clone(),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::options::Options;

    /// Records what it is asked to do.
    #[derive(Default)]
    pub(crate) struct Recorder {
        pub(crate) scale: Option<ColorRamp>,
        pub(crate) limits: Option<(f64, f64)>,
        pub(crate) legends: u64,
        pub(crate) label: Option<(LegendHandle, String)>,
    }

    impl Surface for Recorder {
        fn set_color_scale(&mut self, ramp: &ColorRamp) -> Result<()> {
            self.scale = Some(ramp.clone());
            Ok(())
        }

        fn set_limits(&mut self, low: f64, high: f64) -> Result<()> {
            self.limits = Some((low, high));
            Ok(())
        }

        fn create_legend(&mut self) -> Result<LegendHandle> {
            self.legends += 1;
            Ok(LegendHandle(self.legends))
        }

        fn set_legend_label(&mut self, legend: LegendHandle, label: &str)
                            -> Result<()> {
            self.label = Some((legend, label.to_string()));
            Ok(())
        }
    }

    #[test]
    fn applied() {
        let mut s = Recorder::default();
        let config = Options::new().level(8).label("ΔT (K)")
            .resolve(-1., 3.).unwrap();
        let out = apply(Some(&mut s), &config, Outputs::LegendAndRamp).unwrap();
        assert_eq!(out.legend, Some(LegendHandle(1)));
        assert_eq!(out.ramp, s.scale);
        assert_eq!(s.limits, Some((-1., 3.)));
        assert_eq!(s.label, Some((LegendHandle(1), "ΔT (K)".to_string())));

        let out = apply(Some(&mut s), &config, Outputs::Legend).unwrap();
        assert_eq!(out.legend, Some(LegendHandle(2)));
        assert!(out.ramp.is_none());
    }

    #[test]
    fn off() {
        let mut s = Recorder::default();
        let on = Options::new().level(12).resolve(-2., 5.).unwrap();
        let off = Options::new().level(12).off().resolve(-2., 5.).unwrap();
        let out = apply(Some(&mut s), &off, Outputs::Ramp).unwrap();
        assert!(out.legend.is_none());
        assert!(s.scale.is_none() && s.legends == 0);
        let with_legend = apply(Some(&mut s), &on, Outputs::LegendAndRamp)
            .unwrap();
        assert_eq!(out.ramp, with_legend.ramp);
        assert!(apply(None::<&mut Recorder>, &off, Outputs::Ramp).is_ok());
    }

    #[test]
    fn incompatible() {
        let mut s = Recorder::default();
        let off = Options::new().off().resolve(-2., 5.).unwrap();
        for o in [Outputs::Legend, Outputs::LegendAndRamp] {
            assert!(matches!(apply(Some(&mut s), &off, o),
                             Err(Error::Outputs(_))));
        }
        let on = Options::new().resolve(-2., 5.).unwrap();
        assert!(matches!(apply(None::<&mut Recorder>, &on, Outputs::Ramp),
                         Err(Error::Outputs(_))));
    }
}
