//! A [`Surface`] rendering its legend as an HTML table of swatches.

use std::io::Write;
use crate::color::{self, Color};
use crate::error::{Error, Result};
use crate::legend::{LegendHandle, Surface};
use crate::ramp::ColorRamp;

/// Total width of the color strip, in pixels.
const STRIP_WIDTH: usize = 600;

/// Collects the color scale, limits and label, then renders them with
/// [`HtmlSurface::render`].
#[derive(Debug, Default)]
pub struct HtmlSurface {
    colors: Vec<Color>,
    limits: Option<(f64, f64)>,
    legend: Option<LegendHandle>,
    label: Option<String>,
}

impl HtmlSurface {
    pub fn new() -> Self { Self::default() }

    /// Write the legend as a standalone HTML page.  Fails if no legend
    /// was created.
    pub fn render(&self, fh: &mut impl Write) -> Result<()> {
        if self.legend.is_none() {
            return Err(Error::Outputs("no legend to render"))
        }
        let title = self.label.as_deref().map(escape)
            .unwrap_or_else(|| "Color scale".to_string());
        writeln!(fh, "<html>\n\
                      <head>\n\
                      <title>{title}</title>\n\
                      </head>\n\
                      <body>")?;
        if let Some(label) = &self.label {
            writeln!(fh, "<h3>{}</h3>", escape(label))?;
        }
        let width = (STRIP_WIDTH / self.colors.len().max(1)).max(1);
        writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
        for &c in &self.colors {
            writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                          background-color: {}\"></td>",
                     color::css_string(c))?;
        }
        writeln!(fh, "</tr><tr>")?;
        for &c in &self.colors {
            writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                          background-color: {}\"></td>",
                     color::css_string(color::to_gray(c)))?;
        }
        writeln!(fh, "</tr></table>")?;
        if let Some((low, high)) = self.limits {
            writeln!(fh, "<table style=\"width: {}px\"><tr>\
                          <td style=\"text-align: left\">{low}</td>\
                          <td style=\"text-align: right\">{high}</td>\
                          </tr></table>",
                     width * self.colors.len())?;
        }
        writeln!(fh, "</body>\n\
                      </html>")?;
        Ok(())
    }
}

impl Surface for HtmlSurface {
    fn set_color_scale(&mut self, ramp: &ColorRamp) -> Result<()> {
        self.colors = ramp.colors().to_vec();
        Ok(())
    }

    fn set_limits(&mut self, low: f64, high: f64) -> Result<()> {
        self.limits = Some((low, high));
        Ok(())
    }

    fn create_legend(&mut self) -> Result<LegendHandle> {
        // A page holds a single legend.
        let h = LegendHandle(0);
        self.legend = Some(h);
        Ok(h)
    }

    fn set_legend_label(&mut self, _: LegendHandle, label: &str)
                        -> Result<()> {
        self.label = Some(label.to_string());
        Ok(())
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
