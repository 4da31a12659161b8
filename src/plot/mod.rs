//! Plotters-powered chart rendering.
//!
//! Each renderer is data-driven: the summaries are computed in
//! `crate::analysis` and only drawn here. Charts are rendered into an in-memory
//! SVG document sized by a caller-supplied `Canvas` and handed back as a
//! `Chart`, so nothing depends on a display or on shared drawing state.

use std::fs;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle, FontTransform};

use crate::domain::Canvas;
use crate::error::Result;
use crate::report::format_percent;

pub mod bars;
pub mod dual;
pub mod pie;

pub use bars::render_distribution_bars;
pub use dual::render_split_summary;
pub use pie::render_concentration_pie;

/// Title color shared by every chart.
pub(crate) const TITLE_COLOR: RGBColor = BLUE;

/// Series colors, matching the usual first two plotting-library defaults.
pub(crate) const PRIMARY: RGBColor = RGBColor(31, 119, 180);
pub(crate) const SECONDARY: RGBColor = RGBColor(255, 127, 14);

/// A rendered chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    title: String,
    canvas: Canvas,
    svg: String,
}

impl Chart {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// The SVG document.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn into_svg(self) -> String {
        self.svg
    }

    pub fn write_svg(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.svg)?;
        Ok(())
    }
}

/// Render onto a fresh white SVG surface and capture the result.
pub(crate) fn render_svg<F>(canvas: &Canvas, title: &str, draw: F) -> Result<Chart>
where
    F: for<'b> FnOnce(&DrawingArea<SVGBackend<'b>, Shift>) -> Result<()>,
{
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, canvas.size()).into_drawing_area();
        root.fill(&WHITE)?;
        draw(&root)?;
        root.present()?;
    }

    Ok(Chart {
        title: title.to_string(),
        canvas: *canvas,
        svg,
    })
}

pub(crate) fn font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
}

pub(crate) fn title_style(size: f64) -> TextStyle<'static> {
    font(size).color(&TITLE_COLOR)
}

/// Decimal places for percentage ticks on an axis that tops out at `max`.
pub(crate) fn percent_decimals(max: f64) -> usize {
    if max >= 0.1 {
        0
    } else if max >= 0.01 {
        1
    } else {
        2
    }
}

pub(crate) fn percent_tick(v: f64, decimals: usize) -> String {
    format_percent(v, decimals)
}

/// Axis ceiling with a little headroom, never below `floor`.
pub(crate) fn headroom(max: f64, floor: f64) -> f64 {
    if max.is_finite() && max > 0.0 { (max * 1.15).max(floor) } else { floor }
}

/// Write category labels under the x-axis, rotated 90° so long labels fit.
///
/// `anchors` are backend pixel positions on the x-axis, one per label.
pub(crate) fn draw_rotated_labels(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    anchors: &[(i32, i32)],
    labels: &[String],
) -> Result<()> {
    const FONT_SIZE: i32 = 13;
    let style = font(f64::from(FONT_SIZE)).transform(FontTransform::Rotate90).color(&BLACK);

    for (&(x, y), label) in anchors.iter().zip(labels) {
        root.draw(&Text::new(label.clone(), (x - FONT_SIZE / 2, y + 8), style.clone()))?;
    }
    Ok(())
}
