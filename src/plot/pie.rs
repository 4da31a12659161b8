//! Concentration pie chart.

use std::f64::consts::TAU;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::domain::{Canvas, SummaryTable};
use crate::error::Result;
use crate::plot::{font, render_svg, title_style, Chart};
use crate::report::{format_percent, title_case};

/// Arc resolution for a full circle.
const ARC_STEPS: f64 = 180.0;

/// Legend swatch plus gap before the label, in pixels.
const LEGEND_SWATCH: u32 = 24;
/// Approximate advance of one legend character at 15px.
const LEGEND_CHAR_PX: u32 = 9;
const LEGEND_PADDING: u32 = 16;

/// One drawn wedge, angles in radians counter-clockwise from 3 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Slice {
    pub label: String,
    pub share: f64,
    pub start: f64,
    pub end: f64,
}

/// Lay out wedges for every row with a positive share.
pub(crate) fn slices(table: &SummaryTable) -> Vec<Slice> {
    let total: f64 = table.rows.iter().map(|r| r.concentration.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    table
        .rows
        .iter()
        .filter(|r| r.concentration > 0.0)
        .map(|r| {
            let sweep = TAU * r.concentration / total;
            let slice = Slice {
                label: r.label.clone(),
                share: r.concentration,
                start: angle,
                end: angle + sweep,
            };
            angle += sweep;
            slice
        })
        .collect()
}

/// Draw concentration shares as a pie with percentage labels and a legend.
pub fn render_concentration_pie(table: &SummaryTable, canvas: &Canvas) -> Result<Chart> {
    let title = format!("{}: Concentration", title_case(&table.field));
    let wedges = slices(table);

    render_svg(canvas, &title, |root| {
        let area = root.titled(&title, title_style(20.0))?;
        let (w, _) = area.dim_in_pixel();
        let legend = legend_layout(wedges.iter().map(|s| s.label.as_str()), w);
        let (pie_area, legend_area) = area.split_horizontally(w - legend.width);

        let (pw, ph) = pie_area.dim_in_pixel();
        let (cx, cy) = (pw as f64 / 2.0, ph as f64 / 2.0);
        let radius = (pw.min(ph) as f64) * 0.36;

        let pct_style = font(14.0).color(&BLACK).pos(Pos::new(HPos::Center, VPos::Center));
        let label_style = font(15.0).color(&BLACK).pos(Pos::new(HPos::Center, VPos::Center));

        for (i, slice) in wedges.iter().enumerate() {
            let color = Palette99::pick(i).to_rgba();
            pie_area.draw(&Polygon::new(wedge_points(cx, cy, radius, slice), color.filled()))?;

            let mid = (slice.start + slice.end) / 2.0;
            pie_area.draw(&Text::new(
                format_percent(slice.share, 2),
                polar(cx, cy, radius * 0.62, mid),
                pct_style.clone(),
            ))?;
            pie_area.draw(&Text::new(
                slice.label.clone(),
                polar(cx, cy, radius * 1.12, mid),
                label_style.clone(),
            ))?;
        }

        for (i, slice) in wedges.iter().enumerate() {
            let y = 20 + 24 * i as i32;
            let color = Palette99::pick(i).to_rgba();
            legend_area.draw(&Rectangle::new([(0, y), (16, y + 16)], color.filled()))?;
            legend_area.draw(&Text::new(
                fit_label(&slice.label, legend.max_chars),
                (LEGEND_SWATCH as i32, y),
                font(15.0).color(&BLACK),
            ))?;
        }

        Ok(())
    })
}

/// Width of the legend column and the label length it can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LegendLayout {
    pub width: u32,
    pub max_chars: usize,
}

/// Size the legend from its longest label, capped at a third of the canvas.
pub(crate) fn legend_layout<'a>(labels: impl Iterator<Item = &'a str>, canvas_width: u32) -> LegendLayout {
    let longest = labels.map(|l| l.chars().count()).max().unwrap_or(0) as u32;
    let wanted = LEGEND_SWATCH + longest * LEGEND_CHAR_PX + LEGEND_PADDING;
    let width = wanted.min(canvas_width / 3);
    let max_chars = (width.saturating_sub(LEGEND_SWATCH + LEGEND_PADDING) / LEGEND_CHAR_PX) as usize;
    LegendLayout { width, max_chars }
}

fn fit_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let mut out: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (i32, i32) {
    // Screen y grows downward.
    ((cx + r * angle.cos()).round() as i32, (cy - r * angle.sin()).round() as i32)
}

fn wedge_points(cx: f64, cy: f64, r: f64, slice: &Slice) -> Vec<(i32, i32)> {
    let sweep = slice.end - slice.start;
    let steps = ((sweep / TAU) * ARC_STEPS).ceil().max(2.0) as usize;

    let mut points = Vec::with_capacity(steps + 2);
    points.push(polar(cx, cy, 0.0, 0.0));
    for k in 0..=steps {
        let a = slice.start + sweep * k as f64 / steps as f64;
        points.push(polar(cx, cy, r, a));
    }
    points
}
