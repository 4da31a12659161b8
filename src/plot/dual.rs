//! Dual-axis chart: rate line over volume bars, sharing one category axis.

use plotters::prelude::*;

use crate::domain::{Canvas, SplitSummary};
use crate::error::Result;
use crate::plot::{draw_rotated_labels, font, headroom, percent_decimals, percent_tick, render_svg, title_style, Chart, PRIMARY, SECONDARY};
use crate::report::title_case;

/// Half the width of a count bar, in category units.
const HALF_BAR: f64 = 0.4;

/// Primary axis: mean of the binary field per category. Secondary axis: row count.
pub fn render_split_summary(summary: &SplitSummary, canvas: &Canvas) -> Result<Chart> {
    let title = title_case(&summary.field);
    let labels: Vec<String> = summary.categories.iter().map(|c| c.label.clone()).collect();
    let k = labels.len() as f64;

    let rate_top = headroom(summary.categories.iter().map(|c| c.mean).fold(0.0, f64::max), 0.05).min(1.05);
    let count_top = headroom(summary.categories.iter().map(|c| c.count as f64).fold(0.0, f64::max), 1.0);
    let decimals = percent_decimals(rate_top);
    let x_range = -0.5f64..(k - 0.5);

    render_svg(canvas, &title, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(&title, title_style(20.0))
            .margin(20)
            .x_label_area_size(120)
            .y_label_area_size(70)
            .right_y_label_area_size(70)
            .build_cartesian_2d(x_range.clone(), 0f64..rate_top)?
            .set_secondary_coord(x_range.clone(), 0f64..count_top);

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|_| String::new())
            .y_label_formatter(&|v| percent_tick(*v, decimals))
            .y_desc(format!("{} rate", summary.binary_field))
            .label_style(font(13.0))
            .draw()?;

        chart
            .configure_secondary_axes()
            .y_desc("count")
            .y_label_formatter(&|v| format!("{v:.0}"))
            .draw()?;

        // Bars first so the rate line stays on top.
        chart.draw_secondary_series(summary.categories.iter().enumerate().map(|(i, c)| {
            let x = i as f64;
            Rectangle::new([(x - HALF_BAR, 0.0), (x + HALF_BAR, c.count as f64)], SECONDARY.mix(0.5).filled())
        }))?;

        let rates: Vec<(f64, f64)> = summary
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| (i as f64, c.mean))
            .collect();
        chart.draw_series(LineSeries::new(rates.iter().copied(), PRIMARY.stroke_width(2)))?;
        chart.draw_series(rates.iter().map(|&p| Circle::new(p, 4, PRIMARY.filled())))?;

        let anchors: Vec<(i32, i32)> = (0..labels.len())
            .map(|i| chart.backend_coord(&(i as f64, 0.0)))
            .collect();
        draw_rotated_labels(root, &anchors, &labels)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryStat;

    #[test]
    fn renders_line_bars_and_category_labels() {
        let summary = SplitSummary {
            field: "fuel type".into(),
            binary_field: "churn".into(),
            categories: vec![
                CategoryStat { label: "diesel".into(), count: 4, sum: 1, mean: 0.25 },
                CategoryStat { label: "petrol".into(), count: 10, sum: 6, mean: 0.6 },
            ],
        };
        let chart = render_split_summary(&summary, &Canvas::split()).unwrap();
        assert_eq!(chart.title(), "Fuel Type");
        let svg = chart.svg();
        assert!(svg.contains("Fuel Type"));
        assert!(svg.contains("diesel"));
        assert!(svg.contains("petrol"));
        assert!(svg.contains("churn rate"));
        assert!(svg.contains("<polyline"));
    }
}
