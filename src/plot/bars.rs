//! Grouped bar chart of per-class bucket shares.

use plotters::prelude::*;

use crate::domain::{Canvas, SplitDistribution};
use crate::error::Result;
use crate::plot::{draw_rotated_labels, font, headroom, percent_decimals, percent_tick, render_svg, title_style, Chart, PRIMARY, SECONDARY};
use crate::report::title_case;

/// Width of one bar in bucket units; a pair spans twice this.
const BAR_WIDTH: f64 = 0.35;

/// One bar pair per bucket: positive class first, negative class second.
pub fn render_distribution_bars(dist: &SplitDistribution, canvas: &Canvas) -> Result<Chart> {
    let title = title_case(&dist.field);
    let labels = dist.buckets.labels();
    let n = labels.len();

    let y_top = headroom(
        dist.positive
            .fractions
            .iter()
            .chain(&dist.negative.fractions)
            .copied()
            .fold(0.0, f64::max),
        0.05,
    );
    let decimals = percent_decimals(y_top);

    render_svg(canvas, &title, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(&title, title_style(20.0))
            .margin(20)
            .x_label_area_size(150)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.3f64..(n as f64 - 0.3 + 2.0 * BAR_WIDTH), 0f64..y_top)?;

        // Bucket labels are drawn separately so they sit under each pair.
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|_| String::new())
            .y_label_formatter(&|v| percent_tick(*v, decimals))
            .y_desc("share of class")
            .label_style(font(13.0))
            .draw()?;

        for (class, color, offset) in [(&dist.positive, PRIMARY, 0.0), (&dist.negative, SECONDARY, BAR_WIDTH)] {
            chart
                .draw_series(class.fractions.iter().enumerate().map(move |(i, &share)| {
                    let x = i as f64 + offset;
                    Rectangle::new([(x, 0.0), (x + BAR_WIDTH, share)], color.filled())
                }))?
                .label(class.label.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.filled()));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        let anchors: Vec<(i32, i32)> = (0..n)
            .map(|i| chart.backend_coord(&(i as f64 + BAR_WIDTH, 0.0)))
            .collect();
        draw_rotated_labels(root, &anchors, &labels)
    })
}
