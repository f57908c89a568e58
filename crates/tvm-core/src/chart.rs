//! Cash-flow bar chart rendering.
//!
//! Purely a visualization sink: consumes a finished cash-flow sequence and
//! writes an SVG file. The computational modules never depend on it.

use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TvmError;
use crate::types::Money;
use crate::TvmResult;

/// Styling and labelling for the cash-flow chart. Passed explicitly per
/// render call; there is no process-wide plotting state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Cash Flows".into(),
            x_label: "Years".into(),
            y_label: "Amount ($)".into(),
            width: 800,
            height: 600,
        }
    }
}

/// Render a labelled bar chart of a cash-flow sequence to an SVG file.
///
/// Bars sit at period indices starting from 1 and each bar carries its
/// value as a text label.
pub fn render_cash_flow_chart(
    path: &Path,
    cash_flows: &[Money],
    config: &ChartConfig,
) -> TvmResult<()> {
    if cash_flows.is_empty() {
        return Err(TvmError::InvalidInput {
            field: "cash_flows".into(),
            reason: "Chart requires at least one cash flow".into(),
        });
    }

    let values: Vec<f64> = cash_flows
        .iter()
        .map(|cf| cf.to_f64().unwrap_or(0.0))
        .collect();
    let periods = values.len() as i32;

    let y_max = values.iter().cloned().fold(0.0_f64, f64::max);
    let y_min = values.iter().cloned().fold(0.0_f64, f64::min);
    // Headroom above the tallest bar so the value labels stay inside the
    // plotting area.
    let y_top = if y_max > 0.0 { y_max * 1.15 } else { 1.0 };
    let y_bottom = if y_min < 0.0 { y_min * 1.15 } else { 0.0 };

    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(to_chart_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d((1..periods + 1).into_segmented(), y_bottom..y_top)
        .map_err(to_chart_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .draw()
        .map_err(to_chart_error)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(RGBColor(128, 128, 128).filled())
                .margin(8)
                .data(values.iter().enumerate().map(|(i, v)| (i as i32 + 1, *v))),
        )
        .map_err(to_chart_error)?;

    chart
        .draw_series(cash_flows.iter().zip(&values).enumerate().map(|(i, (cf, v))| {
            Text::new(
                cf.to_string(),
                (SegmentValue::CenterOf(i as i32 + 1), *v),
                ("sans-serif", 14),
            )
        }))
        .map_err(to_chart_error)?;

    root.present().map_err(to_chart_error)?;
    Ok(())
}

fn to_chart_error(e: impl std::fmt::Display) -> TvmError {
    TvmError::ChartError(e.to_string())
}
