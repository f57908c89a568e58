use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::path::PathBuf;

use tvm_core::chart::{self, ChartConfig};

/// Arguments for the cash-flow chart
#[derive(Args)]
pub struct ChartArgs {
    /// Destination SVG file
    #[arg(long)]
    pub file: PathBuf,
    /// Comma-separated cash flows, starting at the end of period 1
    #[arg(long, value_delimiter = ',', required = true)]
    pub cash_flows: Vec<Decimal>,
    /// Chart title
    #[arg(long, default_value = "Cash Flows")]
    pub title: String,
    /// Horizontal axis label
    #[arg(long, default_value = "Years")]
    pub x_label: String,
    /// Vertical axis label
    #[arg(long, default_value = "Amount ($)")]
    pub y_label: String,
    /// Chart width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,
    /// Chart height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

pub fn run_chart(args: ChartArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = ChartConfig {
        title: args.title,
        x_label: args.x_label,
        y_label: args.y_label,
        width: args.width,
        height: args.height,
    };
    chart::render_cash_flow_chart(&args.file, &args.cash_flows, &config)?;
    Ok(json!({
        "written_to": args.file.display().to_string(),
        "bars": args.cash_flows.len(),
    }))
}
