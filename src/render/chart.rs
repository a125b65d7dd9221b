// src/render/chart.rs
use maud::{Markup, html};
use serde_json::{Value, json};

use crate::models::FetchResult;

pub const ACTION: &str = "class_ranking";

const BAR_COLOR: &str = "#4a6cf7";
const ROW_STEP: u32 = 25;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassBar {
    pub class: String,
    pub count: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    Unavailable(String),
    Empty,
    Bars(Vec<ClassBar>),
}

/// Reads the `class_ranking` table: row 0 is a header, every other row is
/// `[class_label, count]`. Bars come back sorted by count, highest first.
pub fn chart_view(result: &FetchResult) -> ChartView {
    let data = match result {
        FetchResult::Success { data } => data,
        FetchResult::Error { message } => return ChartView::Unavailable(message.clone()),
    };

    let rows = match data {
        Value::Array(rows) => rows,
        Value::Null => return ChartView::Empty,
        other => {
            return ChartView::Unavailable(format!("expected a table, got {}", other));
        }
    };

    if rows.len() < 2 {
        return ChartView::Empty;
    }

    let mut bars = Vec::with_capacity(rows.len() - 1);
    for row in &rows[1..] {
        match parse_row(row) {
            Ok(bar) => bars.push(bar),
            Err(message) => {
                log::warn!("⚠️  bad {} row {}: {}", ACTION, row, message);
                return ChartView::Unavailable(message);
            }
        }
    }

    bars.sort_by(|a, b| b.count.total_cmp(&a.count));
    ChartView::Bars(bars)
}

fn parse_row(row: &Value) -> Result<ClassBar, String> {
    let cells = row
        .as_array()
        .filter(|cells| cells.len() >= 2)
        .ok_or_else(|| format!("malformed row: {}", row))?;

    let class = match &cells[0] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let count = match &cells[1] {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|c| c.is_finite()),
        _ => None,
    }
    .ok_or_else(|| format!("count for class '{}' is not numeric: {}", class, cells[1]))?;

    Ok(ClassBar { class, count })
}

/// Vega-Lite description of the horizontal bar chart. Rows are sized by
/// step so the height grows with the number of classes, and the scales are
/// bound to an interval selection for pan and zoom.
pub fn vega_lite_spec(bars: &[ClassBar]) -> Value {
    let values: Vec<Value> = bars
        .iter()
        .map(|b| json!({"class": b.class, "count": b.count}))
        .collect();

    json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "data": {"values": values},
        "mark": {"type": "bar", "color": BAR_COLOR},
        "encoding": {
            "y": {"field": "class", "type": "nominal", "title": "Grade/Class", "sort": "-x"},
            "x": {"field": "count", "type": "quantitative", "title": "Participants"},
            "tooltip": [
                {"field": "class", "type": "nominal"},
                {"field": "count", "type": "quantitative"}
            ]
        },
        "width": "container",
        "height": {"step": ROW_STEP},
        "params": [{"name": "pan_zoom", "select": "interval", "bind": "scales"}]
    })
}

pub fn render_chart(view: &ChartView) -> Markup {
    html! {
        section.chart {
            h3 { "📊 Participation by class" }
            @match view {
                ChartView::Unavailable(message) => {
                    div.notice.error { "Could not load the chart data: " (message) }
                }
                ChartView::Empty => {
                    div.notice.info { "📊 Not enough data to draw the chart yet." }
                }
                ChartView::Bars(bars) => {
                    div.vega-chart id="class-chart" data-spec=(vega_lite_spec(bars).to_string()) {}
                    noscript {
                        table.chart-fallback {
                            @for bar in bars {
                                tr { td { (bar.class) } td { (bar.count) } }
                            }
                        }
                    }
                }
            }
        }
    }
}
