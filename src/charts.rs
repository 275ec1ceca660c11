use std::f64::consts::TAU;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::types::ChartDataset;

const LINE_LABEL: &str = "Trend Growth";
const LINE_COLOR: &str = "cyan";
const LINE_TENSION: f64 = 0.3;
const BAR_LABEL: &str = "Topic Comparison";
const BAR_COLOR: &str = "orange";
const PIE_PALETTE: [&str; 5] = ["#FF6384", "#36A2EB", "#FFCE56", "#4CAF50", "#9C27B0"];

const TEXT_COLOR: &str = "#555";
const AXIS_COLOR: &str = "#ccc";
const FONT: &str = "12px sans-serif";
const PAD_LEFT: f64 = 24.0;
const PAD_RIGHT: f64 = 24.0;
const PAD_TOP: f64 = 28.0;
const PAD_BOTTOM: f64 = 28.0;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no canvas element with id {0:?}")]
    MissingCanvas(String),
    #[error("element {0:?} is not a canvas")]
    NotACanvas(String),
    #[error("2d context unavailable for canvas {0:?}")]
    Context(String),
    #[error("canvas drawing failed: {0}")]
    Draw(String),
}

impl From<JsValue> for ChartError {
    fn from(value: JsValue) -> Self {
        ChartError::Draw(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

/// Handle to a chart that has been painted onto its canvas. Each factory
/// call repaints the canvas from scratch; dropping the handle leaves the
/// pixels in place.
pub struct Chart {
    kind: ChartKind,
    canvas: HtmlCanvasElement,
}

impl Chart {
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

#[derive(Debug, Clone, PartialEq)]
struct BarRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Slice {
    start: f64,
    end: f64,
}

/// Scales values into plot coordinates, left to right; the maximum maps
/// to the top of the area, the minimum to the baseline. A single point
/// lands mid-width.
fn line_points(data: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    if data.is_empty() {
        return Vec::new();
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in data {
        if value.is_finite() {
            min = min.min(*value);
            max = max.max(*value);
        }
    }
    if !min.is_finite() {
        return Vec::new();
    }
    let span = (max - min).max(1.0);
    let step = if data.len() > 1 {
        width / (data.len() - 1) as f64
    } else {
        0.0
    };
    data.iter()
        .enumerate()
        .map(|(index, value)| {
            let x = if data.len() > 1 {
                step * index as f64
            } else {
                width / 2.0
            };
            let norm = ((value - min) / span).clamp(0.0, 1.0);
            (x, height - norm * height)
        })
        .collect()
}

/// Cardinal-spline control points for the segment leaving `points[index]`;
/// zero tension degenerates to the segment endpoints (a straight line).
fn control_points(
    points: &[(f64, f64)],
    index: usize,
    tension: f64,
) -> ((f64, f64), (f64, f64)) {
    let prev = points[index.saturating_sub(1)];
    let from = points[index];
    let to = points[index + 1];
    let next = points[(index + 2).min(points.len() - 1)];
    let cp1 = (
        from.0 + tension * (to.0 - prev.0) / 2.0,
        from.1 + tension * (to.1 - prev.1) / 2.0,
    );
    let cp2 = (
        to.0 - tension * (next.0 - from.0) / 2.0,
        to.1 - tension * (next.1 - from.1) / 2.0,
    );
    (cp1, cp2)
}

/// One rectangle per value, heights proportional to the largest value.
/// Non-positive values produce zero-height bars at the baseline.
fn bar_rects(data: &[f64], width: f64, height: f64) -> Vec<BarRect> {
    if data.is_empty() {
        return Vec::new();
    }
    let max = data
        .iter()
        .filter(|value| value.is_finite())
        .fold(0.0_f64, |acc, value| acc.max(*value))
        .max(1.0);
    let slot = width / data.len() as f64;
    let bar_width = slot * 0.6;
    data.iter()
        .enumerate()
        .map(|(index, value)| {
            let clamped = if value.is_finite() { value.max(0.0) } else { 0.0 };
            let bar_height = clamped / max * height;
            BarRect {
                x: slot * index as f64 + (slot - bar_width) / 2.0,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

/// Angular extents for each value, starting at twelve o'clock. Slices
/// stay index-aligned with the input so colors match labels; non-positive
/// values get zero width. An all-zero dataset yields no slices.
fn pie_slices(data: &[f64]) -> Vec<Slice> {
    let total: f64 = data
        .iter()
        .filter(|value| value.is_finite() && **value > 0.0)
        .sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angle = -TAU / 4.0;
    data.iter()
        .map(|value| {
            let share = if value.is_finite() && *value > 0.0 {
                value / total
            } else {
                0.0
            };
            let slice = Slice {
                start: angle,
                end: angle + share * TAU,
            };
            angle = slice.end;
            slice
        })
        .collect()
}

fn slice_color(index: usize) -> &'static str {
    PIE_PALETTE[index % PIE_PALETTE.len()]
}

fn context_for(canvas_id: &str) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), ChartError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ChartError::Draw("document unavailable".to_string()))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| ChartError::MissingCanvas(canvas_id.to_string()))?
        .dyn_into()
        .map_err(|_| ChartError::NotACanvas(canvas_id.to_string()))?;
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| ChartError::Context(canvas_id.to_string()))?
        .dyn_into()
        .map_err(|_| ChartError::Context(canvas_id.to_string()))?;
    Ok((canvas, context))
}

struct PlotArea {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

fn prepare(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    label: Option<&str>,
) -> Result<PlotArea, ChartError> {
    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_font(FONT);
    if let Some(label) = label {
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.fill_text(label, PAD_LEFT, 16.0)?;
    }
    Ok(PlotArea {
        x: PAD_LEFT,
        y: PAD_TOP,
        width: (width - PAD_LEFT - PAD_RIGHT).max(0.0),
        height: (height - PAD_TOP - PAD_BOTTOM).max(0.0),
    })
}

fn draw_baseline(ctx: &CanvasRenderingContext2d, area: &PlotArea) {
    let baseline = area.y + area.height;
    ctx.set_stroke_style_str(AXIS_COLOR);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(area.x, baseline);
    ctx.line_to(area.x + area.width, baseline);
    ctx.stroke();
}

fn draw_edge_labels(
    ctx: &CanvasRenderingContext2d,
    area: &PlotArea,
    labels: &[String],
) -> Result<(), ChartError> {
    ctx.set_fill_style_str(TEXT_COLOR);
    let text_y = area.y + area.height + 16.0;
    if let Some(first) = labels.first() {
        ctx.fill_text(first, area.x, text_y)?;
    }
    if labels.len() > 1 {
        if let Some(last) = labels.last() {
            let reserve = 7.0 * last.len() as f64;
            ctx.fill_text(last, area.x + area.width - reserve, text_y)?;
        }
    }
    Ok(())
}

/// Draws a line chart onto the named canvas: cyan stroke, no fill, 0.3
/// tension, point markers, first/last labels along the baseline.
pub fn create_line_chart(canvas_id: &str, dataset: &ChartDataset) -> Result<Chart, ChartError> {
    let (canvas, ctx) = context_for(canvas_id)?;
    let area = prepare(&canvas, &ctx, Some(LINE_LABEL))?;
    draw_baseline(&ctx, &area);
    draw_edge_labels(&ctx, &area, &dataset.labels)?;

    let points: Vec<(f64, f64)> = line_points(&dataset.data, area.width, area.height)
        .into_iter()
        .map(|(x, y)| (area.x + x, area.y + y))
        .collect();

    if let Some(first) = points.first() {
        ctx.set_stroke_style_str(LINE_COLOR);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(first.0, first.1);
        for index in 0..points.len().saturating_sub(1) {
            let (cp1, cp2) = control_points(&points, index, LINE_TENSION);
            let to = points[index + 1];
            ctx.bezier_curve_to(cp1.0, cp1.1, cp2.0, cp2.1, to.0, to.1);
        }
        ctx.stroke();

        ctx.set_fill_style_str(LINE_COLOR);
        for (x, y) in &points {
            ctx.begin_path();
            ctx.arc(*x, *y, 3.0, 0.0, TAU)?;
            ctx.fill();
        }
    }

    Ok(Chart {
        kind: ChartKind::Line,
        canvas,
    })
}

/// Draws a bar chart onto the named canvas: one orange bar per value,
/// every bar labeled beneath its slot.
pub fn create_bar_chart(canvas_id: &str, dataset: &ChartDataset) -> Result<Chart, ChartError> {
    let (canvas, ctx) = context_for(canvas_id)?;
    let area = prepare(&canvas, &ctx, Some(BAR_LABEL))?;
    draw_baseline(&ctx, &area);

    let rects = bar_rects(&dataset.data, area.width, area.height);
    ctx.set_fill_style_str(BAR_COLOR);
    for rect in &rects {
        ctx.fill_rect(area.x + rect.x, area.y + rect.y, rect.width, rect.height);
    }

    ctx.set_fill_style_str(TEXT_COLOR);
    let text_y = area.y + area.height + 16.0;
    for (rect, label) in rects.iter().zip(&dataset.labels) {
        let center = area.x + rect.x + rect.width / 2.0 - 3.5 * label.len() as f64;
        ctx.fill_text(label, center, text_y)?;
    }

    Ok(Chart {
        kind: ChartKind::Bar,
        canvas,
    })
}

/// Draws a pie chart onto the named canvas with the fixed five-color
/// palette, plus a swatch legend beside the pie.
pub fn create_pie_chart(canvas_id: &str, dataset: &ChartDataset) -> Result<Chart, ChartError> {
    let (canvas, ctx) = context_for(canvas_id)?;
    let area = prepare(&canvas, &ctx, None)?;

    let radius = (area.height / 2.0).min(area.width / 4.0).max(0.0);
    let center_x = area.x + radius;
    let center_y = area.y + area.height / 2.0;

    for (index, slice) in pie_slices(&dataset.data).iter().enumerate() {
        ctx.set_fill_style_str(slice_color(index));
        ctx.begin_path();
        ctx.move_to(center_x, center_y);
        ctx.arc(center_x, center_y, radius, slice.start, slice.end)?;
        ctx.close_path();
        ctx.fill();
    }

    let legend_x = center_x + radius + 20.0;
    for (index, label) in dataset.labels.iter().enumerate() {
        let row_y = area.y + 16.0 * index as f64;
        ctx.set_fill_style_str(slice_color(index));
        ctx.fill_rect(legend_x, row_y, 10.0, 10.0);
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.fill_text(label, legend_x + 16.0, row_y + 9.0)?;
    }

    Ok(Chart {
        kind: ChartKind::Pie,
        canvas,
    })
}
