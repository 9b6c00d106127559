use crate::analyzer::ticks::AxisScale;
use crate::model::RenderError;
use crate::render::Renderer;
use crate::render::layout::{Anchor, ChartLayout, Curve, Label, LabelTone, TAB10};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::path::Path;

const DARK_BLUE: RGBColor = RGBColor(0, 0, 139);
const DARK_RED: RGBColor = RGBColor(139, 0, 0);
/// Length of one dash (and one gap) on the mr guide lines, in axis units.
const DASH_FRACTION: f64 = 0.015;

/// Draws the two-panel chart as a single landscape SVG page.
pub struct SvgRenderer {
    width: u32,
    height: u32,
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, layout: &ChartLayout, path: &Path) -> Result<(), RenderError> {
        draw_chart(layout, path, (self.width, self.height))
            .map_err(|e| RenderError::Backend(e.to_string()))
    }
}

fn draw_chart(layout: &ChartLayout, path: &Path, size: (u32, u32)) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        &layout.title,
        ("sans-serif", 22).into_font().style(FontStyle::Bold),
    )?;
    let panels = root.split_evenly((1, 2));

    draw_collatz_panel(&panels[0], layout)?;
    draw_m_panel(&panels[1], layout)?;

    root.present()?;
    Ok(())
}

fn curve_color(curve: &Curve) -> RGBColor {
    let (r, g, b) = TAB10[curve.palette_slot % TAB10.len()];
    RGBColor(r, g, b)
}

fn x_extent(curves: &[Curve]) -> f64 {
    curves
        .iter()
        .filter_map(|c| c.points.last().map(|&(x, _)| x))
        .fold(1.0, f64::max)
}

/// Computed ticks that fall inside the padded axis limits.
fn visible_ticks(axis: &AxisScale) -> Vec<f64> {
    axis.ticks
        .iter()
        .map(|&t| t as f64)
        .filter(|&y| y >= axis.lower && y <= axis.upper)
        .collect()
}

/// Faint horizontal lines at the computed ticks.
fn tick_guides(axis: &AxisScale, x_min: f64, x_max: f64) -> Vec<PathElement<(f64, f64)>> {
    visible_ticks(axis)
        .into_iter()
        .map(|y| PathElement::new(vec![(x_min, y), (x_max, y)], BLACK.mix(0.15)))
        .collect()
}

fn draw_collatz_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    layout: &ChartLayout,
) -> Result<(), Box<dyn Error>> {
    let axis = &layout.collatz_axis;
    let x_max = x_extent(&layout.collatz_curves) + 0.5;

    let mut chart = ChartBuilder::on(area)
        .caption("Collatz Sequences Reversed (Growth from 1)", ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(
            0.5f64..x_max,
            (axis.lower..axis.upper).with_key_points(visible_ticks(axis)),
        )?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(axis.ticks.len())
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .x_desc("Number of steps (from 1)")
        .y_desc("n Values")
        .draw()?;

    chart.draw_series(tick_guides(axis, 0.5, x_max))?;

    for curve in &layout.collatz_curves {
        let color = curve_color(curve);
        chart
            .draw_series(LineSeries::new(
                curve.points.iter().copied(),
                color.stroke_width(1),
            ))?
            .label(format!("n={}", curve.number))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn draw_m_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    layout: &ChartLayout,
) -> Result<(), Box<dyn Error>> {
    let axis = &layout.m_axis;
    let x_max = x_extent(&layout.m_curves) + 0.5;
    let (lower, upper) = (axis.lower, axis.upper);

    let mut chart = ChartBuilder::on(area)
        .caption(
            "m-Transform Sequences Reversed (with mr-pair Analysis)",
            ("sans-serif", 18),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(
            -0.5f64..x_max,
            (lower..upper).with_key_points(visible_ticks(axis)),
        )?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(axis.ticks.len())
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .x_desc("Number of steps (from 0)")
        .y_desc("m Values")
        .draw()?;

    chart.draw_series(tick_guides(axis, -0.5, x_max))?;

    for curve in &layout.m_curves {
        chart.draw_series(LineSeries::new(
            curve.points.iter().copied(),
            curve_color(curve).stroke_width(1),
        ))?;
    }

    let dash = (upper - lower) * DASH_FRACTION;
    for marker in &layout.markers {
        chart.draw_series(std::iter::once(Rectangle::new(
            [(marker.first as f64, lower), (marker.second as f64, upper)],
            YELLOW.mix(0.05).filled(),
        )))?;

        for x in [marker.first as f64, marker.second as f64] {
            chart.draw_series(dashed_vertical(x, lower, upper, dash))?;
        }

        let before = (marker.before.position as f64, marker.before.value as f64);
        let between = (marker.between.position as f64, marker.between.value as f64);
        chart.draw_series([
            Circle::new(before, 5, BLUE.filled()),
            Circle::new(before, 5, DARK_BLUE.stroke_width(2)),
            Circle::new(between, 5, RED.filled()),
            Circle::new(between, 5, DARK_RED.stroke_width(2)),
        ])?;
    }

    if let Some(labels) = &layout.labels {
        let mut texts = vec![text_element(&labels.mr, ("sans-serif", 14).into_font())];
        texts.extend(
            labels
                .indices
                .iter()
                .map(|l| text_element(l, ("sans-serif", 12).into_font())),
        );
        texts.push(text_element(&labels.before, ("sans-serif", 14).into_font()));
        texts.push(text_element(&labels.between, ("sans-serif", 14).into_font()));
        chart.draw_series(texts)?;
    }

    Ok(())
}

fn dashed_vertical(x: f64, lower: f64, upper: f64, dash: f64) -> Vec<PathElement<(f64, f64)>> {
    let style = BLACK.mix(0.8).stroke_width(2);
    let mut segments = Vec::new();
    let mut y = lower;
    while y < upper {
        let end = (y + dash).min(upper);
        segments.push(PathElement::new(vec![(x, y), (x, end)], style));
        y += dash * 2.0;
    }
    segments
}

fn text_element(label: &Label, font: FontDesc<'static>) -> Text<'static, (f64, f64), String> {
    let color = match label.tone {
        LabelTone::Plain => BLACK,
        LabelTone::BeforeFirst => BLUE,
        LabelTone::Between => RED,
    };
    let vpos = match label.anchor {
        Anchor::Above => VPos::Bottom,
        Anchor::Below => VPos::Top,
        Anchor::Center => VPos::Center,
    };
    let style = font
        .style(FontStyle::Bold)
        .color(&color)
        .pos(Pos::new(HPos::Center, vpos));
    Text::new(label.text.clone(), (label.x, label.y), style)
}
