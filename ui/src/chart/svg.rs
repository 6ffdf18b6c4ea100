//! SVG markup serialization for the chart.
//!
//! The serializer is a pure function from model to `String`; the same
//! markup feeds the inline view and the SVG download. Axes are drawn
//! ticks-only (no domain line), the x axis sits on the zero baseline,
//! and the column names caption the axis ends.

use std::fmt::Write;

use crate::core::config::ChartConfig;
use crate::core::dataset::Dataset;
use crate::core::format;
use crate::core::geometry::ChartGeometry;
use crate::core::palette::CategoryPalette;

/// Length of an axis tick mark in pixels.
const TICK_SIZE: f64 = 6.0;

/// Escape the five XML special characters for element text and attribute
/// values. `&` must be handled first.
pub fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

pub fn render(
    dataset: &Dataset,
    geometry: &ChartGeometry,
    palette: &CategoryPalette,
    config: &ChartConfig,
) -> String {
    render_with_background(dataset, geometry, palette, config, None)
}

/// Like [`render`], with an optional opaque background rectangle so PNG
/// captures have no transparency.
pub fn render_with_background(
    dataset: &Dataset,
    geometry: &ChartGeometry,
    palette: &CategoryPalette,
    config: &ChartConfig,
    background: Option<&str>,
) -> String {
    let w = format::coord(config.svg_width);
    let h = format::coord(config.svg_height);

    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\" style=\"max-width: 100%; height: auto;\">"
    );

    if let Some(color) = background {
        let _ = write!(out, "<rect width=\"{w}\" height=\"{h}\" fill=\"{color}\"/>");
    }

    write_bars(&mut out, dataset, geometry, palette);
    write_bar_numbers(&mut out, geometry);
    write_x_axis(&mut out, dataset, geometry, config);
    write_y_axis(&mut out, dataset, geometry, config);

    out.push_str("</svg>");
    out
}

fn write_bars(
    out: &mut String,
    dataset: &Dataset,
    geometry: &ChartGeometry,
    palette: &CategoryPalette,
) {
    out.push_str("<g fill-opacity=\"80%\" stroke=\"black\" stroke-width=\"1px\">");
    for (bar, record) in geometry.bars.iter().zip(&dataset.records) {
        let _ = write!(
            out,
            "<rect fill=\"{fill}\" x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\"/>",
            fill = palette.color_of(&record.category),
            x = format::coord(bar.x),
            y = format::coord(bar.y),
            width = format::coord(bar.width),
            height = format::coord(bar.height),
        );
    }
    out.push_str("</g>");
}

fn write_bar_numbers(out: &mut String, geometry: &ChartGeometry) {
    out.push_str("<g font-size=\"0.8em\" text-anchor=\"middle\" font-weight=\"bold\">");
    for bar in &geometry.bars {
        let _ = write!(
            out,
            "<text x=\"{x}\" y=\"{y}\">{number}</text>",
            x = format::coord(bar.label_x),
            y = format::coord(bar.label_y),
            number = bar.number,
        );
    }
    out.push_str("</g>");
}

fn write_x_axis(out: &mut String, dataset: &Dataset, geometry: &ChartGeometry, config: &ChartConfig) {
    let _ = write!(
        out,
        "<g transform=\"translate(0,{baseline})\" font-size=\"10\" text-anchor=\"middle\">",
        baseline = format::coord(geometry.baseline_y),
    );
    for tick in &geometry.x_ticks {
        let x = format::coord(tick.position);
        let _ = write!(
            out,
            "<line x1=\"{x}\" y1=\"0\" x2=\"{x}\" y2=\"{size}\" stroke=\"black\"/>",
            size = format::coord(TICK_SIZE),
        );
        let _ = write!(
            out,
            "<text x=\"{x}\" y=\"20\" fill=\"black\">{label}</text>",
            label = format::tick(tick.value),
        );
    }
    // Axis caption: the width column name, anchored at the right edge.
    let _ = write!(
        out,
        "<text x=\"{x}\" y=\"30\" fill=\"black\" text-anchor=\"end\" font-size=\"1.5em\">{name}</text>",
        x = format::coord(config.plot_right()),
        name = xml_escape(&dataset.columns[1]),
    );
    out.push_str("</g>");
}

fn write_y_axis(out: &mut String, dataset: &Dataset, geometry: &ChartGeometry, config: &ChartConfig) {
    let _ = write!(
        out,
        "<g transform=\"translate({left},0)\" font-size=\"10\" text-anchor=\"end\">",
        left = format::coord(config.plot_left()),
    );
    for tick in &geometry.y_ticks {
        let y = format::coord(tick.position);
        let _ = write!(
            out,
            "<line x1=\"0\" y1=\"{y}\" x2=\"-{size}\" y2=\"{y}\" stroke=\"black\"/>",
            size = format::coord(TICK_SIZE),
        );
        let _ = write!(
            out,
            "<text x=\"-9\" y=\"{y}\" dy=\"0.32em\" fill=\"black\">{label}</text>",
            label = format::tick(tick.value),
        );
    }
    // Axis caption: the height column name, anchored at the top.
    let _ = write!(
        out,
        "<text x=\"-{left}\" y=\"10\" fill=\"currentColor\" text-anchor=\"start\" font-size=\"1.2em\">{name}</text>",
        left = format::coord(config.plot_left()),
        name = xml_escape(&dataset.columns[2]),
    );
    out.push_str("</g>");
}
