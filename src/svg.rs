//! SVG visualization of rectangles for debugging layouts.
//!
//! Draws every rectangle into one shared panel, scaled to fit with
//! [`ScaleMode::Fit`], labelled with its name and dimensions.
//!
//! # Example
//!
//! ```
//! use zenrect::{Rectangle, ScaleMode, svg::render_rects_svg};
//!
//! let viewport = Rectangle::new(0.0, 0.0, 800.0, 600.0);
//! let mut image = Rectangle::new(0.0, 0.0, 4000.0, 3000.0);
//! image.scale_to(&viewport, ScaleMode::Fill);
//!
//! let svg = render_rects_svg(&[("viewport", viewport), ("image", image)]);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::mode::ScaleMode;
use crate::rect::Rectangle;

/// Maximum drawing width inside the document.
const MAX_PANEL_W: f64 = 400.0;
/// Maximum drawing height inside the document.
const MAX_PANEL_H: f64 = 300.0;
/// Margin around the panel, leaves room for labels.
const MARGIN: f64 = 40.0;

/// Stroke colors, cycled per rectangle.
const PALETTE: &[&str] = &["#2c6faa", "#d9534f", "#5cb85c", "#f0ad4e", "#8e44ad"];

/// Render a complete SVG document with one outlined, labelled box per rectangle.
///
/// Flipped rectangles are drawn standardized. An empty slice yields a minimal
/// document.
pub fn render_rects_svg(rects: &[(&str, Rectangle)]) -> String {
    let Some(((_, first), rest)) = rects.split_first() else {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    };

    let bounds = rest
        .iter()
        .fold(standardized(first), |acc, (_, r)| acc.union(r));

    let viewport = Rectangle::new(MARGIN, MARGIN, MAX_PANEL_W, MAX_PANEL_H);
    let mut fitted = bounds;
    fitted.scale_to(&viewport, ScaleMode::Fit);
    let factor = panel_factor(&bounds, &fitted);

    let total_w = MAX_PANEL_W + 2.0 * MARGIN;
    let total_h = MAX_PANEL_H + 2.0 * MARGIN;

    let mut svg = String::with_capacity(1024);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; font-size: 11px; }
  rect { fill: none; stroke-width: 1.5; }
  .bounds { stroke: #999; stroke-dasharray: 4,2; stroke-width: 1; }
</style>
"##,
    );

    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="bounds"/>"#,
        fitted.x, fitted.y, fitted.width, fitted.height
    ));
    svg.push('\n');

    for (i, (label, rect)) in rects.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let r = standardized(rect);
        let x = fitted.x + (r.x - bounds.x) * factor;
        let y = fitted.y + (r.y - bounds.y) * factor;

        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" stroke="{}"/>"#,
            x,
            y,
            r.width * factor,
            r.height * factor,
            color
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" fill="{}">{}</text>"#,
            x,
            y - 4.0,
            color,
            escape_xml(&format!("{label}  {}×{} at ({}, {})", r.width, r.height, r.x, r.y))
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

fn standardized(r: &Rectangle) -> Rectangle {
    let mut r = *r;
    r.standardize();
    r
}

/// Drawing scale from layout units to panel units. Degenerate bounds are
/// drawn at 1:1.
fn panel_factor(bounds: &Rectangle, fitted: &Rectangle) -> f64 {
    if bounds.width > 0.0 {
        fitted.width / bounds.width
    } else if bounds.height > 0.0 {
        fitted.height / bounds.height
    } else {
        1.0
    }
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
