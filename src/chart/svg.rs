use std::iter;

use super::{Layout, Point, Segment};

const AXIS_STROKE: &str = "rgba(255,255,255,0.2)";
const POINT_FILL: &str = "#f0abfc";
const LINE_STROKE: &str = "#a78bfa";
const POINT_RADIUS: f64 = 4.0;

impl Layout {
    /// Renders the layout as a standalone SVG document, one element per
    /// line. The fitted line is left out when the layout has none.
    pub fn to_svg(&self) -> String {
        let open = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="Model visualization">"#,
            w = self.width,
            h = self.height,
        );
        let axes = self.axes.iter().map(|axis| line(axis, AXIS_STROKE, 1.0));
        let points = self.points.iter().map(circle);
        let fit = self.line.iter().map(|l| line(l, LINE_STROKE, 2.0));

        iter::once(open)
            .chain(axes)
            .chain(points)
            .chain(fit)
            .chain(iter::once("</svg>".to_owned()))
            .map(|mut element| {
                element.push('\n');
                element
            })
            .collect()
    }
}

fn circle(p: &Point) -> String {
    format!(
        r#"  <circle cx="{:.2}" cy="{:.2}" r="{POINT_RADIUS}" fill="{POINT_FILL}"/>"#,
        p.x, p.y,
    )
}

fn line(s: &Segment, stroke: &str, width: f64) -> String {
    format!(
        r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{stroke}" stroke-width="{width}"/>"#,
        s.from.x, s.from.y, s.to.x, s.to.y,
    )
}
