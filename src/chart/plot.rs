use super::Bounds;
use crate::{data::Dataset, model::Model};

/// Space kept between the plot area and the canvas edges, in pixels.
pub const MARGIN: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.from.is_finite() && self.to.is_finite()
    }
}

/// Everything a renderer needs to draw a fit, in canvas coordinates
/// (origin top-left, y growing downwards).
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub bounds: Bounds,
    /// Horizontal then vertical axis.
    pub axes: [Segment; 2],
    /// One point per sample, in dataset order.
    pub points: Vec<Point>,
    /// The fitted line across the full x range, `None` when the fit (or its
    /// projection) is not finite.
    pub line: Option<Segment>,
}

/// A canvas of a given size onto which datasets and fits get projected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    width: f64,
    height: f64,
}

impl Plot {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Projects `dataset` and the line of `model` onto this canvas.
    ///
    /// Neither argument is modified.
    pub fn layout(&self, dataset: &Dataset, model: &Model) -> Layout {
        let &Self { width: w, height: h } = self;
        let bounds = Bounds::of(dataset);
        let proj = Projection { bounds, w, h };

        let axes = [
            Segment {
                from: Point { x: MARGIN, y: h - MARGIN },
                to: Point { x: w - 10.0, y: h - MARGIN },
            },
            Segment {
                from: Point { x: MARGIN, y: h - 10.0 },
                to: Point { x: MARGIN, y: 10.0 },
            },
        ];

        let points = dataset.iter().map(|s| proj.point(s.x, s.y)).collect();

        let (x1, x2) = (bounds.min_x, bounds.max_x);
        let line = Segment {
            from: proj.point(x1, model.predict(x1)),
            to: proj.point(x2, model.predict(x2)),
        };
        let line = line.is_finite().then_some(line);

        Layout {
            width: w,
            height: h,
            bounds,
            axes,
            points,
            line,
        }
    }
}

struct Projection {
    bounds: Bounds,
    w: f64,
    h: f64,
}

impl Projection {
    fn point(&self, x: f64, y: f64) -> Point {
        let b = &self.bounds;
        Point {
            x: MARGIN + b.fraction_x(x) * (self.w - 2.0 * MARGIN),
            y: (self.h - MARGIN) - b.fraction_y(y) * (self.h - 2.0 * MARGIN),
        }
    }
}
