use kurbo::{Arc, PathEl};

use crate::{
    foundation::{
        core::{BezPath, Point, StrokeStyle, Vec2},
        error::{RoundRectError, RoundRectResult},
    },
    surface::{DrawingSurface, arc_point, canvas_sweep},
};

/// Flattening tolerance used when converting arcs to cubic segments.
pub const DEFAULT_ARC_TOLERANCE: f64 = 0.1;

/// Vector surface that builds a [`BezPath`] with canvas semantics.
///
/// Arcs are approximated by cubic Béziers. Every `stroke()` snapshots the
/// current path together with the ambient [`StrokeStyle`].
#[derive(Clone, Debug)]
pub struct PathSurface {
    path: BezPath,
    current: Option<Point>,
    subpath_start: Option<Point>,
    style: StrokeStyle,
    tolerance: f64,
    strokes: Vec<(BezPath, StrokeStyle)>,
}

impl Default for PathSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PathSurface {
    pub fn new() -> Self {
        Self {
            path: BezPath::new(),
            current: None,
            subpath_start: None,
            style: StrokeStyle::default(),
            tolerance: DEFAULT_ARC_TOLERANCE,
            strokes: Vec::new(),
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> RoundRectResult<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(RoundRectError::validation(
                "arc tolerance must be finite and > 0",
            ));
        }
        self.tolerance = tolerance;
        Ok(self)
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        self.style
    }

    pub fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    pub fn current_path(&self) -> &BezPath {
        &self.path
    }

    pub fn current_point(&self) -> Option<Point> {
        self.current
    }

    pub fn strokes(&self) -> &[(BezPath, StrokeStyle)] {
        &self.strokes
    }

    pub fn into_path(self) -> BezPath {
        self.path
    }

    fn push_point(&mut self, p: Point) {
        if self.current.is_some() {
            self.path.line_to(p);
        } else {
            self.path.move_to(p);
            self.subpath_start = Some(p);
        }
        self.current = Some(p);
    }
}

impl DrawingSurface for PathSurface {
    fn begin_path(&mut self) -> RoundRectResult<()> {
        self.path = BezPath::new();
        self.current = None;
        self.subpath_start = None;
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> RoundRectResult<()> {
        let p = Point::new(x, y);
        self.path.move_to(p);
        self.current = Some(p);
        self.subpath_start = Some(p);
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> RoundRectResult<()> {
        // A line on an empty path behaves like move_to.
        self.push_point(Point::new(x, y));
        Ok(())
    }

    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
    ) -> RoundRectResult<()> {
        if ![cx, cy, radius, start, end].iter().all(|v| v.is_finite()) {
            // Canvas silently ignores non-finite arguments.
            return Ok(());
        }
        if radius < 0.0 {
            return Err(RoundRectError::surface(format!(
                "arc radius must be non-negative, got {radius}"
            )));
        }

        let (sx, sy) = arc_point(cx, cy, radius, start);
        self.push_point(Point::new(sx, sy));

        let sweep = canvas_sweep(start, end);
        if radius == 0.0 || sweep == 0.0 {
            return Ok(());
        }

        let arc = Arc::new(
            Point::new(cx, cy),
            Vec2::new(radius, radius),
            start,
            sweep,
            0.0,
        );
        let mut last = Point::new(sx, sy);
        arc.to_cubic_beziers(self.tolerance, |p1, p2, p3| {
            self.path.push(PathEl::CurveTo(p1, p2, p3));
            last = p3;
        });
        self.current = Some(last);
        Ok(())
    }

    fn close_path(&mut self) -> RoundRectResult<()> {
        if self.current.is_some() {
            self.path.close_path();
            self.current = self.subpath_start;
        }
        Ok(())
    }

    fn stroke(&mut self) -> RoundRectResult<()> {
        self.strokes.push((self.path.clone(), self.style));
        Ok(())
    }
}
