use std::f64::consts::{FRAC_PI_2, PI};

use crate::{
    foundation::{core::BezPath, error::RoundRectResult},
    geom::rounded::{RadiusPolicy, RoundedRectSpec},
    surface::{DrawingSurface, path::PathSurface},
};

/// Number of primitive calls [`stroke_rounded_rect`] makes, whatever the input.
pub const ROUNDED_RECT_COMMAND_COUNT: usize = 11;

/// Strokes a rectangle with rounded corners, like `strokeRect` with a corner
/// radius.
///
/// Issues one `begin_path`, then four edges each inset by `r` from the true
/// corners, each followed by a quarter-circle arc, and finally `stroke`:
///
/// ```text
/// move_to (x+r, y)
/// line_to (x+w-r, y)      arc (x+w-r, y+r)   -π/2 → 0
/// line_to (x+w, y+h-r)    arc (x+w-r, y+h-r)  0   → π/2
/// line_to (x+r, y+h)      arc (x+r, y+h-r)    π/2 → π
/// line_to (x, y+r)        arc (x+r, y+r)     -π   → -π/2
/// ```
///
/// The contour ends where it started. Nothing is validated: with `r` outside
/// `[0, min(w, h) / 2]` the contour self-intersects, and a negative `r` is
/// passed to the surface as-is. The surface's stroke style is neither read nor
/// changed. The first surface error aborts the sequence and is returned.
#[tracing::instrument(level = "trace", skip(surface))]
pub fn stroke_rounded_rect<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    r: f64,
) -> RoundRectResult<()> {
    surface.begin_path()?;
    trace_contour(surface, x, y, w, h, r)?;
    surface.stroke()
}

/// Like [`stroke_rounded_rect`], after applying `policy` to the radius.
pub fn stroke_rounded_rect_spec<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    spec: &RoundedRectSpec,
    policy: RadiusPolicy,
) -> RoundRectResult<()> {
    let s = spec.resolve(policy)?;
    stroke_rounded_rect(surface, s.x, s.y, s.w, s.h, s.r)
}

/// Builds the rounded-rect contour as a vector path without stroking it.
pub fn rounded_rect_path(spec: &RoundedRectSpec) -> RoundRectResult<BezPath> {
    let mut surface = PathSurface::new();
    surface.begin_path()?;
    trace_contour(&mut surface, spec.x, spec.y, spec.w, spec.h, spec.r)?;
    Ok(surface.into_path())
}

fn trace_contour<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    r: f64,
) -> RoundRectResult<()> {
    surface.move_to(x + r, y)?;
    surface.line_to(x + w - r, y)?;
    surface.arc(x + w - r, y + r, r, -FRAC_PI_2, 0.0)?;
    surface.line_to(x + w, y + h - r)?;
    surface.arc(x + w - r, y + h - r, r, 0.0, FRAC_PI_2)?;
    surface.line_to(x + r, y + h)?;
    surface.arc(x + r, y + h - r, r, FRAC_PI_2, PI)?;
    surface.line_to(x, y + r)?;
    surface.arc(x + r, y + r, r, -PI, -FRAC_PI_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        foundation::error::RoundRectError,
        surface::recorder::{CommandRecorder, PathCommand},
    };

    #[test]
    fn emits_fixed_command_sequence() {
        let mut rec = CommandRecorder::new();
        stroke_rounded_rect(&mut rec, 10.0, 20.0, 100.0, 50.0, 8.0).unwrap();

        let expected = [
            PathCommand::BeginPath,
            PathCommand::MoveTo { x: 18.0, y: 20.0 },
            PathCommand::LineTo { x: 102.0, y: 20.0 },
            PathCommand::Arc {
                cx: 102.0,
                cy: 28.0,
                radius: 8.0,
                start: -FRAC_PI_2,
                end: 0.0,
            },
            PathCommand::LineTo { x: 110.0, y: 62.0 },
            PathCommand::Arc {
                cx: 102.0,
                cy: 62.0,
                radius: 8.0,
                start: 0.0,
                end: FRAC_PI_2,
            },
            PathCommand::LineTo { x: 18.0, y: 70.0 },
            PathCommand::Arc {
                cx: 18.0,
                cy: 62.0,
                radius: 8.0,
                start: FRAC_PI_2,
                end: PI,
            },
            PathCommand::LineTo { x: 10.0, y: 28.0 },
            PathCommand::Arc {
                cx: 18.0,
                cy: 28.0,
                radius: 8.0,
                start: -PI,
                end: -FRAC_PI_2,
            },
            PathCommand::Stroke,
        ];
        assert_eq!(rec.commands(), &expected);
        assert_eq!(rec.commands().len(), ROUNDED_RECT_COMMAND_COUNT);
    }

    #[test]
    fn policy_entry_point_clamps_or_rejects() {
        let spec = RoundedRectSpec::new(0.0, 0.0, 20.0, 10.0, 30.0);

        let mut rec = CommandRecorder::new();
        stroke_rounded_rect_spec(&mut rec, &spec, RadiusPolicy::Clamp).unwrap();
        assert_eq!(rec.commands()[1], PathCommand::MoveTo { x: 5.0, y: 0.0 });

        let mut rec = CommandRecorder::new();
        let err = stroke_rounded_rect_spec(&mut rec, &spec, RadiusPolicy::Reject).unwrap_err();
        assert!(matches!(err, RoundRectError::Validation(_)));
        assert!(rec.commands().is_empty());

        let mut rec = CommandRecorder::new();
        stroke_rounded_rect_spec(&mut rec, &spec, RadiusPolicy::Unchecked).unwrap();
        assert_eq!(rec.commands()[1], PathCommand::MoveTo { x: 30.0, y: 0.0 });
    }

    #[test]
    fn path_helper_builds_closed_contour_without_stroke() {
        let spec = RoundedRectSpec::new(10.0, 20.0, 100.0, 50.0, 8.0);
        let path = rounded_rect_path(&spec).unwrap();
        let els = path.elements();
        assert!(matches!(els[0], kurbo::PathEl::MoveTo(_)));
        let end = els.last().and_then(|e| e.end_point()).unwrap();
        assert!((end - kurbo::Point::new(18.0, 20.0)).hypot() < 1e-9);

        let bbox = kurbo::Shape::bounding_box(&path);
        assert!((bbox.x0 - 10.0).abs() < 1e-6 && (bbox.x1 - 110.0).abs() < 1e-6);
        assert!((bbox.y0 - 20.0).abs() < 1e-6 && (bbox.y1 - 70.0).abs() < 1e-6);
    }
}
