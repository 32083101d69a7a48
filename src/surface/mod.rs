//! Drawing surfaces: the path-construction API the shape routines draw onto.
//!
//! [`DrawingSurface`] mirrors the 2D canvas path API (`beginPath`, `moveTo`,
//! `lineTo`, `arc`, `closePath`, `stroke`). Coordinates are y-down with the
//! origin at the top-left; angles are radians with 0 along +x, so increasing
//! angles turn clockwise on screen.

use std::f64::consts::TAU;

use crate::foundation::error::RoundRectResult;

pub(crate) mod path;
pub(crate) mod recorder;

/// A mutable 2D drawing target.
///
/// Every primitive is fallible so that a surface can report its own failures
/// (for example a negative arc radius); drawing routines propagate these
/// unchanged and never recover from them.
pub trait DrawingSurface {
    /// Discards the current path and starts a new, empty one.
    fn begin_path(&mut self) -> RoundRectResult<()>;

    /// Starts a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64) -> RoundRectResult<()>;

    /// Adds a straight segment from the current point to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64) -> RoundRectResult<()>;

    /// Adds a circular arc centered at `(cx, cy)` sweeping from `start` to
    /// `end` in the direction of increasing angle.
    ///
    /// If the path has a current point, a straight segment joins it to the arc
    /// start; see [`canvas_sweep`] for how the sweep is normalized.
    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
    ) -> RoundRectResult<()>;

    /// Closes the current subpath back to its first point.
    fn close_path(&mut self) -> RoundRectResult<()>;

    /// Renders the current path as an outline using the surface's own stroke
    /// style.
    fn stroke(&mut self) -> RoundRectResult<()>;
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn begin_path(&mut self) -> RoundRectResult<()> {
        (**self).begin_path()
    }

    fn move_to(&mut self, x: f64, y: f64) -> RoundRectResult<()> {
        (**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) -> RoundRectResult<()> {
        (**self).line_to(x, y)
    }

    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
    ) -> RoundRectResult<()> {
        (**self).arc(cx, cy, radius, start, end)
    }

    fn close_path(&mut self) -> RoundRectResult<()> {
        (**self).close_path()
    }

    fn stroke(&mut self) -> RoundRectResult<()> {
        (**self).stroke()
    }
}

/// Sweep angle of a non-anticlockwise canvas arc from `start` to `end`.
///
/// A difference of a full turn or more yields exactly `TAU`; anything else is
/// reduced into `[0, TAU)`.
pub fn canvas_sweep(start: f64, end: f64) -> f64 {
    let delta = end - start;
    if delta >= TAU {
        return TAU;
    }
    let sweep = delta.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative deltas.
    if sweep >= TAU { 0.0 } else { sweep }
}

/// Point on the circle `(cx, cy, radius)` at `angle`.
pub fn arc_point(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn quarter_turns_sweep_a_quarter() {
        assert_eq!(canvas_sweep(-FRAC_PI_2, 0.0), FRAC_PI_2);
        assert_eq!(canvas_sweep(0.0, FRAC_PI_2), FRAC_PI_2);
        assert_eq!(canvas_sweep(FRAC_PI_2, PI), FRAC_PI_2);
        assert_eq!(canvas_sweep(-PI, -FRAC_PI_2), FRAC_PI_2);
    }

    #[test]
    fn backwards_arc_wraps_forward() {
        let s = canvas_sweep(0.0, -FRAC_PI_2);
        assert!((s - 3.0 * FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn full_turn_and_zero() {
        assert_eq!(canvas_sweep(0.0, TAU), TAU);
        assert_eq!(canvas_sweep(1.0, 1.0 + 3.0 * TAU), TAU);
        assert_eq!(canvas_sweep(1.0, 1.0), 0.0);
    }

    #[test]
    fn arc_point_is_y_down() {
        let (x, y) = arc_point(10.0, 10.0, 5.0, FRAC_PI_2);
        assert!((x - 10.0).abs() < 1e-12);
        assert!((y - 15.0).abs() < 1e-12);
    }
}
