//! Rounded-rectangle stroking over pluggable 2D drawing surfaces.
//!
//! The core routine, [`stroke_rounded_rect`], issues a fixed sequence of
//! canvas-style path commands (`begin_path`, `move_to`, `line_to`, `arc`,
//! `stroke`) against any [`DrawingSurface`]. Surfaces decide what the commands
//! mean:
//!
//! - [`CommandRecorder`] keeps the raw command list (traces, tests).
//! - [`PathSurface`] builds a `kurbo` [`BezPath`].
//! - [`CpuSurface`] rasterizes strokes to premultiplied RGBA8 with `vello_cpu`.
//!
//! Coordinates are y-down with the origin at the top-left, and angles follow
//! the 2D canvas convention (radians, 0 along +x, increasing clockwise on
//! screen).
//!
//! [`Scene`] bundles a canvas, a stroke style and a list of
//! [`RoundedRectSpec`]s; it is the JSON format the `roundrect` binary renders.
#![forbid(unsafe_code)]

mod foundation;
mod geom;
mod render;
mod scene;
mod shapes;
mod surface;

pub use foundation::core::{BezPath, Canvas, Point, Rect, Rgba8Premul, StrokeStyle, Vec2};
pub use foundation::error::{RoundRectError, RoundRectResult};
pub use geom::rounded::{RadiusPolicy, RoundedRectSpec};
pub use render::cpu::{CpuSurface, FrameRGBA, write_png};
pub use scene::dsl::SceneBuilder;
pub use scene::model::Scene;
pub use shapes::rect::stroke_rect;
pub use shapes::rounded_rect::{
    ROUNDED_RECT_COMMAND_COUNT, rounded_rect_path, stroke_rounded_rect, stroke_rounded_rect_spec,
};
pub use surface::path::{DEFAULT_ARC_TOLERANCE, PathSurface};
pub use surface::recorder::{CommandRecorder, PathCommand, replay, trace_cursor};
pub use surface::{DrawingSurface, arc_point, canvas_sweep};
