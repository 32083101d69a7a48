use crate::{foundation::error::RoundRectResult, surface::DrawingSurface};

/// Strokes a plain axis-aligned rectangle, like canvas `strokeRect`.
#[tracing::instrument(level = "trace", skip(surface))]
pub fn stroke_rect<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
) -> RoundRectResult<()> {
    surface.begin_path()?;
    surface.move_to(x, y)?;
    surface.line_to(x + w, y)?;
    surface.line_to(x + w, y + h)?;
    surface.line_to(x, y + h)?;
    surface.close_path()?;
    surface.stroke()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recorder::{CommandRecorder, PathCommand, trace_cursor};

    #[test]
    fn traces_four_edges_and_closes() {
        let mut rec = CommandRecorder::new();
        stroke_rect(&mut rec, 1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(rec.commands().len(), 7);
        assert_eq!(rec.commands()[2], PathCommand::LineTo { x: 4.0, y: 2.0 });
        assert_eq!(rec.commands()[5], PathCommand::ClosePath);

        let pts = trace_cursor(rec.commands());
        assert_eq!(pts.first(), pts.last());
    }
}
