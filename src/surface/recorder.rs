use crate::{
    foundation::{core::Point, error::RoundRectResult},
    surface::{DrawingSurface, arc_point},
};

/// One primitive call made against a [`DrawingSurface`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
    },
    ClosePath,
    Stroke,
}

impl std::fmt::Display for PathCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::BeginPath => write!(f, "begin_path"),
            Self::MoveTo { x, y } => write!(f, "move_to {x} {y}"),
            Self::LineTo { x, y } => write!(f, "line_to {x} {y}"),
            Self::Arc {
                cx,
                cy,
                radius,
                start,
                end,
            } => write!(f, "arc {cx} {cy} r={radius} {start} -> {end}"),
            Self::ClosePath => write!(f, "close_path"),
            Self::Stroke => write!(f, "stroke"),
        }
    }
}

/// Surface that draws nothing and remembers every call, in order.
#[derive(Clone, Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<PathCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<PathCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn replay<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> RoundRectResult<()> {
        replay(&self.commands, surface)
    }
}

impl DrawingSurface for CommandRecorder {
    fn begin_path(&mut self) -> RoundRectResult<()> {
        self.commands.push(PathCommand::BeginPath);
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> RoundRectResult<()> {
        self.commands.push(PathCommand::MoveTo { x, y });
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> RoundRectResult<()> {
        self.commands.push(PathCommand::LineTo { x, y });
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
        self.commands.push(PathCommand::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        });
        Ok(())
    }

    fn close_path(&mut self) -> RoundRectResult<()> {
        self.commands.push(PathCommand::ClosePath);
        Ok(())
    }

    fn stroke(&mut self) -> RoundRectResult<()> {
        self.commands.push(PathCommand::Stroke);
        Ok(())
    }
}

/// Issues `commands` against `surface` in order, stopping at the first error.
pub fn replay<S: DrawingSurface + ?Sized>(
    commands: &[PathCommand],
    surface: &mut S,
) -> RoundRectResult<()> {
    for cmd in commands {
        match *cmd {
            PathCommand::BeginPath => surface.begin_path()?,
            PathCommand::MoveTo { x, y } => surface.move_to(x, y)?,
            PathCommand::LineTo { x, y } => surface.line_to(x, y)?,
            PathCommand::Arc {
                cx,
                cy,
                radius,
                start,
                end,
            } => surface.arc(cx, cy, radius, start, end)?,
            PathCommand::ClosePath => surface.close_path()?,
            PathCommand::Stroke => surface.stroke()?,
        }
    }
    Ok(())
}

/// Cursor position after each geometric command.
///
/// Arcs leave the cursor at `center + radius * (cos end, sin end)`;
/// `close_path` returns it to the start of the subpath. `begin_path` resets
/// tracking and `stroke` does not move the cursor, so neither contributes a
/// point.
pub fn trace_cursor(commands: &[PathCommand]) -> Vec<Point> {
    let mut out = Vec::with_capacity(commands.len());
    let mut subpath_start: Option<Point> = None;
    for cmd in commands {
        let p = match *cmd {
            PathCommand::BeginPath => {
                subpath_start = None;
                continue;
            }
            PathCommand::Stroke => continue,
            PathCommand::MoveTo { x, y } => {
                let p = Point::new(x, y);
                subpath_start = Some(p);
                p
            }
            PathCommand::LineTo { x, y } => {
                let p = Point::new(x, y);
                if subpath_start.is_none() {
                    subpath_start = Some(p);
                }
                p
            }
            PathCommand::Arc {
                cx,
                cy,
                radius,
                start,
                end,
            } => {
                if subpath_start.is_none() {
                    let (sx, sy) = arc_point(cx, cy, radius, start);
                    subpath_start = Some(Point::new(sx, sy));
                }
                let (ex, ey) = arc_point(cx, cy, radius, end);
                Point::new(ex, ey)
            }
            PathCommand::ClosePath => match subpath_start {
                Some(p) => p,
                None => continue,
            },
        };
        out.push(p);
    }
    out
}
