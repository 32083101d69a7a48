use std::path::Path;

use crate::{
    foundation::{
        core::{BezPath, Canvas, Point, Rgba8Premul, StrokeStyle},
        error::{RoundRectError, RoundRectResult},
    },
    surface::{DrawingSurface, path::PathSurface},
};

/// Rendered pixels, row-major RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Raster surface backed by `vello_cpu`.
///
/// Paths are built with the same canvas semantics as [`PathSurface`]; each
/// `stroke()` rasterizes the current path with the ambient stroke style.
pub struct CpuSurface {
    width: u16,
    height: u16,
    background: Rgba8Premul,
    path: PathSurface,
    ctx: vello_cpu::RenderContext,
    stroke_count: usize,
}

impl CpuSurface {
    pub fn new(canvas: Canvas, background: Rgba8Premul) -> RoundRectResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| RoundRectError::surface("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| RoundRectError::surface("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(RoundRectError::surface("surface width/height must be > 0"));
        }

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        clear_ctx(&mut ctx, width, height, background);

        Ok(Self {
            width,
            height,
            background,
            path: PathSurface::new(),
            ctx,
            stroke_count: 0,
        })
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        self.path.stroke_style()
    }

    pub fn set_stroke_style(&mut self, style: StrokeStyle) -> RoundRectResult<()> {
        style.validate()?;
        self.path.set_stroke_style(style);
        Ok(())
    }

    pub fn stroke_count(&self) -> usize {
        self.stroke_count
    }

    /// Drops everything drawn so far and refills the background.
    pub fn clear(&mut self) {
        self.ctx = vello_cpu::RenderContext::new(self.width, self.height);
        clear_ctx(&mut self.ctx, self.width, self.height, self.background);
        self.stroke_count = 0;
    }

    /// Rasterizes all strokes issued so far.
    #[tracing::instrument(level = "debug", skip(self), fields(strokes = self.stroke_count))]
    pub fn finish(&mut self) -> RoundRectResult<FrameRGBA> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

impl DrawingSurface for CpuSurface {
    fn begin_path(&mut self) -> RoundRectResult<()> {
        self.path.begin_path()
    }

    fn move_to(&mut self, x: f64, y: f64) -> RoundRectResult<()> {
        self.path.move_to(x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) -> RoundRectResult<()> {
        self.path.line_to(x, y)
    }

    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
    ) -> RoundRectResult<()> {
        self.path.arc(cx, cy, radius, start, end)
    }

    fn close_path(&mut self) -> RoundRectResult<()> {
        self.path.close_path()
    }

    fn stroke(&mut self) -> RoundRectResult<()> {
        let style = self.path.stroke_style();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint_color(style.color));
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(style.width));
        self.ctx.stroke_path(&bezpath_to_cpu(self.path.current_path()));
        self.stroke_count += 1;
        Ok(())
    }
}

fn clear_ctx(ctx: &mut vello_cpu::RenderContext, width: u16, height: u16, bg: Rgba8Premul) {
    ctx.set_paint(paint_color(bg));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(width),
        f64::from(height),
    ));
}

// peniko colors are straight alpha; vello_cpu premultiplies them itself.
fn paint_color(c: Rgba8Premul) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_straight_rgba();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Writes `frame` as an RGBA8 PNG, creating parent directories as needed.
pub fn write_png(frame: &FrameRGBA, out: &Path) -> RoundRectResult<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            RoundRectError::Other(anyhow::Error::new(e).context(format!(
                "create output dir '{}'",
                parent.display()
            )))
        })?;
    }

    let data = if frame.premultiplied {
        unpremultiply(&frame.data)
    } else {
        frame.data.clone()
    };

    image::save_buffer_with_format(
        out,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| {
        RoundRectError::Other(
            anyhow::Error::new(e).context(format!("write png '{}'", out.display())),
        )
    })
}

fn unpremultiply(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    for px in data.chunks_exact(4) {
        let premul = Rgba8Premul {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        };
        out.extend_from_slice(&premul.to_straight_rgba());
    }
    out
}
