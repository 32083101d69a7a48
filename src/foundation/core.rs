use crate::foundation::error::{RoundRectError, RoundRectResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Pixel dimensions of a raster surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> RoundRectResult<Self> {
        if width == 0 || height == 0 {
            return Err(RoundRectError::validation("Canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Undoes the alpha multiplication; fully transparent stays all-zero.
    pub fn to_straight_rgba(self) -> [u8; 4] {
        if self.a == 0 || self.a == 255 {
            return self.to_array();
        }
        let a = u16::from(self.a);
        let unpremul = |c: u8| -> u8 { ((u16::from(c) * 255 + a / 2) / a).min(255) as u8 };
        [unpremul(self.r), unpremul(self.g), unpremul(self.b), self.a]
    }
}

/// Ambient stroke state of a surface. Drawing routines never touch it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeStyle {
    pub color: Rgba8Premul,
    pub width: f64,
}

impl Default for StrokeStyle {
    // Canvas 2D defaults: opaque black, 1px.
    fn default() -> Self {
        Self {
            color: Rgba8Premul::opaque(0, 0, 0),
            width: 1.0,
        }
    }
}

impl StrokeStyle {
    pub fn validate(&self) -> RoundRectResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(RoundRectError::validation(
                "stroke width must be finite and > 0",
            ));
        }
        Ok(())
    }
}
