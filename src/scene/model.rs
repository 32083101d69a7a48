use std::io::Read;

use crate::{
    foundation::{
        core::{Canvas, Rgba8Premul, StrokeStyle},
        error::{RoundRectError, RoundRectResult},
    },
    geom::rounded::{RadiusPolicy, RoundedRectSpec},
    render::cpu::{CpuSurface, FrameRGBA},
    shapes::rounded_rect::stroke_rounded_rect_spec,
    surface::DrawingSurface,
};

/// A batch of rounded rectangles stroked with one style onto one canvas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub canvas: Canvas,
    #[serde(default = "default_background")]
    pub background: Rgba8Premul, // premultiplied
    #[serde(default)]
    pub stroke: StrokeStyle,
    #[serde(default)]
    pub radius_policy: RadiusPolicy,
    pub rects: Vec<RoundedRectSpec>,
}

fn default_background() -> Rgba8Premul {
    Rgba8Premul::opaque(255, 255, 255)
}

impl Scene {
    pub fn from_json_str(s: &str) -> RoundRectResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_reader<R: Read>(r: R) -> RoundRectResult<Self> {
        Ok(serde_json::from_reader(r)?)
    }

    pub fn to_json_pretty(&self) -> RoundRectResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks everything except corner radii, which are governed by
    /// `radius_policy` at draw time.
    pub fn validate(&self) -> RoundRectResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(RoundRectError::validation(
                "canvas width/height must be > 0",
            ));
        }
        self.stroke.validate()?;
        for (i, rect) in self.rects.iter().enumerate() {
            if !rect.is_finite() {
                return Err(RoundRectError::validation(format!(
                    "rects[{i}] fields must be finite"
                )));
            }
            if rect.w < 0.0 || rect.h < 0.0 {
                return Err(RoundRectError::validation(format!(
                    "rects[{i}] size must be non-negative"
                )));
            }
        }
        Ok(())
    }

    /// Indices of rects whose radius is outside `[0, min(w, h) / 2]`.
    pub fn out_of_range_radii(&self) -> Vec<usize> {
        self.rects
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.radius_in_range())
            .map(|(i, _)| i)
            .collect()
    }

    /// Strokes every rect onto `surface` in order.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> RoundRectResult<()> {
        for rect in &self.rects {
            stroke_rounded_rect_spec(surface, rect, self.radius_policy)?;
        }
        Ok(())
    }

    /// Validates, then rasterizes the whole scene on a fresh [`CpuSurface`].
    #[tracing::instrument(skip(self), fields(rects = self.rects.len()))]
    pub fn render(&self) -> RoundRectResult<FrameRGBA> {
        self.validate()?;
        let mut surface = CpuSurface::new(self.canvas, self.background)?;
        surface.set_stroke_style(self.stroke)?;
        self.draw(&mut surface)?;
        surface.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recorder::{CommandRecorder, PathCommand};

    const JSON: &str = r#"{
        "canvas": { "width": 64, "height": 32 },
        "rects": [
            { "x": 4, "y": 4, "w": 56, "h": 24, "r": 6 },
            { "x": 10, "y": 10, "w": 10, "h": 10, "r": 9 }
        ]
    }"#;

    #[test]
    fn json_defaults_fill_optional_fields() {
        let scene = Scene::from_json_str(JSON).unwrap();
        assert_eq!(scene.background, Rgba8Premul::opaque(255, 255, 255));
        assert_eq!(scene.stroke, StrokeStyle::default());
        assert_eq!(scene.radius_policy, RadiusPolicy::Unchecked);
        assert_eq!(scene.rects.len(), 2);
        assert!(scene.validate().is_ok());
        assert_eq!(scene.out_of_range_radii(), vec![1]);
    }

    #[test]
    fn malformed_json_is_a_serde_error() {
        let err = Scene::from_json_str("{ \"canvas\": 3 }").unwrap_err();
        assert!(matches!(err, RoundRectError::Serde(_)));
    }

    #[test]
    fn validate_catches_bad_rects_and_stroke() {
        let mut scene = Scene::from_json_str(JSON).unwrap();
        scene.rects[0].w = -1.0;
        assert!(scene.validate().is_err());

        let mut scene = Scene::from_json_str(JSON).unwrap();
        scene.stroke.width = 0.0;
        assert!(scene.validate().is_err());
    }

    #[test]
    fn draw_applies_policy_per_rect() {
        let mut scene = Scene::from_json_str(JSON).unwrap();
        scene.radius_policy = RadiusPolicy::Clamp;
        let mut rec = CommandRecorder::new();
        scene.draw(&mut rec).unwrap();
        assert_eq!(rec.commands().len(), 22);
        assert_eq!(rec.commands()[12], PathCommand::MoveTo { x: 15.0, y: 10.0 });

        scene.radius_policy = RadiusPolicy::Reject;
        let mut rec = CommandRecorder::new();
        assert!(scene.draw(&mut rec).is_err());
        // The first rect was drawn before the second one failed.
        assert_eq!(rec.commands().len(), 11);
    }

    #[test]
    fn json_round_trips_through_pretty_printer() {
        let scene = Scene::from_json_str(JSON).unwrap();
        let back = Scene::from_json_str(&scene.to_json_pretty().unwrap()).unwrap();
        assert_eq!(scene, back);
    }
}
