use crate::{
    foundation::{
        core::{Canvas, Rgba8Premul, StrokeStyle},
        error::RoundRectResult,
    },
    geom::rounded::{RadiusPolicy, RoundedRectSpec},
    scene::model::Scene,
};

pub struct SceneBuilder {
    canvas: Canvas,
    background: Rgba8Premul,
    stroke: StrokeStyle,
    radius_policy: RadiusPolicy,
    rects: Vec<RoundedRectSpec>,
}

impl SceneBuilder {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            background: Rgba8Premul::opaque(255, 255, 255),
            stroke: StrokeStyle::default(),
            radius_policy: RadiusPolicy::default(),
            rects: Vec::new(),
        }
    }

    pub fn background(mut self, color: Rgba8Premul) -> Self {
        self.background = color;
        self
    }

    pub fn stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn radius_policy(mut self, policy: RadiusPolicy) -> Self {
        self.radius_policy = policy;
        self
    }

    pub fn rect(mut self, x: f64, y: f64, w: f64, h: f64, r: f64) -> Self {
        self.rects.push(RoundedRectSpec::new(x, y, w, h, r));
        self
    }

    pub fn build(self) -> RoundRectResult<Scene> {
        let scene = Scene {
            canvas: self.canvas,
            background: self.background,
            stroke: self.stroke,
            radius_policy: self.radius_policy,
            rects: self.rects,
        };
        scene.validate()?;
        Ok(scene)
    }
}
