use crate::foundation::{
    core::Rect,
    error::{RoundRectError, RoundRectResult},
};

/// A rectangle with uniformly rounded corners, in surface units (y-down).
///
/// `r` is only geometrically meaningful in `0 <= r <= min(w, h) / 2`; values
/// outside that range are representable and are drawn as-is by
/// [`crate::stroke_rounded_rect`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundedRectSpec {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub r: f64,
}

/// How out-of-range corner radii are handled before drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusPolicy {
    /// Draw whatever radius was given.
    #[default]
    Unchecked,
    /// Clamp the radius into `[0, min(w, h) / 2]`.
    Clamp,
    /// Fail with a validation error.
    Reject,
}

impl RoundedRectSpec {
    pub fn new(x: f64, y: f64, w: f64, h: f64, r: f64) -> Self {
        Self { x, y, w, h, r }
    }

    pub fn max_radius(&self) -> f64 {
        (self.w.min(self.h) / 2.0).max(0.0)
    }

    pub fn is_finite(&self) -> bool {
        [self.x, self.y, self.w, self.h, self.r]
            .iter()
            .all(|v| v.is_finite())
    }

    pub fn radius_in_range(&self) -> bool {
        self.is_finite() && self.r >= 0.0 && self.r <= self.max_radius()
    }

    pub fn validate(&self) -> RoundRectResult<()> {
        if !self.is_finite() {
            return Err(RoundRectError::validation(
                "rounded rect fields must be finite",
            ));
        }
        if self.w < 0.0 || self.h < 0.0 {
            return Err(RoundRectError::validation(format!(
                "rounded rect size must be non-negative (w={}, h={})",
                self.w, self.h
            )));
        }
        if !self.radius_in_range() {
            return Err(RoundRectError::validation(format!(
                "corner radius {} outside [0, {}]",
                self.r,
                self.max_radius()
            )));
        }
        Ok(())
    }

    pub fn clamped(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, self.max_radius()),
            ..*self
        }
    }

    /// Applies `policy`, returning the rect that should actually be drawn.
    pub fn resolve(&self, policy: RadiusPolicy) -> RoundRectResult<Self> {
        match policy {
            RadiusPolicy::Unchecked => Ok(*self),
            RadiusPolicy::Clamp => {
                let out = self.clamped();
                if out.r != self.r {
                    tracing::debug!(from = self.r, to = out.r, "clamped corner radius");
                }
                Ok(out)
            }
            RadiusPolicy::Reject => {
                self.validate()?;
                Ok(*self)
            }
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_radius_uses_smaller_side() {
        let s = RoundedRectSpec::new(0.0, 0.0, 100.0, 50.0, 8.0);
        assert_eq!(s.max_radius(), 25.0);
        assert!(s.radius_in_range());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn radius_bounds_are_inclusive() {
        assert!(RoundedRectSpec::new(0.0, 0.0, 20.0, 20.0, 0.0).radius_in_range());
        assert!(RoundedRectSpec::new(0.0, 0.0, 20.0, 20.0, 10.0).radius_in_range());
        assert!(!RoundedRectSpec::new(0.0, 0.0, 20.0, 20.0, 10.5).radius_in_range());
        assert!(!RoundedRectSpec::new(0.0, 0.0, 20.0, 20.0, -1.0).radius_in_range());
    }

    #[test]
    fn validate_rejects_bad_input() {
        assert!(RoundedRectSpec::new(f64::NAN, 0.0, 1.0, 1.0, 0.0).validate().is_err());
        assert!(RoundedRectSpec::new(0.0, 0.0, -1.0, 1.0, 0.0).validate().is_err());
        let err = RoundedRectSpec::new(0.0, 0.0, 10.0, 10.0, 6.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("corner radius 6"));
    }

    #[test]
    fn clamp_pulls_radius_into_range() {
        let s = RoundedRectSpec::new(1.0, 2.0, 10.0, 30.0, 40.0).clamped();
        assert_eq!(s.r, 5.0);
        assert_eq!((s.x, s.y, s.w, s.h), (1.0, 2.0, 10.0, 30.0));
        assert_eq!(RoundedRectSpec::new(0.0, 0.0, 10.0, 10.0, -3.0).clamped().r, 0.0);
    }

    #[test]
    fn resolve_follows_policy() {
        let bad = RoundedRectSpec::new(0.0, 0.0, 10.0, 10.0, 9.0);
        assert_eq!(bad.resolve(RadiusPolicy::Unchecked).unwrap(), bad);
        assert_eq!(bad.resolve(RadiusPolicy::Clamp).unwrap().r, 5.0);
        assert!(matches!(
            bad.resolve(RadiusPolicy::Reject),
            Err(RoundRectError::Validation(_))
        ));
    }

    #[test]
    fn policy_json_is_snake_case() {
        let p: RadiusPolicy = serde_json::from_str("\"clamp\"").unwrap();
        assert_eq!(p, RadiusPolicy::Clamp);
        assert_eq!(RadiusPolicy::default(), RadiusPolicy::Unchecked);
    }

    #[test]
    fn bounds_cover_full_rect() {
        let b = RoundedRectSpec::new(10.0, 20.0, 100.0, 50.0, 8.0).bounds();
        assert_eq!((b.x0, b.y0, b.x1, b.y1), (10.0, 20.0, 110.0, 70.0));
    }
}
