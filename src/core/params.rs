use serde::Deserialize;

use crate::error::{Error, Result};

/// Physical constants shared by every sphere.
///
/// All forces are per-frame quantities: the step runs on an implicit unit
/// time step, so `gravity` and `attraction` are velocity changes per frame and
/// `damping` is applied once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
    /// Subtracted from `vy` each frame while gravity is enabled.
    pub gravity: f64,
    /// Magnitude of the per-frame pull toward the pointer.
    pub attraction: f64,
    /// Velocity multiplier applied every frame, in [0, 1].
    pub damping: f64,
    /// Sphere radius (> 0).
    pub radius: f64,
    /// Sphere mass (> 0). Contacts assume equal masses; this only scales energy.
    pub mass: f64,
    /// Lower face coordinate of the box.
    pub box_min: f64,
    /// Upper face coordinate of the box.
    pub box_max: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            gravity: 0.01,
            attraction: 0.01,
            damping: 0.99,
            radius: 0.2,
            mass: 1.0,
            box_min: -10.0,
            box_max: 10.0,
        }
    }
}

impl Params {
    /// Check that the constants describe a usable box.
    ///
    /// Errors: `Error::InvalidParam` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("gravity", self.gravity),
            ("attraction", self.attraction),
            ("damping", self.damping),
            ("radius", self.radius),
            ("mass", self.mass),
            ("box_min", self.box_min),
            ("box_max", self.box_max),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidParam(format!("{name} must be finite")));
        }
        if self.radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if self.mass <= 0.0 {
            return Err(Error::InvalidParam("mass must be finite and > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(Error::InvalidParam("damping must lie in [0, 1]".into()));
        }
        // Placement samples centres from [lo, hi]; compare exactly those bounds.
        if self.lo() > self.hi() {
            return Err(Error::InvalidParam(
                "box must be at least 2 * radius wide".into(),
            ));
        }
        Ok(())
    }

    /// Smallest admissible centre coordinate on a bounded axis.
    #[inline]
    pub fn lo(&self) -> f64 {
        self.box_min + self.radius
    }

    /// Largest admissible centre coordinate on a bounded axis.
    #[inline]
    pub fn hi(&self) -> f64 {
        self.box_max - self.radius
    }

    /// Contact distance between two sphere centres.
    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() -> Result<()> {
        let p = Params::default();
        p.validate()?;
        assert!((p.lo() + 9.8).abs() < 1e-12);
        assert!((p.hi() - 9.8).abs() < 1e-12);
        assert!((p.diameter() - 0.4).abs() < 1e-15);
        Ok(())
    }

    #[test]
    fn zero_radius_rejected() {
        let p = Params {
            radius: 0.0,
            ..Params::default()
        };
        assert!(p.validate().unwrap_err().to_string().contains("radius"));
    }

    #[test]
    fn damping_above_one_rejected() {
        let p = Params {
            damping: 1.01,
            ..Params::default()
        };
        assert!(p.validate().unwrap_err().to_string().contains("damping"));
    }

    #[test]
    fn narrow_box_rejected() {
        let p = Params {
            box_min: 0.0,
            box_max: 0.3,
            ..Params::default()
        };
        assert!(p.validate().unwrap_err().to_string().contains("box"));
    }

    #[test]
    fn one_diameter_box_rounding_rejected() {
        // 0.1 + 0.3 rounds above 0.7 - 0.3, leaving no room for a centre.
        let p = Params {
            box_min: 0.1,
            box_max: 0.7,
            radius: 0.3,
            ..Params::default()
        };
        assert!(p.lo() > p.hi());
        assert!(p.validate().unwrap_err().to_string().contains("box"));
    }

    #[test]
    fn exact_one_diameter_box_accepted() -> Result<()> {
        let p = Params {
            box_min: -1.0,
            box_max: 1.0,
            radius: 1.0,
            ..Params::default()
        };
        p.validate()?;
        assert_eq!(p.lo(), p.hi());
        Ok(())
    }

    #[test]
    fn nan_field_named() {
        let p = Params {
            gravity: f64::NAN,
            ..Params::default()
        };
        assert!(p.validate().unwrap_err().to_string().contains("gravity"));
    }
}
