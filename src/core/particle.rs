use crate::error::{Error, Result};

/// Fixed spatial dimension (3D).
pub const DIM: usize = 3;

/// A sphere's dynamic state.
///
/// Radius and mass are shared by every sphere and live in
/// [`Params`](crate::core::Params), so a particle carries only:
/// - `r`: position vector [x, y, z]
/// - `v`: velocity vector [vx, vy, vz]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position (x, y, z).
    pub r: [f64; DIM],
    /// Velocity (vx, vy, vz).
    pub v: [f64; DIM],
}

impl Particle {
    /// Create a new particle after validating that every component is finite.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if any position or velocity component is NaN/inf.
    pub fn new(r: [f64; DIM], v: [f64; DIM]) -> Result<Self> {
        if !r.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !v.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self { r, v })
    }

    /// A particle at `r` with zero velocity.
    pub fn at_rest(r: [f64; DIM]) -> Result<Self> {
        Self::new(r, [0.0; DIM])
    }

    /// Kinetic energy for the shared sphere `mass`: 1/2 m |v|^2.
    #[inline]
    pub fn kinetic_energy(&self, mass: f64) -> f64 {
        let vsq: f64 = self.v.iter().map(|&c| c * c).sum();
        0.5 * mass * vsq
    }

    /// True when every position and velocity component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.r.iter().chain(self.v.iter()).all(|x| x.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_particle_ok() -> Result<()> {
        let p = Particle::new([0.0, 1.0, 2.0], [2.0, -3.0, 0.5])?;
        assert_eq!(p.r, [0.0, 1.0, 2.0]);
        assert_eq!(p.v, [2.0, -3.0, 0.5]);
        assert!(p.is_finite());
        Ok(())
    }

    #[test]
    fn at_rest_has_zero_velocity() -> Result<()> {
        let p = Particle::at_rest([1.0, -4.0, 3.0])?;
        assert_eq!(p.v, [0.0; DIM]);
        Ok(())
    }

    #[test]
    fn non_finite_position_rejected() {
        let err = Particle::new([f64::NAN, 0.0, 0.0], [0.0, 0.0, 0.0]).unwrap_err();
        assert!(err.to_string().contains("position"));
    }

    #[test]
    fn non_finite_velocity_rejected() {
        let err = Particle::new([0.0, 0.0, 0.0], [0.0, f64::INFINITY, 0.0]).unwrap_err();
        assert!(err.to_string().contains("velocity"));
    }

    #[test]
    fn kinetic_energy_computed() -> Result<()> {
        // v = (3,4,0), |v|^2 = 25; KE = 0.5 * m * 25
        let p = Particle::new([0.0, 0.0, 0.0], [3.0, 4.0, 0.0])?;
        assert!((p.kinetic_energy(2.0) - 25.0).abs() < 1e-12);
        Ok(())
    }
}
