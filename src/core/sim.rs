use crate::core::input::Input;
use crate::core::params::Params;
use crate::core::particle::{Particle, DIM};
use crate::error::{Error, Result};
use log::{debug, trace};
use rand::{rng, rngs::StdRng, Rng, SeedableRng};

/// Axes bounded by the box walls (x and y). The z axis is left open.
const BOUNDED_AXES: [usize; 2] = [0, 1];

/// Counts gathered while stepping one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Axis reflections against the box faces.
    pub wall_hits: usize,
    /// Overlapping pairs that were separated and exchanged velocity.
    pub contacts: usize,
    /// Overlapping pairs skipped because their centres coincide.
    pub degenerate_pairs: usize,
}

impl StepStats {
    /// Accumulate another frame's counts.
    pub fn merge(&mut self, other: StepStats) {
        self.wall_hits += other.wall_hits;
        self.contacts += other.contacts;
        self.degenerate_pairs += other.degenerate_pairs;
    }
}

/// A fixed population of equal spheres in an axis-aligned box, advanced one
/// frame at a time.
///
/// The particle vector is allocated once and never resized; a particle's index
/// is its identity for the lifetime of the simulation.
#[derive(Debug, Clone)]
pub struct Simulation {
    params: Params,
    particles: Vec<Particle>,
    frame: u64,
}

impl Simulation {
    /// Create `num_particles` spheres at rest, placed uniformly at random so
    /// that each centre lies at least one radius inside every face.
    ///
    /// Overlap between the initial spheres is allowed; the contact phase pushes
    /// them apart over the first frames.
    pub fn new(num_particles: usize, params: Params, seed: Option<u64>) -> Result<Self> {
        if num_particles == 0 {
            return Err(Error::InvalidParam("num_particles must be > 0".into()));
        }
        params.validate()?;

        let mut rng: StdRng = match seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rng().random()),
        };

        let (lo, hi) = (params.lo(), params.hi());
        let particles = (0..num_particles)
            .map(|_| {
                let mut r = [0.0_f64; DIM];
                r.iter_mut().for_each(|x| *x = rng.random_range(lo..=hi));
                Particle { r, v: [0.0; DIM] }
            })
            .collect();

        debug!(
            "created {} spheres (radius {}, box [{}, {}], seed {:?})",
            num_particles, params.radius, params.box_min, params.box_max, seed
        );

        Ok(Self {
            params,
            particles,
            frame: 0,
        })
    }

    /// Build a simulation from explicit particle states.
    pub fn from_particles(params: Params, particles: Vec<Particle>) -> Result<Self> {
        if particles.is_empty() {
            return Err(Error::InvalidParam("num_particles must be > 0".into()));
        }
        params.validate()?;
        if let Some(i) = particles.iter().position(|p| !p.is_finite()) {
            return Err(Error::InvalidParam(format!(
                "particle {i} has a non-finite position or velocity"
            )));
        }
        Ok(Self {
            params,
            particles,
            frame: 0,
        })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Number of particles.
    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    /// Read-only view of the particle states, in index order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Positions as a Vec of fixed-size arrays.
    pub fn positions(&self) -> Vec<[f64; DIM]> {
        self.particles.iter().map(|p| p.r).collect()
    }

    /// Velocities as a Vec of fixed-size arrays.
    pub fn velocities(&self) -> Vec<[f64; DIM]> {
        self.particles.iter().map(|p| p.v).collect()
    }

    /// Compute total kinetic energy (diagnostic).
    pub fn kinetic_energy(&self) -> f64 {
        let m = self.params.mass;
        self.particles.iter().map(|p| p.kinetic_energy(m)).sum()
    }

    /// Advance one frame: forces and integration, wall reflection, then
    /// pairwise contacts.
    pub fn step(&mut self, input: &Input) -> StepStats {
        self.integrate(input);
        let wall_hits = self.resolve_boundaries();
        let (contacts, degenerate_pairs) = self.resolve_pairs();
        self.frame += 1;

        let stats = StepStats {
            wall_hits,
            contacts,
            degenerate_pairs,
        };
        trace!("frame {}: {:?}", self.frame, stats);
        stats
    }

    /// Apply gravity, pointer attraction and damping to every velocity, then
    /// move each particle by its damped velocity.
    pub fn integrate(&mut self, input: &Input) {
        let Params {
            gravity,
            attraction,
            damping,
            ..
        } = self.params;
        let [px, py] = input.pointer;

        for p in &mut self.particles {
            if input.gravity_enabled {
                p.v[1] -= gravity;
            }

            if input.pointer_active {
                let cx = px - p.r[0];
                let cy = py - p.r[1];
                let c_dist = (cx * cx + cy * cy).sqrt();
                if c_dist > 0.0 {
                    p.v[0] += attraction * cx / c_dist;
                    p.v[1] += attraction * cy / c_dist;
                }
            }

            for (rk, vk) in p.r.iter_mut().zip(p.v.iter_mut()) {
                *vk *= damping;
                *rk += *vk;
            }
        }
    }

    /// Clamp x and y back inside the box and reflect the velocity on each axis
    /// that crossed a face. Returns the number of reflections.
    pub fn resolve_boundaries(&mut self) -> usize {
        let Params {
            radius,
            box_min,
            box_max,
            ..
        } = self.params;
        let mut hits = 0usize;

        for p in &mut self.particles {
            for k in BOUNDED_AXES {
                if p.r[k] - radius < box_min {
                    p.r[k] = box_min + radius;
                    p.v[k] = -p.v[k];
                    hits += 1;
                }
                if p.r[k] + radius > box_max {
                    p.r[k] = box_max - radius;
                    p.v[k] = -p.v[k];
                    hits += 1;
                }
            }
        }
        hits
    }

    /// Separate and bounce every overlapping pair, visiting pairs (i, j) with
    /// i < j in ascending order and updating both particles in place.
    ///
    /// Returns `(contacts, degenerate_pairs)`.
    pub fn resolve_pairs(&mut self) -> (usize, usize) {
        let diameter = self.params.diameter();
        let n = self.particles.len();
        let mut contacts = 0usize;
        let mut degenerate = 0usize;

        for i in 0..n {
            // particles[i] is the left partner; tail holds every j > i.
            let (head, tail) = self.particles.split_at_mut(i + 1);
            let pi = &mut head[i];
            for (offset, pj) in tail.iter_mut().enumerate() {
                match resolve_contact(pi, pj, diameter) {
                    Contact::Apart => {}
                    Contact::Resolved => contacts += 1,
                    Contact::Coincident => {
                        degenerate += 1;
                        trace!("skipping coincident pair ({}, {})", i, i + 1 + offset);
                    }
                }
            }
        }
        (contacts, degenerate)
    }
}

/// Outcome of testing a single pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Contact {
    Apart,
    Resolved,
    Coincident,
}

/// Resolve one pair with equal unit masses: push both spheres apart along the
/// centre line until they just touch, then exchange the normal component of
/// their relative velocity.
fn resolve_contact(pi: &mut Particle, pj: &mut Particle, diameter: f64) -> Contact {
    let mut n = [0.0_f64; DIM];
    for ((nk, &rjk), &rik) in n.iter_mut().zip(pj.r.iter()).zip(pi.r.iter()) {
        *nk = rjk - rik;
    }
    let dist = dot(&n, &n).sqrt();
    if dist >= diameter {
        return Contact::Apart;
    }
    if dist <= 0.0 {
        // No contact normal exists.
        return Contact::Coincident;
    }
    for nk in &mut n {
        *nk /= dist;
    }

    let half_overlap = 0.5 * (diameter - dist);
    for (k, &nk) in n.iter().enumerate() {
        pi.r[k] -= nk * half_overlap;
        pj.r[k] += nk * half_overlap;
    }

    let mut u = [0.0_f64; DIM];
    for ((uk, &vj), &vi) in u.iter_mut().zip(pj.v.iter()).zip(pi.v.iter()) {
        *uk = vj - vi;
    }
    let u_n = dot(&u, &n);

    // 2 * m_other / (m_i + m_j) == 1 for equal masses.
    for (k, &nk) in n.iter().enumerate() {
        pi.v[k] += u_n * nk;
        pj.v[k] -= u_n * nk;
    }
    Contact::Resolved
}

// ============ Utility helpers ============

#[inline]
fn dot(a: &[f64; DIM], b: &[f64; DIM]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
