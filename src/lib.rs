//! Frame-stepped physics for a fixed population of equal spheres in a box.
//!
//! Each call to [`core::Simulation::step`] applies gravity, pointer attraction
//! and damping, reflects spheres off the x/y faces of the box, then resolves
//! every overlapping pair in index order with an equal-mass elastic exchange.
//!
//! ```
//! use spheresim::core::{Input, Params, Simulation};
//!
//! # fn main() -> spheresim::error::Result<()> {
//! let mut sim = Simulation::new(100, Params::default(), Some(42))?;
//! let mut input = Input::default();
//! input.set_pointer(0.0, 0.0);
//! input.press_pointer();
//! for _ in 0..10 {
//!     sim.step(&input);
//! }
//! assert_eq!(sim.positions().len(), 100);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;

#[cfg(feature = "python")]
mod python;
