//! Core simulation types: sphere state, shared constants, per-frame input and
//! the frame step itself.

pub mod input;
pub mod params;
pub mod particle;
pub mod sim;

pub use input::Input;
pub use params::Params;
pub use particle::{Particle, DIM};
pub use sim::{Simulation, StepStats};
