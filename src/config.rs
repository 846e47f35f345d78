//! Run configuration loaded from YAML.
//!
//! Every field has a default, so an empty document describes the reference
//! scene: 1500 spheres of radius 0.2 in a [-10, 10] box.
//!
//! # YAML format
//!
//! ```yaml
//! num_particles: 1500
//! seed: 42            # omit for an entropy-seeded run
//! frames: 600         # how many frames the headless driver runs
//! params:
//!   gravity: 0.01
//!   attraction: 0.01
//!   damping: 0.99
//!   radius: 0.2
//!   mass: 1.0
//!   box_min: -10.0
//!   box_max: 10.0
//! ```

use std::io::Read;

use serde::Deserialize;

use crate::core::{Params, Simulation};
use crate::error::Result;

/// Top-level run configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Population, fixed for the run.
    pub num_particles: usize,
    /// Deterministic placement when set.
    pub seed: Option<u64>,
    /// Frames stepped by the headless driver.
    pub frames: u64,
    /// Physical constants.
    pub params: Params,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_particles: 1500,
            seed: None,
            frames: 600,
            params: Params::default(),
        }
    }
}

impl SimConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Validate and place the spheres.
    pub fn build(&self) -> Result<Simulation> {
        Simulation::new(self.num_particles, self.params, self.seed)
    }
}
