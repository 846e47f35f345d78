use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Input, Params, Simulation, DIM};

fn py_err<E: ToString>(e: E) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn to_array(rows: &[[f64; DIM]]) -> Array2<f64> {
    let mut arr = Array2::<f64>::zeros((rows.len(), DIM));
    for (i, row) in rows.iter().enumerate() {
        for k in 0..DIM {
            arr[[i, k]] = row[k];
        }
    }
    arr
}

/// SphereSim: Python-facing wrapper holding the simulation and its input.
///
/// A render loop on the Python side feeds pointer/gravity state, calls
/// `step()` once per frame and draws `get_positions()`.
#[pyclass]
pub struct SphereSim {
    sim: Simulation,
    input: Input,
}

#[pymethods]
impl SphereSim {
    /// Place `num_particles` spheres at rest with the reference constants.
    ///
    /// Errors: raises ValueError on invalid parameters.
    #[new]
    #[pyo3(signature = (num_particles=1500, seed=None))]
    fn new(num_particles: usize, seed: Option<u64>) -> PyResult<Self> {
        let sim = Simulation::new(num_particles, Params::default(), seed).map_err(py_err)?;
        Ok(Self {
            sim,
            input: Input::default(),
        })
    }

    /// Advance one frame (releases the GIL during computation).
    /// Returns (wall_hits, contacts, degenerate_pairs).
    fn step(&mut self, py: Python<'_>) -> (usize, usize, usize) {
        let input = self.input;
        let sim = &mut self.sim;
        let stats = py.detach(|| sim.step(&input));
        (stats.wall_hits, stats.contacts, stats.degenerate_pairs)
    }

    /// Pointer position in world coordinates.
    fn set_pointer(&mut self, x: f64, y: f64) -> PyResult<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(py_err("pointer coordinates must be finite"));
        }
        self.input.set_pointer(x, y);
        Ok(())
    }

    fn set_pointer_active(&mut self, active: bool) {
        if active {
            self.input.press_pointer();
        } else {
            self.input.release_pointer();
        }
    }

    fn set_gravity(&mut self, enabled: bool) {
        self.input.gravity_enabled = enabled;
    }

    /// Flip gravity; returns the new state.
    fn toggle_gravity(&mut self) -> bool {
        self.input.toggle_gravity()
    }

    /// Return positions as a NumPy array of shape (N, 3), dtype=float64.
    fn get_positions(&self, py: Python<'_>) -> Py<PyArray2<f64>> {
        to_array(&self.sim.positions()).into_pyarray(py).unbind()
    }

    /// Return velocities as a NumPy array of shape (N, 3), dtype=float64.
    fn get_velocities(&self, py: Python<'_>) -> Py<PyArray2<f64>> {
        to_array(&self.sim.velocities()).into_pyarray(py).unbind()
    }

    fn kinetic_energy(&self) -> f64 {
        self.sim.kinetic_energy()
    }

    fn frame(&self) -> u64 {
        self.sim.frame()
    }
}

/// The spheresim Python module entry point.
#[pymodule]
fn spheresim(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<SphereSim>()?;
    Ok(())
}
