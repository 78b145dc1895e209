use crate::fractal_grid::error::FractalError;
use crate::fractal_grid::params::MAX_CELLS;

/// 3D density grid over the unit cube with flat per-cell count storage
#[derive(Debug, Clone)]
pub struct DensityGrid {
	pub dim: usize,         // Number of cells along each axis
	pub total_cells: usize, // Total number of cells dim^3
	pub cell_size: f64,     // Width of one cubic cell, 1/dim
	pub data: Vec<u32>,     // One count per cell, x fastest
}

impl DensityGrid {
	/// Create a new density grid, fully allocated with all counts at zero
	pub fn new(dim: usize) -> Result<Self, FractalError> {
		if dim == 0 {
			return Err(FractalError::InvalidParameter {
				name: "dim",
				value: 0,
			});
		}
		let requested = (dim as u128).pow(3);
		if requested > MAX_CELLS {
			return Err(FractalError::CapacityExceeded {
				what: "cell count",
				requested,
				limit: MAX_CELLS,
			});
		}
		let total_cells = dim * dim * dim;

		Ok(Self {
			dim,
			total_cells,
			cell_size: 1.0 / dim as f64,
			data: vec![0; total_cells], // Pre-allocate full grid
		})
	}
}
