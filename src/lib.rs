//! Synthetic fractal point clouds rasterized onto a voxel density grid.
//!
//! Citation: Elmegreen, B. G. Astrophys J. v477, 1997, pp. 196-203.

pub mod fractal_grid {
	pub mod error;
	pub mod params;
	pub mod sequence;
	pub mod grid;
	pub mod utils;
	pub mod raster;
}
