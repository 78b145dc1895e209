use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::Rng;

use crate::fractal_grid::error::FractalError;
use crate::fractal_grid::grid::DensityGrid;
use crate::fractal_grid::params::FractalParams;
use crate::fractal_grid::sequence::generate_axis;

/// Minimal point representation for rasterization
#[derive(Debug, Clone)]
pub struct Point {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

/// Zip three equal-length axis sequences into 3D points by position.
pub fn zip_axes(xs: &[f64], ys: &[f64], zs: &[f64]) -> Vec<Point> {
	debug_assert_eq!(xs.len(), ys.len());
	debug_assert_eq!(xs.len(), zs.len());
	xs.iter()
		.zip(ys)
		.zip(zs)
		.map(|((&x, &y), &z)| Point { x, y, z })
		.collect()
}

impl DensityGrid {
	/// Bin points into the grid over the fixed range [0,1] on every axis.
	/// A point outside the unit cube on any axis is dropped; a coordinate
	/// exactly at 1.0 lands in the last cell. Returns the number of points
	/// binned.
	pub fn bin_points(&mut self, points: &[Point]) -> usize {
		let mut binned = 0usize;
		for point in points {
			if let Some(index) = self.cell_of(point) {
				self.data[index] += 1;
				binned += 1;
			}
		}
		binned
	}

	/// Bin points with a progress bar over the long loop.
	pub fn bin_points_with_progress(&mut self, points: &[Point]) -> usize {
		let pb = ProgressBar::new(points.len() as u64);
		pb.set_style(
			ProgressStyle::default_bar()
			.template("Binning Points: [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
			.unwrap()
			.progress_chars("#>-"),
		);

		let mut binned = 0usize;
		for point in points {
			if let Some(index) = self.cell_of(point) {
				self.data[index] += 1;
				binned += 1;
			}
			pb.inc(1);
		}

		pb.finish_with_message("Binning complete!");
		binned
	}

	/// Linear cell index for a point, or `None` when any coordinate falls
	/// outside [0,1] (including NaN).
	#[inline]
	fn cell_of(&self, point: &Point) -> Option<usize> {
		let i = self.axis_cell(point.x)?;
		let j = self.axis_cell(point.y)?;
		let k = self.axis_cell(point.z)?;
		Some(self.ijk_to_index(i, j, k))
	}

	/// Cell coordinate along one axis under equal-width binning on [0,1].
	#[inline]
	fn axis_cell(&self, v: f64) -> Option<usize> {
		if !(0.0..=1.0).contains(&v) {
			return None;
		}
		// The closed right edge folds v == 1.0 into the last cell.
		Some(((v * self.dim as f64) as usize).min(self.dim - 1))
	}
}

/// Generate a fractal point cloud and rasterize it onto a dim^3 density
/// grid over the unit cube.
///
/// The three axes are three independent invocations of the sequence
/// generator; coordinates are related only by positional index. Points
/// pushed outside the cube by the unclamped displacement are dropped by
/// the histogram, so the grid total can fall short of branching^levels.
pub fn generate_fractal_grid(
	length: u32,
	levels: u32,
	branching: u32,
	dim: usize,
	rng: &mut impl Rng,
) -> Result<DensityGrid, FractalError> {
	let params = FractalParams::new(length, levels, branching)?;
	let mut grid = DensityGrid::new(dim)?;

	let xs = generate_axis(&params, rng)?;
	let ys = generate_axis(&params, rng)?;
	let zs = generate_axis(&params, rng)?;
	let points = zip_axes(&xs, &ys, &zs);

	let binned = grid.bin_points(&points);
	debug!(
		"rasterized {}/{} points into a {}^3 grid",
		binned,
		points.len(),
		dim
	);
	Ok(grid)
}
