use log::debug;
use rand::Rng;

use crate::fractal_grid::error::FractalError;
use crate::fractal_grid::params::FractalParams;

/// Generate one axis of a fractal point cloud: branching^levels coordinates
/// built over `levels` rounds of geometrically shrinking random displacement.
///
/// Every point of the previous level spawns `branching` children offset by
/// `2 * (eta - 0.5) / length^i` with eta uniform in [0,1); level 1 starts
/// from the cube center 0.5. Coordinates are intentionally left unclamped,
/// so a child can drift outside [0,1] at low `length`. The histogram drops
/// such strays during binning.
pub fn generate_fractal(
	length: u32,
	levels: u32,
	branching: u32,
	rng: &mut impl Rng,
) -> Result<Vec<f64>, FractalError> {
	let params = FractalParams::new(length, levels, branching)?;
	generate_axis(&params, rng)
}

/// Same as [`generate_fractal`] for an already validated parameter set.
pub fn generate_axis(
	params: &FractalParams,
	rng: &mut impl Rng,
) -> Result<Vec<f64>, FractalError> {
	let total = params.point_count()?;
	let branching = params.branching as usize;

	// Two buffers swapped per level; children of one parent stay contiguous.
	let mut current = vec![0.5];
	let mut next: Vec<f64> = Vec::new();

	for level in 1..=params.levels {
		let spread = params.level_spread(level);
		next.clear();
		next.reserve(current.len() * branching);
		for &parent in &current {
			for _ in 0..branching {
				let eta: f64 = rng.random();
				next.push(parent + (eta - 0.5) * spread);
			}
		}
		std::mem::swap(&mut current, &mut next);
	}

	debug_assert_eq!(current.len(), total);
	debug!(
		"generated {} coordinates across {} levels",
		current.len(),
		params.levels
	);
	Ok(current)
}
