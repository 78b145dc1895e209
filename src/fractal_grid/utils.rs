use std::mem::size_of;

use bitvec::vec::BitVec;

use crate::fractal_grid::grid::DensityGrid;

/// Format large numbers with KB, MB, GB, TB suffixes
fn format_bytes(bytes: usize) -> String {
	const KB: usize = 1024;
	const MB: usize = KB * 1024;
	const GB: usize = MB * 1024;
	const TB: usize = GB * 1024;

	if bytes >= TB {
		format!("{:.2} TB", bytes as f64 / TB as f64)
	} else if bytes >= GB {
		format!("{:.2} GB", bytes as f64 / GB as f64)
	} else if bytes >= MB {
		format!("{:.2} MB", bytes as f64 / MB as f64)
	} else if bytes >= KB {
		format!("{:.2} KB", bytes as f64 / KB as f64)
	} else {
		format!("{} bytes", bytes)
	}
}

impl DensityGrid {
	/// Report memory usage and print a detailed breakdown
	pub fn report_memory(&self) {
		let struct_overhead = size_of::<Self>() - size_of::<Vec<u32>>(); // Exclude dynamic storage
		let count_bytes = self.data.capacity() * size_of::<u32>();
		let total_memory = struct_overhead + count_bytes;

		eprintln!("DensityGrid Memory Report:");
		eprintln!("-------------------------");
		eprintln!("  Dimensions: {} x {} x {}", self.dim, self.dim, self.dim);
		eprintln!("  Total Cells: {:e}", self.total_cells as f64); // Scientific notation
		eprintln!("  Cell Size: {:.4}", self.cell_size);
		eprintln!("  Struct Overhead: {}", format_bytes(struct_overhead));
		eprintln!("  Count Storage: {}", format_bytes(count_bytes));
		eprintln!("  Total Memory Used: {}", format_bytes(total_memory));
		eprintln!("-------------------------");
	}

	/// Convert (i, j, k) to a linear index
	#[inline]
	pub fn ijk_to_index(&self, i: usize, j: usize, k: usize) -> usize {
		i + j * self.dim + k * self.dim * self.dim
	}

	/// Convert a linear index back to (i, j, k)
	#[inline]
	pub fn index_to_ijk(&self, index: usize) -> (usize, usize, usize) {
		let k = index / (self.dim * self.dim);
		let j = (index % (self.dim * self.dim)) / self.dim;
		let i = index % self.dim;
		(i, j, k)
	}

	/// Get a cell count by linear index (panics if out of bounds)
	#[inline]
	pub fn count_index(&self, index: usize) -> u32 {
		self.data[index]
	}

	/// Get a cell count using (i, j, k) coordinates
	#[inline]
	pub fn count_ijk(&self, i: usize, j: usize, k: usize) -> u32 {
		self.count_index(self.ijk_to_index(i, j, k))
	}

	/// Zero out the entire grid (resets all counts)
	pub fn zero_grid(&mut self) {
		self.data.fill(0);
	}

	/// Total number of binned points (sum over all cells)
	pub fn total_points(&self) -> u64 {
		self.data.iter().map(|&c| c as u64).sum()
	}

	/// Highest count held by any single cell
	pub fn max_count(&self) -> u32 {
		self.data.iter().copied().max().unwrap_or(0)
	}

	/// Bit-packed mask of cells holding at least one point
	pub fn occupancy(&self) -> BitVec {
		self.data.iter().map(|&c| c > 0).collect()
	}

	/// Count the number of occupied cells
	pub fn count_occupied(&self) -> usize {
		self.data.iter().filter(|&&c| c > 0).count()
	}
}

#[cfg(test)]
mod tests {
	use crate::fractal_grid::grid::DensityGrid;

	#[test]
	fn index_math_round_trips() {
		let grid = DensityGrid::new(4).unwrap();
		for index in 0..grid.total_cells {
			let (i, j, k) = grid.index_to_ijk(index);
			assert_eq!(grid.ijk_to_index(i, j, k), index);
		}
	}

	#[test]
	fn counts_and_totals_agree() {
		let mut grid = DensityGrid::new(2).unwrap();
		let idx_000 = grid.ijk_to_index(0, 0, 0);
		grid.data[idx_000] = 3;
		let idx_101 = grid.ijk_to_index(1, 0, 1);
		grid.data[idx_101] = 2;

		assert_eq!(grid.count_ijk(0, 0, 0), 3);
		assert_eq!(grid.count_ijk(1, 0, 1), 2);
		assert_eq!(grid.count_ijk(1, 1, 1), 0);
		assert_eq!(grid.total_points(), 5);
		assert_eq!(grid.max_count(), 3);
	}

	#[test]
	fn occupancy_tracks_nonzero_cells() {
		let mut grid = DensityGrid::new(2).unwrap();
		grid.data[0] = 7;
		grid.data[5] = 1;

		let mask = grid.occupancy();
		assert_eq!(mask.len(), grid.total_cells);
		assert_eq!(mask.count_ones(), 2);
		assert!(mask[0]);
		assert!(mask[5]);
		assert!(!mask[1]);
		assert_eq!(grid.count_occupied(), 2);
	}

	#[test]
	fn memory_report_prints_without_panicking() {
		let grid = DensityGrid::new(8).unwrap();
		grid.report_memory();
	}

	#[test]
	fn zero_grid_clears_every_cell() {
		let mut grid = DensityGrid::new(3).unwrap();
		grid.data.fill(9);
		grid.zero_grid();
		assert_eq!(grid.total_points(), 0);
		assert_eq!(grid.count_occupied(), 0);
	}
}
