use thiserror::Error;

/// Errors produced by fractal generation and rasterization.
#[derive(Debug, Error)]
pub enum FractalError {
	/// A structural parameter (length, levels, branching, or dim) was zero.
	#[error("invalid parameter: {name} must be a positive integer (got {value})")]
	InvalidParameter { name: &'static str, value: u64 },

	/// The requested point or cell count is beyond the supported bound.
	#[error("{what} of {requested} exceeds the supported limit of {limit}")]
	CapacityExceeded {
		what: &'static str,
		requested: u128,
		limit: u128,
	},
}
