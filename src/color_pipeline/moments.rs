//! Moment aggregation module
//!
//! Reduces each channel plane to its zeroth-order moment, the plain sum of
//! every value in the plane.

mod aggregator;
pub mod types;

pub use aggregator::{Aggregation, MomentAggregator, zeroth_moments};
pub use types::MomentVector;
