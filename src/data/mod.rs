pub mod normalize;
pub mod sample;
pub mod source;

// Re-export key types for convenience
#[allow(unused_imports)]
pub use normalize::{Point, PointSet, RawPoint};
