pub mod symmetry_2d;

/// 2D point type with integer coordinates.
///
/// The kernel works on exact grid points; there is no tolerance anywhere
/// in the symmetry math.
pub type Point2 = nalgebra::Point2<i64>;
