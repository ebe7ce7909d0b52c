mod vector;
mod transform;
mod aabb;
mod scale;

pub use vector::Vector2;
pub use transform::Transform;
pub use aabb::Aabb;
pub use scale::{PixelScale, DEFAULT_PIXELS_PER_UNIT};

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f32) -> bool {
    a.abs() < EPSILON
}
