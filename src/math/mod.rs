mod aabb;
mod color;

pub use aabb::AABB;
pub use color::{hsv, rgb8, spread_hue, srgb_to_linear, Rgba};
