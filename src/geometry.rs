use glam::{Mat4, Vec3};

use crate::math::{Rgba, AABB};
use crate::scene::{Placement, Scene};
use crate::types::LineVertex;

/// Ground grid as a line list, its height animated by the scene turbulence.
///
/// `divisions` cells per side span `[-half_extent, half_extent]` on both X and Z.
pub fn wave_grid(
    scene: &Scene,
    time: f32,
    half_extent: f32,
    divisions: u32,
    base_height: f32,
    color: Rgba,
) -> Vec<LineVertex> {
    if divisions == 0 {
        return Vec::new();
    }
    let step = 2.0 * half_extent / divisions as f32;
    let coord = |i: u32| -half_extent + step * i as f32;
    let point = |x: f32, z: f32| Vec3::new(x, base_height + scene.wave_height(x, z, time), z);

    let mut vertices = Vec::with_capacity(wave_grid_len(divisions));
    for j in 0..=divisions {
        for i in 0..divisions {
            // Along X at fixed Z, then along Z at fixed X.
            let (a, b, fixed) = (coord(i), coord(i + 1), coord(j));
            vertices.push(LineVertex::new(point(a, fixed), color));
            vertices.push(LineVertex::new(point(b, fixed), color));
            vertices.push(LineVertex::new(point(fixed, a), color));
            vertices.push(LineVertex::new(point(fixed, b), color));
        }
    }
    vertices
}

/// Number of vertices [`wave_grid`] emits for `divisions` cells per side.
pub fn wave_grid_len(divisions: u32) -> usize {
    let n = divisions as usize;
    4 * n * (n + 1)
}

/// The 12 edges of `aabb` after transforming by `model`.
pub fn box_lines(aabb: &AABB, model: Mat4, color: Rgba) -> Vec<LineVertex> {
    let corners = aabb.corners().map(|c| model.transform_point3(c));
    let mut vertices = Vec::with_capacity(24);
    for (i, corner) in corners.iter().enumerate() {
        for bit in [1, 2, 4] {
            if i & bit == 0 {
                vertices.push(LineVertex::new(*corner, color));
                vertices.push(LineVertex::new(corners[i | bit], color));
            }
        }
    }
    vertices
}

/// World X (red), Y (green) and Z (blue) axes from the origin.
pub fn axis_lines(length: f32) -> Vec<LineVertex> {
    [
        (Vec3::X, [1.0, 0.2, 0.2, 1.0]),
        (Vec3::Y, [0.2, 1.0, 0.2, 1.0]),
        (Vec3::Z, [0.2, 0.4, 1.0, 1.0]),
    ]
    .into_iter()
    .flat_map(|(axis, color)| [LineVertex::new(Vec3::ZERO, color), LineVertex::new(axis * length, color)])
    .collect()
}

pub fn placement_lines(placements: &[Placement]) -> Vec<LineVertex> {
    placements
        .iter()
        .flat_map(|p| box_lines(&p.bounds, p.model, p.color))
        .collect()
}
