//! # Primitive Shape Generation
//!
//! This module contains functions to generate the primitive shapes used by the
//! scene. All shapes are generated with outward normals, counter-clockwise
//! winding seen from outside, and texture coordinates in 0..1.

use super::GeometryData;
use std::f32::consts::PI;

/// Tube radius of the torus relative to its ring radius of 1
pub const TORUS_TUBE_RADIUS: f32 = 0.2;
/// Top radius of the tapered cylinder (the base radius is 1)
pub const TAPERED_TOP_RADIUS: f32 = 0.5;

/// Generate a unit cube centered at the origin
///
/// Returns a cube with vertices from -0.5 to 0.5 on all axes.
/// Each face has its own four vertices so normals stay flat.
pub fn generate_box() -> GeometryData {
    let mut data = GeometryData::new();

    #[rustfmt::skip]
    let positions = [
        // Front face
        [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5],
        // Back face
        [-0.5, -0.5, -0.5], [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5, -0.5, -0.5],
        // Left face
        [-0.5, -0.5, -0.5], [-0.5, -0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5],
        // Right face
        [ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5,  0.5,  0.5],
        // Top face
        [-0.5,  0.5,  0.5], [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5], [-0.5,  0.5, -0.5],
        // Bottom face
        [-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5], [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5],
    ];

    #[rustfmt::skip]
    let tex_coords = [
        [0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0],
        [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0],
        [0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0],
        [0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0],
        [0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0],
        [0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0],
    ];

    let face_normals = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [-1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
    ];

    for (i, position) in positions.iter().enumerate() {
        data.push_vertex(*position, face_normals[i / 4], tex_coords[i]);
    }

    // Two triangles per face, counter-clockwise
    for face in 0..6u32 {
        let base = face * 4;
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a 2x2 plane in the XZ plane facing +Y
///
/// # Arguments
/// * `x_segments` - Number of subdivisions along X
/// * `z_segments` - Number of subdivisions along Z
pub fn generate_plane(x_segments: u32, z_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let x_segs = x_segments.max(1);
    let z_segs = z_segments.max(1);

    for row in 0..=z_segs {
        let t = row as f32 / z_segs as f32;
        let z = t * 2.0 - 1.0;

        for col in 0..=x_segs {
            let u = col as f32 / x_segs as f32;
            let x = u * 2.0 - 1.0;
            data.push_vertex([x, 0.0, z], [0.0, 1.0, 0.0], [u, 1.0 - t]);
        }
    }

    for row in 0..z_segs {
        for col in 0..x_segs {
            let i = row * (x_segs + 1) + col;
            let next_row = i + x_segs + 1;

            data.indices.extend_from_slice(&[i, next_row, next_row + 1]);
            data.indices.extend_from_slice(&[i, next_row + 1, i + 1]);
        }
    }

    data
}

/// Generate a cylinder of radius 1 standing on the XZ plane from y = 0 to y = 1
pub fn generate_cylinder(segments: u32) -> GeometryData {
    generate_frustum(1.0, 1.0, segments)
}

/// Generate a cone with a base of radius 1 at y = 0 and its apex at y = 1
pub fn generate_cone(segments: u32) -> GeometryData {
    generate_frustum(1.0, 0.0, segments)
}

/// Generate a cylinder narrowing from radius 1 at y = 0 to [`TAPERED_TOP_RADIUS`] at y = 1
pub fn generate_tapered_cylinder(segments: u32) -> GeometryData {
    generate_frustum(1.0, TAPERED_TOP_RADIUS, segments)
}

/// Generate a capped frustum of height 1 around the Y axis
///
/// A zero radius collapses that end to a point and skips its cap.
fn generate_frustum(bottom_radius: f32, top_radius: f32, segments: u32) -> GeometryData {
    let mut data = GeometryData::new();
    let segs = segments.max(3);

    // Side normals tilt toward +Y as the top narrows
    let slope = bottom_radius - top_radius;

    for i in 0..=segs {
        let u = i as f32 / segs as f32;
        let angle = u * 2.0 * PI;
        let (sin_a, cos_a) = angle.sin_cos();

        let length = (1.0 + slope * slope).sqrt();
        let normal = [cos_a / length, slope / length, sin_a / length];

        data.push_vertex(
            [bottom_radius * cos_a, 0.0, bottom_radius * sin_a],
            normal,
            [u, 0.0],
        );
        data.push_vertex([top_radius * cos_a, 1.0, top_radius * sin_a], normal, [u, 1.0]);
    }

    for i in 0..segs {
        let bottom = i * 2;
        let top = bottom + 1;
        let bottom_next = bottom + 2;
        let top_next = bottom + 3;

        data.indices.extend_from_slice(&[bottom, top, bottom_next]);
        data.indices.extend_from_slice(&[top, top_next, bottom_next]);
    }

    if bottom_radius > 0.0 {
        add_cap(&mut data, bottom_radius, 0.0, segs, false);
    }
    if top_radius > 0.0 {
        add_cap(&mut data, top_radius, 1.0, segs, true);
    }

    data
}

/// Adds a flat disc at height `y`, facing +Y when `facing_up` and -Y otherwise
fn add_cap(data: &mut GeometryData, radius: f32, y: f32, segments: u32, facing_up: bool) {
    let normal = if facing_up {
        [0.0, 1.0, 0.0]
    } else {
        [0.0, -1.0, 0.0]
    };

    let center = data.push_vertex([0.0, y, 0.0], normal, [0.5, 0.5]);
    let first = center + 1;

    for i in 0..=segments {
        let angle = i as f32 * 2.0 * PI / segments as f32;
        let (sin_a, cos_a) = angle.sin_cos();
        data.push_vertex(
            [radius * cos_a, y, radius * sin_a],
            normal,
            [0.5 + 0.5 * cos_a, 0.5 + 0.5 * sin_a],
        );
    }

    for i in 0..segments {
        let current = first + i;
        let next = current + 1;
        if facing_up {
            data.indices.extend_from_slice(&[center, next, current]);
        } else {
            data.indices.extend_from_slice(&[center, current, next]);
        }
    }
}

/// Generate a UV sphere of radius 1 centered at the origin
///
/// # Arguments
/// * `longitude_segments` - Number of vertical segments (longitude lines)
/// * `latitude_segments` - Number of horizontal segments (latitude lines)
pub fn generate_sphere(longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    let lat_segs = latitude_segments.max(2);
    generate_sphere_band(longitude_segments.max(3), lat_segs, lat_segs)
}

/// Generate the upper half of the unit sphere, closed by a disc at y = 0
///
/// `latitude_segments` counts the rings of the dome only.
pub fn generate_half_sphere(longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    let long_segs = longitude_segments.max(3);
    let dome_segs = latitude_segments.max(1);

    let mut data = generate_sphere_band(long_segs, dome_segs * 2, dome_segs);
    add_cap(&mut data, 1.0, 0.0, long_segs, false);
    data
}

/// Rings `0..=rings` of a sphere with `lat_segs` latitude divisions, top first
fn generate_sphere_band(long_segs: u32, lat_segs: u32, rings: u32) -> GeometryData {
    let mut data = GeometryData::new();

    for lat in 0..=rings {
        let theta = lat as f32 * PI / lat_segs as f32; // 0 at the north pole
        let (sin_theta, cos_theta) = theta.sin_cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let x = sin_theta * cos_phi;
            let y = cos_theta;
            let z = sin_theta * sin_phi;

            data.push_vertex(
                [x, y, z],
                [x, y, z],
                [
                    long as f32 / long_segs as f32,
                    1.0 - lat as f32 / lat_segs as f32,
                ],
            );
        }
    }

    for lat in 0..rings {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;

            data.indices.extend_from_slice(&[first, first + 1, second]);
            data.indices
                .extend_from_slice(&[second, first + 1, second + 1]);
        }
    }

    data
}

/// Generate a torus whose ring of radius 1 lies in the XY plane
///
/// # Arguments
/// * `ring_segments` - Segments around the ring
/// * `tube_segments` - Segments around the tube
pub fn generate_torus(ring_segments: u32, tube_segments: u32) -> GeometryData {
    generate_torus_arc(2.0 * PI, ring_segments, tube_segments)
}

/// Generate the upper half (y >= 0) of the torus
pub fn generate_half_torus(ring_segments: u32, tube_segments: u32) -> GeometryData {
    generate_torus_arc(PI, ring_segments, tube_segments)
}

fn generate_torus_arc(sweep: f32, ring_segments: u32, tube_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let ring_segs = ring_segments.max(3);
    let tube_segs = tube_segments.max(3);

    for i in 0..=ring_segs {
        let u = i as f32 / ring_segs as f32;
        let (sin_u, cos_u) = (u * sweep).sin_cos();

        for j in 0..=tube_segs {
            let v = j as f32 / tube_segs as f32;
            let (sin_v, cos_v) = (v * 2.0 * PI).sin_cos();

            let distance = 1.0 + TORUS_TUBE_RADIUS * cos_v;
            data.push_vertex(
                [distance * cos_u, distance * sin_u, TORUS_TUBE_RADIUS * sin_v],
                [cos_v * cos_u, cos_v * sin_u, sin_v],
                [u, v],
            );
        }
    }

    for i in 0..ring_segs {
        for j in 0..tube_segs {
            let current = i * (tube_segs + 1) + j;
            let next_ring = current + tube_segs + 1;

            data.indices
                .extend_from_slice(&[current, next_ring, current + 1]);
            data.indices
                .extend_from_slice(&[next_ring, next_ring + 1, current + 1]);
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(data: &GeometryData) {
        assert_eq!(data.vertices.len(), data.normals.len());
        assert_eq!(data.vertices.len(), data.tex_coords.len());
        assert_eq!(data.indices.len() % 3, 0);
        let count = data.vertex_count() as u32;
        assert!(data.indices.iter().all(|&i| i < count));
    }

    fn outward_facing_triangles(data: &GeometryData, center: [f32; 3]) -> bool {
        data.indices.chunks(3).all(|tri| {
            let a = data.vertices[tri[0] as usize];
            let b = data.vertices[tri[1] as usize];
            let c = data.vertices[tri[2] as usize];
            let e1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
            let e2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
            let n = [
                e1[1] * e2[2] - e1[2] * e2[1],
                e1[2] * e2[0] - e1[0] * e2[2],
                e1[0] * e2[1] - e1[1] * e2[0],
            ];
            let to_face = [a[0] - center[0], a[1] - center[1], a[2] - center[2]];
            // Degenerate triangles at the poles have a zero normal
            n[0] * to_face[0] + n[1] * to_face[1] + n[2] * to_face[2] >= -1e-5
        })
    }

    #[test]
    fn test_box_generation() {
        let cube = generate_box();
        assert_eq!(cube.vertex_count(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.triangle_count(), 12);
        assert_consistent(&cube);
        assert!(outward_facing_triangles(&cube, [0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_plane_generation() {
        let plane = generate_plane(2, 2);
        assert_eq!(plane.vertices.len(), 9); // 3x3 grid
        assert_eq!(plane.indices.len(), 24); // 4 quads * 2 triangles * 3 indices
        assert!(plane.vertices.iter().all(|v| v[1] == 0.0));
        assert!(plane
            .vertices
            .iter()
            .all(|v| (-1.0..=1.0).contains(&v[0]) && (-1.0..=1.0).contains(&v[2])));
        assert!(outward_facing_triangles(&plane, [0.0, -1.0, 0.0]));
    }

    #[test]
    fn test_cylinder_spans_unit_height() {
        let cylinder = generate_cylinder(16);
        assert_consistent(&cylinder);
        let min_y = cylinder.vertices.iter().map(|v| v[1]).fold(f32::MAX, f32::min);
        let max_y = cylinder.vertices.iter().map(|v| v[1]).fold(f32::MIN, f32::max);
        assert_eq!(min_y, 0.0);
        assert_eq!(max_y, 1.0);
        assert!(outward_facing_triangles(&cylinder, [0.0, 0.5, 0.0]));
    }

    #[test]
    fn test_cone_has_no_top_cap() {
        let cone = generate_cone(12);
        let cylinder = generate_cylinder(12);
        assert_consistent(&cone);
        assert!(cone.triangle_count() < cylinder.triangle_count());
        assert!(cone
            .vertices
            .iter()
            .filter(|v| v[1] == 1.0)
            .all(|v| v[0].abs() < 1e-6 && v[2].abs() < 1e-6));
    }

    #[test]
    fn test_tapered_cylinder_narrows() {
        let tapered = generate_tapered_cylinder(12);
        assert_consistent(&tapered);
        let top_radius = tapered
            .vertices
            .iter()
            .filter(|v| v[1] == 1.0)
            .map(|v| (v[0] * v[0] + v[2] * v[2]).sqrt())
            .fold(0.0, f32::max);
        assert!((top_radius - TAPERED_TOP_RADIUS).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_generation() {
        let sphere = generate_sphere(8, 6);
        assert_consistent(&sphere);
        for v in &sphere.vertices {
            let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!((r - 1.0).abs() < 1e-5);
        }
        assert!(outward_facing_triangles(&sphere, [0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_half_sphere_stays_above_ground() {
        let dome = generate_half_sphere(16, 8);
        assert_consistent(&dome);
        assert!(dome.vertices.iter().all(|v| v[1] >= -1e-5));
        assert!(outward_facing_triangles(&dome, [0.0, 0.5, 0.0]));
    }

    #[test]
    fn test_torus_normals_are_unit_length() {
        let torus = generate_torus(24, 8);
        assert_consistent(&torus);
        for n in &torus.normals {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_half_torus_is_upper_arc() {
        let half = generate_half_torus(12, 8);
        let full = generate_torus(24, 8);
        assert_consistent(&half);
        assert!(half.vertices.iter().all(|v| v[1] >= -1e-5));
        assert_eq!(half.triangle_count() * 2, full.triangle_count());
    }
}
