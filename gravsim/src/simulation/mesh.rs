//! Sphere tessellation for body meshes
//!
//! Meshes are flat triangle lists of `[f32; 3]` positions centered on the
//! origin; the body's position is applied by the renderer's model transform.

use std::f64::consts::PI;

pub const DEFAULT_STACKS: usize = 10;
pub const DEFAULT_SECTORS: usize = 10;

/// Spherical to cartesian with y as the polar axis
pub fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> [f32; 3] {
    [
        (r * theta.sin() * phi.cos()) as f32,
        (r * theta.cos()) as f32,
        (r * theta.sin() * phi.sin()) as f32,
    ]
}

/// Latitude/longitude sphere of radius `r`.
///
/// theta is sampled at `stacks + 1` points over [0, pi] and phi at `sectors`
/// points over [0, 2pi), wrapping back to the first sector. Each patch emits
/// two triangles, (v1, v2, v3) and (v2, v4, v3), so the list holds
/// `stacks * sectors * 6` vertices.
pub fn sphere_vertices(r: f64, stacks: usize, sectors: usize) -> Vec<[f32; 3]> {
    let mut vertices = Vec::with_capacity(stacks * sectors * 6);
    if stacks == 0 || sectors == 0 {
        return vertices;
    }

    let stacks_f = stacks as f64;
    let sectors_f = sectors as f64;

    for i in 0..stacks {
        let theta1 = i as f64 / stacks_f * PI;
        let theta2 = (i + 1) as f64 / stacks_f * PI;

        for j in 0..sectors {
            let phi1 = j as f64 / sectors_f * 2.0 * PI;
            let phi2 = (j + 1) as f64 / sectors_f * 2.0 * PI;

            let v1 = spherical_to_cartesian(r, theta1, phi1);
            let v2 = spherical_to_cartesian(r, theta1, phi2);
            let v3 = spherical_to_cartesian(r, theta2, phi1);
            let v4 = spherical_to_cartesian(r, theta2, phi2);

            vertices.extend_from_slice(&[v1, v2, v3]);
            vertices.extend_from_slice(&[v2, v4, v3]);
        }
    }

    vertices
}
