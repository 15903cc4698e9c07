//! Procedural geometry for the section objects.
//!
//! Smooth shapes are generated as (rows + 1) x (cols + 1) vertex grids; the
//! platonic solids are flat-shaded with one normal per face.

use crate::constants::SECTION_COUNT;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshBuffers {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn with_capacity(vertex_capacity: usize, index_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(index_capacity),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    fn push(&mut self, position: Vec3, normal: Vec3) {
        self.vertices.push(MeshVertex {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        });
    }

    /// Two triangles per cell of a row-major grid starting at `base`.
    fn push_grid_indices(&mut self, base: u32, rows: u32, cols: u32) {
        for r in 0..rows {
            for c in 0..cols {
                let a = base + r * (cols + 1) + c;
                let b = a + cols + 1;
                self.indices
                    .extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }
    }

    /// Fan-triangulated convex polygon with a single outward normal.
    fn push_flat_face(&mut self, corners: &[Vec3]) {
        let centroid = corners.iter().copied().sum::<Vec3>() / corners.len() as f32;
        let mut normal = (corners[1] - corners[0]).cross(corners[2] - corners[0]);
        let reversed = normal.dot(centroid) < 0.0;
        if reversed {
            normal = -normal;
        }
        let base = self.vertex_count() as u32;
        for &p in corners {
            self.push(p, normal);
        }
        for i in 1..corners.len() as u32 - 1 {
            if reversed {
                self.indices.extend_from_slice(&[base, base + i + 1, base + i]);
            } else {
                self.indices.extend_from_slice(&[base, base + i, base + i + 1]);
            }
        }
    }
}

/// The object shown in each section, in scroll order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Torus,
    Cone,
    TorusKnot,
    Dodecahedron,
    Sphere,
    Octahedron,
    Tetrahedron,
}

pub const SECTION_SHAPES: [Shape; SECTION_COUNT] = [
    Shape::Torus,
    Shape::Cone,
    Shape::TorusKnot,
    Shape::Dodecahedron,
    Shape::Sphere,
    Shape::Octahedron,
    Shape::Tetrahedron,
];

impl Shape {
    pub fn build(self) -> MeshBuffers {
        match self {
            Shape::Torus => generate_torus(1.0, 0.4, 16, 60),
            Shape::Cone => generate_cone(1.0, 2.0, 32),
            Shape::TorusKnot => generate_torus_knot(0.8, 0.35, 100, 16, 2, 3),
            Shape::Dodecahedron => generate_dodecahedron(1.0),
            Shape::Sphere => generate_sphere(1.0, 32, 32),
            Shape::Octahedron => generate_octahedron(1.0),
            Shape::Tetrahedron => generate_tetrahedron(1.0),
        }
    }
}

/// Torus in the XY plane.
pub fn generate_torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshBuffers {
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);
    let mut mesh = MeshBuffers::with_capacity(
        ((radial + 1) * (tubular + 1)) as usize,
        (radial * tubular * 6) as usize,
    );
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        let (sin_v, cos_v) = v.sin_cos();
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let (sin_u, cos_u) = u.sin_cos();
            let center = Vec3::new(radius * cos_u, radius * sin_u, 0.0);
            let pos = Vec3::new(
                (radius + tube * cos_v) * cos_u,
                (radius + tube * cos_v) * sin_u,
                tube * sin_v,
            );
            mesh.push(pos, pos - center);
        }
    }
    mesh.push_grid_indices(0, radial, tubular);
    mesh
}

/// Cone along Y with the apex at +height/2 and a capped base.
pub fn generate_cone(radius: f32, height: f32, radial_segments: u32) -> MeshBuffers {
    let radial = radial_segments.max(3);
    let half = height * 0.5;
    let slope = radius / height;
    let mut mesh = MeshBuffers::with_capacity(
        (2 * (radial + 1) + radial + 2) as usize,
        (radial * 9) as usize,
    );

    for row in 0..=1u32 {
        let v = row as f32;
        let y = half - v * height;
        let ring = radius * v;
        for seg in 0..=radial {
            let theta = seg as f32 / radial as f32 * TAU;
            let (sin_t, cos_t) = theta.sin_cos();
            mesh.push(
                Vec3::new(ring * sin_t, y, ring * cos_t),
                Vec3::new(sin_t, slope, cos_t),
            );
        }
    }
    mesh.push_grid_indices(0, 1, radial);

    let center = mesh.vertex_count() as u32;
    mesh.push(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y);
    for seg in 0..=radial {
        let theta = seg as f32 / radial as f32 * TAU;
        let (sin_t, cos_t) = theta.sin_cos();
        mesh.push(Vec3::new(radius * sin_t, -half, radius * cos_t), Vec3::NEG_Y);
    }
    for seg in 0..radial {
        mesh.indices
            .extend_from_slice(&[center, center + seg + 2, center + seg + 1]);
    }
    mesh
}

/// UV sphere centered at the origin.
pub fn generate_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshBuffers {
    let cols = width_segments.max(3);
    let rows = height_segments.max(2);
    let mut mesh = MeshBuffers::with_capacity(
        ((rows + 1) * (cols + 1)) as usize,
        (rows * cols * 6) as usize,
    );
    for r in 0..=rows {
        let theta = r as f32 / rows as f32 * PI;
        let (sin_t, cos_t) = theta.sin_cos();
        for c in 0..=cols {
            let phi = c as f32 / cols as f32 * TAU;
            let (sin_p, cos_p) = phi.sin_cos();
            let n = Vec3::new(-cos_p * sin_t, cos_t, sin_p * sin_t);
            mesh.push(n * radius, n);
        }
    }
    mesh.push_grid_indices(0, rows, cols);
    mesh
}

/// (p, q) torus knot swept with a circular tube.
pub fn generate_torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshBuffers {
    let tubular = tubular_segments.max(3);
    let radial = radial_segments.max(3);
    let (p, q) = (p as f32, q as f32);
    let curve = |u: f32| {
        let (su, cu) = u.sin_cos();
        let qu_over_p = q / p * u;
        let cs = qu_over_p.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * cu,
            radius * (2.0 + cs) * su * 0.5,
            radius * qu_over_p.sin() * 0.5,
        )
    };

    let mut mesh = MeshBuffers::with_capacity(
        ((tubular + 1) * (radial + 1)) as usize,
        (tubular * radial * 6) as usize,
    );
    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * p * TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);
        let tangent = p2 - p1;
        let mut normal = p2 + p1;
        let binormal = tangent.cross(normal).normalize_or_zero();
        normal = binormal.cross(tangent).normalize_or_zero();
        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = p1 + normal * cx + binormal * cy;
            mesh.push(pos, pos - p1);
        }
    }
    mesh.push_grid_indices(0, tubular, radial);
    mesh
}

pub fn generate_tetrahedron(radius: f32) -> MeshBuffers {
    let v = [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ]
    .map(|p| p.normalize() * radius);
    let mut mesh = MeshBuffers::with_capacity(12, 12);
    for skip in 0..4 {
        let face: Vec<Vec3> = (0..4).filter(|&i| i != skip).map(|i| v[i]).collect();
        mesh.push_flat_face(&face);
    }
    mesh
}

pub fn generate_octahedron(radius: f32) -> MeshBuffers {
    let mut mesh = MeshBuffers::with_capacity(24, 24);
    for sx in [1.0f32, -1.0] {
        for sy in [1.0f32, -1.0] {
            for sz in [1.0f32, -1.0] {
                mesh.push_flat_face(&[
                    Vec3::X * sx * radius,
                    Vec3::Y * sy * radius,
                    Vec3::Z * sz * radius,
                ]);
            }
        }
    }
    mesh
}

/// Dodecahedron built as the dual of an icosahedron: one pentagon per
/// icosahedron vertex, corners at the centroids of the surrounding triangles.
pub fn generate_dodecahedron(radius: f32) -> MeshBuffers {
    let phi = (1.0 + 5.0f32.sqrt()) / 2.0;
    let ico = [
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, 1.0),
    ];
    // icosahedron edges have length 2
    let is_edge = |a: usize, b: usize| (ico[a].distance(ico[b]) - 2.0).abs() < 1e-3;
    let mut triangles = Vec::with_capacity(20);
    for a in 0..12 {
        for b in a + 1..12 {
            for c in b + 1..12 {
                if is_edge(a, b) && is_edge(b, c) && is_edge(a, c) {
                    triangles.push([a, b, c]);
                }
            }
        }
    }

    let mut mesh = MeshBuffers::with_capacity(60, 108);
    for (vi, axis) in ico.iter().enumerate() {
        let axis = axis.normalize();
        let mut corners: Vec<Vec3> = triangles
            .iter()
            .filter(|t| t.contains(&vi))
            .map(|t| ((ico[t[0]] + ico[t[1]] + ico[t[2]]) / 3.0).normalize() * radius)
            .collect();
        let e1 = (corners[0] - axis * corners[0].dot(axis)).normalize();
        let e2 = axis.cross(e1);
        corners.sort_by(|a, b| {
            let ang_a = a.dot(e2).atan2(a.dot(e1));
            let ang_b = b.dot(e2).atan2(b.dot(e1));
            ang_a.total_cmp(&ang_b)
        });
        mesh.push_flat_face(&corners);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_distinct_shape_per_section() {
        assert_eq!(SECTION_SHAPES.len(), SECTION_COUNT);
        for (i, a) in SECTION_SHAPES.iter().enumerate() {
            assert!(SECTION_SHAPES[i + 1..].iter().all(|b| b != a), "{a:?} repeated");
        }
    }

    fn assert_well_formed(mesh: &MeshBuffers) {
        assert!(mesh.triangle_count() > 0);
        assert_eq!(mesh.indices.len() % 3, 0);
        let n = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
        for v in &mesh.vertices {
            let len = Vec3::from(v.normal).length();
            assert!((len - 1.0).abs() < 1e-3, "normal length {len}");
        }
    }

    #[test]
    fn every_section_shape_is_well_formed() {
        for shape in SECTION_SHAPES {
            assert_well_formed(&shape.build());
        }
    }

    #[test]
    fn platonic_face_counts() {
        assert_eq!(generate_tetrahedron(1.0).triangle_count(), 4);
        assert_eq!(generate_octahedron(1.0).triangle_count(), 8);
        let d = generate_dodecahedron(1.0);
        assert_eq!(d.vertex_count(), 60);
        assert_eq!(d.triangle_count(), 36);
    }

    #[test]
    fn flat_normals_point_outward() {
        for mesh in [
            generate_tetrahedron(1.0),
            generate_octahedron(1.0),
            generate_dodecahedron(1.0),
        ] {
            for v in &mesh.vertices {
                assert!(Vec3::from(v.normal).dot(Vec3::from(v.position)) > 0.0);
            }
        }
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let s = generate_sphere(1.0, 8, 6);
        assert_eq!(s.vertex_count(), 9 * 7);
        for v in &s.vertices {
            assert!((Vec3::from(v.position).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn polyhedra_corners_lie_on_radius() {
        for mesh in [generate_tetrahedron(2.0), generate_dodecahedron(2.0)] {
            for v in &mesh.vertices {
                assert!((Vec3::from(v.position).length() - 2.0).abs() < 1e-4);
            }
        }
    }
}
