//! Polygon mesh storage, triangulation and export to RenderMesh.
//!
//! Meshes keep the host's polygon structure (triangles, quads, n-gons) until
//! `triangulate` is applied. `to_render_mesh` always emits triangles, so an
//! untriangulated mesh can still be inspected or exported.

use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};

use crate::types::{PolygonCounts, RenderMesh};

/// Polygon mesh in object-local coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyMesh {
    pub positions: Vec<[f64; 3]>,
    /// Each polygon lists vertex indices counter-clockwise seen from outside.
    pub polygons: Vec<Vec<u32>>,
}

impl PolyMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Append `other`, mapping its vertices through `transform` first.
    pub fn append_transformed(&mut self, other: &PolyMesh, transform: &Isometry3<f64>) {
        let base = self.positions.len() as u32;
        self.positions.extend(
            other
                .positions
                .iter()
                .map(|p| point_to_array(transform * Point3::from(*p))),
        );
        self.polygons.extend(
            other
                .polygons
                .iter()
                .map(|poly| poly.iter().map(|&i| i + base).collect::<Vec<u32>>()),
        );
    }

    /// Map every vertex through `f`, in place.
    pub fn map_positions(&mut self, mut f: impl FnMut([f64; 3]) -> [f64; 3]) {
        for p in &mut self.positions {
            *p = f(*p);
        }
    }

    pub fn polygon_counts(&self) -> PolygonCounts {
        let mut counts = PolygonCounts::default();
        for poly in &self.polygons {
            match poly.len() {
                3 => counts.triangles += 1,
                4 => counts.quads += 1,
                _ => counts.ngons += 1,
            }
        }
        counts
    }

    /// Replace every polygon with triangles.
    ///
    /// Quads are split along the shorter diagonal, which avoids the long
    /// slivers a fixed split produces on bent text. N-gons are fanned from
    /// their first vertex; every n-gon built here is convex.
    pub fn triangulate(&mut self) {
        let mut out = Vec::with_capacity(self.polygons.len() * 2);
        for poly in &self.polygons {
            for tri in self.split_polygon(poly) {
                out.push(tri.to_vec());
            }
        }
        self.polygons = out;
    }

    fn split_polygon(&self, poly: &[u32]) -> Vec<[u32; 3]> {
        match poly.len() {
            0..=2 => Vec::new(),
            3 => vec![[poly[0], poly[1], poly[2]]],
            4 => {
                let d02 = distance(self.positions[poly[0] as usize], self.positions[poly[2] as usize]);
                let d13 = distance(self.positions[poly[1] as usize], self.positions[poly[3] as usize]);
                if d02 <= d13 {
                    vec![[poly[0], poly[1], poly[2]], [poly[0], poly[2], poly[3]]]
                } else {
                    vec![[poly[0], poly[1], poly[3]], [poly[1], poly[2], poly[3]]]
                }
            }
            n => (1..n - 1)
                .map(|i| [poly[0], poly[i], poly[i + 1]])
                .collect(),
        }
    }

    /// Triangulated copy in the frame given by `transform`, with area-weighted
    /// vertex normals.
    pub fn to_render_mesh(&self, transform: &Isometry3<f64>) -> RenderMesh {
        let world: Vec<Point3<f64>> = self
            .positions
            .iter()
            .map(|p| transform * Point3::from(*p))
            .collect();

        let mut indices = Vec::new();
        let mut normals = vec![Vector3::zeros(); world.len()];
        for poly in &self.polygons {
            for [a, b, c] in self.split_polygon(poly) {
                let (pa, pb, pc) = (world[a as usize], world[b as usize], world[c as usize]);
                let n = (pb - pa).cross(&(pc - pa));
                for i in [a, b, c] {
                    normals[i as usize] += n;
                }
                indices.extend_from_slice(&[a, b, c]);
            }
        }

        let mut vertices = Vec::with_capacity(world.len() * 3);
        for p in &world {
            vertices.extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
        }
        let mut flat_normals = Vec::with_capacity(normals.len() * 3);
        for n in normals {
            let n = n.try_normalize(1e-12).unwrap_or_else(Vector3::z);
            flat_normals.extend_from_slice(&[n.x as f32, n.y as f32, n.z as f32]);
        }

        RenderMesh {
            vertices,
            normals: flat_normals,
            indices,
        }
    }
}

/// Rigid transform from a location and an XYZ Euler rotation.
pub fn object_transform(location: [f64; 3], rotation: [f64; 3]) -> Isometry3<f64> {
    Isometry3::from_parts(
        Translation3::from(Vector3::from(location)),
        UnitQuaternion::from_euler_angles(rotation[0], rotation[1], rotation[2]),
    )
}

pub(crate) fn point_to_array(p: Point3<f64>) -> [f64; 3] {
    [p.x, p.y, p.z]
}

fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    (Point3::from(a) - Point3::from(b)).norm()
}
