//! Helper functions: error type and mesh math.

use std::collections::HashMap;

use scene_host::RenderMesh;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },

    #[error("batch produced no mesh")]
    NoMesh,

    #[error("factory error: {0}")]
    Factory(#[from] ring_factory::FactoryError),

    #[error("export error: {0}")]
    Export(#[from] file_format::ExportError),

    #[error("summary serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

// ── Mesh Math Utilities ─────────────────────────────────────────────────────

/// Axis-aligned bounding box of a RenderMesh as (min, max). `None` when the
/// mesh has no vertices.
pub fn mesh_bounding_box(mesh: &RenderMesh) -> Option<([f32; 3], [f32; 3])> {
    if mesh.vertices.len() < 3 {
        return None;
    }
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for chunk in mesh.vertices.chunks_exact(3) {
        for i in 0..3 {
            min[i] = min[i].min(chunk[i]);
            max[i] = max[i].max(chunk[i]);
        }
    }
    Some((min, max))
}

fn corner(mesh: &RenderMesh, index: u32) -> [f64; 3] {
    let i = index as usize * 3;
    [
        mesh.vertices[i] as f64,
        mesh.vertices[i + 1] as f64,
        mesh.vertices[i + 2] as f64,
    ]
}

/// Signed enclosed volume by the divergence theorem. Positive when the
/// triangles of a closed mesh face outward.
pub fn mesh_signed_volume(mesh: &RenderMesh) -> f64 {
    mesh.indices
        .chunks_exact(3)
        .map(|tri| {
            let [a, b, c] = [corner(mesh, tri[0]), corner(mesh, tri[1]), corner(mesh, tri[2])];
            a[0] * (b[1] * c[2] - c[1] * b[2]) + b[0] * (c[1] * a[2] - a[1] * c[2])
                + c[0] * (a[1] * b[2] - b[1] * a[2])
        })
        .sum::<f64>()
        / 6.0
}

/// How many triangles use each undirected edge, keyed by vertex indices.
pub fn edge_use_counts(mesh: &RenderMesh) -> HashMap<(u32, u32), usize> {
    let mut counts = HashMap::new();
    for tri in mesh.indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            *counts.entry((a.min(b), a.max(b))).or_insert(0) += 1;
        }
    }
    counts
}

/// Count mesh edges: (total_edges, boundary_edges).
pub fn count_mesh_edges(mesh: &RenderMesh) -> (usize, usize) {
    let counts = edge_use_counts(mesh);
    let boundary = counts.values().filter(|&&c| c == 1).count();
    (counts.len(), boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit tetrahedron with outward winding.
    fn tetrahedron() -> RenderMesh {
        RenderMesh {
            vertices: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            normals: vec![0.0; 12],
            indices: vec![0, 2, 1, 0, 1, 3, 1, 2, 3, 0, 3, 2],
        }
    }

    #[test]
    fn tetrahedron_volume_is_positive_sixth() {
        let v = mesh_signed_volume(&tetrahedron());
        assert!((v - 1.0 / 6.0).abs() < 1e-9, "volume = {}", v);
    }

    #[test]
    fn tetrahedron_has_no_boundary() {
        assert_eq!(count_mesh_edges(&tetrahedron()), (6, 0));
    }

    #[test]
    fn bounding_box_of_empty_mesh_is_none() {
        assert!(mesh_bounding_box(&RenderMesh::default()).is_none());
        let (min, max) = mesh_bounding_box(&tetrahedron()).unwrap();
        assert_eq!(min, [0.0; 3]);
        assert_eq!(max, [1.0; 3]);
    }
}
