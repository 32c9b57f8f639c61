//! Verification oracles: pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail instead of
//! panicking, so one pass can collect every failure of a batch.

use std::collections::HashMap;

use ring_ops::Footprint;
use scene_host::{ObjectHandle, ObjectKind, RenderMesh, SceneIntrospect};
use serde::Serialize;

use crate::helpers::{edge_use_counts, mesh_bounding_box, mesh_signed_volume};

/// The result of a single oracle check.
#[derive(Debug, Clone, Serialize)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::pass(name, detail)
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::fail(name, detail)
        }
    }
}

// ── Mesh Oracles ────────────────────────────────────────────────────────────

/// Every undirected edge is shared by exactly two triangles.
///
/// Matches edges by vertex index. Host meshes share vertices inside a shell,
/// and separate shells of a joined mesh never share indices.
pub fn check_closed_mesh(mesh: &RenderMesh) -> OracleVerdict {
    let counts = edge_use_counts(mesh);
    let open = counts.values().filter(|&&c| c != 2).count();
    if counts.is_empty() {
        OracleVerdict::fail("closed_mesh", "mesh has no triangles".to_string())
    } else if open == 0 {
        OracleVerdict::pass("closed_mesh", format!("all {} edges paired", counts.len()))
    } else {
        OracleVerdict::fail_val(
            "closed_mesh",
            format!("{} of {} edges not used exactly twice", open, counts.len()),
            open as f64,
        )
    }
}

/// Neighbouring triangles traverse their shared edge in opposite directions.
pub fn check_consistent_winding(mesh: &RenderMesh) -> OracleVerdict {
    let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
    for tri in mesh.indices.chunks_exact(3) {
        for edge in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            *directed.entry(edge).or_insert(0) += 1;
        }
    }
    let repeated = directed.values().filter(|&&c| c > 1).count();
    if repeated == 0 {
        OracleVerdict::pass(
            "consistent_winding",
            format!("{} directed edges, none repeated", directed.len()),
        )
    } else {
        OracleVerdict::fail_val(
            "consistent_winding",
            format!("{} directed edges used more than once", repeated),
            repeated as f64,
        )
    }
}

/// Enclosed volume is positive, so the surface faces outward.
pub fn check_positive_volume(mesh: &RenderMesh) -> OracleVerdict {
    let volume = mesh_signed_volume(mesh);
    if volume > 0.0 {
        OracleVerdict::pass_val("positive_volume", format!("volume = {:.6e}", volume), volume)
    } else {
        OracleVerdict::fail_val(
            "positive_volume",
            format!("volume = {:.6e}, surface is empty or inside out", volume),
            volume,
        )
    }
}

/// Check that all index values are within bounds.
pub fn check_valid_indices(mesh: &RenderMesh) -> OracleVerdict {
    let vertex_count = mesh.vertices.len() / 3;
    let bad: Vec<(usize, u32)> = mesh
        .indices
        .iter()
        .enumerate()
        .filter(|(_, &idx)| idx as usize >= vertex_count)
        .map(|(i, &idx)| (i, idx))
        .collect();

    if bad.is_empty() && mesh.indices.len() % 3 == 0 {
        OracleVerdict::pass("valid_indices", format!("all indices < {}", vertex_count))
    } else if bad.is_empty() {
        OracleVerdict::fail(
            "valid_indices",
            format!("{} indices do not form whole triangles", mesh.indices.len()),
        )
    } else {
        OracleVerdict::fail(
            "valid_indices",
            format!(
                "{} out-of-bounds indices (vertex_count={}): {:?}",
                bad.len(),
                vertex_count,
                &bad[..bad.len().min(5)]
            ),
        )
    }
}

// ── Layout Oracles ──────────────────────────────────────────────────────────

/// The mesh footprint lies inside the bed rectangle `[0, width] x [0, height]`.
pub fn check_within_bed(mesh: &RenderMesh, bed_width: f64, bed_height: f64) -> OracleVerdict {
    let Some((min, max)) = mesh_bounding_box(mesh) else {
        return OracleVerdict::fail("within_bed", "mesh has no vertices".to_string());
    };
    // f32 vertex storage
    let slack = 1e-4 * bed_width.max(bed_height);
    let inside = f64::from(min[0]) >= -slack
        && f64::from(min[1]) >= -slack
        && f64::from(max[0]) <= bed_width + slack
        && f64::from(max[1]) <= bed_height + slack;
    let detail = format!(
        "footprint ({:.4},{:.4}) -> ({:.4},{:.4}) on bed {:.4} x {:.4}",
        min[0], min[1], max[0], max[1], bed_width, bed_height
    );
    if inside {
        OracleVerdict::pass("within_bed", detail)
    } else {
        OracleVerdict::fail("within_bed", detail)
    }
}

/// No two placed footprints overlap.
pub fn check_footprints_disjoint<T: Footprint>(items: &[T]) -> OracleVerdict {
    let rects: Vec<([f64; 2], [f64; 2])> = items
        .iter()
        .map(|item| {
            let [w, h, _] = item.bounding_box();
            let [x, y, _] = item.position();
            ([x - w / 2.0, y - h / 2.0], [x + w / 2.0, y + h / 2.0])
        })
        .collect();

    for (i, a) in rects.iter().enumerate() {
        for (j, b) in rects.iter().enumerate().skip(i + 1) {
            let overlap = a.0[0] < b.1[0] - 1e-9
                && b.0[0] < a.1[0] - 1e-9
                && a.0[1] < b.1[1] - 1e-9
                && b.0[1] < a.1[1] - 1e-9;
            if overlap {
                return OracleVerdict::fail(
                    "footprints_disjoint",
                    format!("rings {} and {} overlap", i, j),
                );
            }
        }
    }
    OracleVerdict::pass(
        "footprints_disjoint",
        format!("{} footprints, none overlapping", rects.len()),
    )
}

// ── Scene Oracles ───────────────────────────────────────────────────────────

/// The scene holds exactly `expected`, and it is a mesh.
pub fn check_single_object(host: &dyn SceneIntrospect, expected: ObjectHandle) -> OracleVerdict {
    let objects = host.objects();
    if objects != [expected] {
        return OracleVerdict::fail_val(
            "single_object",
            format!("expected only {}, scene has {:?}", expected, objects),
            objects.len() as f64,
        );
    }
    match host.object_kind(expected) {
        Some(ObjectKind::Mesh) => {
            OracleVerdict::pass("single_object", format!("{} is the only object", expected))
        }
        other => OracleVerdict::fail(
            "single_object",
            format!("{} is {:?}, not a mesh", expected, other),
        ),
    }
}

// ── Composite ───────────────────────────────────────────────────────────────

/// Run every mesh oracle on one mesh.
pub fn run_all_mesh_checks(mesh: &RenderMesh) -> Vec<OracleVerdict> {
    vec![
        check_valid_indices(mesh),
        check_closed_mesh(mesh),
        check_consistent_winding(mesh),
        check_positive_volume(mesh),
    ]
}
