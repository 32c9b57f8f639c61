//! Plain-text batch summaries for test failure output and logs.

use std::fmt;

use scene_host::SceneIntrospect;
use serde::Serialize;

use crate::helpers::{mesh_bounding_box, HarnessError};
use crate::oracle::OracleVerdict;
use crate::workflow::BatchOutcome;

/// Everything worth knowing about one run, flattened for printing.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub requested: usize,
    pub labels: Vec<String>,
    pub dropped: usize,
    pub booleans: usize,
    pub mesh: Option<MeshSummary>,
    pub scene_objects: usize,
    pub oracle_results: Vec<OracleVerdict>,
    pub error: Option<String>,
}

/// Size of the finished mesh.
#[derive(Debug, Serialize)]
pub struct MeshSummary {
    pub name: String,
    pub triangle_count: usize,
    pub vertex_count: usize,
    pub bounding_box: Option<([f32; 3], [f32; 3])>,
}

impl BatchSummary {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Ring Ruler Batch ===\n\n");

        out.push_str(&format!(
            "Rings: {} requested, {} placed, {} dropped\n",
            self.requested,
            self.labels.len(),
            self.dropped
        ));
        for (i, label) in self.labels.iter().enumerate() {
            out.push_str(&format!("  [{}] \"{}\"\n", i, label));
        }
        out.push_str(&format!("Merge booleans: {}\n", self.booleans));
        out.push_str(&format!("Scene objects: {}\n", self.scene_objects));

        if let Some(mesh) = &self.mesh {
            out.push_str(&format!(
                "\nMesh \"{}\": {} triangles, {} vertices\n",
                mesh.name, mesh.triangle_count, mesh.vertex_count
            ));
            if let Some((min, max)) = mesh.bounding_box {
                out.push_str(&format!(
                    "  Bounding Box: ({:.2}, {:.2}, {:.2}) -> ({:.2}, {:.2}, {:.2})\n",
                    min[0], min[1], min[2], max[0], max[1], max[2],
                ));
            }
        }

        if !self.oracle_results.is_empty() {
            out.push_str(&format!(
                "\nOracle Results ({} checks):\n",
                self.oracle_results.len()
            ));
            for v in &self.oracle_results {
                let status = if v.passed { "PASS" } else { "FAIL" };
                out.push_str(&format!("  [{}] {}: {}\n", status, v.oracle_name, v.detail));
            }
        }

        match &self.error {
            None => out.push_str("\nError: none\n"),
            Some(err) => out.push_str(&format!("\nError: {}\n", err)),
        }
        out
    }

    /// The same content as JSON, for tools that diff runs.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl BatchOutcome {
    /// Summarise the run, running the oracles when it produced a mesh.
    pub fn summary(&self) -> BatchSummary {
        let scene_objects = self.host.objects().len();
        let report = match &self.result {
            Ok(report) => report,
            Err(err) => {
                return BatchSummary {
                    requested: self.params.serial_count(),
                    labels: Vec::new(),
                    dropped: 0,
                    booleans: 0,
                    mesh: None,
                    scene_objects,
                    oracle_results: Vec::new(),
                    error: Some(err.to_string()),
                }
            }
        };

        let mesh = report.final_mesh.and_then(|handle| {
            let render = self.host.world_mesh(handle)?;
            Some(MeshSummary {
                name: self.host.object_name(handle).unwrap_or_default(),
                triangle_count: render.indices.len() / 3,
                vertex_count: render.vertices.len() / 3,
                bounding_box: mesh_bounding_box(&render),
            })
        });

        BatchSummary {
            requested: report.requested,
            labels: report.labels.clone(),
            dropped: report.dropped,
            booleans: report.booleans,
            mesh,
            scene_objects,
            oracle_results: self.verify().unwrap_or_default(),
            error: None,
        }
    }
}
