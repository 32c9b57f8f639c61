//! Assertion helpers with diagnostic output.
//!
//! Each failure names the context, the expectation and what was found.

use ring_factory::BatchReport;
use scene_host::{ObjectHandle, RenderMesh, SceneIntrospect};

use crate::helpers::{mesh_bounding_box, HarnessError};
use crate::oracle::OracleVerdict;

/// Assert that every verdict passed, listing all that did not.
pub fn assert_all_pass(verdicts: &[OracleVerdict], ctx: &str) -> Result<(), HarnessError> {
    let failed: Vec<&OracleVerdict> = verdicts.iter().filter(|v| !v.passed).collect();
    match failed.first() {
        None => Ok(()),
        Some(first) if failed.len() == 1 => Err(HarnessError::OracleFailure {
            oracle: first.oracle_name.clone(),
            detail: format!("[{}] {}", ctx, first.detail),
        }),
        Some(_) => Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] {} oracles failed: {}",
                ctx,
                failed.len(),
                failed
                    .iter()
                    .map(|v| format!("{} ({})", v.oracle_name, v.detail))
                    .collect::<Vec<_>>()
                    .join("; ")
            ),
        }),
    }
}

/// Assert the engraved labels, in bed order.
pub fn assert_labels(report: &BatchReport, expected: &[&str], ctx: &str) -> Result<(), HarnessError> {
    if report.labels.iter().map(String::as_str).eq(expected.iter().copied()) {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected labels {:?}, got {:?} ({} dropped)",
                ctx, expected, report.labels, report.dropped
            ),
        })
    }
}

/// Assert the mesh bounding box matches expected values within tolerance.
pub fn assert_bounding_box(
    mesh: &RenderMesh,
    expected_min: [f32; 3],
    expected_max: [f32; 3],
    tol: f32,
    ctx: &str,
) -> Result<(), HarnessError> {
    let (actual_min, actual_max) = mesh_bounding_box(mesh).ok_or_else(|| {
        HarnessError::AssertionFailed {
            detail: format!("[{}] mesh has no vertices", ctx),
        }
    })?;

    for i in 0..3 {
        for (label, actual, expected) in [
            ("min", actual_min[i], expected_min[i]),
            ("max", actual_max[i], expected_max[i]),
        ] {
            if (actual - expected).abs() > tol {
                return Err(HarnessError::AssertionFailed {
                    detail: format!(
                        "[{}] bounding box {}[{}]: expected {:.4}, got {:.4} (tol={})",
                        ctx, label, i, expected, actual, tol,
                    ),
                });
            }
        }
    }
    Ok(())
}

/// Assert the scene holds exactly `expected`, in handle order.
pub fn assert_scene_objects(
    host: &dyn SceneIntrospect,
    expected: &[ObjectHandle],
    ctx: &str,
) -> Result<(), HarnessError> {
    let mut want = expected.to_vec();
    want.sort();
    let mut found = host.objects();
    found.sort();
    if found == want {
        Ok(())
    } else {
        let names: Vec<String> = found
            .iter()
            .map(|&o| format!("{} {:?}", o, host.object_name(o).unwrap_or_default()))
            .collect();
        Err(HarnessError::AssertionFailed {
            detail: format!("[{}] expected objects {:?}, scene has [{}]", ctx, want, names.join(", ")),
        })
    }
}
