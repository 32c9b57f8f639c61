//! The assembly pipeline: from defined rings to one merged mesh.

use std::collections::BTreeSet;

use ring_ops::{checked_boolean, HostBundle, OpError, Ring};
use ruler_types::PartRole;
use scene_host::{BooleanOp, HostError, ObjectHandle};
use tracing::{debug, info, instrument};

use crate::types::{AssemblyStage, FactoryError};

/// Name given to the finished mesh.
pub const FINAL_MESH_NAME: &str = "RingRuler";

/// Role-joined parts produced by the group-join stage.
#[derive(Debug, Clone)]
struct JoinedParts {
    base: ObjectHandle,
    add: Vec<ObjectHandle>,
    subtract: Vec<ObjectHandle>,
}

/// Runs the assembly pipeline over a set of placed rings.
pub struct RingFactory {
    rings: Vec<Box<dyn Ring>>,
    completed: Vec<AssemblyStage>,
    booleans: usize,
}

impl RingFactory {
    pub fn new(rings: Vec<Box<dyn Ring>>) -> Self {
        Self {
            rings,
            completed: Vec::new(),
            booleans: 0,
        }
    }

    pub fn rings(&self) -> &[Box<dyn Ring>] {
        &self.rings
    }

    /// Stages that ran to completion, in order.
    pub fn completed_stages(&self) -> &[AssemblyStage] {
        &self.completed
    }

    /// Boolean operations applied during the merge stage.
    pub fn boolean_count(&self) -> usize {
        self.booleans
    }

    /// Run every stage in order and return the merged mesh.
    ///
    /// An empty batch runs each stage over nothing and returns `None`.
    /// Any failure aborts the pipeline; cleaning up the scene is left to
    /// the caller.
    #[instrument(skip_all, fields(rings = self.rings.len()))]
    pub fn create_rings(
        &mut self,
        host: &mut dyn HostBundle,
    ) -> Result<Option<ObjectHandle>, FactoryError> {
        self.stage(AssemblyStage::Materialize, |rings| {
            rings.iter_mut().try_for_each(|r| r.create_objects(host))
        })?;
        self.stage(AssemblyStage::DeformBind, |rings| {
            rings.iter_mut().try_for_each(|r| r.bind_deform(host))
        })?;
        self.stage(AssemblyStage::Rasterize, |rings| {
            rings.iter_mut().try_for_each(|r| r.convert_to_mesh(host))
        })?;

        let Some(joined) = self.stage(AssemblyStage::GroupJoin, |rings| group_join(rings, host))?
        else {
            for stage in [AssemblyStage::Merge, AssemblyStage::Cleanup, AssemblyStage::Polish] {
                self.stage(stage, |_| Ok(()))?;
            }
            info!("empty batch, nothing to merge");
            return Ok(None);
        };

        let booleans = self.stage(AssemblyStage::Merge, |_| merge(&joined, host))?;
        self.booleans = booleans;

        self.stage(AssemblyStage::Cleanup, |rings| {
            let mut scratch: Vec<ObjectHandle> = joined
                .add
                .iter()
                .chain(&joined.subtract)
                .copied()
                .collect();
            scratch.extend(rings.iter().flat_map(|r| r.scratch_objects()));
            debug!(count = scratch.len(), "deleting intermediate parts");
            host.delete(&scratch).map_err(OpError::from)
        })?;

        self.stage(AssemblyStage::Polish, |_| {
            host.triangulate(joined.base)?;
            host.set_name(joined.base, FINAL_MESH_NAME)?;
            Ok(())
        })?;

        info!(mesh = %joined.base, booleans, "batch assembled");
        Ok(Some(joined.base))
    }

    fn stage<T>(
        &mut self,
        stage: AssemblyStage,
        run: impl FnOnce(&mut [Box<dyn Ring>]) -> Result<T, OpError>,
    ) -> Result<T, FactoryError> {
        info!(stage = ?stage, "assembly stage");
        let out = run(&mut self.rings).map_err(|source| FactoryError::Stage { stage, source })?;
        self.completed.push(stage);
        Ok(out)
    }
}

/// Join the bases into one mesh and each role's parts slot by slot.
///
/// Slot `i` of a role collects the `i`-th part of that role from every
/// ring, so the number of merge booleans depends on how many parts a ring
/// has, never on how many rings there are.
fn group_join(
    rings: &[Box<dyn Ring>],
    host: &mut dyn HostBundle,
) -> Result<Option<JoinedParts>, OpError> {
    if rings.is_empty() {
        return Ok(None);
    }

    let mut roles = [Vec::new(), Vec::new(), Vec::new()];
    for ring in rings {
        for (slot, role) in [PartRole::Base, PartRole::Add, PartRole::Subtract]
            .into_iter()
            .enumerate()
        {
            roles[slot].push(ring.objects_in_role(role)?);
        }
    }
    let [bases, adds, subtracts] = roles;

    let base = join_all(host, &bases.concat())?;
    let add = transpose(adds)
        .iter()
        .map(|group| join_all(host, group))
        .collect::<Result<Vec<_>, _>>()?;
    let subtract = transpose(subtracts)
        .iter()
        .map(|group| join_all(host, group))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(%base, adds = add.len(), subtracts = subtract.len(), "parts joined by role");
    Ok(Some(JoinedParts {
        base,
        add,
        subtract,
    }))
}

fn join_all(host: &mut dyn HostBundle, objects: &[ObjectHandle]) -> Result<ObjectHandle, OpError> {
    Ok(host.join(objects)?)
}

/// Regroup per-ring lists by position. Shorter lists just skip slots.
fn transpose(lists: Vec<Vec<ObjectHandle>>) -> Vec<Vec<ObjectHandle>> {
    let width = lists.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .map(|i| lists.iter().filter_map(|list| list.get(i).copied()).collect())
        .collect()
}

/// Unions first, then differences. Returns how many booleans ran.
fn merge(joined: &JoinedParts, host: &mut dyn HostBundle) -> Result<usize, OpError> {
    let mut count = 0;
    for &tool in &joined.add {
        checked_boolean(host, joined.base, BooleanOp::Union, tool)?;
        count += 1;
    }
    for &tool in &joined.subtract {
        checked_boolean(host, joined.base, BooleanOp::Difference, tool)?;
        count += 1;
    }
    Ok(count)
}

/// Delete every scene object that is not in `keep`. Returns how many went.
pub fn rollback_scene(
    host: &mut dyn HostBundle,
    keep: &BTreeSet<ObjectHandle>,
) -> Result<usize, HostError> {
    let created: Vec<ObjectHandle> = host
        .objects()
        .into_iter()
        .filter(|o| !keep.contains(o))
        .collect();
    if !created.is_empty() {
        host.delete(&created)?;
    }
    Ok(created.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handles(host: &mut scene_host::MockHost, n: usize) -> Vec<ObjectHandle> {
        use scene_host::SceneHost;
        (0..n)
            .map(|i| host.create_circle_curve(&format!("c{}", i), 1.0, [0.0; 3]).unwrap())
            .collect()
    }

    #[test]
    fn transpose_groups_by_slot() {
        let mut host = scene_host::MockHost::new();
        let h = handles(&mut host, 5);
        let out = transpose(vec![vec![h[0], h[1]], vec![h[2], h[3]], vec![h[4]]]);
        assert_eq!(out, vec![vec![h[0], h[2], h[4]], vec![h[1], h[3]]]);
    }

    #[test]
    fn transpose_of_empty_lists_is_empty() {
        assert!(transpose(vec![Vec::new(), Vec::new()]).is_empty());
        assert!(transpose(Vec::new()).is_empty());
    }

    #[test]
    fn empty_pipeline_completes_every_stage() {
        let mut host = scene_host::MockHost::new();
        let mut factory = RingFactory::new(Vec::new());
        assert_eq!(factory.create_rings(&mut host).unwrap(), None);
        assert_eq!(factory.completed_stages(), &AssemblyStage::ALL);
        assert_eq!(factory.boolean_count(), 0);
    }
}
