use ring_ops::OpError;
use ruler_types::ParamError;
use scene_host::{HostError, ObjectHandle};
use serde::{Deserialize, Serialize};

/// Steps of the assembly pipeline, in the only order they may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AssemblyStage {
    /// Every ring creates its scene objects.
    Materialize,
    /// Bend modifiers are attached where a variant has not done so yet.
    DeformBind,
    /// Text objects are baked into meshes.
    Rasterize,
    /// Parts of the same role are joined across all rings.
    GroupJoin,
    /// Unions with the add parts, then differences with the subtract parts.
    Merge,
    /// Intermediate parts and guide curves are deleted.
    Cleanup,
    /// The merged mesh is triangulated.
    Polish,
}

impl AssemblyStage {
    pub const ALL: [AssemblyStage; 7] = [
        AssemblyStage::Materialize,
        AssemblyStage::DeformBind,
        AssemblyStage::Rasterize,
        AssemblyStage::GroupJoin,
        AssemblyStage::Merge,
        AssemblyStage::Cleanup,
        AssemblyStage::Polish,
    ];
}

/// Outcome of one finished batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    /// Rings defined by the serial range.
    pub requested: usize,
    /// Engravings of the rings that made it onto the bed, in layout order.
    pub labels: Vec<String>,
    /// Rings dropped because the bed was full.
    pub dropped: usize,
    /// Boolean operations run while merging.
    pub booleans: usize,
    /// The single merged mesh. `None` for an empty batch.
    #[serde(skip)]
    pub final_mesh: Option<ObjectHandle>,
}

impl BatchReport {
    pub fn placed(&self) -> usize {
        self.labels.len()
    }
}

/// Errors that abort a batch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FactoryError {
    #[error("invalid parameters: {0}")]
    Params(#[from] ParamError),

    #[error("operation error: {0}")]
    Op(#[from] OpError),

    #[error("host error: {0}")]
    Host(#[from] HostError),

    #[error("assembly failed during {stage:?}: {source}")]
    Stage {
        stage: AssemblyStage,
        #[source]
        source: OpError,
    },
}

impl FactoryError {
    /// The pipeline stage that failed, if the failure happened in one.
    pub fn stage(&self) -> Option<AssemblyStage> {
        match self {
            FactoryError::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
