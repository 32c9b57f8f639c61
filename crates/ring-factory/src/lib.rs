pub mod assembly;
pub mod batch;
pub mod types;

use std::collections::BTreeSet;

use ring_ops::{arrange, HostBundle, Ring};
use ruler_types::RulerParams;
use tracing::{info, instrument, warn};

pub use assembly::{rollback_scene, RingFactory, FINAL_MESH_NAME};
pub use batch::{define_rings, engravings, ring_label, Batch, Engraving};
pub use types::*;

/// Drives one batch from parameters to a single printable mesh.
///
/// A run is all or nothing: when any step fails, every object the run
/// created is deleted again before the error is returned.
pub struct RingRuler {
    params: RulerParams,
}

impl RingRuler {
    /// Validate the parameters and create a driver for them.
    pub fn new(params: RulerParams) -> Result<Self, FactoryError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &RulerParams {
        &self.params
    }

    /// Define, lay out and assemble the batch.
    #[instrument(skip(self, host), fields(size = self.params.ring_size, begin = self.params.begin, end = self.params.end))]
    pub fn run(&self, host: &mut dyn HostBundle) -> Result<BatchReport, FactoryError> {
        let before: BTreeSet<_> = host.objects().into_iter().collect();
        match self.run_batch(host) {
            Ok(report) => Ok(report),
            Err(err) => {
                warn!(error = %err, "batch aborted, rolling back");
                match rollback_scene(host, &before) {
                    Ok(removed) => info!(removed, "scene restored"),
                    Err(rollback) => warn!(error = %rollback, "rollback incomplete"),
                }
                Err(err)
            }
        }
    }

    fn run_batch(&self, host: &mut dyn HostBundle) -> Result<BatchReport, FactoryError> {
        let params = &self.params;
        let batch = define_rings(params, host)?;
        let requested = batch.rings.len();

        let scale = params.unit_scale;
        let arrangement = arrange(
            batch.rings,
            params.bed_width_mm * scale,
            params.bed_height_mm * scale,
            params.margin_mm * scale,
        );
        let labels: Vec<String> = arrangement
            .placed
            .iter()
            .map(|r| r.engraved_text().to_string())
            .collect();
        info!(requested, placed = labels.len(), dropped = arrangement.dropped, "rings laid out");

        let mut factory = RingFactory::new(arrangement.placed);
        let final_mesh = factory.create_rings(host)?;

        if let Some(prototype) = &batch.prototype {
            prototype.release(host)?;
        }

        Ok(BatchReport {
            requested,
            labels,
            dropped: arrangement.dropped,
            booleans: factory.boolean_count(),
            final_mesh,
        })
    }
}
