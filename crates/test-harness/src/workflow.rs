//! BatchBuilder: fluent API for scripting whole batches in tests.
//!
//! Drives the real `RingRuler` entry point against a `MockHost`, then hands
//! back the host together with the result so tests can inspect both.

use file_format::{export_object_stl, StlFormat};
use ring_factory::{define_rings, BatchReport, FactoryError, RingRuler};
use ring_ops::{arrange, Arrangement, Ring};
use ruler_types::{RingVariant, RulerParams, YearPlacement};
use scene_host::{MockHost, ObjectHandle, RenderMesh, SceneIntrospect};

use crate::helpers::HarnessError;
use crate::oracle::{self, OracleVerdict};

/// A fluent builder for one batch run.
pub struct BatchBuilder {
    params: RulerParams,
    host: MockHost,
}

impl Default for BatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchBuilder {
    /// Default form values, a fixed year of 26 and millimetre host units.
    pub fn new() -> Self {
        Self {
            params: RulerParams {
                year: 26,
                unit_scale: 1.0,
                ..RulerParams::default()
            },
            host: MockHost::new(),
        }
    }

    /// Start from explicit parameters.
    pub fn from_params(params: RulerParams) -> Self {
        Self {
            params,
            host: MockHost::new(),
        }
    }

    /// Replace the host with one that knows only these fonts.
    pub fn with_fonts<I, S>(mut self, fonts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.host = MockHost::with_fonts(fonts);
        self
    }

    // ── Parameters ──────────────────────────────────────────────────────

    pub fn ring_size(mut self, size: u32) -> Self {
        self.params.ring_size = size;
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.params.label = label.to_string();
        self
    }

    /// Inclusive serial range.
    pub fn serials(mut self, begin: u32, end: u32) -> Self {
        self.params.begin = begin;
        self.params.end = end;
        self
    }

    pub fn year(mut self, year: u32) -> Self {
        self.params.year = year;
        self
    }

    pub fn zero_fill(mut self, digits: usize) -> Self {
        self.params.zero_fill = digits;
        self
    }

    /// Bed size in millimetres.
    pub fn bed(mut self, width_mm: f64, height_mm: f64) -> Self {
        self.params.bed_width_mm = width_mm;
        self.params.bed_height_mm = height_mm;
        self
    }

    pub fn margin(mut self, margin_mm: f64) -> Self {
        self.params.margin_mm = margin_mm;
        self
    }

    pub fn unit_scale(mut self, scale: f64) -> Self {
        self.params.unit_scale = scale;
        self
    }

    pub fn font(mut self, name: &str) -> Self {
        self.params.font = Some(name.to_string());
        self
    }

    pub fn standalone(mut self) -> Self {
        self.params.variant = RingVariant::Standalone;
        self
    }

    pub fn inline_year(mut self) -> Self {
        self.params.year_placement = YearPlacement::Inline;
        self
    }

    // ── Host Setup ──────────────────────────────────────────────────────

    /// Make the `n`-th boolean of the run fail (1-based).
    pub fn fail_boolean_at(mut self, n: usize) -> Self {
        self.host.fail_boolean_at(n);
        self
    }

    /// Direct access to the host, e.g. to add objects before the run.
    pub fn host_mut(&mut self) -> &mut MockHost {
        &mut self.host
    }

    pub fn params(&self) -> &RulerParams {
        &self.params
    }

    // ── Execution ───────────────────────────────────────────────────────

    /// Define and lay out the rings without touching the scene.
    pub fn layout(&self) -> Result<Arrangement<Box<dyn Ring>>, HarnessError> {
        let batch = define_rings(&self.params, &self.host)?;
        let scale = self.params.unit_scale;
        Ok(arrange(
            batch.rings,
            self.params.bed_width_mm * scale,
            self.params.bed_height_mm * scale,
            self.params.margin_mm * scale,
        ))
    }

    /// Run the batch through `RingRuler`.
    pub fn run(mut self) -> BatchOutcome {
        let result = RingRuler::new(self.params.clone()).and_then(|ruler| ruler.run(&mut self.host));
        BatchOutcome {
            params: self.params,
            host: self.host,
            result,
        }
    }
}

/// Host and result of one run.
pub struct BatchOutcome {
    pub params: RulerParams,
    pub host: MockHost,
    pub result: Result<BatchReport, FactoryError>,
}

impl BatchOutcome {
    /// The report, or the run's error.
    pub fn report(&self) -> Result<&BatchReport, HarnessError> {
        self.result.as_ref().map_err(|err| HarnessError::Factory(err.clone()))
    }

    /// The error of a run expected to fail.
    pub fn error(&self) -> Result<&FactoryError, HarnessError> {
        match &self.result {
            Err(err) => Ok(err),
            Ok(report) => Err(HarnessError::AssertionFailed {
                detail: format!("expected the batch to fail, it placed {} rings", report.placed()),
            }),
        }
    }

    pub fn final_mesh_handle(&self) -> Result<ObjectHandle, HarnessError> {
        self.report()?.final_mesh.ok_or(HarnessError::NoMesh)
    }

    /// World-space triangles of the finished mesh.
    pub fn final_mesh(&self) -> Result<RenderMesh, HarnessError> {
        let handle = self.final_mesh_handle()?;
        self.host.world_mesh(handle).ok_or(HarnessError::NoMesh)
    }

    /// Mesh, bed and scene oracles for a successful run.
    pub fn verify(&self) -> Result<Vec<OracleVerdict>, HarnessError> {
        let handle = self.final_mesh_handle()?;
        let mesh = self.final_mesh()?;
        let scale = self.params.unit_scale;
        let mut verdicts = oracle::run_all_mesh_checks(&mesh);
        verdicts.push(oracle::check_within_bed(
            &mesh,
            self.params.bed_width_mm * scale,
            self.params.bed_height_mm * scale,
        ));
        verdicts.push(oracle::check_single_object(&self.host, handle));
        Ok(verdicts)
    }

    /// Export the finished mesh as STL bytes.
    pub fn stl(&self, format: StlFormat) -> Result<Vec<u8>, HarnessError> {
        let handle = self.final_mesh_handle()?;
        Ok(export_object_stl(&self.host, handle, format)?)
    }
}
