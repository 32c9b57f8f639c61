use scene_host::{FontRef, ObjectHandle};
use tracing::debug;

use crate::host_ext::HostBundle;
use crate::prototype::{
    bind_text, BandParts, RingDimensions, TEXT_ROTATION, YEAR_CURVE_ROTATION, YEAR_TEXT_ROTATION,
};
use crate::ring::{offset, Footprint, Ring};
use crate::types::OpError;

/// How far the bore sticks out of the body in total, in millimetres.
const BORE_OVERSHOOT_MM: f64 = 2.0;

#[derive(Debug, Clone, Copy)]
struct StandaloneParts {
    body: ObjectHandle,
    bore: ObjectHandle,
    label: BandParts,
    year: Option<BandParts>,
}

/// A ring that builds all of its own geometry.
///
/// Nothing is shared with other rings, so the bore is handed to the
/// pipeline as a subtract part and the bend modifiers are attached in the
/// deform-bind stage.
#[derive(Debug)]
pub struct StandaloneRing {
    dims: RingDimensions,
    font: Option<FontRef>,
    engraved_text: String,
    engraved_year: Option<String>,
    position: [f64; 3],
    parts: Option<StandaloneParts>,
}

impl StandaloneRing {
    pub fn new(dims: RingDimensions, font: Option<FontRef>, engraved_text: impl Into<String>) -> Self {
        Self {
            dims,
            font,
            engraved_text: engraved_text.into(),
            engraved_year: None,
            position: [0.0; 3],
            parts: None,
        }
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.engraved_year = Some(year.into());
        self
    }

    pub fn dimensions(&self) -> &RingDimensions {
        &self.dims
    }

    fn parts(&self) -> Result<&StandaloneParts, OpError> {
        self.parts.as_ref().ok_or(OpError::NotMaterialized)
    }

    fn create_band(
        &self,
        host: &mut dyn HostBundle,
        body: &str,
        font_size: f64,
        band_offset: [f64; 3],
        rotations: ([f64; 3], [f64; 3]),
    ) -> Result<BandParts, OpError> {
        let location = offset(self.position, band_offset);
        let curve = host.create_circle_curve("TextCurve", self.dims.outer_radius, location)?;
        host.set_rotation(curve, rotations.0)?;
        let text = host.create_text(
            "Text",
            body,
            &self.dims.text_style(font_size, self.font.clone()),
            location,
        )?;
        host.set_rotation(text, rotations.1)?;
        Ok(BandParts { curve, text })
    }
}

impl Footprint for StandaloneRing {
    fn bounding_box(&self) -> [f64; 3] {
        self.dims.bounding_box()
    }

    fn position(&self) -> [f64; 3] {
        self.position
    }

    fn set_position(&mut self, position: [f64; 3]) {
        self.position = position;
    }
}

impl Ring for StandaloneRing {
    fn engraved_text(&self) -> &str {
        &self.engraved_text
    }

    fn engraved_year(&self) -> Option<&str> {
        self.engraved_year.as_deref()
    }

    fn create_objects(&mut self, host: &mut dyn HostBundle) -> Result<(), OpError> {
        if self.parts.is_some() {
            return Ok(());
        }
        let dims = &self.dims;
        let bore_depth = dims.height + BORE_OVERSHOOT_MM * dims.scale;
        let bore = host.create_cylinder("Bore", &dims.bore_spec(bore_depth, self.position))?;
        let body = host.create_cylinder("Body", &dims.body_spec(self.position))?;

        let label = self.create_band(
            host,
            &self.engraved_text,
            dims.text_font_size,
            dims.text_offset,
            ([0.0; 3], TEXT_ROTATION),
        )?;
        let year = match self.engraved_year.as_deref() {
            Some(year) => Some(self.create_band(
                host,
                year,
                dims.year_font_size,
                dims.year_offset,
                (YEAR_CURVE_ROTATION, YEAR_TEXT_ROTATION),
            )?),
            None => None,
        };

        debug!(text = %self.engraved_text, %body, "standalone ring created");
        self.parts = Some(StandaloneParts {
            body,
            bore,
            label,
            year,
        });
        Ok(())
    }

    fn bind_deform(&mut self, host: &mut dyn HostBundle) -> Result<(), OpError> {
        let parts = *self.parts()?;
        bind_text(host, parts.label.text, parts.label.curve)?;
        if let Some(year) = parts.year {
            bind_text(host, year.text, year.curve)?;
        }
        Ok(())
    }

    fn convert_to_mesh(&mut self, host: &mut dyn HostBundle) -> Result<(), OpError> {
        let parts = *self.parts()?;
        host.convert_to_mesh(parts.label.text)?;
        if let Some(year) = parts.year {
            host.convert_to_mesh(year.text)?;
        }
        Ok(())
    }

    fn base_object(&self) -> Result<ObjectHandle, OpError> {
        Ok(self.parts()?.body)
    }

    fn subtract_objects(&self) -> Vec<ObjectHandle> {
        self.parts.iter().map(|p| p.bore).collect()
    }

    fn add_objects(&self) -> Vec<ObjectHandle> {
        match &self.parts {
            Some(parts) => std::iter::once(parts.label.text)
                .chain(parts.year.map(|y| y.text))
                .collect(),
            None => Vec::new(),
        }
    }

    fn scratch_objects(&self) -> Vec<ObjectHandle> {
        match &self.parts {
            Some(parts) => std::iter::once(parts.label.curve)
                .chain(parts.year.map(|y| y.curve))
                .collect(),
            None => Vec::new(),
        }
    }
}
