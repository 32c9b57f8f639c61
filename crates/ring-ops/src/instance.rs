use std::rc::Rc;

use scene_host::ObjectHandle;
use tracing::debug;

use crate::host_ext::HostBundle;
use crate::prototype::{BandParts, RingPrototype};
use crate::ring::{offset, Footprint, Ring};
use crate::types::OpError;

#[derive(Debug, Clone, Copy)]
struct InstanceParts {
    base: ObjectHandle,
    label: BandParts,
    year: Option<BandParts>,
}

/// One ring cloned from a shared prototype.
///
/// Size, radii and footprint come from the prototype. The instance only
/// carries its engravings and position.
#[derive(Debug)]
pub struct InstancedRing {
    prototype: Rc<RingPrototype>,
    engraved_text: String,
    engraved_year: Option<String>,
    position: [f64; 3],
    parts: Option<InstanceParts>,
}

impl InstancedRing {
    pub fn new(prototype: Rc<RingPrototype>, engraved_text: impl Into<String>) -> Self {
        Self {
            prototype,
            engraved_text: engraved_text.into(),
            engraved_year: None,
            position: [0.0; 3],
            parts: None,
        }
    }

    /// Engrave `year` on the prototype's year band.
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.engraved_year = Some(year.into());
        self
    }

    pub fn prototype(&self) -> &Rc<RingPrototype> {
        &self.prototype
    }

    pub fn size(&self) -> u32 {
        self.prototype.dimensions().size
    }

    pub fn inner_radius(&self) -> f64 {
        self.prototype.dimensions().inner_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.prototype.dimensions().outer_radius
    }

    pub fn height(&self) -> f64 {
        self.prototype.dimensions().height
    }

    fn parts(&self) -> Result<&InstanceParts, OpError> {
        self.parts.as_ref().ok_or(OpError::NotMaterialized)
    }

    /// Copy a band's curve and text with their own data, engrave `body`
    /// and bend the text onto the copied curve.
    fn clone_band(
        &self,
        host: &mut dyn HostBundle,
        template: BandParts,
        body: &str,
        band_offset: [f64; 3],
    ) -> Result<BandParts, OpError> {
        let location = offset(self.position, band_offset);

        let curve = host.copy_object(template.curve)?;
        host.make_data_single_user(curve)?;
        host.set_location(curve, location)?;
        host.link(curve)?;

        let text = host.copy_object(template.text)?;
        host.make_data_single_user(text)?;
        host.set_text_body(text, body)?;
        host.set_location(text, location)?;
        host.retarget_deform(text, curve)?;
        host.link(text)?;

        Ok(BandParts { curve, text })
    }
}

impl Footprint for InstancedRing {
    fn bounding_box(&self) -> [f64; 3] {
        self.prototype.dimensions().bounding_box()
    }

    fn position(&self) -> [f64; 3] {
        self.position
    }

    fn set_position(&mut self, position: [f64; 3]) {
        self.position = position;
    }
}

impl Ring for InstancedRing {
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
        let template = self.prototype.bake(host)?;
        let dims = self.prototype.dimensions().clone();

        // Shares the prototype's mesh until something writes to it.
        let base = host.copy_object(template.base)?;
        host.set_location(base, self.position)?;
        host.link(base)?;

        let label = self.clone_band(host, template.label, &self.engraved_text, dims.text_offset)?;

        let year = match (template.year, self.engraved_year.as_deref()) {
            (Some(band), Some(year)) => Some(self.clone_band(host, band, year, dims.year_offset)?),
            (None, Some(year)) => {
                debug!(year, "prototype has no year band, year not engraved");
                None
            }
            _ => None,
        };

        debug!(text = %self.engraved_text, %base, "instanced ring created");
        self.parts = Some(InstanceParts { base, label, year });
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
        Ok(self.parts()?.base)
    }

    /// Empty: the bore was cut once, when the prototype baked.
    fn subtract_objects(&self) -> Vec<ObjectHandle> {
        Vec::new()
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
