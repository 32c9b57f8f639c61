use ruler_types::PartRole;
use scene_host::ObjectHandle;

use crate::host_ext::HostBundle;
use crate::types::OpError;

/// Something with a planar footprint that the layout engine can place.
pub trait Footprint {
    /// `[x, y, height]` extent, centred on the position.
    fn bounding_box(&self) -> [f64; 3];

    fn position(&self) -> [f64; 3];

    fn set_position(&mut self, position: [f64; 3]);
}

impl<T: Footprint + ?Sized> Footprint for Box<T> {
    fn bounding_box(&self) -> [f64; 3] {
        (**self).bounding_box()
    }

    fn position(&self) -> [f64; 3] {
        (**self).position()
    }

    fn set_position(&mut self, position: [f64; 3]) {
        (**self).set_position(position)
    }
}

/// Capability set the assembly pipeline needs from any ring variant.
///
/// The pipeline calls, in order: `create_objects`, `bind_deform`,
/// `convert_to_mesh`, then reads the role-tagged parts.
pub trait Ring: Footprint {
    /// Primary engraving.
    fn engraved_text(&self) -> &str;

    /// Secondary engraving on the year band, if any.
    fn engraved_year(&self) -> Option<&str>;

    /// Create this ring's scene objects at its current position.
    fn create_objects(&mut self, host: &mut dyn HostBundle) -> Result<(), OpError>;

    /// Attach bend modifiers. Variants that bind while materializing keep
    /// the default no-op.
    fn bind_deform(&mut self, _host: &mut dyn HostBundle) -> Result<(), OpError> {
        Ok(())
    }

    /// Bake text objects into meshes.
    fn convert_to_mesh(&mut self, host: &mut dyn HostBundle) -> Result<(), OpError>;

    fn base_object(&self) -> Result<ObjectHandle, OpError>;

    fn subtract_objects(&self) -> Vec<ObjectHandle>;

    fn add_objects(&self) -> Vec<ObjectHandle>;

    /// Helper objects (guide curves) to delete once the merge is done.
    fn scratch_objects(&self) -> Vec<ObjectHandle>;

    fn objects_in_role(&self, role: PartRole) -> Result<Vec<ObjectHandle>, OpError> {
        Ok(match role {
            PartRole::Base => vec![self.base_object()?],
            PartRole::Subtract => self.subtract_objects(),
            PartRole::Add => self.add_objects(),
        })
    }
}

pub(crate) fn offset(position: [f64; 3], by: [f64; 3]) -> [f64; 3] {
    [position[0] + by[0], position[1] + by[1], position[2] + by[2]]
}
