//! Parametric ring builder: derived dimensions and the shared, lazily baked
//! prototype skeleton.

use std::cell::{Cell, OnceCell};
use std::f64::consts::{FRAC_PI_2, PI};

use ruler_types::units::{
    BEVEL_DEPTH_MM, BEVEL_RESOLUTION, BORE_ALLOWANCE_MM, REMESH_OCTREE_DEPTH, RING_RESOLUTION,
    TEXT_RESOLUTION, WALL_THICKNESS_MM,
};
use scene_host::{
    BooleanOp, CylinderSpec, DeformAxis, FontRef, Modifier, ObjectHandle, TextStyle,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::host_ext::HostBundle;
use crate::types::{checked_boolean, OpError};

/// Engraving thickness per unit of ring size.
const TEXT_THICKNESS_PER_SIZE: f64 = 0.01;
const TEXT_FONT_RATIO: f64 = 7.0 / 8.0;
const TEXT_DROP_RATIO: f64 = 0.25;
const YEAR_FONT_RATIO: f64 = 0.75;
const YEAR_DROP_RATIO: f64 = 0.37;
/// The bore overshoots the body so the difference never leaves a skin.
const BORE_DEPTH_RATIO: f64 = 1.3;
/// Angle at which the year band starts, clockwise of the main label.
pub const YEAR_BAND_TURN: f64 = -0.22;

/// Glyphs are flipped about X so they face outward once bent onto the ring.
pub const TEXT_ROTATION: [f64; 3] = [PI, 0.0, 0.0];
/// The year runs up the band instead of around it.
pub const YEAR_TEXT_ROTATION: [f64; 3] = [PI, 0.0, -FRAC_PI_2 + YEAR_BAND_TURN];
pub const YEAR_CURVE_ROTATION: [f64; 3] = [0.0, 0.0, YEAR_BAND_TURN];

/// Physical dimensions of one ring size, already in host units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingDimensions {
    pub size: u32,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub height: f64,
    pub text_thickness: f64,
    pub text_font_size: f64,
    pub text_offset: [f64; 3],
    pub year_font_size: f64,
    pub year_offset: [f64; 3],
    pub bevel_depth: f64,
    /// Millimetres to host units.
    pub scale: f64,
}

impl RingDimensions {
    /// Derive every dimension from ring size, band height (mm) and unit scale.
    pub fn new(size: u32, height_mm: f64, scale: f64) -> Result<Self, OpError> {
        if size as f64 <= BORE_ALLOWANCE_MM {
            return Err(OpError::InvalidParameter {
                reason: format!("ring size {} leaves no bore", size),
            });
        }
        if !(height_mm > 0.0) || !(scale > 0.0) {
            return Err(OpError::InvalidParameter {
                reason: format!(
                    "height and scale must be positive, got height={} scale={}",
                    height_mm, scale
                ),
            });
        }

        let inner_mm = (size as f64 - BORE_ALLOWANCE_MM) / 2.0;
        let outer_mm = inner_mm + WALL_THICKNESS_MM;
        let height = height_mm * scale;

        Ok(Self {
            size,
            inner_radius: inner_mm * scale,
            outer_radius: outer_mm * scale,
            height,
            text_thickness: size as f64 * TEXT_THICKNESS_PER_SIZE * scale,
            text_font_size: height * TEXT_FONT_RATIO,
            text_offset: [0.0, 0.0, -height * TEXT_DROP_RATIO],
            year_font_size: height * YEAR_FONT_RATIO,
            year_offset: [0.0, 0.0, -height * YEAR_DROP_RATIO],
            bevel_depth: BEVEL_DEPTH_MM * scale,
            scale,
        })
    }

    pub fn wall_thickness(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    /// Footprint of the ring with its engraving: `[x, y, height]`.
    pub fn bounding_box(&self) -> [f64; 3] {
        let across = 2.0 * self.outer_radius + 2.0 * self.text_thickness;
        [across, across, self.height]
    }

    /// Text style for a label of the given font size.
    pub fn text_style(&self, font_size: f64, font: Option<FontRef>) -> TextStyle {
        TextStyle {
            extrude: self.text_thickness,
            bevel_depth: self.bevel_depth,
            bevel_resolution: BEVEL_RESOLUTION,
            font_size,
            resolution_u: TEXT_RESOLUTION,
            font,
        }
    }

    /// Body cylinder centred on `location`.
    pub fn body_spec(&self, location: [f64; 3]) -> CylinderSpec {
        CylinderSpec {
            radius: self.outer_radius,
            depth: self.height,
            vertices: RING_RESOLUTION,
            location,
        }
    }

    /// Bore cylinder of the given depth, centred on `location`.
    pub fn bore_spec(&self, depth: f64, location: [f64; 3]) -> CylinderSpec {
        CylinderSpec {
            radius: self.inner_radius,
            depth,
            vertices: RING_RESOLUTION,
            location,
        }
    }
}

/// Attach the remesh and curve deform that wrap a text object onto its
/// guide curve.
pub(crate) fn bind_text(
    host: &mut dyn HostBundle,
    text: ObjectHandle,
    curve: ObjectHandle,
) -> Result<(), OpError> {
    host.add_modifier(
        text,
        Modifier::Remesh {
            octree_depth: REMESH_OCTREE_DEPTH,
            remove_disconnected: false,
        },
    )?;
    host.add_modifier(
        text,
        Modifier::CurveDeform {
            axis: DeformAxis::NegX,
            target: curve,
        },
    )?;
    Ok(())
}

/// Guide curve and text template for one engraving band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandParts {
    pub curve: ObjectHandle,
    pub text: ObjectHandle,
}

/// Scene objects owned by a baked prototype. All sit at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrototypeParts {
    /// Hollow ring body, bore already cut.
    pub base: ObjectHandle,
    pub label: BandParts,
    pub year: Option<BandParts>,
}

impl PrototypeParts {
    pub fn objects(&self) -> Vec<ObjectHandle> {
        let mut objects = vec![self.base, self.label.curve, self.label.text];
        if let Some(year) = self.year {
            objects.extend([year.curve, year.text]);
        }
        objects
    }
}

/// Template shared by every instanced ring of one size, height and font.
///
/// Baked at most once, by whichever instance materializes first. Instances
/// hold it through an `Rc` and only read it after that.
#[derive(Debug)]
pub struct RingPrototype {
    dims: RingDimensions,
    font: Option<FontRef>,
    year_band: bool,
    parts: OnceCell<PrototypeParts>,
    released: Cell<bool>,
}

impl RingPrototype {
    pub fn new(dims: RingDimensions, font: Option<FontRef>) -> Self {
        Self {
            dims,
            font,
            year_band: true,
            parts: OnceCell::new(),
            released: Cell::new(false),
        }
    }

    /// Derive dimensions and create an unbaked prototype.
    pub fn build(
        ring_size: u32,
        height_mm: f64,
        scale: f64,
        font: Option<FontRef>,
    ) -> Result<Self, OpError> {
        Ok(Self::new(RingDimensions::new(ring_size, height_mm, scale)?, font))
    }

    /// Whether the skeleton carries a second band for the year.
    pub fn with_year_band(mut self, year_band: bool) -> Self {
        self.year_band = year_band;
        self
    }

    pub fn dimensions(&self) -> &RingDimensions {
        &self.dims
    }

    pub fn font(&self) -> Option<&FontRef> {
        self.font.as_ref()
    }

    pub fn has_year_band(&self) -> bool {
        self.year_band
    }

    pub fn baked(&self) -> bool {
        self.parts.get().is_some()
    }

    /// Parts of the baked skeleton, if any.
    pub fn parts(&self) -> Option<PrototypeParts> {
        self.parts.get().copied()
    }

    /// Build the skeleton on first call; later calls return the same parts.
    #[instrument(skip(self, host), fields(size = self.dims.size))]
    pub fn bake(&self, host: &mut dyn HostBundle) -> Result<PrototypeParts, OpError> {
        if self.released.get() {
            return Err(OpError::PrototypeReleased);
        }
        if let Some(parts) = self.parts.get() {
            return Ok(*parts);
        }
        info!("baking ring prototype");
        let parts = self.build_skeleton(host)?;
        Ok(*self.parts.get_or_init(|| parts))
    }

    fn build_skeleton(&self, host: &mut dyn HostBundle) -> Result<PrototypeParts, OpError> {
        let dims = &self.dims;
        let origin = [0.0; 3];

        let bore = host.create_cylinder(
            "RingBore",
            &dims.bore_spec(dims.height * BORE_DEPTH_RATIO, origin),
        )?;
        let base = host.create_cylinder("RingBase", &dims.body_spec(origin))?;

        let curve = host.create_circle_curve("LabelCurve", dims.outer_radius, dims.text_offset)?;
        let text = host.create_text(
            "LabelTemplate",
            "",
            &dims.text_style(dims.text_font_size, self.font.clone()),
            dims.text_offset,
        )?;
        host.set_rotation(text, TEXT_ROTATION)?;
        bind_text(host, text, curve)?;
        let label = BandParts { curve, text };

        let year = if self.year_band {
            let curve =
                host.create_circle_curve("YearCurve", dims.outer_radius, dims.year_offset)?;
            host.set_rotation(curve, YEAR_CURVE_ROTATION)?;
            let text = host.create_text(
                "YearTemplate",
                "",
                &dims.text_style(dims.year_font_size, self.font.clone()),
                dims.year_offset,
            )?;
            host.set_rotation(text, YEAR_TEXT_ROTATION)?;
            bind_text(host, text, curve)?;
            Some(BandParts { curve, text })
        } else {
            None
        };

        checked_boolean(host, base, BooleanOp::Difference, bore)?;
        host.delete(&[bore])?;
        debug!(%base, "prototype body hollowed");

        Ok(PrototypeParts { base, label, year })
    }

    /// Scene objects that make up the baked skeleton.
    pub fn skeleton_objects(&self) -> Vec<ObjectHandle> {
        self.parts.get().map(PrototypeParts::objects).unwrap_or_default()
    }

    /// Delete the skeleton from the scene. The prototype cannot bake again.
    pub fn release(&self, host: &mut dyn HostBundle) -> Result<(), OpError> {
        if self.released.replace(true) {
            return Ok(());
        }
        let objects = self.skeleton_objects();
        if !objects.is_empty() {
            debug!(count = objects.len(), "releasing prototype skeleton");
            host.delete(&objects)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn size_fifteen_in_millimetres() {
        let dims = RingDimensions::new(15, 8.0, 1.0).unwrap();
        assert_relative_eq!(dims.inner_radius, 7.0, epsilon = 1e-12);
        assert_relative_eq!(dims.outer_radius, 9.0, epsilon = 1e-12);
        assert_relative_eq!(dims.text_thickness, 0.15, epsilon = 1e-12);
        assert_relative_eq!(dims.text_font_size, 7.0, epsilon = 1e-12);
        assert_relative_eq!(dims.year_font_size, 6.0, epsilon = 1e-12);
        assert_relative_eq!(dims.text_offset[2], -2.0, epsilon = 1e-12);
        assert_relative_eq!(dims.bounding_box()[0], 18.3, epsilon = 1e-12);
    }

    #[test]
    fn scale_applies_once() {
        let dims = RingDimensions::new(15, 8.0, 0.001).unwrap();
        assert_relative_eq!(dims.outer_radius, 0.009, epsilon = 1e-12);
        assert_relative_eq!(dims.bevel_depth, 0.0002, epsilon = 1e-12);
        assert_relative_eq!(dims.height, 0.008, epsilon = 1e-12);
    }

    #[test]
    fn zero_height_rejected() {
        assert!(matches!(
            RingDimensions::new(15, 0.0, 1.0),
            Err(OpError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn unbaked_prototype_has_no_skeleton() {
        let proto = RingPrototype::build(12, 8.0, 1.0, None).unwrap();
        assert!(!proto.baked());
        assert!(proto.skeleton_objects().is_empty());
    }
}
