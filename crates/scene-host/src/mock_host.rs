//! MockHost: deterministic in-memory scene implementing SceneHost and SceneIntrospect.
//!
//! Objects and data blocks are stored separately, like in the authoring tool,
//! so shallow copies really share data until made single-user. Primitives,
//! text, remesh, curve deform, join and triangulate produce real geometry.
//! Booleans are approximated: union concatenates the tool's closed shells
//! into the target, difference leaves the target's shells untouched.
//!
//! Used by ring-ops and ring-factory for unit and scenario testing.

use std::collections::{BTreeMap, HashMap};

use nalgebra::Point3;
use tracing::debug;

use crate::primitives;
use crate::tessellation::{object_transform, point_to_array, PolyMesh};
use crate::traits::{SceneHost, SceneIntrospect};
use crate::types::*;

#[derive(Debug, Clone)]
struct TextData {
    body: String,
    style: TextStyle,
}

#[derive(Debug, Clone)]
enum DataBlock {
    Mesh(PolyMesh),
    Curve { radius: f64 },
    Text(TextData),
}

impl DataBlock {
    fn kind(&self) -> ObjectKind {
        match self {
            DataBlock::Mesh(_) => ObjectKind::Mesh,
            DataBlock::Curve { .. } => ObjectKind::Curve,
            DataBlock::Text(_) => ObjectKind::Text,
        }
    }
}

#[derive(Debug, Clone)]
struct MockObject {
    name: String,
    data: u64,
    location: [f64; 3],
    rotation: [f64; 3],
    modifiers: Vec<Modifier>,
    linked: bool,
}

/// One call to `apply_boolean`, as seen by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanRecord {
    pub target: ObjectHandle,
    pub tool: ObjectHandle,
    pub op: BooleanOp,
    pub status: OperatorStatus,
}

/// Deterministic in-memory host scene.
pub struct MockHost {
    next_id: u64,
    objects: BTreeMap<u64, MockObject>,
    data: HashMap<u64, DataBlock>,
    fonts: Vec<String>,
    fail_boolean_at: Option<usize>,
    booleans: Vec<BooleanRecord>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            objects: BTreeMap::new(),
            data: HashMap::new(),
            fonts: Vec::new(),
            fail_boolean_at: None,
            booleans: Vec::new(),
        }
    }

    /// A host that knows the given font assets.
    pub fn with_fonts<I, S>(fonts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut host = Self::new();
        host.fonts = fonts.into_iter().map(Into::into).collect();
        host
    }

    /// Make the `n`-th boolean (1-based, counted from host creation) report
    /// `Cancelled` without touching the target.
    pub fn fail_boolean_at(&mut self, n: usize) {
        self.fail_boolean_at = Some(n);
    }

    /// Every boolean applied so far, in order.
    pub fn boolean_log(&self) -> &[BooleanRecord] {
        &self.booleans
    }

    /// Number of live data blocks, shared or not.
    pub fn data_block_count(&self) -> usize {
        self.data.len()
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn add_object(&mut self, name: &str, block: DataBlock, location: [f64; 3]) -> ObjectHandle {
        let data = self.alloc_id();
        self.data.insert(data, block);
        let id = self.alloc_id();
        self.objects.insert(
            id,
            MockObject {
                name: name.to_string(),
                data,
                location,
                rotation: [0.0; 3],
                modifiers: Vec::new(),
                linked: true,
            },
        );
        debug!(object = id, name, "object added");
        ObjectHandle(id)
    }

    fn object(&self, handle: ObjectHandle) -> Result<&MockObject, HostError> {
        self.objects
            .get(&handle.0)
            .ok_or(HostError::ObjectNotFound { handle })
    }

    fn object_mut(&mut self, handle: ObjectHandle) -> Result<&mut MockObject, HostError> {
        self.objects
            .get_mut(&handle.0)
            .ok_or(HostError::ObjectNotFound { handle })
    }

    fn block(&self, handle: ObjectHandle) -> Result<&DataBlock, HostError> {
        let obj = self.object(handle)?;
        self.data.get(&obj.data).ok_or(HostError::ObjectNotFound { handle })
    }

    fn expect_kind(&self, handle: ObjectHandle, expected: ObjectKind) -> Result<(), HostError> {
        let found = self.block(handle)?.kind();
        if found == expected {
            Ok(())
        } else {
            Err(HostError::WrongKind {
                handle,
                expected,
                found,
            })
        }
    }

    fn mesh_data(&self, handle: ObjectHandle) -> Result<&PolyMesh, HostError> {
        match self.block(handle)? {
            DataBlock::Mesh(mesh) => Ok(mesh),
            other => Err(HostError::WrongKind {
                handle,
                expected: ObjectKind::Mesh,
                found: other.kind(),
            }),
        }
    }

    fn mesh_data_mut(&mut self, handle: ObjectHandle) -> Result<&mut PolyMesh, HostError> {
        let data = self.object(handle)?.data;
        match self.data.get_mut(&data) {
            Some(DataBlock::Mesh(mesh)) => Ok(mesh),
            Some(other) => Err(HostError::WrongKind {
                handle,
                expected: ObjectKind::Mesh,
                found: other.kind(),
            }),
            None => Err(HostError::ObjectNotFound { handle }),
        }
    }

    fn data_users(&self, data: u64) -> usize {
        self.objects.values().filter(|o| o.data == data).count()
    }

    fn ensure_single_user(&mut self, handle: ObjectHandle) -> Result<(), HostError> {
        let data = self.object(handle)?.data;
        if self.data_users(data) > 1 {
            self.make_data_single_user(handle)?;
        }
        Ok(())
    }

    fn purge_orphans(&mut self) {
        let used: std::collections::HashSet<u64> =
            self.objects.values().map(|o| o.data).collect();
        self.data.retain(|id, _| used.contains(id));
    }

    /// Mesh of the object in its own local frame, with modifiers evaluated.
    fn evaluated_mesh(&self, handle: ObjectHandle) -> Result<PolyMesh, HostError> {
        let obj = self.object(handle)?;
        match self.block(handle)? {
            DataBlock::Mesh(mesh) => {
                let mut mesh = mesh.clone();
                self.apply_deform(obj, &mut mesh)?;
                Ok(mesh)
            }
            DataBlock::Text(text) => {
                let remesh = obj.modifiers.iter().find_map(|m| match m {
                    Modifier::Remesh { octree_depth, .. } => Some(*octree_depth),
                    _ => None,
                });
                let mut mesh = primitives::text_blocks(&text.body, &text.style, remesh);
                self.apply_deform(obj, &mut mesh)?;
                Ok(mesh)
            }
            DataBlock::Curve { .. } => Err(HostError::NotSupported {
                operation: "evaluate curve as mesh".to_string(),
            }),
        }
    }

    fn apply_deform(&self, obj: &MockObject, mesh: &mut PolyMesh) -> Result<(), HostError> {
        for modifier in &obj.modifiers {
            let Modifier::CurveDeform { axis, target } = modifier else {
                continue;
            };
            let curve = self.object(*target)?;
            let radius = match self.block(*target)? {
                DataBlock::Curve { radius } => *radius,
                other => {
                    return Err(HostError::WrongKind {
                        handle: *target,
                        expected: ObjectKind::Curve,
                        found: other.kind(),
                    })
                }
            };
            let own = object_transform(obj.location, obj.rotation);
            let frame = object_transform(curve.location, curve.rotation);
            let to_curve = frame.inverse() * own;
            let back = own.inverse() * frame;
            mesh.map_positions(|p| {
                let q = point_to_array(to_curve * Point3::from(p));
                let bent = primitives::bend_onto_circle(q, *axis, radius);
                point_to_array(back * Point3::from(bent))
            });
        }
        Ok(())
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneHost for MockHost {
    fn create_cylinder(
        &mut self,
        name: &str,
        spec: &CylinderSpec,
    ) -> Result<ObjectHandle, HostError> {
        if !(spec.radius > 0.0 && spec.depth > 0.0) || spec.vertices < 3 {
            return Err(HostError::InvalidGeometry {
                reason: format!(
                    "cylinder needs positive radius/depth and >= 3 vertices, got r={} d={} n={}",
                    spec.radius, spec.depth, spec.vertices
                ),
            });
        }
        let mesh = primitives::cylinder(spec.radius, spec.depth, spec.vertices);
        Ok(self.add_object(name, DataBlock::Mesh(mesh), spec.location))
    }

    fn create_circle_curve(
        &mut self,
        name: &str,
        radius: f64,
        location: [f64; 3],
    ) -> Result<ObjectHandle, HostError> {
        if !(radius > 0.0) {
            return Err(HostError::InvalidGeometry {
                reason: format!("circle radius must be positive, got {}", radius),
            });
        }
        Ok(self.add_object(name, DataBlock::Curve { radius }, location))
    }

    fn create_text(
        &mut self,
        name: &str,
        body: &str,
        style: &TextStyle,
        location: [f64; 3],
    ) -> Result<ObjectHandle, HostError> {
        if !(style.font_size > 0.0) {
            return Err(HostError::InvalidGeometry {
                reason: format!("font size must be positive, got {}", style.font_size),
            });
        }
        let text = TextData {
            body: body.to_string(),
            style: style.clone(),
        };
        Ok(self.add_object(name, DataBlock::Text(text), location))
    }

    fn find_font(&self, name: &str) -> Option<FontRef> {
        self.fonts
            .iter()
            .find(|f| f.as_str() == name)
            .map(|f| FontRef(f.clone()))
    }

    fn set_text_body(&mut self, object: ObjectHandle, body: &str) -> Result<(), HostError> {
        let data = self.object(object)?.data;
        match self.data.get_mut(&data) {
            Some(DataBlock::Text(text)) => {
                text.body = body.to_string();
                Ok(())
            }
            Some(other) => Err(HostError::WrongKind {
                handle: object,
                expected: ObjectKind::Text,
                found: other.kind(),
            }),
            None => Err(HostError::ObjectNotFound { handle: object }),
        }
    }

    fn set_location(
        &mut self,
        object: ObjectHandle,
        location: [f64; 3],
    ) -> Result<(), HostError> {
        self.object_mut(object)?.location = location;
        Ok(())
    }

    fn set_rotation(
        &mut self,
        object: ObjectHandle,
        rotation: [f64; 3],
    ) -> Result<(), HostError> {
        self.object_mut(object)?.rotation = rotation;
        Ok(())
    }

    fn set_name(&mut self, object: ObjectHandle, name: &str) -> Result<(), HostError> {
        self.object_mut(object)?.name = name.to_string();
        Ok(())
    }

    fn add_modifier(&mut self, object: ObjectHandle, modifier: Modifier) -> Result<(), HostError> {
        if let Modifier::CurveDeform { target, .. } = &modifier {
            self.expect_kind(*target, ObjectKind::Curve)?;
        }
        if self.block(object)?.kind() == ObjectKind::Curve {
            return Err(HostError::NotSupported {
                operation: "modifiers on curve objects".to_string(),
            });
        }
        self.object_mut(object)?.modifiers.push(modifier);
        Ok(())
    }

    fn retarget_deform(
        &mut self,
        object: ObjectHandle,
        curve: ObjectHandle,
    ) -> Result<(), HostError> {
        self.expect_kind(curve, ObjectKind::Curve)?;
        let obj = self.object_mut(object)?;
        let slot = obj.modifiers.iter_mut().find_map(|m| match m {
            Modifier::CurveDeform { target, .. } => Some(target),
            _ => None,
        });
        match slot {
            Some(target) => {
                *target = curve;
                Ok(())
            }
            None => Err(HostError::MissingModifier { handle: object }),
        }
    }

    fn apply_boolean(
        &mut self,
        target: ObjectHandle,
        op: BooleanOp,
        tool: ObjectHandle,
    ) -> Result<OperatorStatus, HostError> {
        self.expect_kind(target, ObjectKind::Mesh)?;
        self.expect_kind(tool, ObjectKind::Mesh)?;

        let attempt = self.booleans.len() + 1;
        let status = if self.fail_boolean_at == Some(attempt) {
            OperatorStatus::Cancelled
        } else {
            OperatorStatus::Finished
        };

        if status.is_finished() {
            self.ensure_single_user(target)?;
            if op == BooleanOp::Union {
                let tool_obj = self.object(tool)?;
                let target_obj = self.object(target)?;
                let relative = object_transform(target_obj.location, target_obj.rotation)
                    .inverse()
                    * object_transform(tool_obj.location, tool_obj.rotation);
                let tool_mesh = self.mesh_data(tool)?.clone();
                self.mesh_data_mut(target)?
                    .append_transformed(&tool_mesh, &relative);
            }
        }

        debug!(%target, %tool, ?op, ?status, "boolean applied");
        self.booleans.push(BooleanRecord {
            target,
            tool,
            op,
            status,
        });
        Ok(status)
    }

    fn convert_to_mesh(&mut self, object: ObjectHandle) -> Result<(), HostError> {
        let mesh = self.evaluated_mesh(object)?;
        let data = self.alloc_id();
        self.data.insert(data, DataBlock::Mesh(mesh));
        let obj = self.object_mut(object)?;
        obj.data = data;
        obj.modifiers.clear();
        self.purge_orphans();
        Ok(())
    }

    fn join(&mut self, objects: &[ObjectHandle]) -> Result<ObjectHandle, HostError> {
        let (&survivor, rest) = objects.split_first().ok_or(HostError::EmptyJoin)?;
        for &handle in objects {
            self.expect_kind(handle, ObjectKind::Mesh)?;
        }
        self.ensure_single_user(survivor)?;

        let survivor_obj = self.object(survivor)?;
        let inverse =
            object_transform(survivor_obj.location, survivor_obj.rotation).inverse();
        let mut joined = self.mesh_data(survivor)?.clone();
        for &handle in rest {
            if handle == survivor {
                continue;
            }
            let obj = self.object(handle)?;
            let relative = inverse * object_transform(obj.location, obj.rotation);
            joined.append_transformed(self.mesh_data(handle)?, &relative);
        }
        *self.mesh_data_mut(survivor)? = joined;

        let removed: Vec<ObjectHandle> = rest.iter().copied().filter(|&h| h != survivor).collect();
        self.delete(&removed)?;
        Ok(survivor)
    }

    fn delete(&mut self, objects: &[ObjectHandle]) -> Result<(), HostError> {
        for &handle in objects {
            self.object(handle)?;
        }
        for handle in objects {
            self.objects.remove(&handle.0);
        }
        self.purge_orphans();
        Ok(())
    }

    fn copy_object(&mut self, object: ObjectHandle) -> Result<ObjectHandle, HostError> {
        let mut copy = self.object(object)?.clone();
        let id = self.alloc_id();
        copy.name = format!("{}.{:03}", copy.name, id);
        copy.linked = false;
        self.objects.insert(id, copy);
        Ok(ObjectHandle(id))
    }

    fn make_data_single_user(&mut self, object: ObjectHandle) -> Result<(), HostError> {
        let block = self.block(object)?.clone();
        let data = self.alloc_id();
        self.data.insert(data, block);
        self.object_mut(object)?.data = data;
        self.purge_orphans();
        Ok(())
    }

    fn link(&mut self, object: ObjectHandle) -> Result<(), HostError> {
        self.object_mut(object)?.linked = true;
        Ok(())
    }

    fn triangulate(&mut self, object: ObjectHandle) -> Result<(), HostError> {
        self.ensure_single_user(object)?;
        self.mesh_data_mut(object)?.triangulate();
        Ok(())
    }
}

impl SceneIntrospect for MockHost {
    fn objects(&self) -> Vec<ObjectHandle> {
        self.objects
            .iter()
            .filter(|(_, o)| o.linked)
            .map(|(&id, _)| ObjectHandle(id))
            .collect()
    }

    fn object_kind(&self, object: ObjectHandle) -> Option<ObjectKind> {
        self.block(object).ok().map(DataBlock::kind)
    }

    fn object_name(&self, object: ObjectHandle) -> Option<String> {
        self.object(object).ok().map(|o| o.name.clone())
    }

    fn text_body(&self, object: ObjectHandle) -> Option<String> {
        match self.block(object).ok()? {
            DataBlock::Text(text) => Some(text.body.clone()),
            _ => None,
        }
    }

    fn location(&self, object: ObjectHandle) -> Option<[f64; 3]> {
        self.object(object).ok().map(|o| o.location)
    }

    fn modifiers(&self, object: ObjectHandle) -> Vec<Modifier> {
        self.object(object)
            .map(|o| o.modifiers.clone())
            .unwrap_or_default()
    }

    fn polygon_counts(&self, object: ObjectHandle) -> Option<PolygonCounts> {
        self.mesh_data(object).ok().map(PolyMesh::polygon_counts)
    }

    fn shares_data(&self, a: ObjectHandle, b: ObjectHandle) -> bool {
        match (self.object(a), self.object(b)) {
            (Ok(a), Ok(b)) => a.data == b.data,
            _ => false,
        }
    }

    fn world_mesh(&self, object: ObjectHandle) -> Option<RenderMesh> {
        let obj = self.object(object).ok()?;
        let mesh = self.evaluated_mesh(object).ok()?;
        Some(mesh.to_render_mesh(&object_transform(obj.location, obj.rotation)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cylinder_spec(radius: f64, location: [f64; 3]) -> CylinderSpec {
        CylinderSpec {
            radius,
            depth: 2.0,
            vertices: 16,
            location,
        }
    }

    fn style() -> TextStyle {
        TextStyle {
            extrude: 0.1,
            bevel_depth: 0.0,
            bevel_resolution: 1,
            font_size: 1.0,
            resolution_u: 12,
            font: None,
        }
    }

    #[test]
    fn shallow_copy_shares_data_until_single_user() {
        let mut host = MockHost::new();
        let text = host.create_text("t", "AB", &style(), [0.0; 3]).unwrap();
        let copy = host.copy_object(text).unwrap();
        assert!(host.shares_data(text, copy));
        assert!(!host.objects().contains(&copy), "copies start unlinked");

        host.make_data_single_user(copy).unwrap();
        host.set_text_body(copy, "CD").unwrap();
        assert!(!host.shares_data(text, copy));
        assert_eq!(host.text_body(text).as_deref(), Some("AB"));
        assert_eq!(host.text_body(copy).as_deref(), Some("CD"));
    }

    #[test]
    fn join_moves_geometry_into_survivor_frame() {
        let mut host = MockHost::new();
        let a = host.create_cylinder("a", &cylinder_spec(1.0, [0.0; 3])).unwrap();
        let b = host
            .create_cylinder("b", &cylinder_spec(1.0, [10.0, 0.0, 0.0]))
            .unwrap();
        let joined = host.join(&[a, b]).unwrap();

        assert_eq!(joined, a);
        assert_eq!(host.objects(), vec![a]);
        let mesh = host.world_mesh(a).unwrap();
        let max_x = mesh
            .vertices
            .chunks(3)
            .map(|v| v[0])
            .fold(f32::MIN, f32::max);
        assert_relative_eq!(max_x, 11.0, epsilon = 1e-5);
    }

    #[test]
    fn join_of_shared_survivor_leaves_sibling_untouched() {
        let mut host = MockHost::new();
        let proto = host.create_cylinder("p", &cylinder_spec(1.0, [0.0; 3])).unwrap();
        let copy = host.copy_object(proto).unwrap();
        host.link(copy).unwrap();
        let other = host.create_cylinder("o", &cylinder_spec(1.0, [5.0, 0.0, 0.0])).unwrap();

        host.join(&[copy, other]).unwrap();
        assert_eq!(host.polygon_counts(proto).unwrap().total(), 18);
        assert_eq!(host.polygon_counts(copy).unwrap().total(), 36);
    }

    #[test]
    fn empty_join_is_an_error() {
        let mut host = MockHost::new();
        assert_eq!(host.join(&[]), Err(HostError::EmptyJoin));
    }

    #[test]
    fn boolean_union_appends_tool_and_keeps_tool_object() {
        let mut host = MockHost::new();
        let a = host.create_cylinder("a", &cylinder_spec(2.0, [0.0; 3])).unwrap();
        let b = host.create_cylinder("b", &cylinder_spec(1.0, [0.0; 3])).unwrap();
        let status = host.apply_boolean(a, BooleanOp::Union, b).unwrap();
        assert!(status.is_finished());
        assert_eq!(host.polygon_counts(a).unwrap().total(), 36);
        assert_eq!(host.objects().len(), 2);
    }

    #[test]
    fn injected_boolean_failure_reports_cancelled() {
        let mut host = MockHost::new();
        host.fail_boolean_at(2);
        let a = host.create_cylinder("a", &cylinder_spec(2.0, [0.0; 3])).unwrap();
        let b = host.create_cylinder("b", &cylinder_spec(1.0, [0.0; 3])).unwrap();
        assert_eq!(
            host.apply_boolean(a, BooleanOp::Difference, b).unwrap(),
            OperatorStatus::Finished
        );
        assert_eq!(
            host.apply_boolean(a, BooleanOp::Union, b).unwrap(),
            OperatorStatus::Cancelled
        );
        assert_eq!(host.polygon_counts(a).unwrap().total(), 18, "failed union is a no-op");
        assert_eq!(host.boolean_log().len(), 2);
    }

    #[test]
    fn boolean_rejects_curve_tool() {
        let mut host = MockHost::new();
        let a = host.create_cylinder("a", &cylinder_spec(2.0, [0.0; 3])).unwrap();
        let c = host.create_circle_curve("c", 1.0, [0.0; 3]).unwrap();
        assert!(matches!(
            host.apply_boolean(a, BooleanOp::Union, c),
            Err(HostError::WrongKind { .. })
        ));
    }

    #[test]
    fn convert_bakes_curve_deform_onto_circle() {
        let mut host = MockHost::new();
        let curve = host.create_circle_curve("c", 5.0, [0.0; 3]).unwrap();
        let text = host.create_text("t", "ABC", &style(), [0.0; 3]).unwrap();
        host.set_rotation(text, [std::f64::consts::PI, 0.0, 0.0]).unwrap();
        host.add_modifier(
            text,
            Modifier::Remesh {
                octree_depth: 6,
                remove_disconnected: false,
            },
        )
        .unwrap();
        host.add_modifier(
            text,
            Modifier::CurveDeform {
                axis: DeformAxis::NegX,
                target: curve,
            },
        )
        .unwrap();

        host.convert_to_mesh(text).unwrap();
        assert_eq!(host.object_kind(text), Some(ObjectKind::Mesh));
        assert!(host.modifiers(text).is_empty());

        let mesh = host.world_mesh(text).unwrap();
        for v in mesh.vertices.chunks(3) {
            let r = ((v[0] * v[0] + v[1] * v[1]) as f64).sqrt();
            assert!((r - 5.0).abs() <= 0.1 + 1e-5, "vertex off the band: r={}", r);
            assert!(v[2] >= -1e-5 && v[2] <= 0.7 + 1e-5, "glyphs stand upright: z={}", v[2]);
        }
    }

    #[test]
    fn retarget_requires_existing_deform() {
        let mut host = MockHost::new();
        let curve = host.create_circle_curve("c", 1.0, [0.0; 3]).unwrap();
        let text = host.create_text("t", "A", &style(), [0.0; 3]).unwrap();
        assert_eq!(
            host.retarget_deform(text, curve),
            Err(HostError::MissingModifier { handle: text })
        );
    }

    #[test]
    fn delete_purges_orphaned_data() {
        let mut host = MockHost::new();
        let a = host.create_cylinder("a", &cylinder_spec(1.0, [0.0; 3])).unwrap();
        let copy = host.copy_object(a).unwrap();
        host.delete(&[a]).unwrap();
        assert_eq!(host.data_block_count(), 1, "copy still uses the block");
        host.delete(&[copy]).unwrap();
        assert_eq!(host.data_block_count(), 0);
    }

    #[test]
    fn triangulate_leaves_only_triangles() {
        let mut host = MockHost::new();
        let a = host.create_cylinder("a", &cylinder_spec(1.0, [0.0; 3])).unwrap();
        host.triangulate(a).unwrap();
        let counts = host.polygon_counts(a).unwrap();
        assert_eq!(counts.quads + counts.ngons, 0);
        assert_eq!(counts.triangles, 16 * 2 + 2 * 14);
    }

    #[test]
    fn missing_font_is_none() {
        let host = MockHost::with_fonts(["Ubuntu Bold"]);
        assert_eq!(
            host.find_font("Ubuntu Bold"),
            Some(FontRef("Ubuntu Bold".to_string()))
        );
        assert_eq!(host.find_font("Comic"), None);
    }
}
