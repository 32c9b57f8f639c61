use crate::types::*;

/// Scene mutation surface of the host authoring environment.
/// Implemented by MockHost (deterministic in-memory scene) and by adapters
/// around a real authoring tool.
///
/// All calls are strictly sequential; each one observes the committed result
/// of the previous call.
pub trait SceneHost {
    /// Add a closed cylinder mesh to the scene.
    fn create_cylinder(&mut self, name: &str, spec: &CylinderSpec)
        -> Result<ObjectHandle, HostError>;

    /// Add a closed circular curve in the XY plane.
    fn create_circle_curve(
        &mut self,
        name: &str,
        radius: f64,
        location: [f64; 3],
    ) -> Result<ObjectHandle, HostError>;

    /// Add a text object. The host turns the body into glyph outlines.
    fn create_text(
        &mut self,
        name: &str,
        body: &str,
        style: &TextStyle,
        location: [f64; 3],
    ) -> Result<ObjectHandle, HostError>;

    /// Look up a font asset by name.
    fn find_font(&self, name: &str) -> Option<FontRef>;

    /// Replace the body string of a text object.
    fn set_text_body(&mut self, object: ObjectHandle, body: &str) -> Result<(), HostError>;

    fn set_location(&mut self, object: ObjectHandle, location: [f64; 3])
        -> Result<(), HostError>;

    /// Set XYZ Euler rotation in radians.
    fn set_rotation(&mut self, object: ObjectHandle, rotation: [f64; 3])
        -> Result<(), HostError>;

    fn set_name(&mut self, object: ObjectHandle, name: &str) -> Result<(), HostError>;

    /// Append a modifier to the object's stack.
    fn add_modifier(&mut self, object: ObjectHandle, modifier: Modifier) -> Result<(), HostError>;

    /// Point the object's curve deform modifier at another curve.
    fn retarget_deform(
        &mut self,
        object: ObjectHandle,
        curve: ObjectHandle,
    ) -> Result<(), HostError>;

    /// Apply a boolean destructively to `target`'s data. `tool` stays in the scene.
    fn apply_boolean(
        &mut self,
        target: ObjectHandle,
        op: BooleanOp,
        tool: ObjectHandle,
    ) -> Result<OperatorStatus, HostError>;

    /// Bake the modifier stack and turn the object into a plain mesh.
    fn convert_to_mesh(&mut self, object: ObjectHandle) -> Result<(), HostError>;

    /// Join meshes into the first one. The others are removed from the scene.
    fn join(&mut self, objects: &[ObjectHandle]) -> Result<ObjectHandle, HostError>;

    fn delete(&mut self, objects: &[ObjectHandle]) -> Result<(), HostError>;

    /// Shallow copy: a new, unlinked object sharing the source's data block.
    fn copy_object(&mut self, object: ObjectHandle) -> Result<ObjectHandle, HostError>;

    /// Give the object its own copy of its data block.
    fn make_data_single_user(&mut self, object: ObjectHandle) -> Result<(), HostError>;

    /// Register a copied object with the scene.
    fn link(&mut self, object: ObjectHandle) -> Result<(), HostError>;

    /// Split quads on their shorter diagonal and fan n-gons.
    fn triangulate(&mut self, object: ObjectHandle) -> Result<(), HostError>;
}

/// Read-only queries on the host scene.
pub trait SceneIntrospect {
    /// All objects linked into the scene, oldest first.
    fn objects(&self) -> Vec<ObjectHandle>;

    fn object_kind(&self, object: ObjectHandle) -> Option<ObjectKind>;

    fn object_name(&self, object: ObjectHandle) -> Option<String>;

    fn text_body(&self, object: ObjectHandle) -> Option<String>;

    fn location(&self, object: ObjectHandle) -> Option<[f64; 3]>;

    fn modifiers(&self, object: ObjectHandle) -> Vec<Modifier>;

    /// Polygon census of a mesh object.
    fn polygon_counts(&self, object: ObjectHandle) -> Option<PolygonCounts>;

    /// Whether two objects use the same data block.
    fn shares_data(&self, a: ObjectHandle, b: ObjectHandle) -> bool;

    /// Evaluated, triangulated geometry in world space.
    fn world_mesh(&self, object: ObjectHandle) -> Option<RenderMesh>;
}
