use serde::{Deserialize, Serialize};

/// Opaque handle to an object in the host scene.
/// NEVER persisted. Valid only for the current host session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(pub(crate) u64);

impl ObjectHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What kind of data an object carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Mesh,
    Curve,
    Text,
}

/// Boolean set operation applied destructively to a target mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanOp {
    Union,
    Difference,
}

/// Completion status reported by a host operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatorStatus {
    Finished,
    Cancelled,
}

impl OperatorStatus {
    pub fn is_finished(self) -> bool {
        self == OperatorStatus::Finished
    }
}

/// Object-space axis that a curve deform maps onto the curve's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeformAxis {
    PosX,
    NegX,
    PosY,
    NegY,
}

/// A non-destructive modifier on a mesh or text object.
/// Baked into the data by [`crate::SceneHost::convert_to_mesh`].
#[derive(Debug, Clone, PartialEq)]
pub enum Modifier {
    /// Bend the object along a curve object.
    CurveDeform {
        axis: DeformAxis,
        target: ObjectHandle,
    },
    /// Densify geometry so later deformation stays smooth.
    Remesh {
        octree_depth: u8,
        remove_disconnected: bool,
    },
}

/// Parameters for a cylinder primitive. Axis is +Z, centred on `location`.
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderSpec {
    pub radius: f64,
    pub depth: f64,
    pub vertices: u32,
    pub location: [f64; 3],
}

/// Reference to a font asset known to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontRef(pub String);

/// Extrusion, bevel and sizing of a text object.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Half-thickness of the extruded glyphs.
    pub extrude: f64,
    pub bevel_depth: f64,
    pub bevel_resolution: u32,
    pub font_size: f64,
    pub resolution_u: u32,
    /// `None` keeps the host default font.
    pub font: Option<FontRef>,
}

/// Polygon census of a mesh object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolygonCounts {
    pub triangles: usize,
    pub quads: usize,
    pub ngons: usize,
}

impl PolygonCounts {
    pub fn total(&self) -> usize {
        self.triangles + self.quads + self.ngons
    }
}

/// Errors from host operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    #[error("object not found: {handle}")]
    ObjectNotFound { handle: ObjectHandle },

    #[error("object {handle} is a {found:?}, expected {expected:?}")]
    WrongKind {
        handle: ObjectHandle,
        expected: ObjectKind,
        found: ObjectKind,
    },

    #[error("object {handle} has no curve deform modifier")]
    MissingModifier { handle: ObjectHandle },

    #[error("invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    #[error("join needs at least one object")]
    EmptyJoin,

    #[error("operation not supported: {operation}")]
    NotSupported { operation: String },
}

/// Triangle mesh in world space, ready for export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderMesh {
    /// Flat array of vertex positions [x0, y0, z0, x1, y1, z1, ...].
    pub vertices: Vec<f32>,
    /// Flat array of vertex normals [nx0, ny0, nz0, nx1, ny1, nz1, ...].
    pub normals: Vec<f32>,
    /// Triangle indices into the vertex array.
    pub indices: Vec<u32>,
}

impl RenderMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }
}
