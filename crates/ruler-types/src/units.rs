//! Physical constants for ring geometry, all in millimetres.

/// Radial wall thickness of every ring.
pub const WALL_THICKNESS_MM: f64 = 2.0;

/// A size-`n` ring has a bore of `n - BORE_ALLOWANCE_MM` millimetres.
pub const BORE_ALLOWANCE_MM: f64 = 1.0;

/// Depth of the bevel applied to engraved text.
pub const BEVEL_DEPTH_MM: f64 = 0.2;

/// Vertex count of the ring cylinders.
pub const RING_RESOLUTION: u32 = 96;

/// Bevel segment count for engraved text.
pub const BEVEL_RESOLUTION: u32 = 1;

/// Curve resolution of engraved text.
pub const TEXT_RESOLUTION: u32 = 24;

/// Octree depth of the remesh that densifies text before bending.
pub const REMESH_OCTREE_DEPTH: u8 = 8;

/// Smallest and largest ring size the form accepts.
pub const RING_SIZE_RANGE: std::ops::RangeInclusive<u32> = 9..=20;

/// Largest serial number the form accepts.
pub const MAX_SERIAL: u32 = 99_999;

/// Largest zero-fill width for serial numbers.
pub const MAX_ZERO_FILL: usize = 6;

/// Largest print bed edge in millimetres.
pub const MAX_BED_MM: f64 = 999.0;
