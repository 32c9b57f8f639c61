use serde::{Deserialize, Serialize};

/// How a geometry part takes part in the final boolean merge.
///
/// This is the contract between a ring and the assembly pipeline: the
/// pipeline only ever sees parts through these three buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PartRole {
    /// The solid that every other part is merged into.
    Base,
    /// Removed from the base with a boolean difference (e.g. the bore).
    Subtract,
    /// Added to the base with a boolean union (e.g. engraved text).
    Add,
}

/// Which ring implementation a batch is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RingVariant {
    /// All rings clone one baked prototype. The bore is cut once.
    #[default]
    Instanced,
    /// Every ring builds its own bore, body, curve and text.
    Standalone,
}

/// Where the two-digit year goes on the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YearPlacement {
    /// Upright on its own smaller band, just clockwise of the main label.
    #[default]
    Band,
    /// Inside the main label, between size and serial.
    Inline,
}
