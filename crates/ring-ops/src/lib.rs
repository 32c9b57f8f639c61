pub mod host_ext;
pub mod instance;
pub mod layout;
pub mod prototype;
pub mod ring;
pub mod standalone;
pub mod types;

pub use host_ext::HostBundle;
pub use instance::InstancedRing;
pub use layout::{arrange, Arrangement};
pub use prototype::{BandParts, PrototypeParts, RingDimensions, RingPrototype};
pub use ring::{Footprint, Ring};
pub use standalone::StandaloneRing;
pub use types::*;
