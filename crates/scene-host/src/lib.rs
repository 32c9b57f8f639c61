pub mod mock_host;
pub mod primitives;
pub mod tessellation;
pub mod traits;
pub mod types;

pub use mock_host::MockHost;
pub use tessellation::PolyMesh;
pub use traits::*;
pub use types::*;
