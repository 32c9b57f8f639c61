pub mod errors;
pub mod load;
pub mod metadata;
pub mod save;
pub mod stl_export;

pub use errors::{ExportError, LoadError, SaveError};
pub use load::load_job;
pub use metadata::JobMetadata;
pub use save::{save_job, FORMAT_NAME, FORMAT_VERSION};
pub use stl_export::{export_ascii_stl, export_binary_stl, export_object_stl, StlFormat};
