//! Test harness for ring ruler batches.
//!
//! Scripts whole batches against the mock host, checks the finished mesh
//! and the scene with oracles, and prints readable summaries.
//!
//! # Key Components
//!
//! - [`BatchBuilder`]: fluent setup and execution of one batch
//! - [`oracle`]: verification functions returning pass/fail verdicts
//! - [`report`]: plain-text batch summaries
//! - [`helpers`]: error type and mesh math
//! - [`assertions`]: assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod oracle;
pub mod report;
pub mod workflow;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
pub use report::BatchSummary;
pub use workflow::{BatchBuilder, BatchOutcome};
