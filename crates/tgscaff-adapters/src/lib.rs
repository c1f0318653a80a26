//! Infrastructure adapters for tgscaff.
//!
//! This crate implements the ports defined in `tgscaff-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod environment_loader;
pub mod filesystem;
pub mod writer;

// Re-export commonly used adapters
pub use environment_loader::EnvironmentLoader;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use writer::HclWriter;
