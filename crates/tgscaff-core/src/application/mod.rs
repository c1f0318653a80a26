//! Application layer for tgscaff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, Materializer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! planning or document rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    Materializer, ScaffoldReport, ScaffoldService,
    WrittenFile, // DTO for report entries
};

// Re-export port traits (for adapter implementation)
pub use ports::{DocumentWriter, Filesystem};

pub use error::ApplicationError;
