//! tgscaff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for tgscaff, a
//! generator that lays out a Terragrunt directory tree from one declarative
//! environment description.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           tgscaff-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ScaffoldService, Materializer)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Writer)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    tgscaff-adapters (Infrastructure)    │
//! │  (LocalFilesystem, HclWriter, Loader)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (EnvironmentSpec, Planner, Builder)    │
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tgscaff_core::prelude::*;
//!
//! // 1. Describe the environment
//! let spec = EnvironmentSpec::builder("infra")
//!     .parent_paths(["envs/prod", "envs/dev"])
//!     .app("api")
//!     .build()?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, writer);
//! let report = service.scaffold(&spec, ".")?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Materializer, ScaffoldReport, ScaffoldService, WrittenFile,
        ports::{DocumentWriter, Filesystem},
    };
    pub use crate::domain::{
        AppInputs, BackendConfig, Document, DocumentBuilder, DocumentShape, EnvironmentSpec,
        ScaffoldPlan, ScaffoldPlanner, ScaffoldTask, ShapeKind,
    };
    pub use crate::error::{ScaffError, ScaffResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
