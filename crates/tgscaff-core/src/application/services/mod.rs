//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold an environment".

pub mod materializer;
pub mod scaffold_service;

pub use materializer::Materializer;
pub use scaffold_service::{ScaffoldReport, ScaffoldService, WrittenFile};
