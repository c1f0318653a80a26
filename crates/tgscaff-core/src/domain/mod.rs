// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for tgscaff.
//!
//! This module contains pure scaffolding logic with ZERO I/O.
//! Filesystem access and HCL serialization are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Minimal crates**: std, thiserror, serde derives and tracing spans
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod builder;
pub mod entities;
pub mod error;
pub mod planner;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use builder::DocumentBuilder;
pub use entities::{
    document::{Attribute, Block, Body, Document, Node, RawExpression, Value},
    environment::{
        AppInputs, BackendConfig, DEFAULT_INSTANCE_CLASS, EnvironmentSpec, EnvironmentSpecBuilder,
    },
    task::{
        APP_FILE_NAME, DocumentShape, LOCALS_FILE_NAME, LocalsLevel, ROOT_FILE_NAME, ScaffoldPlan,
        ScaffoldTask, ShapeKind,
    },
};
pub use error::{DomainError, ErrorCategory};
pub use planner::ScaffoldPlanner;
pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    // ========================================================================
    // Environment Validation Tests
    // ========================================================================

    #[test]
    fn valid_environment_builds() {
        let spec = EnvironmentSpec::builder("infra")
            .parent_path("envs/prod")
            .app("api")
            .build()
            .unwrap();

        assert_eq!(spec.base_path(), PathBuf::from("infra"));
        assert_eq!(spec.app_inputs().instance_class, DEFAULT_INSTANCE_CLASS);
        assert!(DomainValidator::validate_environment(&spec).is_ok());
    }

    #[test]
    fn empty_base_path_is_rejected() {
        let err = EnvironmentSpec::builder("").build().unwrap_err();
        assert_eq!(err, DomainError::EmptyPath { field: "basePath" });
    }

    #[test]
    fn empty_parent_path_is_rejected() {
        let err = EnvironmentSpec::builder("infra")
            .parent_path("")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::EmptyPath { field: "parentPaths" }));
    }

    #[test]
    #[cfg(unix)]
    fn absolute_parent_path_is_rejected() {
        let err = EnvironmentSpec::builder("infra")
            .parent_path("/etc/prod")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::AbsolutePathNotAllowed { .. }));
    }

    #[test]
    fn nested_app_name_is_rejected() {
        for name in ["svc/api", "..", "."] {
            let err = EnvironmentSpec::builder("infra")
                .parent_path("envs/prod")
                .app(name)
                .build()
                .unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidAppName { .. }),
                "expected rejection for {name}, got {err:?}"
            );
        }
    }

    #[test]
    fn backend_values_are_not_validated() {
        let spec = EnvironmentSpec::builder("infra")
            .backend(BackendConfig {
                bucket_type: "definitely-not-a-backend".into(),
                ..BackendConfig::default()
            })
            .build();
        assert!(spec.is_ok());
    }

    // ========================================================================
    // Plan Validation Tests
    // ========================================================================

    #[test]
    fn planned_output_passes_plan_validation() {
        let spec = EnvironmentSpec::builder("infra")
            .parent_paths(["envs/prod", "envs/dev"])
            .apps(["api", "web"])
            .build()
            .unwrap();
        let plan = ScaffoldPlanner::plan(&spec);
        assert!(DomainValidator::validate_plan(&plan).is_ok());
    }

    #[test]
    fn plan_without_root_is_invalid() {
        let mut plan = ScaffoldPlan::new("infra");
        plan.push(ScaffoldTask::new(
            "envs/prod",
            DocumentShape::EnvironmentLocals(LocalsLevel::Environment),
        ));
        assert!(DomainValidator::validate_plan(&plan).is_err());
    }

    #[test]
    fn suggestions_are_never_empty() {
        let errors = [
            DomainError::InvalidEnvironment("x".into()),
            DomainError::EmptyPath { field: "basePath" },
            DomainError::AbsolutePathNotAllowed { path: "/x".into() },
            DomainError::InvalidAppName {
                name: "a/b".into(),
                reason: "nested".into(),
            },
        ];
        for err in errors {
            assert!(!err.suggestions().is_empty(), "{err:?}");
            assert_eq!(err.category(), ErrorCategory::Validation);
        }
    }
}
