use crate::domain::{
    entities::{EnvironmentSpec, ScaffoldPlan, ShapeKind},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_environment(spec: &EnvironmentSpec) -> Result<(), DomainError> {
        spec.validate()
    }

    /// A plan always starts with exactly one root task at the plan root.
    pub fn validate_plan(plan: &ScaffoldPlan) -> Result<(), DomainError> {
        match plan.tasks().first() {
            Some(first)
                if first.kind() == ShapeKind::RootBackend
                    && first.target_dir.as_os_str().is_empty()
                    && plan.count(ShapeKind::RootBackend) == 1 =>
            {
                Ok(())
            }
            _ => Err(DomainError::InvalidEnvironment(
                "plan must begin with a single root backend document".into(),
            )),
        }
    }
}
