pub mod document;
pub mod environment;
pub mod task;

pub use crate::domain::DomainError;
pub use document::{Attribute, Block, Body, Document, Node, RawExpression, Value};
pub use environment::{AppInputs, BackendConfig, EnvironmentSpec, EnvironmentSpecBuilder};
pub use task::{DocumentShape, LocalsLevel, ScaffoldPlan, ScaffoldTask, ShapeKind};
