//! HCL serialization backed by `hcl-rs`.

use hcl::Identifier;
use hcl::expr::{Expression, Object, ObjectKey};
use hcl::structure::{Attribute, Block, BlockLabel, Body, Structure};
use tracing::instrument;

use tgscaff_core::{
    application::{ApplicationError, ports::DocumentWriter},
    domain::{self, Document, Node, Value},
    error::ScaffResult,
};

/// Renders document trees as HCL.
///
/// Object keys that are valid identifiers are written bare (`bucket = ...`);
/// anything else is quoted. Raw expressions are parsed as HCL and emitted
/// unquoted.
#[derive(Debug, Clone, Copy, Default)]
pub struct HclWriter;

impl HclWriter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentWriter for HclWriter {
    #[instrument(skip_all)]
    fn serialize(&self, document: &Document) -> ScaffResult<String> {
        let body = convert_body(document.body())?;
        hcl::to_string(&body).map_err(|e| {
            ApplicationError::RenderingFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn convert_body(body: &domain::Body) -> Result<Body, ApplicationError> {
    body.nodes()
        .iter()
        .map(convert_node)
        .collect::<Result<Vec<Structure>, _>>()
        .map(Body::from_iter)
}

fn convert_node(node: &Node) -> Result<Structure, ApplicationError> {
    match node {
        Node::Attribute(attr) => Ok(Structure::Attribute(Attribute {
            key: identifier(&attr.name)?,
            expr: convert_value(&attr.value)?,
        })),
        Node::Block(block) => Ok(Structure::Block(Block {
            identifier: identifier(&block.kind)?,
            labels: block
                .labels
                .iter()
                .map(|l| BlockLabel::String(l.clone()))
                .collect(),
            body: convert_body(&block.body)?,
        })),
    }
}

fn convert_value(value: &Value) -> Result<Expression, ApplicationError> {
    Ok(match value {
        Value::String(s) => Expression::String(s.clone()),
        Value::Bool(b) => Expression::Bool(*b),
        Value::Object(entries) => Expression::Object(
            entries
                .iter()
                .map(|(k, v)| Ok((object_key(k), convert_value(v)?)))
                .collect::<Result<Object<ObjectKey, Expression>, ApplicationError>>()?,
        ),
        Value::Raw(raw) => raw_expression(raw.as_str())?,
    })
}

/// Parse a bare expression such as `find_in_parent_folders()` by wrapping it
/// in a throwaway attribute. Exactly one attribute must come back.
fn raw_expression(raw: &str) -> Result<Expression, ApplicationError> {
    let invalid = |reason: String| ApplicationError::RenderingFailed {
        reason: format!("'{raw}' is not a valid HCL expression: {reason}"),
    };

    let body = hcl::parse(&format!("raw = {raw}\n")).map_err(|e| invalid(e.to_string()))?;
    let mut structures = body.into_iter();
    match (structures.next(), structures.next()) {
        (Some(Structure::Attribute(attr)), None) => Ok(attr.expr),
        _ => Err(invalid("expected a single expression".into())),
    }
}

fn identifier(name: &str) -> Result<Identifier, ApplicationError> {
    Identifier::new(name).map_err(|e| ApplicationError::RenderingFailed {
        reason: format!("'{name}' is not a valid HCL identifier: {e}"),
    })
}

fn object_key(key: &str) -> ObjectKey {
    match Identifier::new(key) {
        Ok(ident) => ObjectKey::Identifier(ident),
        Err(_) => ObjectKey::Expression(Expression::String(key.to_string())),
    }
}
