//! Construction of the three generated document shapes.

use crate::domain::entities::{
    AppInputs, BackendConfig, Block, Document, DocumentShape, LocalsLevel, Value,
};

pub const REMOTE_STATE_BLOCK: &str = "remote_state";
pub const LOCALS_BLOCK: &str = "locals";
pub const INCLUDE_BLOCK: &str = "include";
pub const INCLUDE_LABEL: &str = "root";
/// Terragrunt function that locates the root document from any app directory.
pub const FIND_IN_PARENT_FOLDERS: &str = "find_in_parent_folders()";

pub struct DocumentBuilder;

impl DocumentBuilder {
    /// Build the document for a shape. Pure and deterministic: attribute and
    /// object-key order is fixed.
    pub fn build(shape: &DocumentShape) -> Document {
        match shape {
            DocumentShape::RootBackend(backend) => Self::root_backend(backend),
            DocumentShape::EnvironmentLocals(level) => Self::environment_locals(*level),
            DocumentShape::AppInclude(inputs) => Self::app_include(inputs),
        }
    }

    /// `remote_state { backend = ..., config = { ... } }`
    ///
    /// Backend values pass through untouched, empty strings included.
    pub fn root_backend(backend: &BackendConfig) -> Document {
        let config = Value::object([
            ("bucket", Value::string(&backend.bucket_name)),
            ("key", Value::string(&backend.bucket_key)),
            ("region", Value::string(&backend.region)),
            ("encrypt", Value::Bool(backend.encryption)),
            ("dynamodb_table", Value::string(&backend.lock_table_name)),
        ]);

        Document::new().with_block(
            Block::new(REMOTE_STATE_BLOCK)
                .with_attribute("backend", backend.bucket_type.as_str())
                .with_attribute("config", config),
        )
    }

    /// Empty `locals {}` block. Both levels share this body for now.
    pub fn environment_locals(level: LocalsLevel) -> Document {
        match level {
            LocalsLevel::Environment | LocalsLevel::Parent => {
                Document::new().with_block(Block::new(LOCALS_BLOCK))
            }
        }
    }

    /// `include "root" { path = find_in_parent_folders() }` followed by a
    /// top-level `inputs` object.
    pub fn app_include(inputs: &AppInputs) -> Document {
        Document::new()
            .with_block(
                Block::new(INCLUDE_BLOCK)
                    .with_label(INCLUDE_LABEL)
                    .with_attribute("path", Value::raw(FIND_IN_PARENT_FOLDERS)),
            )
            .with_attribute(
                "inputs",
                Value::object([("instance_class", Value::string(&inputs.instance_class))]),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Node, RawExpression};

    fn backend() -> BackendConfig {
        BackendConfig {
            bucket_type: "s3".into(),
            bucket_name: "b".into(),
            bucket_key: "k".into(),
            region: "us-east-1".into(),
            encryption: true,
            lock_table_name: "locks".into(),
        }
    }

    #[test]
    fn root_backend_passes_values_through() {
        let doc = DocumentBuilder::root_backend(&backend());
        let block = doc.body().block(REMOTE_STATE_BLOCK).unwrap();

        assert_eq!(
            block.body.attribute("backend").unwrap().value,
            Value::string("s3")
        );

        let config = &block.body.attribute("config").unwrap().value;
        assert_eq!(config.get("bucket"), Some(&Value::string("b")));
        assert_eq!(config.get("key"), Some(&Value::string("k")));
        assert_eq!(config.get("region"), Some(&Value::string("us-east-1")));
        assert_eq!(config.get("encrypt"), Some(&Value::Bool(true)));
        assert_eq!(config.get("dynamodb_table"), Some(&Value::string("locks")));
    }

    #[test]
    fn root_backend_config_key_order_is_fixed() {
        let doc = DocumentBuilder::root_backend(&backend());
        let config = &doc
            .body()
            .block(REMOTE_STATE_BLOCK)
            .unwrap()
            .body
            .attribute("config")
            .unwrap()
            .value;

        let Value::Object(entries) = config else {
            panic!("config should be an object, got {config:?}");
        };
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["bucket", "key", "region", "encrypt", "dynamodb_table"]);
    }

    #[test]
    fn root_backend_keeps_empty_strings() {
        let doc = DocumentBuilder::root_backend(&BackendConfig::default());
        let config = &doc
            .body()
            .block(REMOTE_STATE_BLOCK)
            .unwrap()
            .body
            .attribute("config")
            .unwrap()
            .value;

        assert_eq!(config.get("bucket"), Some(&Value::string("")));
        assert_eq!(config.get("encrypt"), Some(&Value::Bool(false)));
    }

    #[test]
    fn locals_is_a_single_empty_block() {
        for level in [LocalsLevel::Environment, LocalsLevel::Parent] {
            let doc = DocumentBuilder::environment_locals(level);
            assert_eq!(doc.body().nodes().len(), 1);
            assert!(doc.body().block(LOCALS_BLOCK).unwrap().body.is_empty());
        }
    }

    #[test]
    fn app_include_uses_raw_expression() {
        let doc = DocumentBuilder::app_include(&AppInputs::default());
        let include = doc.body().block(INCLUDE_BLOCK).unwrap();

        assert_eq!(include.labels, vec![INCLUDE_LABEL.to_string()]);
        assert_eq!(
            include.body.attribute("path").unwrap().value,
            Value::Raw(RawExpression::new("find_in_parent_folders()"))
        );
    }

    #[test]
    fn app_include_inputs_follow_the_block() {
        let doc = DocumentBuilder::app_include(&AppInputs::new("db.r5.large"));
        let nodes = doc.body().nodes();

        assert!(matches!(nodes[0], Node::Block(_)));
        let Node::Attribute(inputs) = &nodes[1] else {
            panic!("expected inputs attribute, got {:?}", nodes[1]);
        };
        assert_eq!(inputs.name, "inputs");
        assert_eq!(
            inputs.value.get("instance_class"),
            Some(&Value::string("db.r5.large"))
        );
    }

    #[test]
    fn build_is_deterministic() {
        let shapes = [
            DocumentShape::RootBackend(backend()),
            DocumentShape::EnvironmentLocals(LocalsLevel::Parent),
            DocumentShape::AppInclude(AppInputs::default()),
        ];
        for shape in &shapes {
            assert_eq!(DocumentBuilder::build(shape), DocumentBuilder::build(shape));
        }
    }
}
