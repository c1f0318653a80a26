//! Ordered block/attribute tree handed to a [`DocumentWriter`].
//!
//! The tree is serializer-agnostic. Insertion order is preserved everywhere,
//! including object keys, so two identical builds always serialize to the
//! same bytes.
//!
//! [`DocumentWriter`]: crate::application::ports::DocumentWriter

use std::fmt;

/// An expression emitted verbatim, never quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExpression(String);

impl RawExpression {
    pub fn new(expr: impl Into<String>) -> Self {
        Self(expr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Typed attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Bool(bool),
    /// Ordered key/value pairs.
    Object(Vec<(String, Value)>),
    Raw(RawExpression),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    pub fn raw(expr: impl Into<String>) -> Self {
        Self::Raw(RawExpression::new(expr))
    }

    pub fn object<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Look up a key in an object value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<RawExpression> for Value {
    fn from(expr: RawExpression) -> Self {
        Self::Raw(expr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Value,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named, optionally labelled block with a nested body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: String,
    pub labels: Vec<String>,
    pub body: Body,
}

impl Block {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            labels: Vec::new(),
            body: Body::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.push(Node::Attribute(Attribute::new(name, value)));
        self
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.body.push(Node::Block(block));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Attribute(Attribute),
    Block(Block),
}

/// Ordered sequence of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    nodes: Vec<Node>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.nodes.iter().find_map(|n| match n {
            Node::Attribute(a) if a.name == name => Some(a),
            _ => None,
        })
    }

    pub fn block(&self, kind: &str) -> Option<&Block> {
        self.nodes.iter().find_map(|n| match n {
            Node::Block(b) if b.kind == kind => Some(b),
            _ => None,
        })
    }
}

/// A complete generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    body: Body,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.body.push(Node::Block(block));
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.push(Node::Attribute(Attribute::new(name, value)));
        self
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}
