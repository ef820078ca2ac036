//! Documents held by the store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::options::Filter;

/// A document as handed in by the caller.
///
/// The store never generates identifiers; `id` must be non-empty before a
/// document is accepted. Serialized field names follow the JSON shape
/// (`type`, `toolCalls`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique identifier.
    pub id: String,

    /// Free-form text; this is what gets embedded.
    pub content: String,

    /// Type tag.
    #[serde(rename = "type")]
    pub doc_type: String,

    /// Open-ended attributes.
    #[serde(default)]
    pub data: Map<String, Value>,

    /// Generation details for AI-produced documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,

    /// Whether the document was synthesized rather than collected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthetic: Option<bool>,

    /// Tool invocations recorded while producing the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

/// Model details attached to a generated document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// A recorded tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,

    #[serde(default)]
    pub arguments: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

/// A top-level field as seen by a filter.
enum Field<'a> {
    Text(&'a str),
    Flag(bool),
    /// Objects and arrays; these never equal a filter value.
    Compound,
}

impl Document {
    /// Create a document with an empty attribute map.
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        doc_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            doc_type: doc_type.into(),
            data: Map::new(),
            metadata: None,
            synthetic: None,
            tool_calls: None,
        }
    }

    /// Set one attribute.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Attach generation metadata.
    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Mark the document as synthetic (or explicitly not).
    pub fn with_synthetic(mut self, synthetic: bool) -> Self {
        self.synthetic = Some(synthetic);
        self
    }

    /// Record a tool invocation.
    pub fn with_tool_call(mut self, call: ToolCall) -> Self {
        self.tool_calls.get_or_insert_with(Vec::new).push(call);
        self
    }

    fn field(&self, name: &str) -> Option<Field<'_>> {
        match name {
            "id" => Some(Field::Text(&self.id)),
            "content" => Some(Field::Text(&self.content)),
            "type" => Some(Field::Text(&self.doc_type)),
            "synthetic" => self.synthetic.map(Field::Flag),
            "data" => Some(Field::Compound),
            "metadata" => self.metadata.as_ref().map(|_| Field::Compound),
            "toolCalls" => self.tool_calls.as_ref().map(|_| Field::Compound),
            _ => None,
        }
    }

    /// Whether every pair in `filter` equals the same-named top-level field.
    ///
    /// Missing fields fail. Compound fields (`data`, `metadata`, `toolCalls`)
    /// never match because equality is strict, not structural.
    pub fn matches_fields(&self, filter: &Filter) -> bool {
        filter.iter().all(|(key, expected)| match self.field(key) {
            Some(Field::Text(actual)) => expected.as_str() == Some(actual),
            Some(Field::Flag(actual)) => expected.as_bool() == Some(actual),
            Some(Field::Compound) | None => false,
        })
    }

    /// Whether every pair in `filter` equals the same-named attribute in
    /// [`Document::data`], under the same strict rules as
    /// [`Document::matches_fields`].
    pub fn matches_attributes(&self, filter: &Filter) -> bool {
        filter.iter().all(|(key, expected)| {
            self.data
                .get(key)
                .is_some_and(|actual| strict_equals(actual, expected))
        })
    }
}

/// Scalar equality; objects and arrays are never equal to anything.
fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => false,
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}
