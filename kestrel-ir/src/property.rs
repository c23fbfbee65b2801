//! Schema property descriptors.

use serde::{Deserialize, Serialize};

/// A single field or type from the source API definition.
///
/// Arrays and maps carry the descriptor of their element type, so nesting
/// has no depth limit. Map keys are always strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SchemaProperty {
    /// A schema primitive keyword such as `integer` or `date-time`
    Primitive {
        #[serde(rename = "type")]
        schema_type: String,
    },
    /// An array of `items`
    Array { items: Box<SchemaProperty> },
    /// A string-keyed map of `values`
    Map { values: Box<SchemaProperty> },
    /// A reference to another named model (`Pet` or `#/definitions/Pet`)
    Reference {
        #[serde(rename = "$ref")]
        reference: String,
    },
}

impl SchemaProperty {
    pub fn primitive(schema_type: impl Into<String>) -> Self {
        SchemaProperty::Primitive {
            schema_type: schema_type.into(),
        }
    }

    pub fn array(items: SchemaProperty) -> Self {
        SchemaProperty::Array {
            items: Box::new(items),
        }
    }

    pub fn map(values: SchemaProperty) -> Self {
        SchemaProperty::Map {
            values: Box::new(values),
        }
    }

    pub fn reference(reference: impl Into<String>) -> Self {
        SchemaProperty::Reference {
            reference: reference.into(),
        }
    }

    /// The schema-level type keyword of this property.
    ///
    /// Containers report `array` and `map`, references report the simple
    /// name of the referenced model.
    pub fn schema_type(&self) -> &str {
        match self {
            SchemaProperty::Primitive { schema_type } => schema_type,
            SchemaProperty::Array { .. } => "array",
            SchemaProperty::Map { .. } => "map",
            SchemaProperty::Reference { .. } => self.simple_ref().unwrap_or_default(),
        }
    }

    /// The last path segment of a reference (`#/definitions/Pet` -> `Pet`).
    pub fn simple_ref(&self) -> Option<&str> {
        match self {
            SchemaProperty::Reference { reference } => {
                Some(reference.rsplit('/').next().unwrap_or(reference))
            }
            _ => None,
        }
    }
}
