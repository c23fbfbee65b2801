//! Schema operation descriptors.

use serde::{Deserialize, Serialize};

/// An HTTP operation from the source API definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SchemaOperation {
    /// Request path, e.g. `/pets/{petId}`
    pub path: String,
    /// HTTP method as written in the schema, e.g. `get`
    pub method: String,
}

impl SchemaOperation {
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
        }
    }
}

