//! Type command report data structures.

use super::output::{Output, Report};

/// Resolution of a single schema property.
#[derive(Debug)]
pub struct TypeReport {
    /// Kotlin type declaration.
    pub declaration: String,
    /// Type used to instantiate a default value, if any.
    pub instantiation: Option<String>,
    /// Imports required by the declaration.
    pub imports: Vec<String>,
}

impl Report for TypeReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("declaration", &self.declaration);
        out.key_value(
            "instantiation",
            self.instantiation.as_deref().unwrap_or("-"),
        );

        if !self.imports.is_empty() {
            out.section("imports");
            for import in &self.imports {
                out.list_item(import);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let report = TypeReport {
            declaration: "Array<Pet>".to_string(),
            instantiation: Some("Array<Pet>".to_string()),
            imports: vec!["com.example.models.Pet".to_string()],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "declaration: Array<Pet>",
                "instantiation: Array<Pet>",
                "imports:",
                "  - com.example.models.Pet",
            ]
        );
    }
}
