//! Paths operation - output folder layout.

use kestrel_codegen_kotlin::KotlinCodegen;

use crate::reports::PathsReport;

/// Collect the folders generated files are written to.
pub fn paths(codegen: &KotlinCodegen) -> PathsReport {
    PathsReport {
        api: codegen.api_file_folder(),
        model: codegen.model_file_folder(),
        api_docs: codegen.api_doc_file_folder(),
        model_docs: codegen.model_doc_file_folder(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_default_layout() {
        let report = paths(&KotlinCodegen::default());
        assert_eq!(
            report.model,
            PathBuf::from("generated-code/kotlin/src/main/kotlin/io/swagger/client/models")
        );
        assert_eq!(report.api_docs, PathBuf::from("generated-code/kotlin/docs"));
    }
}
