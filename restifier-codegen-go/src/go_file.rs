//! Assembly of one Go source file from its sections.

use restifier_codegen::ImportSet;

/// One Go source file: package clause, import block, declarations.
///
/// The import block renders sorted and only when non-empty, so files
/// without dependencies never carry an empty `import ()` stanza.
#[derive(Debug)]
pub struct GoFile {
    package: String,
    imports: ImportSet,
    body: String,
}

impl GoFile {
    pub fn new(package: impl Into<String>, imports: ImportSet, body: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports,
            body: body.into(),
        }
    }

    /// Render the complete file with a single trailing newline.
    pub fn render(&self) -> String {
        let mut sections = vec![format!("package {}", self.package)];

        if !self.imports.is_empty() {
            let block = self
                .imports
                .sorted()
                .iter()
                .map(|path| format!("\t\"{path}\""))
                .collect::<Vec<_>>()
                .join("\n");
            sections.push(format!("import (\n{block}\n)"));
        }

        let body = self.body.trim_end();
        if !body.is_empty() {
            sections.push(body.to_string());
        }

        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }
}
