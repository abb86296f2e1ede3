use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use eyre::{Result, WrapErr};
use restifier_codegen::{Error, ImportSet, Resolution, TypeTable, traverse};
use restifier_core::{File, FileRules, GeneratedFile, WriteResult, to_pascal_case};
use restifier_schema::{Node, Schema};

use crate::{
    emit::{DtoEmitter, ModelEmitter, member},
    files::{GoMod, MainGo, RepositoryGo},
    go_file::GoFile,
    naming::{file_stem, object_type_name, struct_name},
    scan::ImportScanner,
};

/// A file as it would be written, for dry runs
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from the output directory
    pub path: String,
    /// File content, header included
    pub content: String,
}

/// Outcome of one generation run
#[derive(Debug, Default)]
pub struct GenerateSummary {
    /// Paths written this run
    pub written: Vec<String>,
    /// Paths skipped because they already exist
    pub skipped: Vec<String>,
}

impl GenerateSummary {
    fn record(&mut self, path: String, result: WriteResult) {
        match result {
            WriteResult::Written => self.written.push(path),
            WriteResult::Skipped => self.skipped.push(path),
        }
    }

    /// Fold another summary into this one, keeping order.
    pub fn merge(&mut self, other: GenerateSummary) {
        self.written.extend(other.written);
        self.skipped.extend(other.skipped);
    }
}

/// Which per-table artifact is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Artifact {
    Model,
    Dto,
}

impl Artifact {
    fn package(self) -> &'static str {
        match self {
            Artifact::Model => "model",
            Artifact::Dto => "dto",
        }
    }
}

/// Go code generator producing the REST scaffold for a set of tables.
pub struct Generator<'a> {
    schemas: &'a [Schema],
    module: &'a str,
    types: TypeTable,
}

impl<'a> Generator<'a> {
    pub fn new(schemas: &'a [Schema], module: &'a str, types: TypeTable) -> Self {
        Self {
            schemas,
            module,
            types,
        }
    }

    pub fn schemas(&self) -> &[Schema] {
        self.schemas
    }

    /// Render every artifact without touching the filesystem.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        self.check_table_names()?;

        let mut files = Vec::new();
        for schema in self.schemas {
            files.extend(self.preview_table(schema)?);
        }
        for file in self.scaffolding_files(Path::new("")) {
            files.push(preview_of(&file));
        }
        Ok(files)
    }

    /// Render one table's artifacts without writing, for validation runs.
    pub fn preview_table(&self, schema: &Schema) -> Result<Vec<PreviewFile>> {
        Ok(self
            .table_files(Path::new(""), schema)?
            .iter()
            .map(preview_of)
            .collect())
    }

    /// Generate everything, stopping at the first failing table.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateSummary> {
        self.check_table_names()?;

        let mut summary = GenerateSummary::default();
        for schema in self.schemas {
            summary.merge(self.generate_table(schema, output_dir)?);
        }
        summary.merge(self.generate_scaffolding(output_dir)?);
        Ok(summary)
    }

    /// Generate the model and DTO artifacts for one table.
    ///
    /// Both artifacts render before either is persisted, so a failing table
    /// leaves no partial output behind.
    pub fn generate_table(&self, schema: &Schema, output_dir: &Path) -> Result<GenerateSummary> {
        let mut summary = GenerateSummary::default();
        for file in self.table_files(output_dir, schema)? {
            let result = file.write()?;
            summary.record(relative(&file, output_dir), result);
        }
        Ok(summary)
    }

    /// Generate the one-time scaffolding: go.mod, main.go and one repository
    /// stub per table. Existing files are reported as skipped.
    pub fn generate_scaffolding(&self, output_dir: &Path) -> Result<GenerateSummary> {
        let mut summary = GenerateSummary::default();
        for file in self.scaffolding_files(output_dir) {
            let result = file.write()?;
            summary.record(relative(&file, output_dir), result);
        }
        Ok(summary)
    }

    fn table_files(&self, base: &Path, schema: &Schema) -> Result<Vec<File>> {
        self.check_object_names(schema)?;

        let model = self
            .render_table_file(schema, Artifact::Model)
            .wrap_err_with(|| format!("failed to render model for table '{}'", schema.name))?;
        let dto = self
            .render_table_file(schema, Artifact::Dto)
            .wrap_err_with(|| format!("failed to render dto for table '{}'", schema.name))?;

        let stem = file_stem(&schema.name);
        Ok(vec![
            File::with_rules(
                base.join("model").join(format!("{stem}.go")),
                model,
                FileRules::generated(),
            ),
            File::with_rules(
                base.join("dto").join(format!("{stem}.go")),
                dto,
                FileRules::generated(),
            ),
        ])
    }

    fn render_table_file(&self, schema: &Schema, artifact: Artifact) -> Result<String> {
        let mut members = String::new();
        let mut nested = String::new();
        let mut imports = ImportSet::new();

        for column in &schema.columns {
            if artifact == Artifact::Dto && column.hidden {
                continue;
            }

            let context = format!("column '{}'", column.name);
            match self.types.resolve(&column.ty, &context)? {
                Resolution::Scalar(ty) => {
                    member(
                        &mut members,
                        &to_pascal_case(&column.name),
                        &ty.name,
                        "db",
                        &column.name,
                    );
                    if let Some(import) = ty.import {
                        imports.add(import);
                    }
                }
                Resolution::Object => {
                    member(
                        &mut members,
                        &to_pascal_case(&column.name),
                        &object_type_name(&schema.name, &column.name),
                        "json",
                        &column.name,
                    );

                    let node = column.object.as_ref();
                    let declarations = match artifact {
                        Artifact::Model => {
                            traverse(node, &ModelEmitter::new(&schema.name, &self.types))?
                        }
                        Artifact::Dto => {
                            traverse(node, &DtoEmitter::new(&schema.name, &self.types))?
                        }
                    };
                    nested.push_str(&declarations);
                    imports.merge(&traverse(node, &ImportScanner::new(&self.types))?);
                }
            }
        }

        let body = format!(
            "type {} struct {{\n{members}}}\n\n{nested}",
            struct_name(&schema.name)
        );
        Ok(GoFile::new(artifact.package(), imports, body).render())
    }

    /// Reject schema sets where two tables map to the same file stem.
    ///
    /// Distinct raw names can share a stem (`line_item` and `lineItem`
    /// both become `line_item.go`), and the later table would silently
    /// overwrite the earlier one's generated files. [`preview`](Self::preview)
    /// and [`generate`](Self::generate) run this check themselves; callers
    /// driving [`generate_table`](Self::generate_table) directly run it once
    /// up front.
    pub fn check_table_names(&self) -> Result<(), Error> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for schema in self.schemas {
            let stem = file_stem(&schema.name);
            if let Some(first) = seen.insert(stem.clone(), &schema.name) {
                return Err(Error::DuplicateTable {
                    first: first.to_string(),
                    second: schema.name.clone(),
                    stem,
                });
            }
        }
        Ok(())
    }

    /// Reject schemas whose nodes synthesize the same declaration name.
    ///
    /// Hidden nodes count too: the model declares every node.
    fn check_object_names(&self, schema: &Schema) -> Result<(), Error> {
        let mut seen = HashSet::new();
        for column in schema.object_columns() {
            if let Some(root) = &column.object {
                check_node_names(&schema.name, root, &mut seen)?;
            }
        }
        Ok(())
    }

    fn scaffolding(&self) -> Vec<Box<dyn GeneratedFile>> {
        let tables: Vec<String> = self.schemas.iter().map(|s| s.name.clone()).collect();

        let mut files: Vec<Box<dyn GeneratedFile>> = vec![
            Box::new(GoMod::new(self.module)),
            Box::new(MainGo::new(self.module, tables)),
        ];
        for schema in self.schemas {
            files.push(Box::new(RepositoryGo::new(schema.name.clone())));
        }
        files
    }

    fn scaffolding_files(&self, base: &Path) -> Vec<File> {
        self.scaffolding()
            .iter()
            .map(|f| File::with_rules(f.path(base), f.render(), f.rules()))
            .collect()
    }
}

fn check_node_names(table: &str, node: &Node, seen: &mut HashSet<String>) -> Result<(), Error> {
    let type_name = object_type_name(table, &node.name);
    if !seen.insert(type_name.clone()) {
        return Err(Error::DuplicateObjectType {
            type_name,
            table: table.to_string(),
        });
    }
    for child in &node.children {
        check_node_names(table, child, seen)?;
    }
    Ok(())
}

fn preview_of(file: &File) -> PreviewFile {
    PreviewFile {
        path: file.path().display().to_string(),
        content: file.render(),
    }
}

fn relative(file: &File, base: &Path) -> String {
    file.path()
        .strip_prefix(base)
        .unwrap_or(file.path())
        .display()
        .to_string()
}
