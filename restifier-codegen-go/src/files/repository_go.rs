use std::path::{Path, PathBuf};

use restifier_codegen::ImportSet;
use restifier_core::{FileRules, GeneratedFile};

use crate::go_file::GoFile;
use crate::naming::{file_stem, repository_name};

/// A per-table repository stub holding the database handle (user-editable)
pub struct RepositoryGo {
    pub table: String,
}

impl RepositoryGo {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl GeneratedFile for RepositoryGo {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("repository")
            .join(format!("{}_repository.go", file_stem(&self.table)))
    }

    fn rules(&self) -> FileRules {
        FileRules::stub()
    }

    fn render(&self) -> String {
        let name = repository_name(&self.table);
        let body = format!(
            "type {name} struct {{\n\tDB *sqlx.DB\n}}\n\nfunc New{name}(db *sqlx.DB) *{name} {{\n\treturn &{name}{{DB: db}}\n}}\n"
        );
        GoFile::new(
            "repository",
            ImportSet::from_iter(["github.com/jmoiron/sqlx"]),
            body,
        )
        .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_struct_and_its_constructor() {
        let rendered = RepositoryGo::new("invoice").render();

        assert_eq!(
            rendered,
            "package repository\n\n\
             import (\n\t\"github.com/jmoiron/sqlx\"\n)\n\n\
             type InvoiceRepository struct {\n\tDB *sqlx.DB\n}\n\n\
             func NewInvoiceRepository(db *sqlx.DB) *InvoiceRepository {\n\
             \treturn &InvoiceRepository{DB: db}\n}\n"
        );
    }

    #[test]
    fn lands_under_the_repository_directory() {
        let file = RepositoryGo::new("user_account");
        assert_eq!(
            file.path(Path::new("out")),
            PathBuf::from("out/repository/user_account_repository.go")
        );
    }
}
