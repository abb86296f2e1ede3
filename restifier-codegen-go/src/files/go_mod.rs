use std::path::{Path, PathBuf};

use restifier_core::{FileRules, GeneratedFile};

/// The go.mod module descriptor (user-editable once created)
pub struct GoMod {
    pub module: String,
}

impl GoMod {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }
}

impl GeneratedFile for GoMod {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("go.mod")
    }

    fn rules(&self) -> FileRules {
        FileRules::stub()
    }

    fn render(&self) -> String {
        format!(
            "module {}\n\ngo 1.22\n\nrequire (\n\tgithub.com/jmoiron/sqlx v1.4.0\n\tgithub.com/lib/pq v1.10.9\n\tgo.uber.org/dig v1.18.0\n)\n",
            self.module
        )
    }
}
