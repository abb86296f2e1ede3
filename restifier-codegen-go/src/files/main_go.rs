use std::path::{Path, PathBuf};

use restifier_core::{FileRules, GeneratedFile};

use crate::naming::{repo_var_name, repository_name};

/// The main.go entry point wiring one repository per table (user-editable)
pub struct MainGo {
    pub module: String,
    pub tables: Vec<String>,
}

impl MainGo {
    pub fn new<I, S>(module: impl Into<String>, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            module: module.into(),
            tables: tables.into_iter().map(Into::into).collect(),
        }
    }
}

impl GeneratedFile for MainGo {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("main.go")
    }

    fn rules(&self) -> FileRules {
        FileRules::stub()
    }

    fn render(&self) -> String {
        let mut out = String::from("package main\n\nimport (\n");
        out.push_str("\t\"fmt\"\n\t\"net/http\"\n\n\t\"github.com/jmoiron/sqlx\"\n\t_ \"github.com/lib/pq\"\n\t\"go.uber.org/dig\"\n");
        if !self.tables.is_empty() {
            out.push_str(&format!("\n\t\"{}/repository\"\n", self.module));
        }
        out.push_str(")\n\nfunc main() {\n\tcontainer := dig.New()\n\n");
        out.push_str("\tcontainer.Provide(func() (*sqlx.DB, error) {\n\t\treturn sqlx.Connect(\"postgres\", \"user=youruser dbname=yourdb sslmode=disable\")\n\t})\n");
        for table in &self.tables {
            out.push_str(&format!(
                "\tcontainer.Provide(repository.New{})\n",
                repository_name(table)
            ));
        }

        let params = self
            .tables
            .iter()
            .map(|table| format!("{} *repository.{}", repo_var_name(table), repository_name(table)))
            .collect::<Vec<_>>()
            .join(", ");

        out.push_str(&format!("\n\terr := container.Invoke(func({params}) {{\n"));
        out.push_str("\t\tmux := http.NewServeMux()\n");
        out.push_str("\t\tfmt.Println(\"Server is running on port 8080\")\n");
        out.push_str("\t\thttp.ListenAndServe(\":8080\", mux)\n\t})\n");
        out.push_str("\tif err != nil {\n\t\tpanic(err)\n\t}\n}\n");
        out
    }
}
