use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Result, WrapErr};
use restifier_core::{File, FileRules, WriteResult};

const SAMPLE_TABLE: &str = r#"name = "invoice"

[[columns]]
name = "id"
type = "int"

[[columns]]
name = "createdAt"
type = "timestamp"

[[columns]]
name = "meta"
type = "json"

[[columns.object.fields]]
name = "note"
type = "string"
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Project name (defaults to the current directory name)
    #[arg(default_value = ".")]
    pub name: String,

    /// Output directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let (project_name, output_dir) = Self::resolve_paths(&self.name, self.output.clone())?;

        let starter_config = format!(
            "[project]\nmodule = \"example.com/{project_name}\"\nschema_dir = \"tables\"\noutput = \"generated\"\n"
        );

        let files = [
            File::with_rules(
                output_dir.join("restifier.toml"),
                starter_config,
                FileRules::stub(),
            ),
            File::with_rules(
                output_dir.join("tables").join("invoice.toml"),
                SAMPLE_TABLE,
                FileRules::stub(),
            ),
        ];

        for file in &files {
            let relative = file
                .path()
                .strip_prefix(&output_dir)
                .unwrap_or(file.path())
                .display()
                .to_string();
            match file.write()? {
                WriteResult::Written => println!("  + {relative}"),
                WriteResult::Skipped => println!("  = {relative} (already present, kept)"),
            }
        }

        println!();
        println!("Created restifier project in {}", output_dir.display());
        println!();
        println!("Next steps:");
        if output_dir != Path::new(".") {
            println!("  cd {}", output_dir.display());
        }
        println!("  restifier generate");

        Ok(())
    }

    fn resolve_paths(name: &str, output: Option<PathBuf>) -> Result<(String, PathBuf)> {
        if name == "." {
            let cwd = std::env::current_dir().wrap_err("failed to get current directory")?;
            let dir_name = cwd
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| eyre::eyre!("current directory has no valid name"))?
                .to_string();
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            Ok((dir_name, output_dir))
        } else {
            let output_dir = output.unwrap_or_else(|| PathBuf::from(name));
            Ok((name.to_string(), output_dir))
        }
    }
}
