use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use restifier_codegen_go::{Generator, project_types};
use restifier_schema::{ProjectConfig, load_schema_dir};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to restifier.toml (defaults to ./restifier.toml)
    #[arg(short, long, default_value = "restifier.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = ProjectConfig::from_file(&self.config).unwrap_or_exit();
        let schema_dir = config.schema_dir(&self.config);
        let schemas = load_schema_dir(&schema_dir).unwrap_or_exit();

        if schemas.is_empty() {
            println!("No tables found in {}", schema_dir.display());
            return Ok(());
        }

        let types = project_types(&config);
        let generator = Generator::new(&schemas, &config.project.module, types);

        // render everything in memory so every type token and nested tree
        // gets resolved, exactly as a real run would
        let mut failed = 0usize;
        for schema in generator.schemas() {
            match generator.preview_table(schema) {
                Ok(_) => println!(
                    "✓ {} ({} column{})",
                    schema.name,
                    schema.columns.len(),
                    if schema.columns.len() == 1 { "" } else { "s" }
                ),
                Err(e) => {
                    failed += 1;
                    eprintln!("error: {}: {e:#}", schema.name);
                }
            }
        }

        if let Err(e) = generator.check_table_names() {
            failed += 1;
            eprintln!("error: {e:#}");
        }

        if failed > 0 {
            std::process::exit(1);
        }

        println!();
        println!(
            "✓ {} table{} valid",
            schemas.len(),
            if schemas.len() == 1 { "" } else { "s" }
        );

        Ok(())
    }
}
