use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Result, WrapErr};
use restifier_codegen_go::{GenerateSummary, Generator, project_types};
use restifier_schema::{ProjectConfig, load_schema_dir};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to restifier.toml (defaults to ./restifier.toml)
    #[arg(short, long, default_value = "restifier.toml")]
    pub config: PathBuf,

    /// Output directory (overrides the configured one)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Stop at the first failing table instead of continuing with the rest
    #[arg(long)]
    pub fail_fast: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = ProjectConfig::from_file(&self.config).unwrap_or_exit();
        let schemas = load_schema_dir(config.schema_dir(&self.config)).unwrap_or_exit();
        let types = project_types(&config);
        let generator = Generator::new(&schemas, &config.project.module, types);

        if self.dry_run {
            return Self::run_preview(&generator);
        }

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| config.output_dir(&self.config));
        self.run_generation(&generator, &output)
    }

    fn run_generation(&self, generator: &Generator, output: &Path) -> Result<()> {
        let mut summary = GenerateSummary::default();
        let mut failed = 0usize;

        if self.fail_fast {
            summary = generator
                .generate(output)
                .wrap_err("failed to generate code")?;
        } else {
            // table collisions cannot be skipped over; writing either table
            // would clobber the other
            generator
                .check_table_names()
                .wrap_err("failed to generate code")?;
            for schema in generator.schemas() {
                match generator.generate_table(schema, output) {
                    Ok(s) => summary.merge(s),
                    Err(e) => {
                        failed += 1;
                        eprintln!("error: {e:#}");
                    }
                }
            }
            summary.merge(
                generator
                    .generate_scaffolding(output)
                    .wrap_err("failed to generate scaffolding")?,
            );
        }

        println!("Generated: {}", output.display());
        for path in &summary.written {
            println!("  + {path}");
        }
        if !summary.skipped.is_empty() {
            println!();
            println!("Skipped (already present):");
            for path in &summary.skipped {
                println!("  = {path}");
            }
        }

        if failed > 0 {
            eprintln!();
            eprintln!(
                "{failed} table{} failed",
                if failed == 1 { "" } else { "s" }
            );
            std::process::exit(1);
        }

        Ok(())
    }

    fn run_preview(generator: &Generator) -> Result<()> {
        let files = generator.preview()?;

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
