use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use restifier_schema::{Node, ProjectConfig, load_schema_dir};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to restifier.toml (defaults to ./restifier.toml)
    #[arg(short, long, default_value = "restifier.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let config = ProjectConfig::from_file(&self.config).unwrap_or_exit();
        let schemas = load_schema_dir(config.schema_dir(&self.config)).unwrap_or_exit();

        if schemas.is_empty() {
            println!("No tables defined");
            return Ok(());
        }

        println!("Tables:");
        for schema in &schemas {
            println!("  {}", schema.name);
            for column in &schema.columns {
                println!(
                    "    {} {}{}",
                    column.name,
                    column.ty,
                    if column.hidden { " (hidden)" } else { "" }
                );
                if let Some(node) = &column.object {
                    Self::print_node(node, "      ");
                }
            }
        }

        Ok(())
    }

    fn print_node(node: &Node, indent: &str) {
        for field in &node.fields {
            println!(
                "{indent}{} {}{}",
                field.name,
                field.ty,
                if field.hidden { " (hidden)" } else { "" }
            );
        }
        for child in &node.children {
            println!(
                "{indent}{}{}",
                child.name,
                if child.hidden { " (hidden)" } else { "" }
            );
            Self::print_node(child, &format!("{indent}  "));
        }
    }
}
