use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ddl2changelog::{generate_changelogs, Config, GenerateOptions};

#[derive(Parser)]
#[command(name = "ddl2changelog")]
#[command(author, version, about = "Generate Liquibase changelog sets from SQL DDL files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate changelog files from a SQL DDL file
    Generate {
        /// Path to the SQL DDL file
        #[arg(short, long)]
        sql: PathBuf,

        /// Output directory (defaults to the current working directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to a JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Changeset author
        #[arg(short, long)]
        author: Option<String>,

        /// Changeset version (e.g. 1.0.0)
        #[arg(long)]
        changeset_version: Option<String>,

        /// SQL dialect (mysql, postgres)
        #[arg(short, long)]
        dialect: Option<String>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write a starter config file
    Init {
        /// Where to write the config file
        #[arg(short, long, default_value = "ddl2changelog.json")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            sql,
            output,
            config,
            author,
            changeset_version,
            dialect,
            verbose,
        } => {
            let options = GenerateOptions {
                sql_path: sql,
                output_dir: output,
                config_path: config,
                author,
                version: changeset_version,
                dialect,
                verbose,
            };

            let written = generate_changelogs(options)?;
            println!("Generated {} changelog files", written.len());
        }
        Commands::Init { path } => {
            Config::write_starter(&path)?;
            println!("Wrote starter config: {}", path.display());
        }
    }

    Ok(())
}
