use anyhow::Result;
use clap::{Parser, Subcommand};
use import_assist::commands;

/// Import statement completion and merging for JavaScript sources
#[derive(Parser)]
#[command(name = "import-assist")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the import declarations and exported names of a file
    Analyze {
        /// Path to the JavaScript file to analyze
        filepath: String,

        /// Output as JSON
        #[arg(long = "json")]
        json: bool,
    },
    /// Plan the edit that imports a specifier from a module
    Plan {
        /// Path to the JavaScript file to edit
        filepath: String,

        /// Module specifier to import from (e.g. my-app/actions/SomeActions)
        module: String,

        /// Named binding to import
        specifier: String,

        /// Apply the edit to the file instead of only printing it
        #[arg(short = 'a', long = "apply")]
        apply: bool,

        /// Output the edit as JSON
        #[arg(long = "json")]
        json: bool,
    },
    /// Discover importable action sources and their derived import names
    Sources {
        /// Directory to search from (defaults to current directory)
        #[arg(long = "root", default_value = ".")]
        root: String,

        /// Settings file (defaults to the nearest import-assist.json)
        #[arg(short = 'c', long = "config")]
        config: Option<String>,

        /// Anchor document for local import-name derivation
        #[arg(long = "anchor")]
        anchor: Option<String>,

        /// Output as JSON
        #[arg(long = "json")]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { filepath, json } => commands::analyze::execute(&filepath, json),
        Commands::Plan {
            filepath,
            module,
            specifier,
            apply,
            json,
        } => commands::plan::execute(&filepath, &module, &specifier, apply, json),
        Commands::Sources {
            root,
            config,
            anchor,
            json,
        } => commands::sources::execute(&root, config.as_deref(), anchor.as_deref(), json),
    }
}
