// Rust guideline compliant 2026-10-17

//! Petstore CLI Application
//!
//! Command-line interface for initializing, serving, and inspecting a
//! Petstore data directory.

use clap::Parser;
use petstore_cli::{commands, create_formatter, OutputFormatter};
use petstore_server::ServerOptions;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "petstore",
    version,
    about = "Petstore: a pet records REST service",
    long_about = "Petstore stores pet records in a JSONL file and serves them over HTTP: create, update, find by status, delete, and attach images.",
    after_help = "Examples:\n  petstore init\n  petstore serve --addr 0.0.0.0:8080 --log-level debug\n  petstore list --status available,pending\n  petstore show 42 --json\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Directory holding the `.petstore` store (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Petstore data directory
    Init,

    /// Run the HTTP server
    Serve {
        /// Bind address, overriding `listen_addr` from config
        #[arg(long)]
        addr: Option<String>,

        /// Log level (error, warn, info, debug, trace)
        #[arg(long, default_value = "info")]
        log_level: String,

        /// Write JSON logs to this file instead of stdout
        #[arg(long)]
        log_file: Option<PathBuf>,

        /// Disable permissive CORS headers
        #[arg(long)]
        no_cors: bool,
    },

    /// List Pets
    List {
        /// Filter by status (repeatable or comma-separated)
        #[arg(long, value_delimiter = ',')]
        status: Vec<String>,
    },

    /// Show details of a Pet
    Show {
        /// Pet ID
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                "table"
            }
        }
    };
    let formatter = create_formatter(format);

    if let Err(e) = run(cli.root, cli.command, formatter.as_ref()) {
        eprintln!("{}", formatter.format_error(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

fn run(
    root: Option<PathBuf>,
    command: Option<Commands>,
    formatter: &dyn OutputFormatter,
) -> anyhow::Result<()> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    match command {
        Some(Commands::Init) => {
            commands::init::execute(&root)?;
        }
        Some(Commands::Serve {
            addr,
            log_level,
            log_file,
            no_cors,
        }) => {
            commands::serve::execute(ServerOptions {
                root: Some(root),
                listen_addr: addr,
                log_level,
                log_file,
                cors: !no_cors,
            })?;
        }
        Some(Commands::List { status }) => {
            commands::list::execute(&root, &status, formatter)?;
        }
        Some(Commands::Show { id }) => {
            commands::show::execute(&root, &id, formatter)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
