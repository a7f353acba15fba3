//! Partlookup CLI - resolve scanned part numbers to storage locations

use clap::{Parser, Subcommand};
use partlookup::resolver::{Resolution, Resolver};
use partlookup::scan::{ReaderScanSource, ScanSource};
use partlookup::service::{LookupService, LookupState};
use partlookup::storage::SqliteStore;
use partlookup::{config, ui};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "partlookup")]
#[command(version = "0.1.0")]
#[command(about = "Resolve scanned part numbers to warehouse storage locations")]
#[command(long_about = r#"
Partlookup maintains a local lookup table of part numbers and resolves
scanned or typed input against it:
  • Normalizes legacy P/PP-prefixed labels into canonical keys
  • Falls back to the original string for numbers in the 4 range
  • Bulk-refreshes the table from CSV or XLSX exports (full replace)

Example usage:
  partlookup import --file parts.xlsx
  partlookup lookup P4123
  printf 'P4123\nA1\n' | partlookup scan
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a CSV or XLSX file, replacing the whole lookup table
    Import {
        /// Path to the file to import (.csv or .xlsx)
        #[arg(short, long)]
        file: PathBuf,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Resolve a single part number
    Lookup {
        /// Raw scanned or typed part number
        part: String,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Resolve part numbers read line by line from stdin
    Scan {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Show statistics about the lookup table
    Stats {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let app_config = config::load_config(None)?;

    match cli.command {
        Commands::Import { file, database } => {
            let db_path = config::resolve_database_path(database, app_config.as_ref());
            config::ensure_db_dir(&db_path)?;
            tracing::info!("Importing {} into {:?}", file.display(), db_path);

            let mut service = LookupService::new(SqliteStore::open(&db_path)?);
            match service.import_file(&file) {
                LookupState::Success(_) => {
                    let stats = service.stats()?;
                    ui::success(&format!(
                        "Imported {} — {} part records",
                        file.display(),
                        stats.records
                    ));
                }
                LookupState::Error(message) => {
                    anyhow::bail!("import failed: {message}");
                }
                other => unreachable!("import ended in non-terminal state {other:?}"),
            }
        }

        Commands::Lookup { part, database, format } => {
            let db_path = config::resolve_database_path(database, app_config.as_ref());
            let store = SqliteStore::open(&db_path)?;
            let resolver = Resolver::new(&store);

            let resolution = resolver.resolve(&part)?;
            if format == "json" {
                let value = match &resolution {
                    Resolution::Found { record, display } => serde_json::json!({
                        "status": "found",
                        "record": record,
                        "display": display,
                    }),
                    Resolution::NotFound(message) => serde_json::json!({
                        "status": "not_found",
                        "message": message,
                    }),
                    Resolution::Rejected(message) => serde_json::json!({
                        "status": "rejected",
                        "message": message,
                    }),
                };
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print_resolution(&resolution);
            }
        }

        Commands::Scan { database } => {
            let db_path = config::resolve_database_path(database, app_config.as_ref());
            let store = SqliteStore::open(&db_path)?;
            let resolver = Resolver::new(&store);

            ui::info("Scanning", "one part number per line, Ctrl-D to stop");
            let stdin = std::io::stdin();
            let mut source = ReaderScanSource::new(stdin.lock());
            while let Some(raw) = source.next_scan() {
                print_resolution(&resolver.resolve(&raw)?);
            }
        }

        Commands::Stats { database } => {
            let db_path = config::resolve_database_path(database, app_config.as_ref());
            let store = SqliteStore::open(&db_path)?;
            let stats = store.stats()?;

            println!("📊 Partlookup Statistics ({:?})", db_path);
            println!("------------------------------------");
            println!("{}", stats);
        }
    }

    Ok(())
}

fn print_resolution(resolution: &Resolution) {
    match resolution {
        Resolution::Found { display, .. } => {
            ui::section("Result");
            println!("{display}");
        }
        Resolution::NotFound(message) => ui::warn(message),
        Resolution::Rejected(message) => ui::error(message),
    }
}
