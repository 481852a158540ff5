//! drive_folder CLI - List a link-shared Google Drive folder.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use drive_folder::config::{API_KEY_ENV, DRIVE_API_BASE};
use drive_folder::models::format_size;
use drive_folder::{extract_folder_id, ApiKey, ClientConfig, DriveFolderClient, DriveItem};

/// CLI tool for listing a shared Google Drive folder.
#[derive(Parser)]
#[command(name = "drive_folder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Google API key (can also be set via DRIVE_API_KEY env var).
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Read the API key from the first non-empty line of a file (overrides --api-key).
    #[arg(long)]
    api_key_file: Option<PathBuf>,

    /// Maximum number of text files fetched at the same time (unbounded by default).
    #[arg(long)]
    concurrency: Option<NonZeroUsize>,

    /// Per-request timeout in seconds (no timeout by default).
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Drive API base URL.
    #[arg(long, default_value = DRIVE_API_BASE, hide = true)]
    api_base: String,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the items in a folder.
    List {
        /// Folder URL or ID.
        folder: String,

        /// Print the items as JSON, including fetched text content.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let api_key = match &cli.api_key_file {
        Some(path) => Some(
            ApiKey::from_file(path)
                .with_context(|| format!("Failed to load API key from {:?}", path))?,
        ),
        None => cli.api_key.clone().and_then(ApiKey::new),
    };

    let config = ClientConfig::default()
        .with_api_key(api_key)
        .with_api_base(cli.api_base.as_str())
        .with_concurrency_limit(cli.concurrency)
        .with_timeout(cli.timeout_secs.map(Duration::from_secs));

    let client = DriveFolderClient::new(config).context("Failed to create Drive client")?;

    match cli.command {
        Commands::List { folder, json } => {
            let folder_id = extract_folder_id(&folder);

            let items = client
                .list_folder(&folder)
                .await
                .with_context(|| format!("Failed to list folder: {}", folder_id))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                print_table(&items);
            }
        }
    }

    Ok(())
}

fn print_table(items: &[DriveItem]) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }

    println!("{:<34} {:<8} {:<6} {:>10} {}", "ID", "KIND", "TYPE", "SIZE", "NAME");
    println!("{}", "-".repeat(90));
    for item in items {
        let (kind, file_type, size) = match item {
            DriveItem::Folder(_) => ("folder", "-", "-".to_string()),
            DriveItem::File(file) => (
                "file",
                file.file_type.as_str(),
                file.size.map(format_size).unwrap_or_else(|| "-".to_string()),
            ),
        };
        println!("{:<34} {:<8} {:<6} {:>10} {}", item.id(), kind, file_type, size, item.name());
    }
}

/// Logs go to stderr so `--json` output stays parseable.
fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "drive_folder=debug"
    } else {
        "drive_folder=warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
