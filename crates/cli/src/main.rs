//! jama-field-sync - copy one Jama Connect field into another.
//!
//! Responsibilities:
//! - Parse the command line and set up logging (stdout plus a per-run file).
//! - Load the INI config, build the client, resolve fields and run the sync.
//! - Turn fatal errors into structured exit codes.
//!
//! Does NOT handle:
//! - REST API details (see `crates/client`).
//! - INI parsing and validation (see `crates/config`).
//!
//! Invariants:
//! - The log guard is dropped before `process::exit` so the log file is flushed.
//! - Per-item patch failures never change the exit code.

mod args;
mod error;
mod logging;
mod sync;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use jama_client::JamaClient;
use jama_config::{ClientSettings, ConfigLoader, ScriptSettings};
use sync::{SyncExecutor, SyncReport, TracingSink, resolve_fields};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let (log_guard, log_file) = match logging::init(&cli.log_dir) {
        Ok(init) => init,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };
    info!(log_file = %log_file.display(), "Logging to file");

    let exit_code = match run(&cli).await {
        Ok(report) => {
            info!(
                fetched = report.fetched,
                candidates = report.candidates,
                updated = report.updated,
                "Sync finished"
            );
            if !report.failed.is_empty() {
                info!(failed = ?report.failed, "Some items were not updated");
            }
            ExitCode::Success
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            e.exit_code()
        }
    };

    drop(log_guard);
    std::process::exit(exit_code.as_i32());
}

async fn run(cli: &Cli) -> Result<SyncReport> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config_path {
        loader = loader.with_config_path(path.clone());
    }

    let document = loader
        .load()
        .context("Unable to parse configuration file")?;

    let client_settings = ClientSettings::from_document(&document).context(
        "Unable to parse CLIENT_SETTINGS from config file. \
         Please check config file for errors and try again",
    )?;
    let mut client = JamaClient::builder()
        .from_settings(&client_settings)
        .build()
        .context("Unable to create Jama client")?;
    info!(
        base_url = client.base_url(),
        user = client_settings.auth.strategy.identity(),
        oauth = client.is_oauth(),
        "Connecting to Jama Connect"
    );

    let script = ScriptSettings::from_document(&document)
        .context("Failed to retrieve script settings, please confirm config file")?;

    let item_type = client
        .get_item_type(script.item_type_id)
        .await
        .with_context(|| {
            format!(
                "Invalid script settings, unable to fetch item type {}",
                script.item_type_id
            )
        })?;
    let fields = resolve_fields(&item_type, &script)?;
    info!(
        item_type = item_type.name(),
        read_field = %fields.read_field,
        write_field = %fields.write_field,
        "Resolved fields"
    );

    SyncExecutor::new(&script, &fields)
        .run(&mut client, &mut TracingSink)
        .await
        .context("Unable to retrieve filter items")
}
