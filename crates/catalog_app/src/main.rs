mod app;
mod cli;
mod config;
mod logging;
mod render;
mod shell;

use std::io::{self, Write};

use anyhow::{Context, Result};
use catalog_core::{ActivityLog, CatalogStore};
use catalog_engine::{AssistantHandle, JsonFileRepository, OpenAiCompatibleModel};
use catalog_logging::{catalog_info, catalog_warn};
use clap::Parser;
use log::LevelFilter;

use crate::app::App;
use crate::cli::{Cli, Command};
use crate::config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(config.log_destination, level);

    let data_file = cli.data.clone().unwrap_or_else(|| config.data_file.clone());
    let store = CatalogStore::open(JsonFileRepository::new(&data_file), ActivityLog::new())
        .with_context(|| format!("cannot open catalog {}", data_file.display()))?;
    let mut app = App::new(store, build_assistant(&config));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command.and_then(Command::into_action) {
        Some(action) => {
            app.execute(action, &mut out)?;
            if cli.show_log {
                write!(out, "{}", app.activity_snapshot())?;
            }
        }
        None => {
            catalog_info!("Starting shell on {:?}", data_file);
            shell::run(&mut app, io::stdin().lock(), &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// The assistant is optional; the catalog works without it.
fn build_assistant(config: &AppConfig) -> Option<AssistantHandle> {
    let assistant = config.assistant.as_ref()?;
    let api_key = std::env::var(&assistant.api_key_env).ok();
    let handle = OpenAiCompatibleModel::new(assistant.settings(api_key))
        .and_then(|model| AssistantHandle::new(Box::new(model)));
    match handle {
        Ok(handle) => Some(handle),
        Err(err) => {
            catalog_warn!(
                "Assistant disabled ({}; key read from ${}): {}",
                assistant.endpoint,
                assistant.api_key_env,
                err
            );
            None
        }
    }
}
