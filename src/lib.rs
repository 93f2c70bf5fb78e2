pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod services;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::{Command, PayloadKind};
use crate::config::settings::AppConfig;
use crate::services::payload_check::PayloadCheckService;
use crate::services::setup::SetupService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_setup(database: Option<String>) -> Result<()> {
    let config = AppConfig::new().with_database_path(database);
    let service = SetupService::new(config);
    service.run().map(|_| ())
}

pub fn handle_check(kind: PayloadKind, path: &Path) -> Result<()> {
    let service = PayloadCheckService::new(kind);
    service.check_file(path).map(|_| ())
}
