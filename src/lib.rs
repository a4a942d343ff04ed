pub mod cli;
pub mod core;

use crate::cli::allocate::AllocationRequest;
use crate::cli::form::FormRequest;
use crate::core::config::AppConfig;
use crate::core::dashboard::DashboardAction;
use crate::core::deed::DeedFormat;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// Commands that operate on a loaded configuration.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Dashboard(Vec<DashboardAction>),
    Allocate(AllocationRequest),
    Risk,
    Deed {
        format: DeedFormat,
        output: Option<PathBuf>,
    },
    Plan,
    Form(FormRequest),
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Trust fund admin starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Dashboard(actions) => cli::dashboard::run(&config.fund, actions),
        AppCommand::Allocate(request) => cli::allocate::run(&config.fund, &request),
        AppCommand::Risk => cli::risk::run(&config.portfolio, &config.risk),
        AppCommand::Deed { format, output } => cli::deed::run(&config, format, output.as_deref()),
        AppCommand::Plan => cli::plan::run(&config.trust.financial_planning),
        AppCommand::Form(request) => cli::form::run(&config.trust, &request),
    }
}
