use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use trustfund::cli::allocate::AllocationRequest;
use trustfund::cli::form::FormRequest;
use trustfund::core::dashboard::DashboardAction;
use trustfund::core::deed::DeedFormat;
use trustfund::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for trustfund::AppCommand {
    fn from(cmd: Commands) -> trustfund::AppCommand {
        match cmd {
            Commands::Dashboard { remove, add } => {
                let removals = remove
                    .into_iter()
                    .map(|name| DashboardAction::RemoveBeneficiary { name });
                let additions = add
                    .into_iter()
                    .map(|name| DashboardAction::AddBeneficiary { name });
                trustfund::AppCommand::Dashboard(removals.chain(additions).collect())
            }
            Commands::Allocate {
                beneficiary,
                stock,
                real_estate,
                cash,
            } => trustfund::AppCommand::Allocate(AllocationRequest {
                beneficiary,
                stock_portfolio: stock,
                real_estate,
                cash,
            }),
            Commands::Risk => trustfund::AppCommand::Risk,
            Commands::Deed { format, output } => trustfund::AppCommand::Deed {
                format,
                output,
            },
            Commands::Plan => trustfund::AppCommand::Plan,
            Commands::Form {
                step,
                sample_settlor,
                sample_assets,
            } => trustfund::AppCommand::Form(FormRequest {
                step,
                sample_settlor,
                sample_assets,
            }),
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display assets, beneficiaries and allocation totals
    Dashboard {
        /// Beneficiary to remove before display (repeatable)
        #[arg(long)]
        remove: Vec<String>,
        /// Beneficiary to add with an equal share of each asset (repeatable)
        #[arg(long)]
        add: Vec<String>,
    },
    /// Check a beneficiary's asset allocation before saving it
    Allocate {
        /// Beneficiary name as listed on the dashboard
        beneficiary: String,
        /// Stock Portfolio percentage
        #[arg(long)]
        stock: Option<f64>,
        /// Real Estate percentage
        #[arg(long)]
        real_estate: Option<f64>,
        /// Cash percentage
        #[arg(long)]
        cash: Option<f64>,
    },
    /// Display the portfolio risk level
    Risk,
    /// Write the trust deed document
    Deed {
        /// Document format: text, markdown or json
        #[arg(short, long, value_parser = DeedFormat::from_str, default_value = "text")]
        format: DeedFormat,
        /// Output file, defaults to the trust name in the output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Display the monthly contribution needed for the financial goal
    Plan,
    /// Show one step of the trust setup form
    Form {
        /// Step number, 1 to 5
        #[arg(short, long, default_value_t = 1)]
        step: usize,
        /// Fill the settlor with sample data
        #[arg(long)]
        sample_settlor: bool,
        /// Replace the trust assets with the sample assets
        #[arg(long)]
        sample_assets: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => trustfund::cli::setup::setup(),
        Some(cmd) => trustfund::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
