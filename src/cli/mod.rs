pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::console::Console;

#[derive(Parser)]
#[command(name = "console")]
#[command(about = "Member management console - roster, transactions and invoices")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Login, token refresh and session status")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Employee roster and registration approval")]
    Employee {
        #[command(subcommand)]
        cmd: commands::employee::EmployeeCommands,
    },

    #[command(about = "Role management")]
    Role {
        #[command(subcommand)]
        cmd: commands::role::RoleCommands,
    },

    #[command(about = "Insurance company master data")]
    Company {
        #[command(subcommand)]
        cmd: commands::company::CompanyCommands,
    },

    #[command(about = "Transaction bookkeeping")]
    Transaction {
        #[command(subcommand)]
        cmd: commands::transaction::TransactionCommands,
    },

    #[command(about = "Company and user invoices with their extra lines")]
    Invoice {
        #[command(subcommand)]
        cmd: commands::invoice::InvoiceCommands,
    },

    #[command(about = "Revenue and transaction figures for the dashboard")]
    Dashboard {
        #[command(subcommand)]
        cmd: commands::dashboard::DashboardCommands,
    },

    #[command(about = "Monthly totals and selectable periods")]
    Report {
        #[command(subcommand)]
        cmd: commands::report::ReportCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let console = Console::from_config(crate::config::config())?;

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(&console, cmd, output_format).await,
        Commands::Employee { cmd } => commands::employee::handle(&console, cmd, output_format).await,
        Commands::Role { cmd } => commands::role::handle(&console, cmd, output_format).await,
        Commands::Company { cmd } => commands::company::handle(&console, cmd, output_format).await,
        Commands::Transaction { cmd } => commands::transaction::handle(&console, cmd, output_format).await,
        Commands::Invoice { cmd } => commands::invoice::handle(&console, cmd, output_format).await,
        Commands::Dashboard { cmd } => commands::dashboard::handle(&console, cmd, output_format).await,
        Commands::Report { cmd } => commands::report::handle(&console, cmd, output_format).await,
    }
}
