use clap::Subcommand;

use crate::cli::utils::{output_response, output_snapshot};
use crate::cli::OutputFormat;
use crate::console::Console;

#[derive(Subcommand)]
pub enum CompanyCommands {
    #[command(about = "List insurance companies")]
    List,

    #[command(about = "Register an insurance company")]
    Create {
        #[arg(help = "Company name")]
        name: String,
    },

    #[command(about = "Rename an insurance company")]
    Update {
        #[arg(help = "Company id")]
        id: i64,
        #[arg(help = "New company name")]
        name: String,
    },

    #[command(about = "Delete an insurance company")]
    Delete {
        #[arg(help = "Company id")]
        id: i64,
    },
}

pub async fn handle(console: &Console, cmd: CompanyCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let companies = &console.insurance_companies;

    match cmd {
        CompanyCommands::List => {
            companies.init().await?;
            output_snapshot(&output_format, companies.store().name(), &companies.store().get())
        }
        CompanyCommands::Create { name } => {
            let response = companies.create(&name).await?;
            output_response(&output_format, "create insurance company", &response)
        }
        CompanyCommands::Update { id, name } => {
            let response = companies.update(id, &name).await?;
            output_response(&output_format, "update insurance company", &response)
        }
        CompanyCommands::Delete { id } => {
            let response = companies.delete(id).await?;
            output_response(&output_format, "delete insurance company", &response)
        }
    }
}
