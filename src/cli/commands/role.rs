use clap::Subcommand;

use crate::cli::utils::{output_response, output_snapshot};
use crate::cli::OutputFormat;
use crate::console::Console;

#[derive(Subcommand)]
pub enum RoleCommands {
    #[command(about = "List roles")]
    List,

    #[command(about = "Create a role")]
    Create {
        #[arg(help = "Role name")]
        name: String,
    },

    #[command(about = "Rename a role")]
    Rename {
        #[arg(help = "Role id")]
        id: i64,
        #[arg(help = "New role name")]
        name: String,
    },

    #[command(about = "Delete a role")]
    Delete {
        #[arg(help = "Role id")]
        id: i64,
    },
}

pub async fn handle(console: &Console, cmd: RoleCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let roles = &console.roles;

    match cmd {
        RoleCommands::List => {
            roles.init().await?;
            output_snapshot(&output_format, roles.store().name(), &roles.store().get())
        }
        RoleCommands::Create { name } => {
            let response = roles.create(&name).await?;
            output_response(&output_format, "create role", &response)
        }
        RoleCommands::Rename { id, name } => {
            let response = roles.put(id, &name).await?;
            output_response(&output_format, "rename role", &response)
        }
        RoleCommands::Delete { id } => {
            let response = roles.delete(id).await?;
            output_response(&output_format, "delete role", &response)
        }
    }
}
