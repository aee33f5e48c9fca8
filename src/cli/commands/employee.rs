use clap::Subcommand;

use crate::cli::utils::{output_response, output_snapshot, parse_wire};
use crate::cli::OutputFormat;
use crate::console::Console;
use crate::models::{Permission, UserUpdate};

#[derive(Subcommand)]
pub enum EmployeeCommands {
    #[command(about = "List employees and pending registrations")]
    List,

    #[command(about = "Approve a pending registration")]
    Accept {
        #[arg(help = "Registered user id")]
        id: i64,
        #[arg(long, help = "Role to assign")]
        role_id: Option<i64>,
        #[arg(long, help = "Display name")]
        name: Option<String>,
        #[arg(long, help = "Monthly plate fee")]
        plate_fee: Option<i64>,
        #[arg(long, help = "Contract fee rate")]
        contract_fee: Option<f64>,
        #[arg(long, value_parser = parse_wire::<Permission>, help = "User permission (SR, SRW, AR, ARW)")]
        permission_user: Option<Permission>,
        #[arg(long, value_parser = parse_wire::<Permission>, help = "Transaction permission (SR, SRW, AR, ARW)")]
        permission_transaction: Option<Permission>,
        #[arg(long, value_parser = parse_wire::<Permission>, help = "Invoice permission (SR, SRW, AR, ARW)")]
        permission_invoice: Option<Permission>,
    },

    #[command(about = "Turn down a pending registration")]
    Reject {
        #[arg(help = "Registered user id")]
        id: i64,
    },

    #[command(about = "Remove an employee")]
    Remove {
        #[arg(help = "User id")]
        id: i64,
    },
}

pub async fn handle(console: &Console, cmd: EmployeeCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let employees = &console.employees;

    match cmd {
        EmployeeCommands::List => {
            employees.init().await?;
            output_snapshot(&output_format, employees.store().name(), &employees.store().get())
        }
        EmployeeCommands::Accept {
            id,
            role_id,
            name,
            plate_fee,
            contract_fee,
            permission_user,
            permission_transaction,
            permission_invoice,
        } => {
            let update = UserUpdate {
                role_id,
                name,
                plate_fee,
                contract_fee,
                permission_user,
                permission_transaction,
                permission_invoice,
                ..Default::default()
            };
            let response = employees.accept(id, &update).await?;
            output_response(&output_format, "accept registration", &response)
        }
        EmployeeCommands::Reject { id } => {
            let response = employees.reject(id).await?;
            output_response(&output_format, "reject registration", &response)
        }
        EmployeeCommands::Remove { id } => {
            let response = employees.delete(id).await?;
            output_response(&output_format, "remove employee", &response)
        }
    }
}
