use clap::{Args, Subcommand};

use crate::cli::utils::{output_response, output_snapshot};
use crate::cli::OutputFormat;
use crate::console::Console;
use crate::models::{CompanyInvoiceCreate, ExtraLine};

#[derive(Subcommand)]
pub enum InvoiceCommands {
    #[command(about = "Company invoice for a period")]
    Company {
        #[command(subcommand)]
        cmd: CompanyInvoiceCommands,
    },

    #[command(about = "Per-user invoice for a period")]
    User {
        #[command(subcommand)]
        cmd: UserInvoiceCommands,
    },
}

#[derive(Args, Clone, Copy)]
pub struct PeriodArgs {
    #[arg(long, help = "Year")]
    year: i32,
    #[arg(long, help = "Month (1-12)")]
    month: u32,
}

#[derive(Args, Clone, Copy)]
pub struct UserPeriodArgs {
    #[arg(long, help = "User id")]
    user: i64,
    #[command(flatten)]
    period: PeriodArgs,
}

#[derive(Subcommand)]
pub enum CompanyInvoiceCommands {
    #[command(about = "Show the company invoice")]
    Show(PeriodArgs),

    #[command(about = "Settle the company invoice")]
    Create {
        #[command(flatten)]
        period: PeriodArgs,
        #[arg(long, help = "Office rental fee")]
        rental_fee: i64,
        #[arg(long, help = "Maintenance fee")]
        maintenance_fee: i64,
    },

    #[command(about = "List extra lines")]
    Extras(PeriodArgs),

    #[command(about = "Add an extra line")]
    AddExtra {
        #[command(flatten)]
        period: PeriodArgs,
        #[arg(help = "Line name")]
        name: String,
        #[arg(help = "Line price")]
        price: i64,
    },

    #[command(about = "Change an extra line")]
    UpdateExtra {
        #[command(flatten)]
        period: PeriodArgs,
        #[arg(help = "Extra line id")]
        id: i64,
        #[arg(help = "Line name")]
        name: String,
        #[arg(help = "Line price")]
        price: i64,
    },

    #[command(about = "Remove an extra line")]
    DeleteExtra {
        #[command(flatten)]
        period: PeriodArgs,
        #[arg(help = "Extra line id")]
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum UserInvoiceCommands {
    #[command(about = "Show a user's invoice")]
    Show(UserPeriodArgs),

    #[command(about = "Settle a user's invoice")]
    Create(UserPeriodArgs),

    #[command(about = "List extra lines")]
    Extras(UserPeriodArgs),

    #[command(about = "Add an extra line")]
    AddExtra {
        #[command(flatten)]
        scope: UserPeriodArgs,
        #[arg(help = "Line name")]
        name: String,
        #[arg(help = "Line price")]
        price: i64,
    },

    #[command(about = "Change an extra line")]
    UpdateExtra {
        #[command(flatten)]
        scope: UserPeriodArgs,
        #[arg(help = "Extra line id")]
        id: i64,
        #[arg(help = "Line name")]
        name: String,
        #[arg(help = "Line price")]
        price: i64,
    },

    #[command(about = "Remove an extra line")]
    DeleteExtra {
        #[command(flatten)]
        scope: UserPeriodArgs,
        #[arg(help = "Extra line id")]
        id: i64,
    },
}

pub async fn handle(console: &Console, cmd: InvoiceCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        InvoiceCommands::Company { cmd } => handle_company(console, cmd, output_format).await,
        InvoiceCommands::User { cmd } => handle_user(console, cmd, output_format).await,
    }
}

async fn handle_company(console: &Console, cmd: CompanyInvoiceCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let invoices = &console.company_invoices;
    let extras = &console.company_extras;

    match cmd {
        CompanyInvoiceCommands::Show(PeriodArgs { year, month }) => {
            invoices.refresh(year, month).await?;
            output_snapshot(&output_format, invoices.store().name(), &invoices.store().get())
        }
        CompanyInvoiceCommands::Create { period, rental_fee, maintenance_fee } => {
            let invoice = CompanyInvoiceCreate {
                year: period.year,
                month: period.month,
                rental_fee,
                maintenance_fee,
            };
            let response = invoices.create(&invoice).await?;
            output_response(&output_format, "settle company invoice", &response)
        }
        CompanyInvoiceCommands::Extras(PeriodArgs { year, month }) => {
            extras.refresh(year, month).await?;
            output_snapshot(&output_format, extras.store().name(), &extras.store().get())
        }
        CompanyInvoiceCommands::AddExtra { period, name, price } => {
            let response = extras.create(period.year, period.month, &name, price).await?;
            output_response(&output_format, "add company extra", &response)
        }
        CompanyInvoiceCommands::UpdateExtra { period, id, name, price } => {
            // update/delete act on the period of the last fetch
            extras.refresh(period.year, period.month).await?;
            let response = extras.update(id, &name, price).await?;
            output_response(&output_format, "update company extra", &response)
        }
        CompanyInvoiceCommands::DeleteExtra { period, id } => {
            extras.refresh(period.year, period.month).await?;
            let response = extras.delete(id).await?;
            output_response(&output_format, "delete company extra", &response)
        }
    }
}

async fn handle_user(console: &Console, cmd: UserInvoiceCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let invoices = &console.user_invoices;
    let extras = &console.user_extras;

    match cmd {
        UserInvoiceCommands::Show(UserPeriodArgs { user, period }) => {
            invoices.refresh(user, period.year, period.month).await?;
            output_snapshot(&output_format, invoices.store().name(), &invoices.store().get())
        }
        UserInvoiceCommands::Create(UserPeriodArgs { user, period }) => {
            let response = invoices.create(user, period.year, period.month).await?;
            output_response(&output_format, "settle user invoice", &response)
        }
        UserInvoiceCommands::Extras(UserPeriodArgs { user, period }) => {
            extras.refresh(user, period.year, period.month).await?;
            output_snapshot(&output_format, extras.store().name(), &extras.store().get())
        }
        UserInvoiceCommands::AddExtra { scope, name, price } => {
            let response = extras
                .create(scope.user, scope.period.year, scope.period.month, &name, price)
                .await?;
            output_response(&output_format, "add user extra", &response)
        }
        UserInvoiceCommands::UpdateExtra { scope, id, name, price } => {
            let extra = ExtraLine { id, name, price };
            let response = extras
                .update(scope.user, scope.period.year, scope.period.month, &extra)
                .await?;
            output_response(&output_format, "update user extra", &response)
        }
        UserInvoiceCommands::DeleteExtra { scope, id } => {
            let response = extras
                .delete(scope.user, scope.period.year, scope.period.month, id)
                .await?;
            output_response(&output_format, "delete user extra", &response)
        }
    }
}
