use clap::{Args, Subcommand};

use crate::cli::utils::{output_response, output_snapshot, parse_wire};
use crate::cli::OutputFormat;
use crate::console::Console;
use crate::models::{CanceledType, LookupOptions, OrderBy, OrderType, TransactionCreate, TransactionUpdate};

#[derive(Subcommand)]
pub enum TransactionCommands {
    #[command(about = "Query the transaction table")]
    List(LookupArgs),

    #[command(about = "Record a transaction")]
    Create {
        #[arg(long, help = "Insurance company id")]
        company: i64,
        #[arg(long, help = "Vehicle plate")]
        vehicle_id: String,
        #[arg(long, help = "Vehicle model")]
        vehicle_model: String,
        #[arg(long, help = "Transaction date (YYYY-MM-DD)")]
        date: String,
        #[arg(long, help = "Price")]
        price: i64,
        #[arg(long, help = "Owner user id (defaults to the caller)")]
        user: Option<i64>,
        #[arg(long, help = "Free-form memo")]
        memo: Option<String>,
    },

    #[command(about = "Update a transaction")]
    Update {
        #[arg(help = "Transaction id")]
        id: i64,
        #[arg(long, help = "Insurance company id")]
        company: Option<i64>,
        #[arg(long, help = "Vehicle plate")]
        vehicle_id: Option<String>,
        #[arg(long, help = "Vehicle model")]
        vehicle_model: Option<String>,
        #[arg(long, help = "Transaction date (YYYY-MM-DD)")]
        date: Option<String>,
        #[arg(long, help = "Price")]
        price: Option<i64>,
        #[arg(long, help = "Free-form memo")]
        memo: Option<String>,
        #[arg(long, help = "Mark as canceled")]
        canceled: Option<bool>,
        #[arg(long, help = "Cancellation fee")]
        cancel_fee: Option<i64>,
    },

    #[command(about = "Delete a transaction")]
    Delete {
        #[arg(help = "Transaction id")]
        id: i64,
    },
}

#[derive(Args)]
pub struct LookupArgs {
    #[arg(long, default_value = "", help = "First date (YYYY-MM-DD)")]
    start_date: String,
    #[arg(long, default_value = "", help = "Last date (YYYY-MM-DD)")]
    end_date: String,
    #[arg(long, default_value_t = -1, allow_negative_numbers = true, help = "User id, -1 for everyone")]
    user: i64,
    #[arg(long, default_value_t = -1, allow_negative_numbers = true, help = "Insurance company id, -1 for all")]
    company: i64,
    #[arg(long, help = "Page number")]
    page: Option<u32>,
    #[arg(long, help = "Rows per page")]
    limit: Option<u32>,
    #[arg(long, value_parser = parse_wire::<CanceledType>, help = "ALL, EXCLUDE_CANCELED or CANCELED_ONLY")]
    canceled: Option<CanceledType>,
    #[arg(long, value_parser = parse_wire::<OrderBy>, help = "transaction_id, user_id, price or cancel_fee")]
    order_by: Option<OrderBy>,
    #[arg(long, value_parser = parse_wire::<OrderType>, help = "asc or desc")]
    order: Option<OrderType>,
}

impl From<LookupArgs> for LookupOptions {
    fn from(args: LookupArgs) -> Self {
        LookupOptions {
            start_date: Some(args.start_date),
            end_date: Some(args.end_date),
            user_id: Some(args.user),
            insurance_company_id: Some(args.company),
            page: args.page,
            limit: args.limit,
            canceled_type: args.canceled,
            order_by: args.order_by,
            order_type: args.order,
        }
    }
}

pub async fn handle(console: &Console, cmd: TransactionCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let transactions = &console.transactions;

    match cmd {
        TransactionCommands::List(args) => {
            let options = LookupOptions::from(args);
            transactions.refresh(&options).await?;
            output_snapshot(&output_format, transactions.store().name(), &transactions.store().get())
        }
        TransactionCommands::Create {
            company,
            vehicle_id,
            vehicle_model,
            date,
            price,
            user,
            memo,
        } => {
            let transaction = TransactionCreate {
                user_id: user,
                insurance_company_id: company,
                vehicle_id,
                vehicle_model,
                date,
                price,
                memo,
            };
            let response = transactions.create(&transaction).await?;
            output_response(&output_format, "create transaction", &response)
        }
        TransactionCommands::Update {
            id,
            company,
            vehicle_id,
            vehicle_model,
            date,
            price,
            memo,
            canceled,
            cancel_fee,
        } => {
            let update = TransactionUpdate {
                user_id: None,
                insurance_company_id: company,
                vehicle_id,
                vehicle_model,
                date,
                price,
                memo,
                canceled,
                cancel_fee,
            };
            let response = transactions.update(id, &update).await?;
            output_response(&output_format, "update transaction", &response)
        }
        TransactionCommands::Delete { id } => {
            let response = transactions.delete(id).await?;
            output_response(&output_format, "delete transaction", &response)
        }
    }
}
