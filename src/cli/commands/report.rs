use clap::{Subcommand, ValueEnum};
use serde_json::json;

use crate::cli::utils::{output_snapshot, output_success};
use crate::cli::OutputFormat;
use crate::console::Console;
use crate::date::Calendar;
use crate::handlers::ReportKind;
use crate::theme::{CalendarTheme, LOCALE};

#[derive(Subcommand)]
pub enum ReportCommands {
    #[command(about = "Show a monthly report")]
    Monthly {
        #[arg(value_enum, help = "Report kind")]
        kind: KindArg,
        #[arg(long, help = "Year (defaults to the current year)")]
        year: Option<i32>,
        #[arg(long, help = "Month (defaults to the current month)")]
        month: Option<u32>,
    },

    #[command(about = "List the periods the pickers offer")]
    Periods {
        #[arg(long, help = "Also list the days of this year")]
        year: Option<i32>,
        #[arg(long, help = "Also list the days of this month")]
        month: Option<u32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    CancelFee,
    Revenue,
    PlateFee,
    EmployeeSalary,
}

impl From<KindArg> for ReportKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::CancelFee => ReportKind::CancelFee,
            KindArg::Revenue => ReportKind::Revenue,
            KindArg::PlateFee => ReportKind::PlateFee,
            KindArg::EmployeeSalary => ReportKind::EmployeeSalary,
        }
    }
}

pub async fn handle(console: &Console, cmd: ReportCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let calendar = Calendar::local();
    let today = calendar.today();

    match cmd {
        ReportCommands::Monthly { kind, year, month } => {
            let kind = ReportKind::from(kind);
            let year = year.unwrap_or(today.year);
            let month = month.unwrap_or(today.month);

            console.reports.refresh(kind, year, month).await?;
            let store = console.reports.store(kind);
            output_snapshot(&output_format, store.name(), &store.get())
        }
        ReportCommands::Periods { year, month } => {
            let years = calendar.selectable_years();
            let months = calendar.selectable_months();
            let dates = calendar.selectable_dates(year, month);

            output_success(
                &output_format,
                &format!(
                    "Today is {}; years {:?}, months {:?}, days {:?}",
                    calendar.today_string(),
                    years,
                    months,
                    dates
                ),
                Some(json!({
                    "today": today,
                    "years": years,
                    "months": months,
                    "dates": dates,
                    "locale": LOCALE,
                    "theme": CalendarTheme::default(),
                })),
            )
        }
    }
}
