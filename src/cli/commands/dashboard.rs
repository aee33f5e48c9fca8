use clap::{Subcommand, ValueEnum};
use serde_json::{Map, Value};

use crate::cli::utils::{output_snapshot, output_success};
use crate::cli::OutputFormat;
use crate::console::Console;
use crate::handlers::DashboardMetric;

#[derive(Subcommand)]
pub enum DashboardCommands {
    #[command(about = "Show one dashboard figure")]
    Show {
        #[arg(value_enum, help = "Figure to show")]
        metric: MetricArg,
        #[arg(long, default_value_t = 6, help = "Months covered by monthly-revenue")]
        months: u32,
    },

    #[command(about = "Fetch every dashboard figure")]
    Overview {
        #[arg(long, default_value_t = 6, help = "Months covered by monthly-revenue")]
        months: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MetricArg {
    CurrentMonthRevenue,
    CurrentDayRevenue,
    CurrentMonthTransactionCount,
    CurrentDayTransactionCount,
    MonthlyRevenue,
    MonthlyMemberRevenue,
    CurrentMonthMemberRevenueRate,
    CurrentMonthInvoiceCompanyRate,
}

impl MetricArg {
    fn metric(self, months: u32) -> DashboardMetric {
        match self {
            MetricArg::CurrentMonthRevenue => DashboardMetric::CurrentMonthRevenue,
            MetricArg::CurrentDayRevenue => DashboardMetric::CurrentDayRevenue,
            MetricArg::CurrentMonthTransactionCount => DashboardMetric::CurrentMonthTransactionCount,
            MetricArg::CurrentDayTransactionCount => DashboardMetric::CurrentDayTransactionCount,
            MetricArg::MonthlyRevenue => DashboardMetric::MonthlyRevenue { months },
            MetricArg::MonthlyMemberRevenue => DashboardMetric::MonthlyMemberRevenue,
            MetricArg::CurrentMonthMemberRevenueRate => DashboardMetric::CurrentMonthMemberRevenueRate,
            MetricArg::CurrentMonthInvoiceCompanyRate => DashboardMetric::CurrentMonthInvoiceCompanyRate,
        }
    }
}

pub async fn handle(console: &Console, cmd: DashboardCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let dashboard = &console.dashboard;

    match cmd {
        DashboardCommands::Show { metric, months } => {
            let metric = metric.metric(months);
            dashboard.refresh(metric).await?;
            let store = dashboard.store(metric);
            output_snapshot(&output_format, store.name(), &store.get())
        }
        DashboardCommands::Overview { months } => {
            dashboard.refresh_all(months).await?;

            let mut figures = Map::new();
            for metric in DashboardMetric::all(months) {
                let store = dashboard.store(metric);
                let snapshot = store.get();
                figures.insert(
                    store.name().to_string(),
                    snapshot.get("result").cloned().unwrap_or(snapshot),
                );
            }

            output_success(
                &output_format,
                &format!("Fetched {} dashboard figures", figures.len()),
                Some(Value::Object(figures)),
            )
        }
    }
}
