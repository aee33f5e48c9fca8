mod common;

use anyhow::Result;

use admin_console::handlers::DashboardMetric;
use common::TestBackend;

#[tokio::test]
async fn overview_fetches_every_figure_once() -> Result<()> {
    let backend = TestBackend::spawn().await?;
    let console = backend.console()?;

    console.dashboard.refresh_all(3).await?;

    let dashboard_hits = backend
        .hits()
        .iter()
        .filter(|hit| hit.uri.starts_with("/api/dashboard/"))
        .count();
    assert_eq!(dashboard_hits, 8);
    assert_eq!(backend.hits_to("GET", "/api/dashboard/monthly-revenue/3"), 1);

    let day = console.dashboard.store(DashboardMetric::CurrentDayRevenue).get();
    assert_eq!(day["result"]["figure"], "current-day-revenue");

    let monthly = console.dashboard.store(DashboardMetric::MonthlyRevenue { months: 3 }).get();
    assert_eq!(monthly["result"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[tokio::test]
async fn empty_revenue_window_is_rejected() -> Result<()> {
    let backend = TestBackend::spawn().await?;
    let console = backend.console()?;

    let err = console
        .dashboard
        .refresh(DashboardMetric::MonthlyRevenue { months: 0 })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert!(console.dashboard.store(DashboardMetric::MonthlyRevenue { months: 0 }).is_empty());
    Ok(())
}
