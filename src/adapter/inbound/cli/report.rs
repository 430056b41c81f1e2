//! Handlers for the `report` command group.

use chrono::{Datelike, Local};
use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::command::{DashboardArgs, DateRangeArgs, VehicleReportArgs};
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::record::RecordRow;
use crate::adapter::inbound::cli::session::Session;
use crate::domain::{SummaryFilter, VehicleSummary};
use crate::error::Result;

#[derive(Tabled)]
struct VehicleRow {
    #[tabled(rename = "VIN")]
    vin: String,
    #[tabled(rename = "Last Service")]
    last_service: String,
    #[tabled(rename = "Mechanic")]
    mechanic: String,
    #[tabled(rename = "Next Service")]
    next_service: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<VehicleSummary> for VehicleRow {
    fn from(summary: VehicleSummary) -> Self {
        Self {
            vin: summary.vin,
            last_service: summary.last_service_date,
            mechanic: summary.mechanic,
            next_service: summary.next_service.unwrap_or_else(|| "-".into()),
            status: summary.status.to_string(),
        }
    }
}

/// First and last day of the current calendar year.
fn current_year_bounds() -> (String, String) {
    let year = Local::now().year();
    (format!("{year}-01-01"), format!("{year}-12-31"))
}

/// Execute `report count`.
pub fn execute_count(session: &Session, args: DateRangeArgs) -> Result<()> {
    let (year_start, year_end) = current_year_bounds();
    let from = args.from.unwrap_or(year_start);
    let to = args.to.unwrap_or(year_end);

    let mut store = session.open_store()?;
    let count = store.count_service_records_by_date_range(&from, &to)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "report.count",
            "from": from,
            "to": to,
            "count": count,
        }));
        return Ok(());
    }

    output::section("Service records");
    output::field("From", &from);
    output::field("To", &to);
    output::field("Count", output::highlight(count));
    Ok(())
}

/// Execute `report dashboard`.
pub fn execute_dashboard(session: &Session, args: DashboardArgs) -> Result<()> {
    let mut store = session.open_store()?;
    let metrics = store.dashboard_metrics()?;
    let recent = store.fetch_recent_service_records(args.recent.max(0))?;

    if output::is_json() {
        output::json_output(json!({
            "command": "report.dashboard",
            "metrics": metrics,
            "recent": recent,
        }));
        return Ok(());
    }

    output::section("Dashboard");
    output::field("Customers", metrics.distinct_customers);
    output::field("Active mechanics", metrics.active_mechanics);
    output::field("Appointments", metrics.appointments);
    output::field("Service records", metrics.service_records);

    output::section("Recent service");
    let rows: Vec<RecordRow> = recent.into_iter().map(RecordRow::from).collect();
    output::table(rows, "No service records yet");
    Ok(())
}

/// Execute `report vehicles`.
pub fn execute_vehicles(session: &Session, args: VehicleReportArgs) -> Result<()> {
    let filter = SummaryFilter {
        vin_like: args.vin.unwrap_or_default(),
        from_date: args.from,
        to_date: args.to,
        mechanic_like: args.mechanic,
        due_only: args.due,
    };

    let mut store = session.open_store()?;
    let summaries = store.list_vehicle_summaries(&filter)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "report.vehicles",
            "interval_days": store.service_interval_days(),
            "vehicles": summaries,
        }));
        return Ok(());
    }

    output::section("Vehicles");
    let rows: Vec<VehicleRow> = summaries.into_iter().map(VehicleRow::from).collect();
    output::table(rows, "No vehicles match");
    output::hint(&format!(
        "next service is the booked appointment, or last service + {} days",
        store.service_interval_days()
    ));
    Ok(())
}
