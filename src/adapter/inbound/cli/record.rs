//! Handlers for the `record` command group.

use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::command::{RecordArgs, RecordUpdateArgs, VinArg};
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::session::{today, Session};
use crate::domain::ServiceRecord;
use crate::error::Result;

#[derive(Tabled)]
pub(crate) struct RecordRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "VIN")]
    vin: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Mechanic")]
    mechanic: String,
}

impl From<ServiceRecord> for RecordRow {
    fn from(record: ServiceRecord) -> Self {
        Self {
            id: record.id,
            vin: record.vin,
            customer: record.customer_name,
            date: record.service_date,
            description: record.description,
            mechanic: record.mechanic,
        }
    }
}

fn to_record(args: RecordArgs) -> ServiceRecord {
    ServiceRecord::new(
        args.vin,
        args.customer,
        args.date.unwrap_or_else(today),
        args.description,
        args.mechanic,
    )
}

/// Execute `record add`.
pub fn execute_add(session: &Session, args: RecordArgs) -> Result<()> {
    let mut store = session.open_store()?;
    let mut record = to_record(args);
    record.id = store.add_service_record(&record)?;

    if output::is_json() {
        output::json_output(json!({ "command": "record.add", "record": record }));
        return Ok(());
    }

    output::success(&format!(
        "Added service record {} for {}",
        output::highlight(record.id),
        record.vin
    ));
    Ok(())
}

/// Execute `record list`.
pub fn execute_list(session: &Session, args: VinArg) -> Result<()> {
    let mut store = session.open_store()?;
    let records = store.list_service_records_by_vin(&args.vin)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "record.list",
            "vin": args.vin,
            "records": records,
        }));
        return Ok(());
    }

    output::section(&format!("Service history for {}", args.vin));
    let rows: Vec<RecordRow> = records.into_iter().map(RecordRow::from).collect();
    output::table(rows, "No service records for this VIN");
    Ok(())
}

/// Execute `record update`.
pub fn execute_update(session: &Session, args: RecordUpdateArgs) -> Result<()> {
    let mut store = session.open_store()?;
    let mut record = to_record(args.record);
    record.id = args.id;
    store.update_service_record(&record)?;

    if output::is_json() {
        output::json_output(json!({ "command": "record.update", "record": record }));
        return Ok(());
    }

    output::success(&format!("Updated service record {}", output::highlight(record.id)));
    Ok(())
}
