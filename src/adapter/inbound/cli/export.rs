//! Handlers for the `export` command group.

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::adapter::inbound::cli::command::{ExportHistoryArgs, OutputArg};
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::session::Session;
use crate::error::Result;

/// Default file name for a single vehicle's history.
fn history_file_name(vin: &str) -> String {
    let safe: String = vin
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("service_history_{safe}.csv")
}

fn resolve(session: &Session, output: OutputArg, default_name: &str) -> PathBuf {
    output
        .output
        .unwrap_or_else(|| session.export_path(default_name))
}

fn report(command: &str, path: &Path, rows: usize) {
    if output::is_json() {
        output::json_output(json!({
            "command": command,
            "path": path.display().to_string(),
            "rows": rows,
        }));
        return;
    }

    output::success(&format!(
        "Exported {} service records to {}",
        output::highlight(rows),
        path.display()
    ));
}

/// Execute `export history`.
pub fn execute_history(session: &Session, args: ExportHistoryArgs) -> Result<()> {
    let path = resolve(session, args.output, &history_file_name(&args.vin));
    let mut store = session.open_store()?;
    let rows = store.export_service_history_csv(&args.vin, &path)?;
    report("export.history", &path, rows);
    Ok(())
}

/// Execute `export all`.
pub fn execute_all(session: &Session, args: OutputArg) -> Result<()> {
    let path = resolve(session, args, "service_records.csv");
    let mut store = session.open_store()?;
    let rows = store.export_all_service_records_csv(&path)?;
    report("export.all", &path, rows);
    Ok(())
}
