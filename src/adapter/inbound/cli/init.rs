//! Handler for `init`.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::session::Session;
use crate::adapter::outbound::sqlite::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use crate::error::Result;

/// Create or open the database and report what is in it.
pub fn execute(session: &Session) -> Result<()> {
    let config = session.config();
    let mut store = session.open_store()?;
    let users = store.count_users()?;
    let metrics = store.dashboard_metrics()?;
    let admin_is_default = store.verify_login(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD);

    if admin_is_default {
        output::warning("The admin account uses the default password");
    }

    let schema = config
        .database
        .schema_path
        .as_ref()
        .map_or_else(|| "bundled".to_string(), |path| path.display().to_string());

    if output::is_json() {
        output::json_output(json!({
            "command": "init",
            "database": config.database.path.display().to_string(),
            "schema": schema,
            "users": users,
            "service_records": metrics.service_records,
            "default_admin_password": admin_is_default,
        }));
        return Ok(());
    }

    output::success(&format!(
        "Database ready at {}",
        output::highlight(config.database.path.display())
    ));
    output::field("Schema", &schema);
    output::field("Users", users);
    output::field("Service records", metrics.service_records);
    output::field("Service interval", format!("{} days", config.service.interval_days));
    if admin_is_default {
        output::hint("run `servicebay user passwd admin` to change it");
    }
    Ok(())
}
