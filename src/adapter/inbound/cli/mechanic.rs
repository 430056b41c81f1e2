//! Handlers for the `mechanic` command group.

use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::command::{
    IdArg, MechanicArgs, MechanicListArgs, MechanicUpdateArgs,
};
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::session::Session;
use crate::domain::Mechanic;
use crate::error::Result;

#[derive(Tabled)]
struct MechanicRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Skill")]
    skill: String,
    #[tabled(rename = "Active")]
    active: &'static str,
}

impl From<Mechanic> for MechanicRow {
    fn from(mechanic: Mechanic) -> Self {
        Self {
            id: mechanic.id,
            name: mechanic.name,
            skill: mechanic.skill,
            active: if mechanic.active { "yes" } else { "no" },
        }
    }
}

fn to_mechanic(args: MechanicArgs) -> Mechanic {
    Mechanic::new(args.name, args.skill, !args.inactive)
}

/// Execute `mechanic add`.
pub fn execute_add(session: &Session, args: MechanicArgs) -> Result<()> {
    let mut store = session.open_store()?;
    let mut mechanic = to_mechanic(args);
    mechanic.id = store.add_mechanic(&mechanic)?;

    if output::is_json() {
        output::json_output(json!({ "command": "mechanic.add", "mechanic": mechanic }));
        return Ok(());
    }

    output::success(&format!(
        "Added mechanic {} ({})",
        output::highlight(mechanic.id),
        mechanic.name
    ));
    Ok(())
}

/// Execute `mechanic list`.
pub fn execute_list(session: &Session, args: MechanicListArgs) -> Result<()> {
    let mut store = session.open_store()?;
    let mechanics = store.list_mechanics(args.active)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "mechanic.list",
            "only_active": args.active,
            "mechanics": mechanics,
        }));
        return Ok(());
    }

    output::section(if args.active { "Active mechanics" } else { "Mechanics" });
    let rows: Vec<MechanicRow> = mechanics.into_iter().map(MechanicRow::from).collect();
    output::table(rows, "No mechanics");
    Ok(())
}

/// Execute `mechanic update`.
pub fn execute_update(session: &Session, args: MechanicUpdateArgs) -> Result<()> {
    let mut store = session.open_store()?;
    let mut mechanic = to_mechanic(args.mechanic);
    mechanic.id = args.id;
    store.update_mechanic(&mechanic)?;

    if output::is_json() {
        output::json_output(json!({ "command": "mechanic.update", "mechanic": mechanic }));
        return Ok(());
    }

    output::success(&format!("Updated mechanic {}", output::highlight(mechanic.id)));
    Ok(())
}

/// Execute `mechanic delete`.
pub fn execute_delete(session: &Session, args: IdArg) -> Result<()> {
    let mut store = session.open_store()?;
    store.delete_mechanic(args.id)?;

    if output::is_json() {
        output::json_output(json!({ "command": "mechanic.delete", "id": args.id }));
        return Ok(());
    }

    output::success(&format!("Deleted mechanic {}", output::highlight(args.id)));
    output::note("Assignments that referenced this mechanic are kept as they were.");
    Ok(())
}
