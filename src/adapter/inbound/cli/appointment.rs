//! Handlers for the `appointment` and `assignment` command groups.

use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::command::{
    AppointmentArgs, AssignmentArgs, AssignmentCompleteArgs, MechanicIdArg, VinArg,
};
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::session::{now, Session};
use crate::domain::{Appointment, Assignment};
use crate::error::Result;

#[derive(Tabled)]
struct AppointmentRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "VIN")]
    vin: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Scheduled")]
    scheduled_at: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<Appointment> for AppointmentRow {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            vin: appointment.vin,
            customer: appointment.customer_name,
            scheduled_at: appointment.scheduled_at,
            status: appointment.status,
        }
    }
}

#[derive(Tabled)]
struct AssignmentRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Appointment")]
    appointment_id: i32,
    #[tabled(rename = "Mechanic")]
    mechanic_id: i32,
    #[tabled(rename = "Assigned")]
    assigned_at: String,
    #[tabled(rename = "Completed")]
    completed_at: String,
}

impl From<Assignment> for AssignmentRow {
    fn from(assignment: Assignment) -> Self {
        let open = assignment.is_open();
        Self {
            id: assignment.id,
            appointment_id: assignment.appointment_id,
            mechanic_id: assignment.mechanic_id,
            assigned_at: assignment.assigned_at,
            completed_at: if open {
                "open".into()
            } else {
                assignment.completed_at.unwrap_or_default()
            },
        }
    }
}

/// Execute `appointment add`.
pub fn execute_add(session: &Session, args: AppointmentArgs) -> Result<()> {
    let mut store = session.open_store()?;
    let mut appointment = Appointment::new(args.vin, args.customer, args.at, args.status);
    appointment.id = store.add_appointment(&appointment)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "appointment.add",
            "appointment": appointment,
        }));
        return Ok(());
    }

    output::success(&format!(
        "Booked appointment {} for {} at {}",
        output::highlight(appointment.id),
        appointment.vin,
        appointment.scheduled_at
    ));
    if appointment.known_status().is_none() {
        output::warning(&format!(
            "Status '{}' is not one of scheduled, in_progress, done, cancelled",
            appointment.status
        ));
    }
    Ok(())
}

/// Execute `appointment list`.
pub fn execute_list(session: &Session, args: VinArg) -> Result<()> {
    let mut store = session.open_store()?;
    let appointments = store.list_appointments_by_vin(&args.vin)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "appointment.list",
            "vin": args.vin,
            "appointments": appointments,
        }));
        return Ok(());
    }

    output::section(&format!("Appointments for {}", args.vin));
    let rows: Vec<AppointmentRow> = appointments.into_iter().map(AppointmentRow::from).collect();
    output::table(rows, "No appointments for this VIN");
    Ok(())
}

/// Execute `assignment add`.
pub fn execute_assign(session: &Session, args: AssignmentArgs) -> Result<()> {
    let mut store = session.open_store()?;
    let assigned_at = args.at.unwrap_or_else(now);
    let mut assignment = Assignment::new(args.appointment, args.mechanic, assigned_at);
    assignment.id = store.add_assignment(&assignment)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "assignment.add",
            "assignment": assignment,
        }));
        return Ok(());
    }

    output::success(&format!(
        "Assigned mechanic {} to appointment {} (assignment {})",
        assignment.mechanic_id,
        assignment.appointment_id,
        output::highlight(assignment.id)
    ));
    Ok(())
}

/// Execute `assignment list`.
pub fn execute_assignments(session: &Session, args: MechanicIdArg) -> Result<()> {
    let mut store = session.open_store()?;
    let assignments = store.list_assignments_by_mechanic(args.mechanic_id)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "assignment.list",
            "mechanic_id": args.mechanic_id,
            "assignments": assignments,
        }));
        return Ok(());
    }

    output::section(&format!("Assignments for mechanic {}", args.mechanic_id));
    let rows: Vec<AssignmentRow> = assignments.into_iter().map(AssignmentRow::from).collect();
    output::table(rows, "No assignments for this mechanic");
    Ok(())
}

/// Execute `assignment complete`.
pub fn execute_complete(session: &Session, args: AssignmentCompleteArgs) -> Result<()> {
    let mut store = session.open_store()?;
    let completed_at = args.at.unwrap_or_else(now);
    store.complete_assignment(args.id, &completed_at)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "assignment.complete",
            "id": args.id,
            "completed_at": completed_at,
        }));
        return Ok(());
    }

    output::success(&format!(
        "Completed assignment {} at {completed_at}",
        output::highlight(args.id)
    ));
    Ok(())
}
