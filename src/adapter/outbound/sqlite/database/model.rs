//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{appointments, assignments, mechanics, service_records, users};
use crate::domain::{Appointment, Assignment, Mechanic, ServiceRecord};

/// Database row for a service record (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = service_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ServiceRecordRow {
    pub id: i32,
    pub vin: String,
    pub customer_name: String,
    pub service_date: String,
    pub description: String,
    pub mechanic: String,
}

/// Database row for a service record (insertable and updatable).
#[derive(Insertable, AsChangeset, Debug, Clone, Copy)]
#[diesel(table_name = service_records)]
pub struct NewServiceRecordRow<'a> {
    pub vin: &'a str,
    pub customer_name: &'a str,
    pub service_date: &'a str,
    pub description: &'a str,
    pub mechanic: &'a str,
}

impl<'a> From<&'a ServiceRecord> for NewServiceRecordRow<'a> {
    fn from(record: &'a ServiceRecord) -> Self {
        Self {
            vin: &record.vin,
            customer_name: &record.customer_name,
            service_date: &record.service_date,
            description: &record.description,
            mechanic: &record.mechanic,
        }
    }
}

impl From<ServiceRecordRow> for ServiceRecord {
    fn from(row: ServiceRecordRow) -> Self {
        Self {
            id: row.id,
            vin: row.vin,
            customer_name: row.customer_name,
            service_date: row.service_date,
            description: row.description,
            mechanic: row.mechanic,
        }
    }
}

/// Database row for a mechanic (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = mechanics)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MechanicRow {
    pub id: i32,
    pub name: String,
    pub skill: String,
    pub active: bool,
}

/// Database row for a mechanic (insertable and updatable).
#[derive(Insertable, AsChangeset, Debug, Clone, Copy)]
#[diesel(table_name = mechanics)]
pub struct NewMechanicRow<'a> {
    pub name: &'a str,
    pub skill: &'a str,
    pub active: bool,
}

impl<'a> From<&'a Mechanic> for NewMechanicRow<'a> {
    fn from(mechanic: &'a Mechanic) -> Self {
        Self {
            name: &mechanic.name,
            skill: &mechanic.skill,
            active: mechanic.active,
        }
    }
}

impl From<MechanicRow> for Mechanic {
    fn from(row: MechanicRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            skill: row.skill,
            active: row.active,
        }
    }
}

/// Database row for an appointment (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = appointments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AppointmentRow {
    pub id: i32,
    pub vin: String,
    pub customer_name: String,
    pub scheduled_at: String,
    pub status: String,
}

/// Database row for an appointment (insertable).
#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = appointments)]
pub struct NewAppointmentRow<'a> {
    pub vin: &'a str,
    pub customer_name: &'a str,
    pub scheduled_at: &'a str,
    pub status: &'a str,
}

impl<'a> From<&'a Appointment> for NewAppointmentRow<'a> {
    fn from(appointment: &'a Appointment) -> Self {
        Self {
            vin: &appointment.vin,
            customer_name: &appointment.customer_name,
            scheduled_at: &appointment.scheduled_at,
            status: &appointment.status,
        }
    }
}

impl From<AppointmentRow> for Appointment {
    fn from(row: AppointmentRow) -> Self {
        Self {
            id: row.id,
            vin: row.vin,
            customer_name: row.customer_name,
            scheduled_at: row.scheduled_at,
            status: row.status,
        }
    }
}

/// Database row for an assignment (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = assignments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssignmentRow {
    pub id: i32,
    pub appointment_id: i32,
    pub mechanic_id: i32,
    pub assigned_at: String,
    pub completed_at: Option<String>,
}

/// Database row for an assignment (insertable).
#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = assignments)]
pub struct NewAssignmentRow<'a> {
    pub appointment_id: i32,
    pub mechanic_id: i32,
    pub assigned_at: &'a str,
    pub completed_at: Option<&'a str>,
}

impl<'a> From<&'a Assignment> for NewAssignmentRow<'a> {
    fn from(assignment: &'a Assignment) -> Self {
        Self {
            appointment_id: assignment.appointment_id,
            mechanic_id: assignment.mechanic_id,
            assigned_at: &assignment.assigned_at,
            completed_at: assignment.completed_at.as_deref(),
        }
    }
}

impl From<AssignmentRow> for Assignment {
    fn from(row: AssignmentRow) -> Self {
        Self {
            id: row.id,
            appointment_id: row.appointment_id,
            mechanic_id: row.mechanic_id,
            assigned_at: row.assigned_at,
            completed_at: row.completed_at,
        }
    }
}

/// Stored credentials for a user (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub salt: String,
}

/// Stored credentials for a user (insertable).
#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub salt: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assignment_row_keeps_missing_completion_as_null() {
        let assignment = Assignment::new(1, 2, "2025-09-19T12:00:00");
        let row = NewAssignmentRow::from(&assignment);
        assert_eq!(row.appointment_id, 1);
        assert_eq!(row.mechanic_id, 2);
        assert_eq!(row.completed_at, None);
    }

    #[test]
    fn service_record_row_converts_to_domain() {
        let row = ServiceRecordRow {
            id: 7,
            vin: "JT123TESTVIN00001".into(),
            customer_name: "John Doe".into(),
            service_date: "2025-09-16".into(),
            description: "Oil change and filter replacement".into(),
            mechanic: "A. Mechanic".into(),
        };
        let record = ServiceRecord::from(row);
        assert_eq!(record.id, 7);
        assert_eq!(record.vin, "JT123TESTVIN00001");
        assert_eq!(record.mechanic, "A. Mechanic");
    }

    #[test]
    fn new_mechanic_row_borrows_domain_fields() {
        let mechanic = Mechanic::new("Jane Smith", "Engine", true);
        let row = NewMechanicRow::from(&mechanic);
        assert_eq!(row.name, "Jane Smith");
        assert_eq!(row.skill, "Engine");
        assert!(row.active);
    }
}
