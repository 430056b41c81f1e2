//! SQLite record store.
//!
//! [`RecordStore`] owns one SQLite connection and exposes typed CRUD over
//! service records, mechanics, appointments and assignments. Authentication
//! and reporting live in sibling modules as further `impl` blocks.

use std::path::Path;

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, warn};

use crate::adapter::outbound::sqlite::database::connection::{
    configure_sqlite_connection, establish, execute_batch, last_insert_rowid,
};
use crate::adapter::outbound::sqlite::database::model::{
    AppointmentRow, AssignmentRow, MechanicRow, NewAppointmentRow, NewAssignmentRow,
    NewMechanicRow, NewServiceRecordRow, ServiceRecordRow,
};
use crate::adapter::outbound::sqlite::database::schema::{
    appointments, assignments, mechanics, service_records,
};
use crate::domain::{Appointment, Assignment, Mechanic, ServiceRecord};
use crate::error::{StoreError, StoreResult};

/// Days added to a vehicle's last service date to estimate the next one.
pub const DEFAULT_SERVICE_INTERVAL_DAYS: u32 = 180;

/// Persistence layer over a single SQLite database file.
///
/// The store is move-only: the connection it holds is released exactly once,
/// either by [`RecordStore::close`] or when the value is dropped. All methods
/// take `&mut self`, so a store cannot be used from two places at once.
///
/// Every failing operation also records its error, retrievable through
/// [`RecordStore::last_error`] until the next failure replaces it.
pub struct RecordStore {
    conn: Option<SqliteConnection>,
    last_error: Option<StoreError>,
    service_interval_days: u32,
}

impl RecordStore {
    /// Open the database at `path`, creating the file if it is missing.
    ///
    /// The schema is not applied; call [`RecordStore::initialize_schema`]
    /// or [`RecordStore::initialize_schema_from_file`] next.
    ///
    /// # Errors
    /// Returns [`StoreError::ConnectionFailed`] if the engine cannot open the
    /// path.
    pub fn open_or_create(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let mut conn = establish(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "Failed to open database");
            e
        })?;
        if let Err(e) = configure_sqlite_connection(&mut conn) {
            warn!(error = %e, "Failed to configure SQLite connection");
        }
        debug!(path = %path.display(), "Opened database");

        Ok(Self {
            conn: Some(conn),
            last_error: None,
            service_interval_days: DEFAULT_SERVICE_INTERVAL_DAYS,
        })
    }

    /// Open a private in-memory database.
    ///
    /// # Errors
    /// Returns [`StoreError::ConnectionFailed`] if SQLite refuses.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::open_or_create(":memory:")
    }

    /// Release the connection. Safe to call more than once.
    pub fn close(&mut self) {
        if self.conn.take().is_some() {
            debug!("Closed database");
        }
    }

    /// Whether a connection is currently held.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// The most recent failure reported by any operation.
    #[must_use]
    pub fn last_error(&self) -> Option<&StoreError> {
        self.last_error.as_ref()
    }

    /// Forget the recorded failure.
    pub fn clear_last_error(&mut self) {
        self.last_error = None;
    }

    /// Days added to the last service date when estimating the next one.
    #[must_use]
    pub fn service_interval_days(&self) -> u32 {
        self.service_interval_days
    }

    /// Replace the interval used by vehicle summaries.
    pub fn set_service_interval_days(&mut self, days: u32) {
        self.service_interval_days = days;
    }

    /// Execute a batch of DDL statements supplied by the caller.
    ///
    /// A failure leaves whatever statements ran before it applied; the store
    /// stays usable against the partial schema.
    ///
    /// # Errors
    /// Returns [`StoreError::StatementFailed`] with the engine's message.
    pub fn initialize_schema(&mut self, ddl: &str) -> StoreResult<()> {
        self.run("initialize_schema", |conn| execute_batch(conn, ddl))
    }

    /// Read a DDL file in full and execute it as one batch.
    ///
    /// # Errors
    /// Returns [`StoreError::IoFailed`] if the file cannot be read, otherwise
    /// as [`RecordStore::initialize_schema`].
    pub fn initialize_schema_from_file(&mut self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(ddl) => self.initialize_schema(&ddl),
            Err(_) => {
                let err = StoreError::IoFailed(format!(
                    "Cannot open schema file: {}",
                    path.display()
                ));
                self.fail("initialize_schema", err)
            }
        }
    }

    /// Run `op` against the open connection, recording and logging failure.
    pub(crate) fn run<T>(
        &mut self,
        operation: &'static str,
        op: impl FnOnce(&mut SqliteConnection) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let result = match self.conn.as_mut() {
            Some(conn) => op(conn),
            None => Err(StoreError::NotAvailable(
                "database connection is closed".into(),
            )),
        };
        match result {
            Ok(value) => Ok(value),
            Err(e) => self.fail(operation, e),
        }
    }

    pub(crate) fn fail<T>(&mut self, operation: &'static str, err: StoreError) -> StoreResult<T> {
        warn!(operation, error = %err, "Record store operation failed");
        self.last_error = Some(err.clone());
        Err(err)
    }

    // -------------------------------------------------------------------------
    // Service records
    // -------------------------------------------------------------------------

    /// Insert a service record and return its generated id.
    ///
    /// `record.id` is ignored.
    ///
    /// # Errors
    /// Returns [`StoreError::StatementFailed`] if the insert is rejected.
    pub fn add_service_record(&mut self, record: &ServiceRecord) -> StoreResult<i32> {
        let id = self.run("add_service_record", |conn| {
            diesel::insert_into(service_records::table)
                .values(NewServiceRecordRow::from(record))
                .execute(conn)?;
            last_insert_rowid(conn)
        })?;
        debug!(id, vin = %record.vin, "Added service record");
        Ok(id)
    }

    /// Overwrite every field of the record with `record.id`.
    ///
    /// # Errors
    /// Returns [`StoreError::StatementFailed`] if no record has that id.
    pub fn update_service_record(&mut self, record: &ServiceRecord) -> StoreResult<()> {
        self.run("update_service_record", |conn| {
            let updated = diesel::update(service_records::table.find(record.id))
                .set(&NewServiceRecordRow::from(record))
                .execute(conn)?;
            require_row(updated, format!("service record with id {}", record.id))
        })
    }

    /// Records for one VIN, newest service date first, then newest id first.
    ///
    /// # Errors
    /// Returns an error only if the query itself fails.
    pub fn list_service_records_by_vin(&mut self, vin: &str) -> StoreResult<Vec<ServiceRecord>> {
        self.run("list_service_records_by_vin", |conn| {
            let rows: Vec<ServiceRecordRow> = service_records::table
                .filter(service_records::vin.eq(vin))
                .order((service_records::service_date.desc(), service_records::id.desc()))
                .select(ServiceRecordRow::as_select())
                .load(conn)?;
            Ok(rows.into_iter().map(ServiceRecord::from).collect())
        })
    }

    // -------------------------------------------------------------------------
    // Mechanics
    // -------------------------------------------------------------------------

    /// Insert a mechanic and return the generated id.
    ///
    /// # Errors
    /// Returns [`StoreError::StatementFailed`] if the insert is rejected.
    pub fn add_mechanic(&mut self, mechanic: &Mechanic) -> StoreResult<i32> {
        let id = self.run("add_mechanic", |conn| {
            diesel::insert_into(mechanics::table)
                .values(NewMechanicRow::from(mechanic))
                .execute(conn)?;
            last_insert_rowid(conn)
        })?;
        debug!(id, name = %mechanic.name, "Added mechanic");
        Ok(id)
    }

    /// Mechanics ordered by name; `only_active` hides inactive ones.
    ///
    /// # Errors
    /// Returns an error only if the query itself fails.
    pub fn list_mechanics(&mut self, only_active: bool) -> StoreResult<Vec<Mechanic>> {
        self.run("list_mechanics", |conn| {
            let mut query = mechanics::table
                .order((mechanics::name.asc(), mechanics::id.asc()))
                .select(MechanicRow::as_select())
                .into_boxed();
            if only_active {
                query = query.filter(mechanics::active.eq(true));
            }
            let rows: Vec<MechanicRow> = query.load(conn)?;
            Ok(rows.into_iter().map(Mechanic::from).collect())
        })
    }

    /// Overwrite name, skill and active flag of the mechanic with `mechanic.id`.
    ///
    /// # Errors
    /// Returns [`StoreError::StatementFailed`] if no mechanic has that id.
    pub fn update_mechanic(&mut self, mechanic: &Mechanic) -> StoreResult<()> {
        self.run("update_mechanic", |conn| {
            let updated = diesel::update(mechanics::table.find(mechanic.id))
                .set(&NewMechanicRow::from(mechanic))
                .execute(conn)?;
            require_row(updated, format!("mechanic with id {}", mechanic.id))
        })
    }

    /// Hard-delete a mechanic.
    ///
    /// Assignments that reference the mechanic are left untouched.
    ///
    /// # Errors
    /// Returns [`StoreError::StatementFailed`] if no mechanic has that id.
    pub fn delete_mechanic(&mut self, mechanic_id: i32) -> StoreResult<()> {
        self.run("delete_mechanic", |conn| {
            let deleted = diesel::delete(mechanics::table.find(mechanic_id)).execute(conn)?;
            require_row(deleted, format!("mechanic with id {mechanic_id}"))
        })?;
        debug!(id = mechanic_id, "Deleted mechanic");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Appointments
    // -------------------------------------------------------------------------

    /// Insert an appointment and return the generated id.
    ///
    /// # Errors
    /// Returns [`StoreError::StatementFailed`] if the insert is rejected.
    pub fn add_appointment(&mut self, appointment: &Appointment) -> StoreResult<i32> {
        let id = self.run("add_appointment", |conn| {
            diesel::insert_into(appointments::table)
                .values(NewAppointmentRow::from(appointment))
                .execute(conn)?;
            last_insert_rowid(conn)
        })?;
        debug!(id, vin = %appointment.vin, status = %appointment.status, "Added appointment");
        Ok(id)
    }

    /// Appointments for one VIN, latest scheduled time first, then newest id.
    ///
    /// # Errors
    /// Returns an error only if the query itself fails.
    pub fn list_appointments_by_vin(&mut self, vin: &str) -> StoreResult<Vec<Appointment>> {
        self.run("list_appointments_by_vin", |conn| {
            let rows: Vec<AppointmentRow> = appointments::table
                .filter(appointments::vin.eq(vin))
                .order((appointments::scheduled_at.desc(), appointments::id.desc()))
                .select(AppointmentRow::as_select())
                .load(conn)?;
            Ok(rows.into_iter().map(Appointment::from).collect())
        })
    }

    // -------------------------------------------------------------------------
    // Assignments
    // -------------------------------------------------------------------------

    /// Insert an assignment and return the generated id.
    ///
    /// # Errors
    /// Returns [`StoreError::StatementFailed`] if the insert is rejected.
    pub fn add_assignment(&mut self, assignment: &Assignment) -> StoreResult<i32> {
        let id = self.run("add_assignment", |conn| {
            diesel::insert_into(assignments::table)
                .values(NewAssignmentRow::from(assignment))
                .execute(conn)?;
            last_insert_rowid(conn)
        })?;
        debug!(
            id,
            appointment_id = assignment.appointment_id,
            mechanic_id = assignment.mechanic_id,
            "Added assignment"
        );
        Ok(id)
    }

    /// Set the completion time of an assignment.
    ///
    /// # Errors
    /// Returns [`StoreError::StatementFailed`] if no assignment has that id.
    pub fn complete_assignment(
        &mut self,
        assignment_id: i32,
        completed_at: &str,
    ) -> StoreResult<()> {
        self.run("complete_assignment", |conn| {
            let updated = diesel::update(assignments::table.find(assignment_id))
                .set(assignments::completed_at.eq(Some(completed_at)))
                .execute(conn)?;
            require_row(updated, format!("assignment with id {assignment_id}"))
        })
    }

    /// Assignments for one mechanic, latest assigned time first, then newest id.
    ///
    /// # Errors
    /// Returns an error only if the query itself fails.
    pub fn list_assignments_by_mechanic(
        &mut self,
        mechanic_id: i32,
    ) -> StoreResult<Vec<Assignment>> {
        self.run("list_assignments_by_mechanic", |conn| {
            let rows: Vec<AssignmentRow> = assignments::table
                .filter(assignments::mechanic_id.eq(mechanic_id))
                .order((assignments::assigned_at.desc(), assignments::id.desc()))
                .select(AssignmentRow::as_select())
                .load(conn)?;
            Ok(rows.into_iter().map(Assignment::from).collect())
        })
    }
}

impl Drop for RecordStore {
    fn drop(&mut self) {
        self.close();
    }
}

/// Turn a zero affected-row count into a failure.
pub(crate) fn require_row(affected: usize, target: String) -> StoreResult<()> {
    if affected == 0 {
        Err(StoreError::StatementFailed(format!("no {target}")))
    } else {
        Ok(())
    }
}
