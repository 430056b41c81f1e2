//! SQLite read-side reports.
//!
//! CSV exports, date-range counts, dashboard metrics and the per-vehicle
//! summary grid. Everything here reads; nothing writes to the database.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{Days, Local, NaiveDate};
use diesel::dsl::count;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::adapter::outbound::csv::{write_header, write_service_record};
use crate::adapter::outbound::sqlite::database::model::{AppointmentRow, ServiceRecordRow};
use crate::adapter::outbound::sqlite::database::schema::{appointments, mechanics, service_records};
use crate::adapter::outbound::sqlite::store::RecordStore;
use crate::domain::{
    AppointmentStatus, DashboardMetrics, ServiceRecord, SummaryFilter, VehicleStatus,
    VehicleSummary,
};
use crate::error::{StoreError, StoreResult};

const ISO_DATE: &str = "%Y-%m-%d";

impl RecordStore {
    /// Write a VIN's service history to `path` as CSV, oldest first.
    ///
    /// Returns the number of data rows written.
    ///
    /// # Errors
    /// Returns [`StoreError::IoFailed`] if the file cannot be created or
    /// written, or a statement error if the query fails.
    pub fn export_service_history_csv(
        &mut self,
        vin: &str,
        path: impl AsRef<Path>,
    ) -> StoreResult<usize> {
        self.export_csv("export_service_history_csv", path.as_ref(), |conn| {
            Ok(service_records::table
                .filter(service_records::vin.eq(vin))
                .order((service_records::service_date.asc(), service_records::id.asc()))
                .select(ServiceRecordRow::as_select())
                .load::<ServiceRecordRow>(conn)?)
        })
    }

    /// Write every service record to `path` as CSV, oldest first.
    ///
    /// # Errors
    /// As [`RecordStore::export_service_history_csv`].
    pub fn export_all_service_records_csv(&mut self, path: impl AsRef<Path>) -> StoreResult<usize> {
        self.export_csv("export_all_service_records_csv", path.as_ref(), |conn| {
            Ok(service_records::table
                .order((service_records::service_date.asc(), service_records::id.asc()))
                .select(ServiceRecordRow::as_select())
                .load::<ServiceRecordRow>(conn)?)
        })
    }

    fn export_csv(
        &mut self,
        operation: &'static str,
        path: &Path,
        load: impl FnOnce(&mut SqliteConnection) -> StoreResult<Vec<ServiceRecordRow>>,
    ) -> StoreResult<usize> {
        let file = match File::create(path) {
            Ok(file) => file,
            Err(_) => {
                let err = StoreError::IoFailed(format!(
                    "Failed to open output file: {}",
                    path.display()
                ));
                return self.fail(operation, err);
            }
        };

        // Header goes out before the query so a failed load still leaves it.
        let mut out = BufWriter::new(file);
        if let Err(e) = write_header(&mut out).and_then(|()| out.flush()) {
            return self.write_failed(operation, path, &e);
        }

        let rows = self.run(operation, load)?;
        let records: Vec<ServiceRecord> = rows.into_iter().map(ServiceRecord::from).collect();

        let written = records
            .iter()
            .try_for_each(|record| write_service_record(&mut out, record))
            .and_then(|()| out.flush());
        if let Err(e) = written {
            return self.write_failed(operation, path, &e);
        }

        debug!(path = %path.display(), rows = records.len(), "Exported service records");
        Ok(records.len())
    }

    fn write_failed<T>(
        &mut self,
        operation: &'static str,
        path: &Path,
        e: &io::Error,
    ) -> StoreResult<T> {
        let err = StoreError::IoFailed(format!("Failed to write {}: {e}", path.display()));
        self.fail(operation, err)
    }

    /// Count records whose service date lies in `[start, end]`.
    ///
    /// Bounds are compared as text, which matches date order only for
    /// well-formed `YYYY-MM-DD` values.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn count_service_records_by_date_range(
        &mut self,
        start_inclusive: &str,
        end_inclusive: &str,
    ) -> StoreResult<i64> {
        self.run("count_service_records_by_date_range", |conn| {
            Ok(service_records::table
                .filter(service_records::service_date.ge(start_inclusive))
                .filter(service_records::service_date.le(end_inclusive))
                .count()
                .get_result::<i64>(conn)?)
        })
    }

    /// Distinct customer names across all service records.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn count_distinct_customers(&mut self) -> StoreResult<i64> {
        self.run("count_distinct_customers", |conn| {
            Ok(service_records::table
                .select(count(service_records::customer_name).aggregate_distinct())
                .first::<i64>(conn)?)
        })
    }

    /// # Errors
    /// Returns an error if the query fails.
    pub fn count_active_mechanics(&mut self) -> StoreResult<i64> {
        self.run("count_active_mechanics", |conn| {
            Ok(mechanics::table
                .filter(mechanics::active.eq(true))
                .count()
                .get_result::<i64>(conn)?)
        })
    }

    /// # Errors
    /// Returns an error if the query fails.
    pub fn count_appointments(&mut self) -> StoreResult<i64> {
        self.run("count_appointments", |conn| {
            Ok(appointments::table.count().get_result::<i64>(conn)?)
        })
    }

    /// # Errors
    /// Returns an error if the query fails.
    pub fn count_service_records(&mut self) -> StoreResult<i64> {
        self.run("count_service_records", |conn| {
            Ok(service_records::table.count().get_result::<i64>(conn)?)
        })
    }

    /// The `limit` most recent service records across all vehicles.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn fetch_recent_service_records(&mut self, limit: i64) -> StoreResult<Vec<ServiceRecord>> {
        self.run("fetch_recent_service_records", |conn| {
            let rows: Vec<ServiceRecordRow> = service_records::table
                .order((service_records::service_date.desc(), service_records::id.desc()))
                .limit(limit)
                .select(ServiceRecordRow::as_select())
                .load(conn)?;
            Ok(rows.into_iter().map(ServiceRecord::from).collect())
        })
    }

    /// All dashboard counters in one call.
    ///
    /// # Errors
    /// Returns the first failing count's error.
    pub fn dashboard_metrics(&mut self) -> StoreResult<DashboardMetrics> {
        Ok(DashboardMetrics {
            distinct_customers: self.count_distinct_customers()?,
            active_mechanics: self.count_active_mechanics()?,
            appointments: self.count_appointments()?,
            service_records: self.count_service_records()?,
        })
    }

    /// One summary row per vehicle, judged against today's local date.
    ///
    /// # Errors
    /// Returns an error if a query fails.
    pub fn list_vehicle_summaries(
        &mut self,
        filter: &SummaryFilter,
    ) -> StoreResult<Vec<VehicleSummary>> {
        self.list_vehicle_summaries_as_of(filter, Local::now().date_naive())
    }

    /// One summary row per vehicle, judged against `today`.
    ///
    /// # Errors
    /// Returns an error if a query fails.
    pub fn list_vehicle_summaries_as_of(
        &mut self,
        filter: &SummaryFilter,
        today: NaiveDate,
    ) -> StoreResult<Vec<VehicleSummary>> {
        let interval_days = self.service_interval_days();
        let (records, scheduled) = self.run("list_vehicle_summaries", |conn| {
            let records: Vec<ServiceRecordRow> = service_records::table
                .order((
                    service_records::vin.asc(),
                    service_records::service_date.desc(),
                    service_records::id.desc(),
                ))
                .select(ServiceRecordRow::as_select())
                .load(conn)?;

            let scheduled: Vec<AppointmentRow> = appointments::table
                .filter(appointments::status.eq(AppointmentStatus::Scheduled.as_str()))
                .order((appointments::scheduled_at.asc(), appointments::id.asc()))
                .select(AppointmentRow::as_select())
                .load(conn)?;

            Ok((records, scheduled))
        })?;

        Ok(summarize(&records, &scheduled, filter, today, interval_days))
    }
}

/// Fold newest-first records (grouped by VIN) into filtered summary rows.
fn summarize(
    records: &[ServiceRecordRow],
    scheduled: &[AppointmentRow],
    filter: &SummaryFilter,
    today: NaiveDate,
    interval_days: u32,
) -> Vec<VehicleSummary> {
    // Earliest scheduled visit per VIN; input is sorted ascending.
    let mut next_visit: HashMap<&str, &str> = HashMap::new();
    for appointment in scheduled {
        next_visit
            .entry(appointment.vin.as_str())
            .or_insert_with(|| date_part(&appointment.scheduled_at));
    }

    let mechanic_like = filter
        .mechanic_like
        .as_deref()
        .filter(|pattern| !pattern.is_empty())
        .map(str::to_lowercase);

    let mut summaries = Vec::new();
    let mut previous_vin: Option<&str> = None;
    for latest in records {
        if previous_vin == Some(latest.vin.as_str()) {
            continue;
        }
        previous_vin = Some(latest.vin.as_str());

        // Literal, case-sensitive match: VINs are compared exactly as stored.
        if !latest.vin.contains(filter.vin_like.as_str()) {
            continue;
        }

        let last = latest.service_date.as_str();
        if filter.from_date.as_deref().is_some_and(|from| last < from) {
            continue;
        }
        if filter.to_date.as_deref().is_some_and(|to| last > to) {
            continue;
        }
        if let Some(pattern) = &mechanic_like {
            if !latest.mechanic.to_lowercase().contains(pattern.as_str()) {
                continue;
            }
        }

        let booked = next_visit.get(latest.vin.as_str()).copied();
        let next_service = match booked {
            Some(date) => Some(date.to_string()),
            None => estimate_next_service(last, interval_days),
        };
        let status = if booked.is_some() {
            VehicleStatus::Scheduled
        } else if next_service
            .as_deref()
            .and_then(|next| NaiveDate::parse_from_str(next, ISO_DATE).ok())
            .is_some_and(|next| next <= today)
        {
            VehicleStatus::Due
        } else {
            VehicleStatus::Ok
        };

        if filter.due_only && status != VehicleStatus::Due {
            continue;
        }

        summaries.push(VehicleSummary {
            vin: latest.vin.clone(),
            make: String::new(),
            model: String::new(),
            last_service_date: latest.service_date.clone(),
            mechanic: latest.mechanic.clone(),
            next_service,
            status,
        });
    }
    summaries
}

/// `YYYY-MM-DD` of the last service plus the interval, if the date parses.
fn estimate_next_service(last_service_date: &str, interval_days: u32) -> Option<String> {
    NaiveDate::parse_from_str(last_service_date, ISO_DATE)
        .ok()?
        .checked_add_days(Days::new(u64::from(interval_days)))
        .map(|next| next.format(ISO_DATE).to_string())
}

/// Date portion of an ISO-8601 datetime (`2025-09-20T09:00:00` -> `2025-09-20`).
fn date_part(datetime: &str) -> &str {
    datetime.split(['T', ' ']).next().unwrap_or(datetime)
}
