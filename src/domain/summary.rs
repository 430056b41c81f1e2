//! Read-only projections for the dashboard.

use std::fmt;

use serde::Serialize;

/// Service state of a vehicle as shown on the dashboard grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    /// A `scheduled` appointment exists for the vehicle.
    Scheduled,
    /// The next service date is today or already past.
    Due,
    Ok,
}

impl VehicleStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Due => "due",
            Self::Ok => "ok",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row per VIN, derived from its newest service record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleSummary {
    pub vin: String,
    /// Blank: there is no vehicle master data to take it from.
    pub make: String,
    /// Blank: there is no vehicle master data to take it from.
    pub model: String,
    pub last_service_date: String,
    pub mechanic: String,
    /// `YYYY-MM-DD` of the next expected visit, when one can be worked out.
    pub next_service: Option<String>,
    pub status: VehicleStatus,
}

/// Filters for [`VehicleSummary`] listings.
///
/// Empty patterns and `None` bounds match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryFilter {
    /// Substring of the VIN.
    pub vin_like: String,
    /// Inclusive lower bound on the last service date.
    pub from_date: Option<String>,
    /// Inclusive upper bound on the last service date.
    pub to_date: Option<String>,
    /// Case-insensitive substring of the last mechanic's name.
    pub mechanic_like: Option<String>,
    /// Keep only vehicles whose status is [`VehicleStatus::Due`].
    pub due_only: bool,
}

/// Headline counts for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub distinct_customers: i64,
    pub active_mechanics: i64,
    pub appointments: i64,
    pub service_records: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_matches_json() {
        for status in [VehicleStatus::Scheduled, VehicleStatus::Due, VehicleStatus::Ok] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }
}
