//! Service history entries.

use serde::Serialize;

/// One service event for a vehicle.
///
/// A VIN may appear on many records; that is how a vehicle's history is
/// built up. `mechanic` is free text rather than a reference into the
/// mechanics table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceRecord {
    /// Database row id. Ignored on insert.
    pub id: i32,
    pub vin: String,
    pub customer_name: String,
    /// ISO-8601 date (`YYYY-MM-DD`).
    pub service_date: String,
    pub description: String,
    pub mechanic: String,
}

impl ServiceRecord {
    /// Creates a record that has not been stored yet.
    pub fn new(
        vin: impl Into<String>,
        customer_name: impl Into<String>,
        service_date: impl Into<String>,
        description: impl Into<String>,
        mechanic: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            vin: vin.into(),
            customer_name: customer_name.into(),
            service_date: service_date.into(),
            description: description.into(),
            mechanic: mechanic.into(),
        }
    }
}
