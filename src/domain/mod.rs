//! Service-center domain types.
//!
//! Plain data carried between the record store and its callers. None of
//! these types validate their contents: VINs, dates and status text are
//! stored exactly as given.

mod appointment;
mod assignment;
mod mechanic;
mod service_record;
mod summary;

pub use appointment::{Appointment, AppointmentStatus};
pub use assignment::Assignment;
pub use mechanic::Mechanic;
pub use service_record::ServiceRecord;
pub use summary::{DashboardMetrics, SummaryFilter, VehicleStatus, VehicleSummary};
