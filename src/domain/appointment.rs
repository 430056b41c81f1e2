//! Workshop appointments.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A booked visit for a vehicle.
///
/// `status` is kept as text so that values outside [`AppointmentStatus`]
/// survive a round trip through the store unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Appointment {
    pub id: i32,
    pub vin: String,
    pub customer_name: String,
    /// ISO-8601 datetime, e.g. `2025-09-20T09:00:00`.
    pub scheduled_at: String,
    pub status: String,
}

impl Appointment {
    pub fn new(
        vin: impl Into<String>,
        customer_name: impl Into<String>,
        scheduled_at: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            vin: vin.into(),
            customer_name: customer_name.into(),
            scheduled_at: scheduled_at.into(),
            status: status.into(),
        }
    }

    /// Parsed status, or `None` for text outside the known vocabulary.
    #[must_use]
    pub fn known_status(&self) -> Option<AppointmentStatus> {
        self.status.parse().ok()
    }
}

/// The status values the service desk uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentStatus {
    Scheduled,
    InProgress,
    Done,
    Cancelled,
}

impl AppointmentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown appointment status: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_round_trips() {
        for status in [
            AppointmentStatus::Scheduled,
            AppointmentStatus::InProgress,
            AppointmentStatus::Done,
            AppointmentStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<AppointmentStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_kept_as_text() {
        let appt = Appointment::new("VIN1", "John Doe", "2025-09-20T09:00:00", "waiting_parts");
        assert_eq!(appt.status, "waiting_parts");
        assert_eq!(appt.known_status(), None);
    }
}
