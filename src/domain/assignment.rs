use serde::Serialize;

/// Links a mechanic to an appointment.
///
/// An assignment is open while `completed_at` is `None`. The ids are not
/// checked against their tables; a deleted mechanic leaves its assignments
/// pointing at nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub id: i32,
    pub appointment_id: i32,
    pub mechanic_id: i32,
    /// ISO-8601 datetime.
    pub assigned_at: String,
    /// ISO-8601 datetime, present once the work is finished.
    pub completed_at: Option<String>,
}

impl Assignment {
    /// Creates an open assignment.
    pub fn new(appointment_id: i32, mechanic_id: i32, assigned_at: impl Into<String>) -> Self {
        Self {
            id: 0,
            appointment_id,
            mechanic_id,
            assigned_at: assigned_at.into(),
            completed_at: None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.completed_at.is_none()
    }
}
