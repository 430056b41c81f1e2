use serde::Serialize;

/// A mechanic on staff.
///
/// `active` only filters listings; removal is always a hard delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mechanic {
    pub id: i32,
    pub name: String,
    pub skill: String,
    pub active: bool,
}

impl Mechanic {
    pub fn new(name: impl Into<String>, skill: impl Into<String>, active: bool) -> Self {
        Self {
            id: 0,
            name: name.into(),
            skill: skill.into(),
            active,
        }
    }
}

impl Default for Mechanic {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            skill: String::new(),
            active: true,
        }
    }
}
