//! Activity dispatch: which entry collection fills the day slots.

use crate::core::fields::ACTIVITY_ORGANIST;

/// Outcome of inspecting the "Tätigkeit" header value.
///
/// Total over all inputs, exactly three branches:
/// the reserved organist marker selects the service collection, any
/// other non-empty text selects the work-shift collection, and an
/// empty value selects nothing (header fields are still written, day
/// slots stay untouched).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Services,
    Shifts,
    None,
}

impl Activity {
    pub fn from_header(value: &str) -> Self {
        let value = value.trim();
        if value == ACTIVITY_ORGANIST {
            Activity::Services
        } else if !value.is_empty() {
            Activity::Shifts
        } else {
            Activity::None
        }
    }
}
