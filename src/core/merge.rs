//! Per-slot value merging for days that carry more than one entry.

/// Delimiter between multiple values landing in the same slot.
pub const JOIN_SEPARATOR: &str = " | ";

/// Concatenate two slot contributions in first-seen order.
///
/// Empty sides are skipped: empty+x = x, x+empty = x, empty+empty = "".
/// Applied per column only; when a day carries several entries, start
/// and end values are joined independently and readers must infer the
/// pairing by position.
pub fn join_values(existing: &str, new: &str) -> String {
    let existing = existing.trim();
    let new = new.trim();

    if existing.is_empty() {
        return new.to_string();
    }
    if new.is_empty() {
        return existing.to_string();
    }

    format!("{existing}{JOIN_SEPARATOR}{new}")
}
