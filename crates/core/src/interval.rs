//! Half-open time interval semantics.
//!
//! Every reservation occupies `[start, end)`: a booking ending at 10:00 and
//! another starting at 10:00 in the same room do not collide. Both the
//! availability query in `roomease-db` and the pure checks here must agree
//! on this predicate.

use crate::error::CoreError;
use crate::types::Timestamp;

/// Two half-open intervals `[s1, e1)` and `[s2, e2)` overlap iff
/// `s1 < e2 && e1 > s2`. Touching endpoints do not count.
pub fn overlaps(s1: Timestamp, e1: Timestamp, s2: Timestamp, e2: Timestamp) -> bool {
    s1 < e2 && e1 > s2
}

/// Validate that an interval is well-formed (`end > start`).
///
/// Zero-length intervals are rejected: they cannot occupy a slot and would
/// otherwise silently pass every overlap check.
pub fn validate_interval(start: Timestamp, end: Timestamp) -> Result<(), CoreError> {
    if end <= start {
        return Err(CoreError::Validation(
            "End time must be after start time.".to_string(),
        ));
    }
    Ok(())
}
