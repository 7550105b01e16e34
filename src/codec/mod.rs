//! Deduction annotation codec.
//!
//! The context annotation on an attendance record is a compact textual
//! encoding of the deductions applied to the day: a base status token
//! followed by zero or more `(<fraction><kind>)(<reason>)` groups, e.g.
//! `Present(1/2LOP)(DueToLate)(1/4CL)(WH)`.
//!
//! Two decoder generations exist in the platform's history. This module
//! settles on one canonical regex-based grammar (see [`CanonicalCodec`])
//! and keeps the old literal lookup table as a versioned compatibility
//! shim ([`LegacyTableCodec`]). Decoding never fails: strings neither
//! decoder recognizes are logged and fall back to the record's raw status.

mod annotation;
mod legacy;

use tracing::warn;

use crate::models::AttendanceStatus;

pub use annotation::{
    Annotation, CanonicalCodec, Deduction, DeductionFraction, DeductionKind, DeductionReason,
    encode_annotation,
};
pub use legacy::LegacyTableCodec;

/// A decoder for context annotation strings.
///
/// Implementations return `None` for strings outside their grammar;
/// callers decide on fallback behavior.
pub trait AnnotationCodec {
    /// Attempts to decode a raw context annotation.
    fn decode(&self, raw: &str) -> Option<Annotation>;

    /// The grammar version this codec implements.
    fn version(&self) -> &'static str;
}

/// Decodes a context annotation, falling back to the record's raw status.
///
/// Tries the canonical grammar first, then the legacy literal table.
/// Unrecognized strings are logged and mapped to an annotation carrying
/// the fallback status with no deductions; this function never fails.
///
/// # Example
///
/// ```
/// use attendance_engine::codec::decode_context;
/// use attendance_engine::models::AttendanceStatus;
///
/// let decoded = decode_context("Present(1/2LOP)(DueToLate)", AttendanceStatus::Present);
/// assert_eq!(decoded.status, AttendanceStatus::Present);
/// assert_eq!(decoded.deductions.len(), 1);
///
/// // Legacy literal
/// let decoded = decode_context("WFH", AttendanceStatus::Present);
/// assert_eq!(decoded.status, AttendanceStatus::WorkFromHome);
///
/// // Unrecognized: falls back to the stored status
/// let decoded = decode_context("???", AttendanceStatus::Absent);
/// assert_eq!(decoded.status, AttendanceStatus::Absent);
/// ```
pub fn decode_context(raw: &str, fallback: AttendanceStatus) -> Annotation {
    let canonical = CanonicalCodec::new();
    if let Some(annotation) = canonical.decode(raw) {
        return annotation;
    }

    let legacy = LegacyTableCodec::v1();
    if let Some(annotation) = legacy.decode(raw) {
        return annotation;
    }

    warn!(
        context = %raw,
        fallback = %fallback.as_code(),
        "unrecognized context annotation, falling back to record status"
    );
    Annotation {
        status: fallback,
        deductions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_context_prefers_canonical() {
        let decoded = decode_context("HolidayPresent", AttendanceStatus::Absent);
        assert_eq!(decoded.status, AttendanceStatus::HolidayPresent);
        assert!(decoded.deductions.is_empty());
    }

    #[test]
    fn test_decode_context_uses_legacy_table() {
        let decoded = decode_context("P(OD)", AttendanceStatus::Absent);
        assert_eq!(decoded.status, AttendanceStatus::OnDuty);
    }

    #[test]
    fn test_decode_context_falls_back_on_garbage() {
        let decoded = decode_context("not-an-annotation", AttendanceStatus::Weekoff);
        assert_eq!(decoded.status, AttendanceStatus::Weekoff);
        assert!(decoded.deductions.is_empty());
    }
}
