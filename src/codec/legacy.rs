//! Versioned compatibility shim for pre-grammar context annotations.
//!
//! The first generation of the platform wrote context annotations from a
//! fixed literal table rather than a grammar. Records written back then
//! still exist, so the table is kept as a decoder. It never writes.

use crate::models::AttendanceStatus;

use super::{Annotation, AnnotationCodec};

/// Literal-table decoder for first-generation annotations.
#[derive(Debug, Clone, Copy)]
pub struct LegacyTableCodec {
    version: &'static str,
}

impl LegacyTableCodec {
    /// The v1 table, matching what the first record writer produced.
    pub fn v1() -> Self {
        Self { version: "legacy-v1" }
    }

    fn lookup(raw: &str) -> Option<AttendanceStatus> {
        let status = match raw {
            "P" => AttendanceStatus::Present,
            "A" => AttendanceStatus::Absent,
            "WO" => AttendanceStatus::Weekoff,
            "WOP" => AttendanceStatus::WeekoffPresent,
            "H" => AttendanceStatus::Holiday,
            "HP" => AttendanceStatus::HolidayPresent,
            "WFH" => AttendanceStatus::WorkFromHome,
            "P(OD)" => AttendanceStatus::OnDuty,
            "1/2CL" => AttendanceStatus::HalfDay,
            "PL" => AttendanceStatus::PaidLeave,
            "UL" => AttendanceStatus::UnPaidLeave,
            _ => return None,
        };
        Some(status)
    }
}

impl AnnotationCodec for LegacyTableCodec {
    fn decode(&self, raw: &str) -> Option<Annotation> {
        Self::lookup(raw).map(|status| Annotation {
            status,
            deductions: Vec::new(),
        })
    }

    fn version(&self) -> &'static str {
        self.version
    }
}
