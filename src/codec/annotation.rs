//! Canonical annotation grammar: types, encoder, and regex decoder.
//!
//! Grammar (canonical, round-trip idempotent):
//!
//! ```text
//! annotation   := status_token group*
//! status_token := "Present" | "WeekoffPresent" | "HolidayPresent"
//! group        := "(" fraction? kind ")" "(" reason ")"
//! fraction     := "1/4" | "1/2" | "3/4"         (absent = whole unit)
//! kind         := "LOP" | HH:MM:00 | leave code (1-8 uppercase letters)
//! reason       := "DueToLate" | "Early" | "WH"
//! ```
//!
//! The duration kind carries the running total written by `fixed`-mode
//! penalties; seconds are always `00`.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::models::AttendanceStatus;
use crate::timeutil::{format_minutes, parse_hms};

use super::AnnotationCodec;

/// The unit fraction attached to a deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeductionFraction {
    /// A quarter unit (`1/4`).
    Quarter,
    /// A half unit (`1/2`).
    Half,
    /// Three quarters of a unit (`3/4`).
    ThreeQuarter,
    /// A whole unit (no fraction prefix in the encoding).
    Whole,
}

impl DeductionFraction {
    /// The textual prefix used in the encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeductionFraction::Quarter => "1/4",
            DeductionFraction::Half => "1/2",
            DeductionFraction::ThreeQuarter => "3/4",
            DeductionFraction::Whole => "",
        }
    }

    /// The numeric value of the fraction.
    pub fn value(&self) -> Decimal {
        match self {
            DeductionFraction::Quarter => Decimal::new(25, 2),
            DeductionFraction::Half => Decimal::new(50, 2),
            DeductionFraction::ThreeQuarter => Decimal::new(75, 2),
            DeductionFraction::Whole => Decimal::ONE,
        }
    }

    /// Maps a decimal day fraction onto the nearest encodable fraction.
    pub fn from_decimal(value: Decimal) -> Self {
        if value <= Decimal::new(25, 2) {
            DeductionFraction::Quarter
        } else if value <= Decimal::new(50, 2) {
            DeductionFraction::Half
        } else if value <= Decimal::new(75, 2) {
            DeductionFraction::ThreeQuarter
        } else {
            DeductionFraction::Whole
        }
    }

    fn parse(text: Option<&str>) -> Self {
        match text {
            Some("1/4") => DeductionFraction::Quarter,
            Some("1/2") => DeductionFraction::Half,
            Some("3/4") => DeductionFraction::ThreeQuarter,
            _ => DeductionFraction::Whole,
        }
    }
}

/// What a deduction takes away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeductionKind {
    /// Loss of pay.
    Lop,
    /// A running total duration (minutes), written by `fixed`-mode rules.
    Duration(i64),
    /// A leave-type unit identified by its code (e.g., "CL").
    Leave(String),
}

impl DeductionKind {
    fn render(&self) -> String {
        match self {
            DeductionKind::Lop => "LOP".to_string(),
            DeductionKind::Duration(minutes) => format_minutes(*minutes),
            DeductionKind::Leave(code) => code.clone(),
        }
    }
}

/// Why a deduction was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeductionReason {
    /// Late arrival.
    DueToLate,
    /// Early departure.
    Early,
    /// Insufficient working hours.
    UnderHours,
}

impl DeductionReason {
    /// The textual reason token.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeductionReason::DueToLate => "DueToLate",
            DeductionReason::Early => "Early",
            DeductionReason::UnderHours => "WH",
        }
    }

    fn parse(text: &str) -> Option<Self> {
        match text {
            "DueToLate" => Some(DeductionReason::DueToLate),
            "Early" => Some(DeductionReason::Early),
            "WH" => Some(DeductionReason::UnderHours),
            _ => None,
        }
    }
}

/// One applied deduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduction {
    /// The unit fraction deducted.
    pub fraction: DeductionFraction,
    /// What is deducted.
    pub kind: DeductionKind,
    /// The violation that caused the deduction.
    pub reason: DeductionReason,
}

impl Deduction {
    fn render(&self) -> String {
        format!(
            "({}{})({})",
            self.fraction.as_str(),
            self.kind.render(),
            self.reason.as_str()
        )
    }
}

/// A decoded context annotation: base status plus applied deductions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// The base status the annotation describes.
    pub status: AttendanceStatus,
    /// Deductions in application order (late, early, under-hours).
    pub deductions: Vec<Deduction>,
}

/// Encodes an annotation into its canonical string form.
///
/// # Example
///
/// ```
/// use attendance_engine::codec::{
///     Deduction, DeductionFraction, DeductionKind, DeductionReason, encode_annotation,
/// };
/// use attendance_engine::models::AttendanceStatus;
///
/// let encoded = encode_annotation(
///     AttendanceStatus::Present,
///     &[Deduction {
///         fraction: DeductionFraction::Half,
///         kind: DeductionKind::Lop,
///         reason: DeductionReason::DueToLate,
///     }],
/// );
/// assert_eq!(encoded, "Present(1/2LOP)(DueToLate)");
/// ```
pub fn encode_annotation(status: AttendanceStatus, deductions: &[Deduction]) -> String {
    let mut encoded = status.context_word().to_string();
    for deduction in deductions {
        encoded.push_str(&deduction.render());
    }
    encoded
}

fn status_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new("^(Present|WeekoffPresent|HolidayPresent)").expect("valid status regex")
    })
}

fn group_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\((1/4|1/2|3/4)?(LOP|\d{2,}:\d{2}:00|[A-Z]{1,8})\)\((DueToLate|Early|WH)\)")
            .expect("valid group regex")
    })
}

/// The canonical regex-based decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalCodec;

impl CanonicalCodec {
    /// Creates the canonical codec.
    pub fn new() -> Self {
        Self
    }
}

impl AnnotationCodec for CanonicalCodec {
    fn decode(&self, raw: &str) -> Option<Annotation> {
        let status_match = status_regex().find(raw)?;
        let status = match status_match.as_str() {
            "Present" => AttendanceStatus::Present,
            "WeekoffPresent" => AttendanceStatus::WeekoffPresent,
            _ => AttendanceStatus::HolidayPresent,
        };

        // "Present" is a prefix of nothing here, but "WeekoffPresent"
        // matching must consume the longest token; the alternation above
        // lists full tokens only, so prefix matching is safe.
        let mut rest = &raw[status_match.end()..];
        let mut deductions = Vec::new();

        while !rest.is_empty() {
            let captures = group_regex().captures(rest)?;
            let whole = captures.get(0)?;

            let fraction = DeductionFraction::parse(captures.get(1).map(|m| m.as_str()));
            let kind_text = captures.get(2)?.as_str();
            let kind = if kind_text == "LOP" {
                DeductionKind::Lop
            } else if kind_text.contains(':') {
                DeductionKind::Duration(parse_hms(kind_text).ok()?)
            } else {
                DeductionKind::Leave(kind_text.to_string())
            };
            let reason = DeductionReason::parse(captures.get(3)?.as_str())?;

            deductions.push(Deduction {
                fraction,
                kind,
                reason,
            });
            rest = &rest[whole.end()..];
        }

        Some(Annotation { status, deductions })
    }

    fn version(&self) -> &'static str {
        "canonical"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn decode(raw: &str) -> Option<Annotation> {
        CanonicalCodec::new().decode(raw)
    }

    #[test]
    fn test_decode_bare_status_tokens() {
        for (raw, status) in [
            ("Present", AttendanceStatus::Present),
            ("WeekoffPresent", AttendanceStatus::WeekoffPresent),
            ("HolidayPresent", AttendanceStatus::HolidayPresent),
        ] {
            let annotation = decode(raw).unwrap();
            assert_eq!(annotation.status, status);
            assert!(annotation.deductions.is_empty());
        }
    }

    #[test]
    fn test_decode_lop_group() {
        let annotation = decode("Present(1/2LOP)(DueToLate)").unwrap();
        assert_eq!(annotation.deductions.len(), 1);
        let d = &annotation.deductions[0];
        assert_eq!(d.fraction, DeductionFraction::Half);
        assert_eq!(d.kind, DeductionKind::Lop);
        assert_eq!(d.reason, DeductionReason::DueToLate);
    }

    #[test]
    fn test_decode_whole_unit_has_no_fraction_prefix() {
        let annotation = decode("Present(LOP)(Early)").unwrap();
        assert_eq!(annotation.deductions[0].fraction, DeductionFraction::Whole);
    }

    #[test]
    fn test_decode_leave_group() {
        let annotation = decode("Present(1/4CL)(WH)").unwrap();
        let d = &annotation.deductions[0];
        assert_eq!(d.fraction, DeductionFraction::Quarter);
        assert_eq!(d.kind, DeductionKind::Leave("CL".to_string()));
        assert_eq!(d.reason, DeductionReason::UnderHours);
    }

    #[test]
    fn test_decode_duration_group() {
        let annotation = decode("Present(01:30:00)(DueToLate)").unwrap();
        assert_eq!(annotation.deductions[0].kind, DeductionKind::Duration(90));
    }

    #[test]
    fn test_decode_multiple_groups_preserves_order() {
        let annotation = decode("WeekoffPresent(1/2LOP)(DueToLate)(1/4CL)(Early)").unwrap();
        assert_eq!(annotation.deductions.len(), 2);
        assert_eq!(annotation.deductions[0].reason, DeductionReason::DueToLate);
        assert_eq!(annotation.deductions[1].reason, DeductionReason::Early);
    }

    #[test]
    fn test_decode_rejects_trailing_garbage() {
        assert!(decode("Present junk").is_none());
        assert!(decode("Present(1/2LOP)").is_none());
        assert!(decode("Present(1/2LOP)(Nonsense)").is_none());
    }

    #[test]
    fn test_decode_rejects_unknown_base() {
        assert!(decode("Absent").is_none());
        assert!(decode("WFH").is_none());
        assert!(decode("").is_none());
    }

    #[test]
    fn test_encode_matches_grammar() {
        let encoded = encode_annotation(
            AttendanceStatus::HolidayPresent,
            &[
                Deduction {
                    fraction: DeductionFraction::Whole,
                    kind: DeductionKind::Lop,
                    reason: DeductionReason::DueToLate,
                },
                Deduction {
                    fraction: DeductionFraction::ThreeQuarter,
                    kind: DeductionKind::Leave("SL".to_string()),
                    reason: DeductionReason::UnderHours,
                },
            ],
        );
        assert_eq!(encoded, "HolidayPresent(LOP)(DueToLate)(3/4SL)(WH)");
        assert!(decode(&encoded).is_some());
    }

    #[test]
    fn test_fraction_from_decimal() {
        assert_eq!(
            DeductionFraction::from_decimal(Decimal::new(25, 2)),
            DeductionFraction::Quarter
        );
        assert_eq!(
            DeductionFraction::from_decimal(Decimal::new(5, 1)),
            DeductionFraction::Half
        );
        assert_eq!(
            DeductionFraction::from_decimal(Decimal::new(75, 2)),
            DeductionFraction::ThreeQuarter
        );
        assert_eq!(
            DeductionFraction::from_decimal(Decimal::ONE),
            DeductionFraction::Whole
        );
    }

    fn fraction_strategy() -> impl Strategy<Value = DeductionFraction> {
        prop_oneof![
            Just(DeductionFraction::Quarter),
            Just(DeductionFraction::Half),
            Just(DeductionFraction::ThreeQuarter),
            Just(DeductionFraction::Whole),
        ]
    }

    fn kind_strategy() -> impl Strategy<Value = DeductionKind> {
        prop_oneof![
            Just(DeductionKind::Lop),
            (0i64..6000).prop_map(DeductionKind::Duration),
            "[A-Z]{1,8}"
                .prop_filter("LOP is reserved", |code| code != "LOP")
                .prop_map(DeductionKind::Leave),
        ]
    }

    fn reason_strategy() -> impl Strategy<Value = DeductionReason> {
        prop_oneof![
            Just(DeductionReason::DueToLate),
            Just(DeductionReason::Early),
            Just(DeductionReason::UnderHours),
        ]
    }

    fn status_strategy() -> impl Strategy<Value = AttendanceStatus> {
        prop_oneof![
            Just(AttendanceStatus::Present),
            Just(AttendanceStatus::WeekoffPresent),
            Just(AttendanceStatus::HolidayPresent),
        ]
    }

    proptest! {
        /// Round-trip property: every canonical-grammar string decodes
        /// and re-encodes to itself.
        #[test]
        fn prop_encode_decode_round_trip(
            status in status_strategy(),
            deductions in prop::collection::vec(
                (fraction_strategy(), kind_strategy(), reason_strategy())
                    .prop_map(|(fraction, kind, reason)| Deduction { fraction, kind, reason }),
                0..4,
            ),
        ) {
            let encoded = encode_annotation(status, &deductions);
            let decoded = decode(&encoded).expect("canonical strings must decode");
            let re_encoded = encode_annotation(decoded.status, &decoded.deductions);
            prop_assert_eq!(encoded, re_encoded);
        }
    }
}
