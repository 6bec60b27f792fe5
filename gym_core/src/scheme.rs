//! Scheme parsing for set/rep descriptions like "4×8–10" or "3×12".
//!
//! Parsing never fails. Every field that cannot be read falls back to a
//! fixed default, and the fallback is recorded so callers can tell a clean
//! parse from a defaulted one.

use crate::SchemeSpec;

/// Separator between the sets and reps segments
pub const SETS_SEPARATOR: char = '×';

const EN_DASH: char = '–';
const HYPHEN: char = '-';

const DEFAULT_SETS: i32 = 3;
const DEFAULT_REPS: i32 = 10;
const DEFAULT_MAX_REPS_WITHOUT_SCHEME: i32 = 12;

/// Scheme used when no scheme text is supplied at all
pub const DEFAULT_SCHEME: SchemeSpec = SchemeSpec {
    sets: DEFAULT_SETS,
    min_reps: DEFAULT_REPS,
    max_reps: DEFAULT_MAX_REPS_WITHOUT_SCHEME,
};

/// A field that had to fall back to its default
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemeField {
    /// No scheme text at all; the whole default scheme was used
    Missing,
    Sets,
    /// Lower end of a range
    MinReps,
    /// Upper end of a range (falls back to the lower end)
    MaxReps,
    /// A fixed rep count without a range
    Reps,
}

/// Outcome of parsing a scheme string
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemeParse {
    pub spec: SchemeSpec,
    pub fallbacks: Vec<SchemeField>,
}

impl SchemeParse {
    /// True when every field was read from the text
    pub fn is_exact(&self) -> bool {
        self.fallbacks.is_empty()
    }
}

/// Parse a scheme string, returning only the resulting spec
pub fn parse_scheme(text: &str) -> SchemeSpec {
    parse_scheme_detailed(Some(text)).spec
}

/// Parse a scheme string and report which fields were defaulted
///
/// Format: `<sets>×<reps>` where `<reps>` is a single integer or a range
/// `min–max` / `min-max`. An en-dash takes priority over a hyphen.
pub fn parse_scheme_detailed(text: Option<&str>) -> SchemeParse {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => {
            return SchemeParse {
                spec: DEFAULT_SCHEME,
                fallbacks: vec![SchemeField::Missing],
            }
        }
    };

    let mut fallbacks = Vec::new();
    let mut segments = text.split(SETS_SEPARATOR);
    let sets_part = segments.next().unwrap_or_default();
    let reps_part = segments.next().unwrap_or_default().trim();

    let sets = positive_or(sets_part, DEFAULT_SETS, SchemeField::Sets, &mut fallbacks);

    let delimiter = if reps_part.contains(EN_DASH) {
        Some(EN_DASH)
    } else if reps_part.contains(HYPHEN) {
        Some(HYPHEN)
    } else {
        None
    };

    let (min_reps, max_reps) = match delimiter {
        Some(delimiter) => {
            let mut pieces = reps_part.split(delimiter).map(str::trim);
            let min_str = pieces.next().unwrap_or_default();
            let max_str = pieces.next().unwrap_or_default();

            let min = positive_or(min_str, DEFAULT_REPS, SchemeField::MinReps, &mut fallbacks);
            let max = positive_or(max_str, min, SchemeField::MaxReps, &mut fallbacks);
            (min, max)
        }
        None => {
            let fixed = positive_or(reps_part, DEFAULT_REPS, SchemeField::Reps, &mut fallbacks);
            (fixed, fixed)
        }
    };

    if !fallbacks.is_empty() {
        tracing::debug!("Scheme {:?} parsed with fallbacks {:?}", text, fallbacks);
    }

    SchemeParse {
        spec: SchemeSpec {
            sets,
            min_reps,
            max_reps,
        },
        fallbacks,
    }
}

fn positive_or(s: &str, default: i32, field: SchemeField, fallbacks: &mut Vec<SchemeField>) -> i32 {
    match leading_int(s).filter(|&v| v > 0) {
        Some(v) => v,
        None => {
            fallbacks.push(field);
            default
        }
    }
}

/// Read the leading integer of a string, ignoring anything after it
///
/// `"45 sek"` reads as 45, `"  8"` as 8, `"sek"` as nothing.
pub(crate) fn leading_int(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    let value = if negative { -value } else { value };
    i32::try_from(value).ok()
}
