//! Quirk entity: one named performance adjustment with a display value.
//!
//! Percent conversion happens here and nowhere else. The API serves most
//! quirk values as fractions (0.25 for +25%), except for a fixed family of
//! names whose values are literal counts, angles or embedded markup.

use crate::core::error::{QuirkError, Result};
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;

/// Quirk names containing any of these keywords keep their raw value
/// verbatim; every other quirk value is a fraction rendered as a percent.
const NON_PERCENT_KEYWORDS: [&str; 7] = [
    "ADDITIONAL",
    "BONUS",
    "HARDPOINT",
    "ANGLE",
    "JUMP",
    "NARC",
    "SENSOR",
];

/// A quirk value as it appears in the API JSON: sometimes a number,
/// sometimes a string holding a number, sometimes free text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A single named modifier on a variant or omnipod.
///
/// Value objects: equality is structural on (name, value), ordering is by
/// name so sorted quirk lists read alphabetically. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quirk {
    name: String,
    value: String,
}

impl Quirk {
    /// Build a quirk from a raw API record.
    ///
    /// Fractional values become truncated integer percentages ("0.25" →
    /// "25%") unless the name carries one of the non-percent keywords, in
    /// which case the raw value string is kept as-is. A percent-eligible
    /// value that does not parse as a number is an input-data error.
    pub fn new(name: impl Into<String>, value: RawValue) -> Result<Quirk> {
        let name = name.into();
        let percent_eligible = !NON_PERCENT_KEYWORDS.iter().any(|kw| name.contains(kw));
        let value = if percent_eligible {
            let n = value.as_f64().ok_or_else(|| QuirkError::BadQuirkValue {
                name: name.clone(),
                value: value.to_string(),
            })?;
            format!("{}%", (n * 100.0).trunc() as i64)
        } else {
            value.to_string()
        };
        Ok(Quirk { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Ord for Quirk {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl PartialOrd for Quirk {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Quirk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
