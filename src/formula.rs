//! Formula codec: the persisted form of a fitted estimator.
//!
//! A [`Formula`] is a `(slope, intercept)` pair describing
//! `actual_hours ≈ slope * expected_hours + intercept` for one
//! (developer, category) group. It round-trips through a compact string,
//! `e<slope>+<intercept>` or `e<slope>-<intercept>`, where the separator
//! character carries the intercept's sign and both coefficients are held at
//! two decimal places.
//!
//! The parser reads the slope as a signed number: a `-` immediately after
//! the `e` marker belongs to the slope, and the intercept separator is the
//! first `+`/`-` after that. `e-3.0-2.0` therefore decodes to slope −3.0,
//! intercept −2.0.
//!
//! # Example
//!
//! ```
//! use estimar::formula::Formula;
//!
//! let f = Formula::new(2.5, -1.0);
//! assert_eq!(f.encode(), "e2.5-1.0");
//! assert_eq!("e2.5-1.0".parse::<Formula>().unwrap(), f);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Round to the two-decimal precision at which formulas are persisted.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Print a 2-dp-rounded value with at least one and at most two decimal
/// places (`10.0`, `2.5`, `1.25`), the form used in every persisted cell.
pub(crate) fn format_2dp(v: f64) -> String {
    let mut s = format!("{v:.2}");
    if s.ends_with('0') {
        s.pop();
    }
    s
}

/// Errors from decoding a formula string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormulaError {
    #[error("empty formula")]
    Empty,

    #[error("formula must start with the 'e' marker: {0:?}")]
    MissingMarker(String),

    #[error("invalid number {segment:?} in formula {formula:?}")]
    BadNumber { formula: String, segment: String },
}

/// A fitted linear estimator for one (developer, category) group.
///
/// Coefficients are rounded to two decimals on construction so that the
/// in-memory value always equals its persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Formula {
    pub slope: f64,
    pub intercept: f64,
}

impl Formula {
    /// Create a formula, rounding both coefficients to two decimals.
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope: round2(slope), intercept: round2(intercept) }
    }

    /// Serialize to the compact table-cell form.
    pub fn encode(&self) -> String {
        let sep = if self.intercept < 0.0 { '-' } else { '+' };
        format!(
            "e{}{}{}",
            format_2dp(self.slope),
            sep,
            format_2dp(self.intercept.abs())
        )
    }

    /// Evaluate the estimator at an expected-hours value.
    pub fn estimate(&self, expected_hours: f64) -> f64 {
        round2(self.slope * expected_hours + self.intercept)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FormulaError::Empty);
        }
        let body = s
            .strip_prefix('e')
            .ok_or_else(|| FormulaError::MissingMarker(s.to_string()))?;

        // A sign at the first body position belongs to the slope; the
        // intercept separator is the first +/- strictly after it.
        let search_from = usize::from(body.starts_with(['+', '-']));
        let sep = body[search_from..]
            .find(['+', '-'])
            .map(|i| i + search_from);

        let parse = |segment: &str| -> Result<f64, FormulaError> {
            segment.trim().parse::<f64>().map_err(|_| FormulaError::BadNumber {
                formula: s.to_string(),
                segment: segment.trim().to_string(),
            })
        };

        match sep {
            None => Ok(Self::new(parse(body)?, 0.0)),
            Some(i) => {
                let slope = parse(&body[..i])?;
                let magnitude = parse(&body[i + 1..])?;
                let intercept = if body[i..].starts_with('-') { -magnitude } else { magnitude };
                Ok(Self::new(slope, intercept))
            }
        }
    }
}
