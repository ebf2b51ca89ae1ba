use std::collections::HashSet;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config::SummaryConfig;
use crate::dataset::Dataset;

/// `YYYY-MM-DD` with an optional `hh:mm[:ss]` time part
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})([ T]\d{2}:\d{2}(:\d{2})?)?$").unwrap());

/// Single machine-generated token, no inner whitespace
static TOKEN_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.:-]+$").unwrap());

/// Inferred kind of a column, decided once per load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnType {
    Numeric,
    Boolean,
    Categorical,
    /// Date stamps and unique identifiers
    Identifier,
    Unclassifiable,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Boolean => "boolean",
            ColumnType::Categorical => "categorical",
            ColumnType::Identifier => "identifier",
            ColumnType::Unclassifiable => "unclassifiable",
        }
    }
}

/// Check a value against the locale-independent numeric literal grammar:
/// optional sign, digits, optional decimal point, optional exponent.
///
/// Deliberately stricter than `f64::from_str`, which would also accept
/// `inf`, `NaN` and leading whitespace.
pub fn is_numeric_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let mut int_digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        int_digits += 1;
    }

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            frac_digits += 1;
        }
    }

    if int_digits + frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let mut exp_digits = 0;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            exp_digits += 1;
        }
        if exp_digits == 0 {
            return false;
        }
    }

    i == bytes.len()
}

/// Parse a cell as a numeric value, `None` when it fails the grammar
pub fn parse_numeric(s: &str) -> Option<f64> {
    if is_numeric_literal(s) {
        s.parse::<f64>().ok()
    } else {
        None
    }
}

fn is_date_value(s: &str) -> bool {
    match DATE_SHAPE.captures(s) {
        Some(caps) => NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").is_ok(),
        None => false,
    }
}

/// Classify one column from its non-missing values.
///
/// Only counts and distinct sets feed the decision, so the outcome is
/// deterministic and independent of row scan order.
pub fn classify_column<'a, I>(values: I, config: &SummaryConfig) -> ColumnType
where
    I: Iterator<Item = Option<&'a str>>,
{
    let mut total = 0usize;
    let mut all_numeric = true;
    let mut all_dates = true;
    let mut all_tokens = true;
    let mut distinct: HashSet<&str> = HashSet::new();

    for value in values.flatten() {
        total += 1;
        all_numeric = all_numeric && is_numeric_literal(value);
        all_dates = all_dates && is_date_value(value);
        all_tokens = all_tokens && TOKEN_SHAPE.is_match(value);
        distinct.insert(value);
    }

    // An all-missing column is never numeric: downstream summaries would
    // otherwise divide by a zero count.
    if total == 0 {
        return ColumnType::Unclassifiable;
    }
    if all_numeric {
        return ColumnType::Numeric;
    }
    if all_dates {
        return ColumnType::Identifier;
    }
    if distinct.len() == total && total > 1 && all_tokens {
        return ColumnType::Identifier;
    }

    let ratio = distinct.len() as f64 / total as f64;
    if ratio <= config.categorical_threshold() {
        if distinct.len() == 2 {
            ColumnType::Boolean
        } else {
            ColumnType::Categorical
        }
    } else {
        ColumnType::Unclassifiable
    }
}

/// Classify every column of the dataset, in column order
pub fn classify_columns(dataset: &Dataset, config: &SummaryConfig) -> Vec<ColumnType> {
    (0..dataset.num_columns())
        .map(|col| classify_column(dataset.column_values(col), config))
        .collect()
}
