use serde::Serialize;

use crate::classify::parse_numeric;

/// Descriptive statistics for a numeric column.
///
/// Every statistic is `None` when undefined, so an empty column is never
/// mistaken for a column of zeros. `std_dev` follows the sample convention
/// (divide by n − 1) and is undefined for fewer than two values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericSummary {
    fn empty() -> Self {
        Self {
            count: 0,
            mean: None,
            median: None,
            std_dev: None,
            min: None,
            max: None,
        }
    }
}

/// Reduce one column's cells into a [`NumericSummary`].
///
/// Cells that are missing or fail the numeric grammar are skipped; a parse
/// failure after classification is a data-quality outcome, not an error.
pub fn summarize_numeric<'a, I>(values: I) -> NumericSummary
where
    I: Iterator<Item = Option<&'a str>>,
{
    let mut count = 0usize;
    let mut mean = 0.0f64;
    let mut m2 = 0.0f64;
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    let mut parsed: Vec<f64> = Vec::new();

    for value in values.flatten() {
        let Some(x) = parse_numeric(value) else {
            continue;
        };

        // Welford's update keeps mean and m2 numerically stable
        count += 1;
        let delta = x - mean;
        mean += delta / count as f64;
        m2 += delta * (x - mean);

        if count == 1 {
            min = x;
            max = x;
        } else {
            if x < min {
                min = x;
            }
            if x > max {
                max = x;
            }
        }
        parsed.push(x);
    }

    if count == 0 {
        return NumericSummary::empty();
    }

    parsed.sort_by(f64::total_cmp);
    let median = if count % 2 == 1 {
        parsed[count / 2]
    } else {
        (parsed[count / 2 - 1] + parsed[count / 2]) / 2.0
    };

    let std_dev = if count > 1 {
        Some((m2 / (count - 1) as f64).sqrt())
    } else {
        None
    };

    NumericSummary {
        count,
        mean: Some(mean),
        median: Some(median),
        std_dev,
        min: Some(min),
        max: Some(max),
    }
}
