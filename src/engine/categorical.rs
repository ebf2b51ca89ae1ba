use std::collections::HashMap;

use serde::Serialize;

/// One distinct value with its occurrence count and share of the
/// non-missing cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
    pub percentage: f64,
}

/// Frequency distribution of a categorical or boolean column.
///
/// `values` holds the full ranking, count descending with ties broken by
/// first-encountered row order; [`CategoricalSummary::top`] truncates it
/// for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalSummary {
    pub total_count: usize,
    pub distinct_count: usize,
    pub values: Vec<ValueCount>,
}

impl CategoricalSummary {
    pub fn top(&self, k: usize) -> &[ValueCount] {
        &self.values[..k.min(self.values.len())]
    }

    /// Drop everything below the top `k`, keeping the ranking intact
    pub fn truncate(&mut self, k: usize) {
        self.values.truncate(k);
    }
}

/// Build the ranked frequency distribution over non-missing cells.
///
/// The ranking is stable: equal counts keep the order in which the values
/// were first seen, so repeated runs over the same file produce identical
/// output.
pub fn summarize_categorical<'a, I>(values: I, decimal_places: usize) -> CategoricalSummary
where
    I: Iterator<Item = Option<&'a str>>,
{
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new(); // value -> (count, first_seen)
    let mut total = 0usize;

    for value in values.flatten() {
        let next_rank = counts.len();
        let entry = counts.entry(value).or_insert((0, next_rank));
        entry.0 += 1;
        total += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first_seen))| (value, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    let values: Vec<ValueCount> = ranked
        .into_iter()
        .map(|(value, count, _)| ValueCount {
            value: value.to_string(),
            count,
            percentage: crate::report::round_to((count as f64 / total as f64) * 100.0, decimal_places),
        })
        .collect();

    CategoricalSummary {
        total_count: total,
        distinct_count: values.len(),
        values,
    }
}
