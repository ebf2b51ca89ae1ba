use std::collections::HashMap;

use serde::Serialize;

use crate::classify::parse_numeric;
use crate::dataset::Dataset;
use crate::errors::StatsError;

/// Aggregates for one group key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStat {
    pub key: String,
    pub row_count: usize,
    /// Sum of the metric over the group's parseable cells, when a metric
    /// was requested
    pub metric_total: Option<f64>,
    /// `metric_total` divided by the count of parseable cells; `None` when
    /// the group has no parseable metric values
    pub metric_mean: Option<f64>,
}

/// Group breakdown of the dataset by one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupBreakdown {
    pub group_column: String,
    pub metric: Option<String>,
    pub group_count: usize,
    /// Rows whose group key was missing; excluded from every bucket
    pub unkeyed_rows: usize,
    pub groups: Vec<GroupStat>,
}

/// Bucket rows by a column's non-missing values, optionally aggregating a
/// numeric metric per bucket.
///
/// Groups are ranked by metric total when a metric is given, by row count
/// otherwise, descending with first-seen tie-break, truncated to `top_n`.
///
/// The caller checks that `metric` is classified numeric; this function
/// only requires the columns to exist.
pub fn group_breakdown(
    dataset: &Dataset,
    group_column: &str,
    metric: Option<&str>,
    top_n: usize,
) -> Result<GroupBreakdown, StatsError> {
    let group_col = dataset
        .column_index(group_column)
        .ok_or_else(|| StatsError::ColumnNotFound(group_column.to_string()))?;
    let metric_col = metric
        .map(|name| {
            dataset
                .column_index(name)
                .ok_or_else(|| StatsError::ColumnNotFound(name.to_string()))
        })
        .transpose()?;

    // key -> (first_seen, rows, metric sum, parseable metric count)
    let mut buckets: HashMap<&str, (usize, usize, f64, usize)> = HashMap::new();
    let mut unkeyed_rows = 0usize;

    for row in 0..dataset.num_rows() {
        let Some(key) = dataset.cell(row, group_col) else {
            unkeyed_rows += 1;
            continue;
        };
        let next_rank = buckets.len();
        let entry = buckets.entry(key).or_insert((next_rank, 0, 0.0, 0));
        entry.1 += 1;
        if let Some(col) = metric_col {
            if let Some(value) = dataset.cell(row, col).and_then(parse_numeric) {
                entry.2 += value;
                entry.3 += 1;
            }
        }
    }

    let group_count = buckets.len();
    let mut ranked: Vec<(&str, (usize, usize, f64, usize))> = buckets.into_iter().collect();
    if metric_col.is_some() {
        ranked.sort_by(|(_, (seen_a, _, total_a, _)), (_, (seen_b, _, total_b, _))| {
            total_b.total_cmp(total_a).then(seen_a.cmp(seen_b))
        });
    } else {
        ranked.sort_by(|(_, (seen_a, rows_a, _, _)), (_, (seen_b, rows_b, _, _))| {
            rows_b.cmp(rows_a).then(seen_a.cmp(seen_b))
        });
    }
    ranked.truncate(top_n);

    let groups = ranked
        .into_iter()
        .map(|(key, (_, rows, total, parsed))| {
            // a group with no parseable metric cells reports undefined,
            // never a zero total
            let defined = metric_col.is_some() && parsed > 0;
            GroupStat {
                key: key.to_string(),
                row_count: rows,
                metric_total: defined.then_some(total),
                metric_mean: defined.then(|| total / parsed as f64),
            }
        })
        .collect();

    Ok(GroupBreakdown {
        group_column: group_column.to_string(),
        metric: metric.map(str::to_string),
        group_count,
        unkeyed_rows,
        groups,
    })
}
