use serde::Serialize;

use crate::classify::parse_numeric;
use crate::dataset::Dataset;
use crate::errors::StatsError;

/// One ranked row: its position in the source data, the metric value it
/// ranked by, and a projection of the configured identifying fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPerformer {
    pub row_index: usize,
    pub metric_value: f64,
    pub identifiers: Vec<(String, Option<String>)>,
}

/// Top-N rows for one engagement metric, descending by value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRanking {
    pub metric: String,
    pub performers: Vec<TopPerformer>,
}

/// Rank rows by a numeric metric column and keep the top `n`.
///
/// Rows whose metric cell is missing or unparseable are excluded from the
/// ranking entirely, never treated as zero. Equal values keep original row
/// order (the sort is stable).
///
/// The caller is responsible for checking that `metric` is classified
/// numeric; this function only requires the columns to exist.
pub fn extract_top(
    dataset: &Dataset,
    metric: &str,
    id_columns: &[String],
    n: usize,
) -> Result<MetricRanking, StatsError> {
    let metric_col = dataset
        .column_index(metric)
        .ok_or_else(|| StatsError::ColumnNotFound(metric.to_string()))?;
    let id_cols: Vec<usize> = id_columns
        .iter()
        .map(|name| {
            dataset
                .column_index(name)
                .ok_or_else(|| StatsError::ColumnNotFound(name.clone()))
        })
        .collect::<Result<_, _>>()?;

    let mut ranked: Vec<(usize, f64)> = dataset
        .column_values(metric_col)
        .enumerate()
        .filter_map(|(row, cell)| cell.and_then(parse_numeric).map(|v| (row, v)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);

    let performers = ranked
        .into_iter()
        .map(|(row, value)| TopPerformer {
            row_index: row,
            metric_value: value,
            identifiers: id_cols
                .iter()
                .zip(id_columns)
                .map(|(&col, name)| (name.clone(), dataset.cell(row, col).map(str::to_string)))
                .collect(),
        })
        .collect();

    Ok(MetricRanking {
        metric: metric.to_string(),
        performers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        let rows = [
            ("p1", Some("10")),
            ("p2", None),
            ("p3", Some("500")),
            ("p4", Some("50")),
        ];
        Dataset::new(
            vec!["post_id".to_string(), "likes".to_string()],
            rows.iter()
                .map(|(id, likes)| {
                    vec![Some(id.to_string()), likes.map(str::to_string)]
                })
                .collect(),
            0,
        )
    }

    #[test]
    fn test_top_two_excludes_missing() {
        let ds = dataset();
        let ranking = extract_top(&ds, "likes", &["post_id".to_string()], 2).unwrap();
        assert_eq!(ranking.metric, "likes");
        assert_eq!(ranking.performers.len(), 2);
        assert_eq!(ranking.performers[0].metric_value, 500.0);
        assert_eq!(ranking.performers[0].row_index, 2);
        assert_eq!(
            ranking.performers[0].identifiers,
            vec![("post_id".to_string(), Some("p3".to_string()))]
        );
        assert_eq!(ranking.performers[1].metric_value, 50.0);
    }

    #[test]
    fn test_n_larger_than_valid_rows() {
        let ds = dataset();
        let ranking = extract_top(&ds, "likes", &[], 10).unwrap();
        // the missing row never ranks
        assert_eq!(ranking.performers.len(), 3);
    }

    #[test]
    fn test_ties_keep_row_order() {
        let ds = Dataset::new(
            vec!["v".to_string()],
            vec![
                vec![Some("7".to_string())],
                vec![Some("9".to_string())],
                vec![Some("7".to_string())],
            ],
            0,
        );
        let ranking = extract_top(&ds, "v", &[], 3).unwrap();
        let rows: Vec<usize> = ranking.performers.iter().map(|p| p.row_index).collect();
        assert_eq!(rows, [1, 0, 2]);
    }

    #[test]
    fn test_unknown_columns() {
        let ds = dataset();
        assert!(matches!(
            extract_top(&ds, "shares", &[], 2),
            Err(StatsError::ColumnNotFound(_))
        ));
        assert!(matches!(
            extract_top(&ds, "likes", &["page".to_string()], 2),
            Err(StatsError::ColumnNotFound(_))
        ));
    }
}
