use serde::Serialize;

use crate::classify::ColumnType;
use crate::dataset::Dataset;

/// Per-column metadata, independent of summary content.
///
/// Created once per load and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub column_type: ColumnType,
    pub total_count: usize,
    pub missing_count: usize,
    pub missing_pct: f64,
}

/// Count missing cells per column and attach the inferred type.
///
/// The loader has already folded empty and null-marker cells into the
/// missing sentinel, so the audit is a plain count of `None` cells.
pub fn build_profiles(dataset: &Dataset, types: &[ColumnType]) -> Vec<ColumnProfile> {
    let total = dataset.num_rows();
    dataset
        .columns()
        .iter()
        .enumerate()
        .map(|(col, name)| {
            let missing = dataset.column_values(col).filter(|v| v.is_none()).count();
            let missing_pct = if total > 0 {
                (missing as f64 / total as f64) * 100.0
            } else {
                0.0
            };
            ColumnProfile {
                name: name.clone(),
                column_type: types[col],
                total_count: total,
                missing_count: missing,
                missing_pct,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_counts() {
        let ds = Dataset::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec![Some("x".to_string()), None],
                vec![None, None],
                vec![Some("y".to_string()), Some("1".to_string())],
                vec![Some("x".to_string()), Some("2".to_string())],
            ],
            0,
        );
        let types = [ColumnType::Categorical, ColumnType::Numeric];
        let profiles = build_profiles(&ds, &types);

        assert_eq!(profiles[0].missing_count, 1);
        assert_eq!(profiles[0].missing_pct, 25.0);
        assert_eq!(profiles[0].column_type, ColumnType::Categorical);
        assert_eq!(profiles[1].missing_count, 2);
        assert_eq!(profiles[1].missing_pct, 50.0);
        assert_eq!(profiles[1].total_count, 4);
    }

    #[test]
    fn test_zero_rows_reports_zero_percent() {
        let ds = Dataset::new(vec!["a".to_string()], vec![], 0);
        let profiles = build_profiles(&ds, &[ColumnType::Unclassifiable]);
        assert_eq!(profiles[0].missing_count, 0);
        assert_eq!(profiles[0].missing_pct, 0.0);
    }

    #[test]
    fn test_percentage_bounds() {
        let ds = Dataset::new(
            vec!["a".to_string()],
            vec![vec![None], vec![None], vec![None]],
            0,
        );
        let profiles = build_profiles(&ds, &[ColumnType::Unclassifiable]);
        assert_eq!(profiles[0].missing_pct, 100.0);
    }
}
