pub mod categorical;
pub mod groups;
pub mod numeric;
pub mod top;

pub use categorical::{CategoricalSummary, ValueCount};
pub use groups::{GroupBreakdown, GroupStat};
pub use numeric::NumericSummary;
pub use top::{MetricRanking, TopPerformer};

use rayon::prelude::*;
use serde::Serialize;

use crate::classify::ColumnType;
use crate::config::SummaryConfig;
use crate::dataset::Dataset;

/// Summary content of one column, dispatched on its inferred type.
///
/// Identifier and unclassifiable columns carry no summary; their profile
/// (counts, missingness) is still reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ColumnSummary {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
    None,
}

/// Summarize every column, one independent reduction per column.
///
/// Columns share no mutable state, so the work runs on the rayon pool; the
/// indexed collect keeps output order identical to a sequential pass.
pub fn summarize_columns(
    dataset: &Dataset,
    types: &[ColumnType],
    config: &SummaryConfig,
) -> Vec<ColumnSummary> {
    (0..dataset.num_columns())
        .into_par_iter()
        .map(|col| match types[col] {
            ColumnType::Numeric => {
                ColumnSummary::Numeric(numeric::summarize_numeric(dataset.column_values(col)))
            }
            ColumnType::Categorical | ColumnType::Boolean => {
                ColumnSummary::Categorical(categorical::summarize_categorical(
                    dataset.column_values(col),
                    config.decimal_places(),
                ))
            }
            ColumnType::Identifier | ColumnType::Unclassifiable => ColumnSummary::None,
        })
        .collect()
}
