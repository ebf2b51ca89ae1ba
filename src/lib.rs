pub mod classify;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod errors;
pub mod profile;
pub mod reader;
pub mod report;

pub use classify::{classify_columns, ColumnType};
pub use config::{GroupSpec, MetricSpec, SummaryConfig, SummaryConfigBuilder};
pub use dataset::Dataset;
pub use engine::{
    CategoricalSummary, ColumnSummary, GroupBreakdown, MetricRanking, NumericSummary,
    TopPerformer, ValueCount,
};
pub use errors::StatsError;
pub use profile::ColumnProfile;
pub use reader::load_csv;
pub use report::{assemble_report, ColumnReport, DatasetReport};

/// Load a delimited file and assemble its full summary report
pub fn analyze_csv(path: &str, config: &SummaryConfig) -> Result<DatasetReport, StatsError> {
    let dataset = load_csv(path, config)?;
    assemble_report(&dataset, config)
}
