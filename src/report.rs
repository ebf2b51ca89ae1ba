use chrono::Local;
use serde::Serialize;

use crate::classify::{self, ColumnType};
use crate::config::SummaryConfig;
use crate::dataset::Dataset;
use crate::engine::{self, ColumnSummary, GroupBreakdown, MetricRanking};
use crate::errors::StatsError;
use crate::profile::{self, ColumnProfile};

/// Round a display percentage to `places` decimals
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Profile plus summary content for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnReport {
    pub profile: ColumnProfile,
    pub summary: ColumnSummary,
}

/// The assembled summary of one dataset, immutable once built.
///
/// Columns appear in header order. Formatting and printing belong to
/// external consumers; [`DatasetReport::to_json`] is the machine-readable
/// surface.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub generated_at: String,
    pub row_count: usize,
    pub column_count: usize,
    pub skipped_rows: usize,
    pub columns: Vec<ColumnReport>,
    pub rankings: Vec<MetricRanking>,
    pub breakdowns: Vec<GroupBreakdown>,
}

impl DatasetReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn column(&self, name: &str) -> Option<&ColumnReport> {
        self.columns.iter().find(|c| c.profile.name == name)
    }
}

/// Ensure a configured metric column exists and is classified numeric
fn check_metric(
    dataset: &Dataset,
    types: &[ColumnType],
    name: &str,
) -> Result<(), StatsError> {
    let col = dataset
        .column_index(name)
        .ok_or_else(|| StatsError::ColumnNotFound(name.to_string()))?;
    if types[col] != ColumnType::Numeric {
        return Err(StatsError::NotNumeric(
            name.to_string(),
            types[col].as_str().to_string(),
        ));
    }
    Ok(())
}

/// Compose classification, profiles, summaries, rankings and breakdowns
/// into one [`DatasetReport`].
///
/// Pure aggregation over the outputs of the other components; the only
/// failure mode is structural inconsistency between the configuration and
/// the dataset, which is a caller mistake and surfaces immediately.
pub fn assemble_report(
    dataset: &Dataset,
    config: &SummaryConfig,
) -> Result<DatasetReport, StatsError> {
    let types = classify::classify_columns(dataset, config);

    for spec in config.metrics() {
        check_metric(dataset, &types, &spec.column)?;
    }
    for spec in config.groups() {
        if let Some(metric) = &spec.metric {
            check_metric(dataset, &types, metric)?;
        }
    }

    let mut profiles = profile::build_profiles(dataset, &types);
    for p in &mut profiles {
        p.missing_pct = round_to(p.missing_pct, config.decimal_places());
    }

    let summaries = engine::summarize_columns(dataset, &types, config);
    let columns: Vec<ColumnReport> = profiles
        .into_iter()
        .zip(summaries)
        .map(|(profile, mut summary)| {
            if let ColumnSummary::Categorical(cat) = &mut summary {
                cat.truncate(config.top_values());
            }
            ColumnReport { profile, summary }
        })
        .collect();

    let rankings = config
        .metrics()
        .iter()
        .map(|spec| {
            engine::top::extract_top(
                dataset,
                &spec.column,
                config.id_columns(),
                spec.top_n.unwrap_or(config.top_rows()),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let breakdowns = config
        .groups()
        .iter()
        .map(|spec| {
            engine::groups::group_breakdown(
                dataset,
                &spec.column,
                spec.metric.as_deref(),
                config.top_rows(),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DatasetReport {
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        row_count: dataset.num_rows(),
        column_count: dataset.num_columns(),
        skipped_rows: dataset.skipped_rows(),
        columns,
        rankings,
        breakdowns,
    })
}
