use crate::errors::StatsError;

/// Ranking request for a single engagement metric column.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSpec {
    pub column: String,
    /// Overrides `SummaryConfig::top_rows` when set
    pub top_n: Option<usize>,
}

/// Group breakdown request: bucket rows by `column`, optionally
/// aggregating a numeric `metric` per group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSpec {
    pub column: String,
    pub metric: Option<String>,
}

/// Configuration for loading and summarizing a dataset.
///
/// Passed explicitly into every component so runs are reproducible
/// under varied configurations.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    delimiter: u8,
    null_markers: Vec<String>,
    categorical_threshold: f64,
    top_values: usize,
    top_rows: usize,
    decimal_places: usize,
    metrics: Vec<MetricSpec>,
    groups: Vec<GroupSpec>,
    id_columns: Vec<String>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            null_markers: vec!["NA".to_string(), "null".to_string()],
            categorical_threshold: 0.5,
            top_values: 10,
            top_rows: 10,
            decimal_places: 2,
            metrics: Vec::new(),
            groups: Vec::new(),
            id_columns: Vec::new(),
        }
    }
}

impl SummaryConfig {
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn categorical_threshold(&self) -> f64 {
        self.categorical_threshold
    }

    pub fn top_values(&self) -> usize {
        self.top_values
    }

    pub fn top_rows(&self) -> usize {
        self.top_rows
    }

    pub fn decimal_places(&self) -> usize {
        self.decimal_places
    }

    pub fn metrics(&self) -> &[MetricSpec] {
        self.metrics.as_slice()
    }

    pub fn groups(&self) -> &[GroupSpec] {
        self.groups.as_slice()
    }

    pub fn id_columns(&self) -> &[String] {
        self.id_columns.as_slice()
    }

    /// A raw cell counts as missing when it is empty after trimming or
    /// matches one of the configured null markers exactly.
    pub fn is_missing(&self, raw: &str) -> bool {
        let trimmed = raw.trim();
        trimmed.is_empty() || self.null_markers.iter().any(|m| m == trimmed)
    }
}

pub struct SummaryConfigBuilder {
    delimiter: u8,
    null_markers: Vec<String>,
    categorical_threshold: f64,
    top_values: usize,
    top_rows: usize,
    decimal_places: usize,
    metrics: Vec<MetricSpec>,
    groups: Vec<GroupSpec>,
    id_columns: Vec<String>,
}

impl Default for SummaryConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryConfigBuilder {
    /// Create a new [`SummaryConfigBuilder`] seeded with the defaults
    pub fn new() -> Self {
        let config = SummaryConfig::default();
        Self {
            delimiter: config.delimiter,
            null_markers: config.null_markers,
            categorical_threshold: config.categorical_threshold,
            top_values: config.top_values,
            top_rows: config.top_rows,
            decimal_places: config.decimal_places,
            metrics: config.metrics,
            groups: config.groups,
            id_columns: config.id_columns,
        }
    }

    /// Build a validated [`SummaryConfig`]
    pub fn build(self) -> Result<SummaryConfig, StatsError> {
        if !(self.categorical_threshold > 0.0 && self.categorical_threshold <= 1.0) {
            return Err(StatsError::InvalidConfig(format!(
                "categorical threshold must be in (0, 1], got {}",
                self.categorical_threshold
            )));
        }
        if self.top_values == 0 {
            return Err(StatsError::InvalidConfig(
                "top_values must be greater than zero".to_string(),
            ));
        }
        if self.top_rows == 0 {
            return Err(StatsError::InvalidConfig(
                "top_rows must be greater than zero".to_string(),
            ));
        }
        if let Some(spec) = self.metrics.iter().find(|m| m.top_n == Some(0)) {
            return Err(StatsError::InvalidConfig(format!(
                "top_n for metric '{}' must be greater than zero",
                spec.column
            )));
        }
        Ok(SummaryConfig {
            delimiter: self.delimiter,
            null_markers: self.null_markers,
            categorical_threshold: self.categorical_threshold,
            top_values: self.top_values,
            top_rows: self.top_rows,
            decimal_places: self.decimal_places,
            metrics: self.metrics,
            groups: self.groups,
            id_columns: self.id_columns,
        })
    }

    pub fn with_delimiter(self, delimiter: u8) -> Self {
        Self { delimiter, ..self }
    }

    pub fn with_null_markers(self, markers: Vec<String>) -> Self {
        Self {
            null_markers: markers,
            ..self
        }
    }

    pub fn with_categorical_threshold(self, threshold: f64) -> Self {
        Self {
            categorical_threshold: threshold,
            ..self
        }
    }

    pub fn with_top_values(self, top_values: usize) -> Self {
        Self { top_values, ..self }
    }

    pub fn with_top_rows(self, top_rows: usize) -> Self {
        Self { top_rows, ..self }
    }

    pub fn with_decimal_places(self, decimal_places: usize) -> Self {
        Self {
            decimal_places,
            ..self
        }
    }

    /// Request a top-performer ranking over `column`
    pub fn with_metric(mut self, column: &str, top_n: Option<usize>) -> Self {
        self.metrics.push(MetricSpec {
            column: column.to_string(),
            top_n,
        });
        self
    }

    /// Request a group breakdown over `column`
    pub fn with_group(mut self, column: &str, metric: Option<&str>) -> Self {
        self.groups.push(GroupSpec {
            column: column.to_string(),
            metric: metric.map(|m| m.to_string()),
        });
        self
    }

    /// Columns projected into each top-performer record
    pub fn with_id_columns(self, columns: Vec<String>) -> Self {
        Self {
            id_columns: columns,
            ..self
        }
    }
}
