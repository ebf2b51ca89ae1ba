use csv::ReaderBuilder;

use crate::config::SummaryConfig;
use crate::dataset::Dataset;
use crate::errors::StatsError;

/// Load a delimited text file into a [`Dataset`].
///
/// The first record is always the header; every following record is aligned
/// positionally to it. Records whose field count does not match the header
/// are skipped and counted rather than aborting the load. Quoted fields
/// containing the delimiter are honored by the underlying reader.
///
/// Cells are kept as raw trimmed text; the only normalization applied here
/// is folding empty and null-marker cells into the missing sentinel. Type
/// interpretation is deferred entirely to classification.
pub fn load_csv(path: &str, config: &SummaryConfig) -> Result<Dataset, StatsError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter())
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    let mut skipped_rows = 0usize;

    for record in reader.records() {
        let record = record?;
        if record.len() != headers.len() {
            skipped_rows += 1;
            continue;
        }
        let row = record
            .iter()
            .map(|cell| {
                if config.is_missing(cell) {
                    None
                } else {
                    Some(cell.trim().to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    Ok(Dataset::new(headers, rows, skipped_rows))
}
