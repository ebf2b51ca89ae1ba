/// An in-memory table: ordered column names plus ordered row records.
///
/// Every row holds exactly one cell per column. A cell that was empty or
/// matched a null marker at load time is the explicit `None` sentinel, so
/// missingness is never represented by omission.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
    skipped_rows: usize,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>, skipped_rows: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self {
            columns,
            rows,
            skipped_rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        self.columns.as_slice()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Rows dropped at load time for a field count not matching the header
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (row, column); `None` is the missing sentinel
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows[row][col].as_deref()
    }

    /// Iterate one column top to bottom, preserving row order
    pub fn column_values(&self, col: usize) -> impl Iterator<Item = Option<&str>> {
        self.rows.iter().map(move |row| row[col].as_deref())
    }
}
