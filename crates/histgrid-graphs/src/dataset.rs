//! Column-oriented tabular data with on-demand numeric coercion.

use histgrid_common::{HistGridError, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A named column of raw cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header name.
    pub name: String,
    /// Raw cell text, one entry per row.
    pub cells: Vec<String>,
}

/// A table whose columns can be looked up by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    name: String,
    columns: Vec<Column>,
    /// Row number in the source table for each row, so errors raised on a
    /// class subset still point at the input line.
    row_ids: Vec<usize>,
}

/// The two class partitions of one table.
#[derive(Debug, Clone)]
pub struct ClassSplit {
    /// Rows labelled 0.
    pub negative: Dataset,
    /// Rows labelled 1.
    pub positive: Dataset,
}

impl Dataset {
    /// Create an empty dataset with a display name used in error messages.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            row_ids: Vec::new(),
        }
    }

    /// Build a dataset from numeric columns.
    pub fn from_numeric<N, I>(name: impl Into<String>, columns: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<f64>)>,
    {
        let mut dataset = Self::new(name);
        for (column, values) in columns {
            dataset.push_column(column, values.iter().map(ToString::to_string).collect());
        }
        dataset
    }

    /// Read a CSV file with a header row.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            HistGridError::data_with_source(format!("Cannot open {}", path.display()), e)
        })?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Self::from_reader(name, file)
    }

    /// Read CSV from any reader. The first record is the header.
    pub fn from_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(ToString::to_string).collect();
        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

        for record in reader.records() {
            let record = record?;
            for (idx, value) in record.iter().enumerate() {
                cells[idx].push(value.to_string());
            }
        }

        let mut dataset = Self::new(name);
        for (header, column) in headers.into_iter().zip(cells) {
            dataset.push_column(header, column);
        }
        debug!(
            dataset = %dataset.name,
            columns = dataset.columns.len(),
            rows = dataset.row_count(),
            "Loaded CSV"
        );
        Ok(dataset)
    }

    /// Append or replace a column.
    pub fn push_column(&mut self, name: impl Into<String>, cells: Vec<String>) {
        let name = name.into();
        if let Some(existing) = self.columns.iter_mut().find(|c| c.name == name) {
            existing.cells = cells;
        } else {
            self.columns.push(Column { name, cells });
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Row number in the source table of the row at `row`.
    pub fn source_row(&self, row: usize) -> usize {
        self.row_ids.get(row).copied().unwrap_or(row)
    }

    /// Column headers in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Look up a column, failing with `MissingColumn`.
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| HistGridError::missing_column(name, &self.name))
    }

    /// Number of rows (length of the longest column).
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(|c| c.cells.len()).max().unwrap_or(0)
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Coerce a column to numbers. Empty cells are skipped as missing values.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let column = self.require_column(name)?;
        column
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.trim().is_empty())
            .map(|(row, cell)| {
                cell.trim()
                    .parse::<f64>()
                    .map_err(|_| {
                        HistGridError::non_numeric(
                            name,
                            &self.name,
                            self.source_row(row),
                            cell.as_str(),
                        )
                    })
            })
            .collect()
    }

    /// Names of columns whose non-empty cells all parse as numbers.
    /// Columns with no values at all are excluded.
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.cells.iter().any(|cell| !cell.trim().is_empty()))
            .filter(|c| {
                c.cells
                    .iter()
                    .filter(|cell| !cell.trim().is_empty())
                    .all(|cell| cell.trim().parse::<f64>().is_ok())
            })
            .map(|c| c.name.clone())
            .collect()
    }

    /// Keep the rows for which `keep` returns true.
    fn filter_rows<F>(&self, name: impl Into<String>, keep: F) -> Self
    where
        F: Fn(usize) -> bool,
    {
        let mut filtered = Self::new(name);
        filtered.row_ids = (0..self.row_count())
            .filter(|row| keep(*row))
            .map(|row| self.source_row(row))
            .collect();
        for column in &self.columns {
            let cells = column
                .cells
                .iter()
                .enumerate()
                .filter(|(row, _)| keep(*row))
                .map(|(_, cell)| cell.clone())
                .collect();
            filtered.push_column(column.name.clone(), cells);
        }
        filtered
    }

    /// Partition rows by a binary class column whose values parse as 0 or 1
    /// (`"0"`, `"1"`, `"0.0"`, `"1.0"`).
    pub fn split_by_class(&self, class_column: &str) -> Result<ClassSplit> {
        let column = self.require_column(class_column)?;
        let classes = column
            .cells
            .iter()
            .enumerate()
            .map(|(row, cell)| parse_class(cell).ok_or_else(|| {
                HistGridError::data(format!(
                    "Class column '{class_column}' row {}: '{cell}' is not 0 or 1",
                    self.source_row(row)
                ))
            }))
            .collect::<Result<Vec<bool>>>()?;

        let negative = self.filter_rows(format!("{} [class 0]", self.name), |row| !classes[row]);
        let positive = self.filter_rows(format!("{} [class 1]", self.name), |row| classes[row]);
        debug!(
            class_column,
            negative = negative.row_count(),
            positive = positive.row_count(),
            "Split dataset by class"
        );
        Ok(ClassSplit { negative, positive })
    }
}

fn parse_class(cell: &str) -> Option<bool> {
    let value: f64 = cell.trim().parse().ok()?;
    if value == 0.0 {
        Some(false)
    } else if (value - 1.0).abs() < f64::EPSILON {
        Some(true)
    } else {
        None
    }
}
