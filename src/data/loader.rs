//! Spreadsheet Loader Module
//! Reads one worksheet into a Polars DataFrame of nullable string columns.

use crate::config::DashboardSettings;
use calamine::{open_workbook_auto, Data, Range, Reader};
use polars::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Columns every case sheet must carry.
pub const STATE_COLUMN: &str = "state";
pub const GENDER_COLUMN: &str = "gender";
pub const AGE_COLUMN: &str = "agearrest";

pub const REQUIRED_COLUMNS: [&str; 3] = [STATE_COLUMN, GENDER_COLUMN, AGE_COLUMN];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to open workbook {}: {source}", .path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("Worksheet '{sheet}' not found (available: {})", .available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },
    #[error("Worksheet '{0}' has no header row")]
    EmptySheet(String),
    #[error("Required column '{column}' is missing (columns: {})", .available.join(", "))]
    MissingColumn {
        column: &'static str,
        available: Vec<String>,
    },
    #[error("Failed to build case table: {0}")]
    Polars(#[from] PolarsError),
}

/// Loads the case table from a spreadsheet.
pub struct CaseLoader;

impl CaseLoader {
    /// Load the worksheet named in the settings.
    pub fn from_settings(settings: &DashboardSettings) -> Result<DataFrame, LoaderError> {
        Self::load_sheet(&settings.data_file, &settings.sheet_name)
    }

    /// Load one worksheet. The first row is the header; every column is kept.
    pub fn load_sheet(path: &Path, sheet_name: &str) -> Result<DataFrame, LoaderError> {
        let workbook_err = |source| LoaderError::Workbook {
            path: path.to_path_buf(),
            source,
        };

        let mut workbook = open_workbook_auto(path).map_err(workbook_err)?;

        let available = workbook.sheet_names();
        if !available.iter().any(|name| name == sheet_name) {
            return Err(LoaderError::SheetNotFound {
                sheet: sheet_name.to_string(),
                available,
            });
        }

        let range = workbook.worksheet_range(sheet_name).map_err(workbook_err)?;
        let df = Self::range_to_frame(&range, sheet_name)?;

        for required in REQUIRED_COLUMNS {
            if df.column(required).is_err() {
                return Err(LoaderError::MissingColumn {
                    column: required,
                    available: Self::get_columns(&df),
                });
            }
        }

        info!(
            path = %path.display(),
            sheet = sheet_name,
            rows = df.height(),
            columns = df.width(),
            "loaded case table"
        );
        Ok(df)
    }

    /// Get list of column names from a loaded table.
    pub fn get_columns(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn range_to_frame(range: &Range<Data>, sheet_name: &str) -> Result<DataFrame, LoaderError> {
        let mut rows = range.rows();
        let header = rows
            .next()
            .ok_or_else(|| LoaderError::EmptySheet(sheet_name.to_string()))?;

        let names = dedupe_headers(
            header
                .iter()
                .enumerate()
                .map(|(i, cell)| match cell_text(cell) {
                    Some(name) => name,
                    None => format!("column_{}", i + 1),
                })
                .collect(),
        );

        let mut values: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
        let mut skipped = 0usize;

        for row in rows {
            let cells: Vec<Option<String>> = row.iter().map(cell_text).collect();
            if cells.iter().all(Option::is_none) {
                skipped += 1;
                continue;
            }
            for (column, cell) in values.iter_mut().zip(cells) {
                column.push(cell);
            }
        }

        if skipped > 0 {
            debug!(skipped, "skipped blank rows");
        }

        let columns: Vec<Column> = names
            .into_iter()
            .zip(values)
            .map(|(name, column)| Column::new(name.into(), column))
            .collect();

        Ok(DataFrame::new(columns)?)
    }
}

/// Repeated header names get a `.N` suffix (`notes`, `notes.1`, ...).
fn dedupe_headers(names: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(names.len());
    names
        .into_iter()
        .map(|name| {
            let mut unique = name.clone();
            let mut n = 1;
            while seen.contains(&unique) {
                unique = format!("{name}.{n}");
                n += 1;
            }
            seen.insert(unique.clone());
            unique
        })
        .collect()
}

/// Cell contents as trimmed text; empty cells are null.
fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) => s.trim().to_string(),
        // f64 Display drops the trailing ".0" of whole numbers
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        other => other.to_string(),
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
