// src/export/mod.rs

pub mod csv;
mod fs_utils;
pub mod logic;
pub mod model;

pub use logic::ExportLogic;
pub use model::RecordExport;

use crate::ui::messages::success;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }
}

/// Suggested export file name: `<label>_<YYYY-MM-DD>.<ext>`.
pub fn default_file_name(label: &str, export_date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        label,
        export_date.format("%Y-%m-%d"),
        format.as_str()
    )
}
