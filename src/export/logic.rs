// src/export/logic.rs

use crate::core::ledger::LedgerStore;
use crate::errors::AppResult;
use crate::export::csv::{ImportReport, import_csv, to_csv};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::to_json;
use crate::export::{ExportFormat, default_file_name, notify_export_success};
use crate::ui::messages::{info, warning};
use crate::utils::date::today;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};

/// High-level export/import glue between files and the ledger.
pub struct ExportLogic;

impl ExportLogic {
    /// Resolve the output path: explicit `file` (with `~` expansion) or
    /// `<label>_<today>.<ext>` in the current directory.
    pub fn output_path(file: Option<&str>, label: &str, format: ExportFormat) -> PathBuf {
        match file {
            Some(f) => expand_tilde(f),
            None => PathBuf::from(default_file_name(label, today(), format)),
        }
    }

    /// Render the ledger in `format`, in display order.
    pub fn render(store: &LedgerStore, format: ExportFormat) -> AppResult<String> {
        let content = match format {
            ExportFormat::Csv => to_csv(store.list())?,
            ExportFormat::Json => to_json(store.list())?,
        };
        Ok(content)
    }

    /// Write the ledger to `path`. Returns the number of exported records.
    pub fn export(
        store: &LedgerStore,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(path, force)?;

        if store.is_empty() {
            warning("The ledger is empty: the export will contain no rows.");
        }

        info(format!(
            "Exporting to {} ({}): {}",
            format.as_str().to_uppercase(),
            format.mime_type(),
            path.display()
        ));

        let content = Self::render(store, format)?;
        fs::write(path, content)?;

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(store.len())
    }

    /// Read a CSV file and merge it into the ledger.
    pub fn import(store: &mut LedgerStore, path: &Path) -> AppResult<ImportReport> {
        info(format!("Importing from CSV: {}", path.display()));
        let text = fs::read_to_string(path)?;
        Ok(import_csv(store, &text))
    }
}
