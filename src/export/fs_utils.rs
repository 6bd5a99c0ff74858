use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, warning};
use std::path::Path;

/// An existing `path` is only overwritten with `force` or after the user agrees.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    if confirm("Overwrite?")? {
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}
