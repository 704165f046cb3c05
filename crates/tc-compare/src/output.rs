//! Report artifact naming and writing

use std::fs;
use std::path::{Path, PathBuf};
use tc_core::{output, ComparisonReport};
use tracing::info;

use crate::error::{CompareError, CompareResult};
use crate::reconcile::render;

/// File name for a report: the trimmed base name plus `.txt`, or `output.txt`
/// when the name is blank. Path separators become `_`, so the file always
/// lands in the output directory.
pub fn output_file_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return format!("{}.{}", output::FALLBACK_FILE_NAME, output::FILE_EXTENSION);
    }

    let base: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}.{}", base, output::FILE_EXTENSION)
}

/// Render `report` and write it into `dir`. Returns the written path.
pub fn write_report(
    dir: impl AsRef<Path>,
    name: &str,
    report: &ComparisonReport,
) -> CompareResult<PathBuf> {
    let path = dir.as_ref().join(output_file_name(name));

    fs::write(&path, render(report)).map_err(|e| CompareError::WriteOutput {
        path: path.clone(),
        source: e,
    })?;

    info!("Wrote {} rows to {:?}", report.len(), path);
    Ok(path)
}
