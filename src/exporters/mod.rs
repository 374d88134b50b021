use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::data_models::ParsedRecord;

pub mod csv_export;
pub mod json_export;
pub mod xlsx_export;

pub use csv_export::export_to_csv;
pub use json_export::export_to_json;
pub use xlsx_export::export_to_xlsx;

/// File stem shared by every export.
pub const OUTPUT_BASE_NAME: &str = "bing_results";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
    Xlsx,
    All,
}

impl OutputFormat {
    pub fn includes(&self, other: OutputFormat) -> bool {
        *self == OutputFormat::All || *self == other
    }
}

/// Writes `records` in every format `format` selects, returning the files
/// written.
pub fn export(records: &[ParsedRecord], format: OutputFormat, output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let base = output_dir.join(OUTPUT_BASE_NAME);
    let mut written = Vec::new();

    if format.includes(OutputFormat::Json) {
        let path = base.with_extension("json");
        export_to_json(records, &path)?;
        written.push(path);
    }
    if format.includes(OutputFormat::Csv) {
        let path = base.with_extension("csv");
        export_to_csv(records, &path)?;
        written.push(path);
    }
    if format.includes(OutputFormat::Xlsx) {
        let path = base.with_extension("xlsx");
        export_to_xlsx(records, &path)?;
        written.push(path);
    }
    Ok(written)
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    Ok(())
}
