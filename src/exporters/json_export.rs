use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::ensure_parent;
use crate::data_models::ParsedRecord;

/// Pretty-printed JSON array of the full records.
pub fn export_to_json(records: &[ParsedRecord], path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let file = File::create(path)
        .with_context(|| format!("Failed to export JSON to {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .with_context(|| format!("Failed to export JSON to {}", path.display()))?;
    writer.flush()?;

    log::info!(
        "JSON export completed: {} ({} records)",
        path.display(),
        records.len()
    );
    Ok(())
}
