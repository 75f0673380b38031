// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{CheckpointExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Serialize rows as CSV (header included thanks to serde).
pub fn write_csv<W: Write>(rows: &[CheckpointExport], out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    for item in rows {
        wtr.serialize(item)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Serialize rows as pretty-printed JSON.
pub fn write_json<W: Write>(rows: &[CheckpointExport], mut out: W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, rows)?;
    out.write_all(b"\n")?;
    Ok(())
}

pub(crate) fn export_json(rows: &[CheckpointExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    write_json(rows, File::create(path)?)?;

    notify_export_success("JSON", path);
    Ok(())
}

pub(crate) fn export_csv(rows: &[CheckpointExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    write_csv(rows, File::create(path)?)?;

    notify_export_success("CSV", path);
    Ok(())
}
