// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::CheckpointExport;
use crate::models::shift::ShiftResult;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the overtime slots.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the checkpoints of `result` to `file`.
    ///
    /// Nothing is written when there are no checkpoints.
    pub fn export(
        result: &ShiftResult,
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<()> {
        if result.checkpoints.is_empty() {
            warning("No slots to export.");
            return Ok(());
        }

        ensure_writable(file, force)?;

        let rows: Vec<CheckpointExport> = result.checkpoints.iter().map(Into::into).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, file),
            ExportFormat::Json => export_json(&rows, file),
        }
    }
}
