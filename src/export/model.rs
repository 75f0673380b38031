// src/export/model.rs

use crate::models::shift::Checkpoint;
use serde::Serialize;

/// Flat checkpoint row; the column names are the ones users already know.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CheckpointExport {
    #[serde(rename = "Straordinario maturato")]
    pub overtime: String,
    #[serde(rename = "Orario")]
    pub time: String,
}

impl From<&Checkpoint> for CheckpointExport {
    fn from(c: &Checkpoint) -> Self {
        Self {
            overtime: c.label(),
            time: c.time.to_string(),
        }
    }
}

/// Header for the table and the CSV file.
pub fn get_headers() -> Vec<&'static str> {
    vec!["Straordinario maturato", "Orario"]
}

pub(crate) fn checkpoint_to_row(c: &CheckpointExport) -> Vec<String> {
    vec![c.overtime.clone(), c.time.clone()]
}

pub(crate) fn checkpoints_to_table(rows: &[CheckpointExport]) -> Vec<Vec<String>> {
    rows.iter().map(checkpoint_to_row).collect()
}
