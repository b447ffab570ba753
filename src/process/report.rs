use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of one pass over an input file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassReport {
    pub header_rows: u64,
    /// Lines after the header, blank ones included.
    pub data_rows: u64,
    pub rows_written: u64,
    pub empty_rows: u64,
    pub shape_rejected: u64,
    pub value_rejected: u64,
    pub processing_start: DateTime<Utc>,
    pub processing_end: DateTime<Utc>,
}

impl PassReport {
    pub(crate) fn started() -> Self {
        let now = Utc::now();
        Self {
            header_rows: 0,
            data_rows: 0,
            rows_written: 0,
            empty_rows: 0,
            shape_rejected: 0,
            value_rejected: 0,
            processing_start: now,
            processing_end: now,
        }
    }

    pub(crate) fn finish(mut self) -> Self {
        self.processing_end = Utc::now();
        self
    }

    pub fn rows_dropped(&self) -> u64 {
        self.shape_rejected + self.value_rejected
    }

    /// True when every data row made it to the output: no blank lines and
    /// no rejections.
    pub fn is_clean(&self) -> bool {
        self.rows_written == self.data_rows
    }
}
