use std::io::BufRead;

use csv::{ReaderBuilder, StringRecord};

use crate::process::error::PassError;

/// Reads one physical line per row, so blank lines reach the caller as
/// empty records instead of being swallowed by the CSV parser.
pub struct RowReader<R> {
    inner: R,
    line: Vec<u8>,
    line_number: u64,
}

impl<R: BufRead> RowReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: Vec::new(),
            line_number: 0,
        }
    }

    /// 1-based number of the last line read.
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Bytes of the last line read, without its terminator.
    pub fn raw_line(&self) -> &[u8] {
        strip_terminator(&self.line)
    }

    /// Read the next line into `record`. Returns `false` at end of input.
    /// A blank line leaves `record` empty.
    pub fn read_row(&mut self, record: &mut StringRecord) -> Result<bool, PassError> {
        self.line.clear();
        if self.inner.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        record.clear();

        let line = self.line_number;
        let body = strip_terminator(&self.line);
        if body.is_empty() {
            return Ok(true);
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .buffer_capacity(body.len())
            .from_reader(body);
        rdr.read_record(record)
            .map_err(|err| match PassError::from_csv(err) {
                PassError::Unexpected { source, .. } => PassError::Unexpected { line, source },
                other => other,
            })?;
        Ok(true)
    }
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
