// src/process/mod.rs
use std::{
    fs::File,
    io::{self, BufReader, Read, Write},
    path::Path,
    time::Instant,
};

use csv::{StringRecord, Terminator, WriterBuilder};
use tracing::{debug, error, info, instrument, warn};

use crate::config::Config;

pub mod convert;
pub mod error;
pub mod layout;
pub mod report;
pub mod rows;
#[cfg(test)]
mod test_log;

use convert::{convert_temperature, format_fahrenheit};
use error::PassError;
use layout::Layout;
use report::PassReport;
use rows::RowReader;

/// Single-pass Kelvin → Fahrenheit converter over one delimited file.
#[derive(Debug, Clone)]
pub struct RowConverter {
    layout: Layout,
    rounding_digits: Option<u32>,
}

impl RowConverter {
    /// Converter for `layout`, rounding to 2 decimal places.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            rounding_digits: Some(2),
        }
    }

    /// `None` writes full `f64` precision.
    pub fn with_rounding(mut self, digits: Option<u32>) -> Self {
        self.rounding_digits = digits;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.layout.clone()).with_rounding(config.rounding_digits)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn convert_temperature(&self, raw: &str) -> Option<f64> {
        convert_temperature(raw, self.rounding_digits)
    }

    /// Run one pass from `input` to `output`.
    ///
    /// File-level failures are logged and end the pass; they are never
    /// returned. `None` means the pass did not reach the end of the input.
    #[instrument(level = "info", skip(self, input, output), fields(input = %input.as_ref().display(), output = %output.as_ref().display()))]
    pub fn process_rows<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Option<PassReport> {
        match self.try_process_rows(input, output) {
            Ok(report) => Some(report),
            Err(err) => {
                error!("{}", err);
                None
            }
        }
    }

    /// Same pass as [`process_rows`](Self::process_rows), with the
    /// file-level failure handed back instead of logged.
    pub fn try_process_rows<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<PassReport, PassError> {
        let input = input.as_ref();
        let output = output.as_ref();
        let start = Instant::now();

        let infile = File::open(input).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => PassError::SourceNotFound {
                path: input.to_path_buf(),
                source,
            },
            _ => PassError::Io {
                path: input.to_path_buf(),
                source,
            },
        })?;
        let outfile = File::create(output).map_err(|source| PassError::Io {
            path: output.to_path_buf(),
            source,
        })?;

        let report = self.convert_stream(infile, outfile)?;

        info!(
            written = report.rows_written,
            dropped = report.rows_dropped(),
            "converted {} of {} data rows in {:?}",
            report.rows_written,
            report.data_rows,
            start.elapsed()
        );
        Ok(report)
    }

    /// Row loop over any reader/writer pair. Both are dropped before return.
    ///
    /// The header line is copied byte for byte, with its terminator written
    /// as `\n`. Data rows go through the CSV writer, which quotes a field
    /// only where it needs quoting.
    pub fn convert_stream<R: Read, W: Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> Result<PassReport, PassError> {
        let mut rows = RowReader::new(BufReader::new(reader));
        let mut report = PassReport::started();
        let mut record = StringRecord::new();

        if self.layout.has_header() {
            // blank lines ahead of the header are not rows
            while rows.read_row(&mut record)? {
                if record.is_empty() {
                    continue;
                }
                debug!("Header: {:?}", record);
                writer.write_all(rows.raw_line())?;
                writer.write_all(b"\n")?;
                report.header_rows = 1;
                break;
            }
        }

        let mut wtr = WriterBuilder::new()
            .flexible(true) // shape is checked per row against the layout
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);

        let mut index: u64 = 0;
        while rows.read_row(&mut record)? {
            index += 1;
            report.data_rows += 1;

            if record.is_empty() {
                report.empty_rows += 1;
                continue;
            }

            let raw = match self.layout.destructure(&record) {
                Ok(raw) => raw,
                Err(err) => {
                    error!(row = index, "Error processing row {}: {}", index, err);
                    report.shape_rejected += 1;
                    continue;
                }
            };

            match self.convert_temperature(raw) {
                Some(fahrenheit) => {
                    let converted = self
                        .layout
                        .rebuild(&record, &format_fahrenheit(fahrenheit));
                    wtr.write_record(&converted).map_err(PassError::from_csv)?;
                    report.rows_written += 1;
                }
                None => {
                    warn!(row = index, "Skipping row {}: invalid temperature.", index);
                    report.value_rejected += 1;
                }
            }
        }

        wtr.flush()?;
        Ok(report.finish())
    }
}

impl Default for RowConverter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
