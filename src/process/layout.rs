use anyhow::{ensure, Result};
use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::process::error::RowError;

/// Fixed field layout of a temperature file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LayoutFields")]
pub struct Layout {
    /// Column names, in file order.
    columns: Vec<String>,
    /// Index into `columns` of the Kelvin field.
    temperature_column: usize,
    /// Whether the first row is a header to pass through.
    has_header: bool,
}

/// Unchecked wire form of [`Layout`].
#[derive(Deserialize)]
struct LayoutFields {
    columns: Vec<String>,
    temperature_column: usize,
    has_header: bool,
}

impl TryFrom<LayoutFields> for Layout {
    type Error = anyhow::Error;

    fn try_from(fields: LayoutFields) -> Result<Self> {
        Layout::new(fields.columns, fields.temperature_column, fields.has_header)
    }
}

impl Layout {
    pub fn new(columns: Vec<String>, temperature_column: usize, has_header: bool) -> Result<Self> {
        ensure!(
            temperature_column < columns.len(),
            "temperature column {} is outside the {} columns of the layout",
            temperature_column,
            columns.len()
        );
        Ok(Self {
            columns,
            temperature_column,
            has_header,
        })
    }

    /// One field per row, the Kelvin temperature, no header.
    pub fn minimal() -> Self {
        Self {
            columns: vec!["TempK".into()],
            temperature_column: 0,
            has_header: false,
        }
    }

    /// `Year,Month,Day,Time,TempK` with one header row.
    pub fn full() -> Self {
        Self {
            columns: ["Year", "Month", "Day", "Time", "TempK"]
                .into_iter()
                .map(String::from)
                .collect(),
            temperature_column: 4,
            has_header: true,
        }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn temperature_column(&self) -> usize {
        self.temperature_column
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Check a data row against the layout and hand back its temperature field.
    pub fn destructure<'r>(&self, record: &'r StringRecord) -> Result<&'r str, RowError> {
        let shape = RowError::Shape {
            expected: self.width(),
            found: record.len(),
        };
        if record.len() != self.width() {
            return Err(shape);
        }
        record.get(self.temperature_column).ok_or(shape)
    }

    /// Copy `record` with the temperature field replaced by `fahrenheit`.
    pub fn rebuild(&self, record: &StringRecord, fahrenheit: &str) -> StringRecord {
        record
            .iter()
            .enumerate()
            .map(|(i, field)| {
                if i == self.temperature_column {
                    fahrenheit
                } else {
                    field
                }
            })
            .collect()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_layout_takes_last_field() {
        let layout = Layout::full();
        let row = StringRecord::from(vec!["2020", "1", "1", "00:00", "300"]);
        assert_eq!(layout.destructure(&row), Ok("300"));
    }

    #[test]
    fn wrong_width_is_a_shape_error() {
        let layout = Layout::full();
        let row = StringRecord::from(vec!["300"]);
        assert_eq!(
            layout.destructure(&row),
            Err(RowError::Shape {
                expected: 5,
                found: 1
            })
        );

        let row = StringRecord::from(vec!["2020", "1", "1", "00:00", "300", "extra"]);
        assert!(layout.destructure(&row).is_err());
    }

    #[test]
    fn minimal_layout_rejects_extra_fields() {
        let layout = Layout::minimal();
        assert_eq!(layout.destructure(&StringRecord::from(vec!["300"])), Ok("300"));
        assert!(layout
            .destructure(&StringRecord::from(vec!["300", "301"]))
            .is_err());
    }

    #[test]
    fn rebuild_keeps_other_fields_in_order() {
        let layout = Layout::full();
        let row = StringRecord::from(vec!["2020", "1", "1", "00:00", "300"]);
        let out = layout.rebuild(&row, "80.33");
        assert_eq!(
            out.iter().collect::<Vec<_>>(),
            vec!["2020", "1", "1", "00:00", "80.33"]
        );
    }

    #[test]
    fn custom_layout_validates_temperature_index() {
        assert!(Layout::new(vec!["a".into(), "b".into()], 2, false).is_err());
        let layout = Layout::new(vec!["TempK".into(), "Station".into()], 0, true).unwrap();
        let row = StringRecord::from(vec!["250", "north"]);
        assert_eq!(layout.destructure(&row), Ok("250"));
    }

    #[test]
    fn deserializing_checks_temperature_index() -> anyhow::Result<()> {
        let bad = r#"{"columns":["TempK"],"temperature_column":3,"has_header":false}"#;
        let err = serde_json::from_str::<Layout>(bad).unwrap_err();
        assert!(err.to_string().contains("temperature column 3"));

        let good = r#"{"columns":["Station","TempK"],"temperature_column":1,"has_header":true}"#;
        let layout: Layout = serde_json::from_str(good)?;
        assert_eq!(layout.columns().to_vec(), vec!["Station", "TempK"]);
        assert_eq!(layout.temperature_column(), 1);
        assert!(layout.has_header());

        let round_trip: Layout = serde_json::from_str(&serde_json::to_string(&Layout::full())?)?;
        assert_eq!(round_trip, Layout::full());
        Ok(())
    }
}
