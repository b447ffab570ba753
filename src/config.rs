use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::process::layout::Layout;

pub const INPUT_FILE_NAME: &str = "batchfile_2_kelvin.csv";
pub const OUTPUT_FILE_NAME: &str = "batchfile_3_farenheit.csv";

/// Settings for one conversion pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub layout: Layout,
    /// Decimal places for the Fahrenheit value; `None` keeps full precision.
    pub rounding_digits: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT_FILE_NAME),
            output: PathBuf::from(OUTPUT_FILE_NAME),
            layout: Layout::full(),
            rounding_digits: Some(2),
        }
    }
}
