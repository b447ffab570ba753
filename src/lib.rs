pub mod config;
pub mod process;

pub use config::{Config, INPUT_FILE_NAME, OUTPUT_FILE_NAME};
pub use process::{
    convert::{convert_temperature, kelvin_to_fahrenheit},
    error::{PassError, RowError},
    layout::Layout,
    report::PassReport,
    RowConverter,
};
