//! Coffee machine boiler thermometer.
//!
//! Reads the hot junction of an MCP9600 thermocouple amplifier once over I2C and reports the
//! value through stdout and the process exit code. See [reader::TemperatureReader].
pub mod hardware;
pub mod reader;

pub use reader::{ReadError, TemperatureReader, ValidRange};
