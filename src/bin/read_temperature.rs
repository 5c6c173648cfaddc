//! Prints the MCP9600 hot-junction temperature in degrees Celsius.
//!
//! ## Exit codes
//! * `0` reading printed on stdout
//! * `1` I2C or sensor error while reading
//! * `2` reading outside the valid range
//! * `3` I2C bus driver unavailable
#![deny(warnings)]

use std::io;
use std::process::ExitCode;

use coffee_thermo::{hardware::setup, TemperatureReader};

fn main() -> ExitCode {
    setup::init_logging();

    let reader = TemperatureReader::new(setup::LinuxBackend::default());
    let code = reader.run(&mut io::stdout().lock(), &mut io::stderr().lock());

    log::info!("Exiting with {}", code);
    ExitCode::from(code)
}
