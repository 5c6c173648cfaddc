//! One-shot temperature acquisition.
//!
//! Acquire the bus, bind the MCP9600, take a single hot-junction reading, check it against the
//! plausible range for the brewing unit. Every failure is terminal; retry policy belongs to
//! whoever invoked us.
use std::io::Write;

use crate::hardware::{design_parameters, HotJunctionSensor, SensorBackend};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_SENSOR_ERROR: u8 = 1;
pub const EXIT_OUT_OF_RANGE: u8 = 2;
pub const EXIT_CAPABILITY_UNAVAILABLE: u8 = 3;

/// Inclusive bounds for an acceptable reading, degrees Celsius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidRange {
    pub min: f32,
    pub max: f32,
}

impl ValidRange {
    pub const BREWING: ValidRange = ValidRange {
        min: design_parameters::MIN_TEMP,
        max: design_parameters::MAX_TEMP_READING,
    };

    pub fn check(&self, value: f32) -> Result<f32, ReadError> {
        if value < self.min || value > self.max {
            return Err(ReadError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }
}

impl Default for ValidRange {
    fn default() -> Self {
        Self::BREWING
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ReadError {
    #[error("Failed to import mcp9600 library: {0}")]
    CapabilityUnavailable(String),
    #[error("Failed to read temperature from MCP9600: {0}")]
    AcquisitionFailed(String),
    #[error("Temperature {value:?}°C out of valid range ({min:?}-{max:?}°C)")]
    OutOfRange { value: f32, min: f32, max: f32 },
}

impl ReadError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ReadError::CapabilityUnavailable(_) => EXIT_CAPABILITY_UNAVAILABLE,
            ReadError::AcquisitionFailed(_) => EXIT_SENSOR_ERROR,
            ReadError::OutOfRange { .. } => EXIT_OUT_OF_RANGE,
        }
    }
}

pub struct TemperatureReader<B> {
    backend: B,
    address: u8,
    range: ValidRange,
}

impl<B: SensorBackend> TemperatureReader<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            address: design_parameters::MCP9600_ADDRESS,
            range: ValidRange::BREWING,
        }
    }

    /// Acquire, read and validate exactly once.
    pub fn read(&self) -> Result<f32, ReadError> {
        let adapter = self
            .backend
            .adapter()
            .map_err(|e| ReadError::CapabilityUnavailable(e.to_string()))?;

        // A device that does not answer at init is a sensor error, not a missing capability.
        let mut sensor = self
            .backend
            .sensor(adapter, self.address)
            .map_err(|e| ReadError::AcquisitionFailed(e.to_string()))?;

        let temperature = sensor
            .hot_junction_celsius()
            .map_err(|e| ReadError::AcquisitionFailed(e.to_string()))?;
        log::debug!("Hot junction @0x{:02x}: {:?} C", self.address, temperature);

        self.range.check(temperature)
    }

    /// Perform one read and report it: the value on `out`, or one `ERROR: ` line on `err`.
    /// Returns the process exit code.
    pub fn run(&self, out: &mut impl Write, err: &mut impl Write) -> u8 {
        let result = self.read().and_then(|temperature| {
            writeln!(out, "{:?}", temperature)
                .and_then(|()| out.flush())
                .map_err(|e| ReadError::AcquisitionFailed(e.to_string()))
        });

        match result {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                log::info!("Read failed: {:?}", e);
                // Nowhere left to report a broken stderr; the exit code still carries the class.
                writeln!(err, "ERROR: {}", e).ok();
                e.exit_code()
            }
        }
    }
}
