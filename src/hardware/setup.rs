//! Host hardware configuration
//!
//! Opens the Linux I2C character device and binds the MCP9600 driver to it.
use std::path::{Path, PathBuf};

use super::{design_parameters, mcp9600, I2cBus, Mcp9600, SensorBackend};

type BusError = <I2cBus as embedded_hal::blocking::i2c::WriteRead>::Error;

/// MCP9600 on a Linux `/dev/i2c-*` bus.
pub struct LinuxBackend {
    bus: PathBuf,
}

impl LinuxBackend {
    pub fn new(bus: impl AsRef<Path>) -> Self {
        Self {
            bus: bus.as_ref().to_path_buf(),
        }
    }
}

impl Default for LinuxBackend {
    fn default() -> Self {
        Self::new(design_parameters::I2C_BUS)
    }
}

impl SensorBackend for LinuxBackend {
    type Adapter = I2cBus;
    type AdapterError = BusError;
    type Sensor = Mcp9600<I2cBus>;
    type SensorError = mcp9600::Error<BusError>;

    fn adapter(&self) -> Result<I2cBus, BusError> {
        log::debug!("Opening {}", self.bus.display());
        I2cBus::new(&self.bus)
    }

    fn sensor(&self, adapter: I2cBus, address: u8) -> Result<Self::Sensor, Self::SensorError> {
        Mcp9600::new(adapter, address)
    }
}

/// Install the stderr logger. Silent unless `RUST_LOG` asks for records.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("off");
    if env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
        .is_ok()
    {
        log::info!("Starting");
    }
}
