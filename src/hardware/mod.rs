pub use embedded_hal;
pub use linux_embedded_hal as hal;

pub mod design_parameters;
pub mod mcp9600;
pub mod setup;

pub use mcp9600::Mcp9600;

/// Bus handle used on the target.
pub type I2cBus = hal::I2cdev;

/// Thermocouple front end bound to a device address.
pub trait HotJunctionSensor {
    type Error: core::fmt::Display;

    /// One hot-junction conversion result, degrees Celsius.
    fn hot_junction_celsius(&mut self) -> Result<f32, Self::Error>;
}

/// Access to the sensor hardware, split in two stages so that a missing bus driver can be told
/// apart from a missing or misbehaving device.
pub trait SensorBackend {
    type Adapter;
    type AdapterError: core::fmt::Display;
    type Sensor: HotJunctionSensor;
    type SensorError: core::fmt::Display;

    /// Acquire the bus adapter. Failing here means the sensor capability is not present at all.
    fn adapter(&self) -> Result<Self::Adapter, Self::AdapterError>;

    /// Bind the device at `address` on an acquired adapter.
    fn sensor(&self, adapter: Self::Adapter, address: u8) -> Result<Self::Sensor, Self::SensorError>;
}
