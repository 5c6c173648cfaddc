/// Linux I2C character device the MCP9600 hangs off.
pub const I2C_BUS: &str = "/dev/i2c-1";

/// 7-bit address of the MCP9600 (ADDR pin strapped high).
pub const MCP9600_ADDRESS: u8 = 0x60;

/// Upper byte of the device ID/revision register on a genuine MCP9600.
pub const MCP9600_DEVICE_ID: u8 = 0x40;

/// Lowest hot-junction reading accepted for the brewing unit, in degrees Celsius.
pub const MIN_TEMP: f32 = 0.0;

/// Highest plausible thermocouple reading, in degrees Celsius.
pub const MAX_TEMP_READING: f32 = 200.0;
