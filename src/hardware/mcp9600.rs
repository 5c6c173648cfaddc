//! MCP9600 thermocouple EMF to temperature converter.
//!
//! Only the registers needed for a one-shot hot-junction read are driven. The chip is left in
//! its power-on configuration (type K, continuous conversion).
use embedded_hal::blocking::i2c::WriteRead;
use num_enum::IntoPrimitive;

use super::{design_parameters, HotJunctionSensor};

// Register pointers
#[derive(IntoPrimitive, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    HotJunction = 0x00,
    JunctionDelta = 0x01,
    ColdJunction = 0x02,
    RawData = 0x03,
    Status = 0x04,
    SensorConfig = 0x05,
    DeviceConfig = 0x06,
    DeviceId = 0x20,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error<E> {
    #[error("I2C transaction failed: {0:?}")]
    I2c(E),
    #[error("unexpected device ID 0x{0:02x} (expected 0x{:02x})", design_parameters::MCP9600_DEVICE_ID)]
    UnexpectedDeviceId(u8),
}

pub struct Mcp9600<I> {
    i2c: I,
    address: u8,
}

impl<I> Mcp9600<I>
where
    I: WriteRead,
{
    /// Bind the driver to `address` and check that an MCP9600 answers there.
    pub fn new(i2c: I, address: u8) -> Result<Self, Error<I::Error>> {
        let mut dev = Self { i2c, address };
        let id = dev.read_register(Register::DeviceId)?;
        log::debug!("MCP9600 @0x{:02x}: device ID 0x{:02x}, revision 0x{:02x}", address, id[0], id[1]);
        if id[0] != design_parameters::MCP9600_DEVICE_ID {
            return Err(Error::UnexpectedDeviceId(id[0]));
        }
        Ok(dev)
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Hot-junction temperature in degrees Celsius.
    pub fn hot_junction(&mut self) -> Result<f32, Error<I::Error>> {
        let raw = self.read_register(Register::HotJunction)?;
        log::trace!("TH register: {:02x} {:02x}", raw[0], raw[1]);
        Ok(decode_temperature(raw))
    }

    pub fn release(self) -> I {
        self.i2c
    }

    fn read_register(&mut self, register: Register) -> Result<[u8; 2], Error<I::Error>> {
        let mut buffer: [u8; 2] = [0; 2];
        self.i2c
            .write_read(self.address, &[register.into()], &mut buffer)
            .map_err(Error::I2c)?;
        Ok(buffer)
    }
}

impl<I> HotJunctionSensor for Mcp9600<I>
where
    I: WriteRead,
    I::Error: core::fmt::Debug,
{
    type Error = Error<I::Error>;

    fn hot_junction_celsius(&mut self) -> Result<f32, Self::Error> {
        self.hot_junction()
    }
}

// Two's complement, 0.0625 degC per LSB, MSB first.
fn decode_temperature(raw: [u8; 2]) -> f32 {
    let x = raw[0] as f32 * 16.0 + raw[1] as f32 / 16.0;
    if (raw[0] & 0b1000_0000) != 0 {
        x - 4096.0
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Nack;

    /// Scripted bus: every `write_read` pops the next response and records the transaction.
    #[derive(Default)]
    struct FakeBus {
        responses: VecDeque<Result<[u8; 2], Nack>>,
        transactions: Vec<(u8, Vec<u8>)>,
    }

    impl FakeBus {
        fn with(responses: &[Result<[u8; 2], Nack>]) -> Self {
            Self {
                responses: responses.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl WriteRead for FakeBus {
        type Error = Nack;

        fn write_read(&mut self, address: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Nack> {
            self.transactions.push((address, bytes.to_vec()));
            let data = self.responses.pop_front().unwrap_or(Err(Nack))?;
            buffer.copy_from_slice(&data);
            Ok(())
        }
    }

    const ID_OK: Result<[u8; 2], Nack> = Ok([0x40, 0x11]);

    #[test]
    fn probe_reads_device_id_register() {
        let dev = Mcp9600::new(FakeBus::with(&[ID_OK]), 0x60).unwrap();
        assert_eq!(dev.address(), 0x60);
        let bus = dev.release();
        assert_eq!(bus.transactions, vec![(0x60, vec![0x20])]);
    }

    #[test]
    fn probe_rejects_foreign_device() {
        let err = Mcp9600::new(FakeBus::with(&[Ok([0x41, 0x00])]), 0x60).err();
        assert_eq!(err, Some(Error::UnexpectedDeviceId(0x41)));
    }

    #[test]
    fn probe_reports_missing_device() {
        let err = Mcp9600::new(FakeBus::with(&[Err(Nack)]), 0x60).err();
        assert_eq!(err, Some(Error::I2c(Nack)));
    }

    #[test]
    fn hot_junction_reads_th_register() {
        let mut dev = Mcp9600::new(FakeBus::with(&[ID_OK, Ok([0x05, 0xC8])]), 0x60).unwrap();
        assert_eq!(dev.hot_junction().unwrap(), 92.5);
        let bus = dev.release();
        assert_eq!(bus.transactions[1], (0x60, vec![0x00]));
    }

    #[test]
    fn hot_junction_bus_error() {
        let mut dev = Mcp9600::new(FakeBus::with(&[ID_OK, Err(Nack)]), 0x60).unwrap();
        assert_eq!(dev.hot_junction_celsius(), Err(Error::I2c(Nack)));
    }

    #[test]
    fn decode_fractional_and_negative() {
        assert_eq!(decode_temperature([0x00, 0x00]), 0.0);
        assert_eq!(decode_temperature([0x00, 0x01]), 0.0625);
        assert_eq!(decode_temperature([0x0C, 0x80]), 200.0);
        assert_eq!(decode_temperature([0xFF, 0xF0]), -1.0);
        assert_eq!(decode_temperature([0xFF, 0xCC]), -3.25);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::<Nack>::UnexpectedDeviceId(0x41).to_string(),
            "unexpected device ID 0x41 (expected 0x40)"
        );
        assert_eq!(Error::I2c(Nack).to_string(), "I2C transaction failed: Nack");
    }
}
