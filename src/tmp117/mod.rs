//! Implementation for the TMP117 temperature sensor.
//!
//! Every register access starts with a pointer byte selecting the register.
//! Reads keep the bus claimed between the pointer write and the data phase
//! (repeated start), so a session must own the bus for the duration of each
//! transaction; interleaving another master's traffic in between would
//! corrupt the access.

mod error;
pub mod registers;

use embedded_hal::blocking::i2c::{Write, WriteRead};

use crate::temperature::{self, Temperature};

pub use self::{
    error::Error,
    registers::{Configuration, DeviceId, Register, DEVICE_ID_VALUE},
};

/// Factory-default 7-bit bus address (ADD0 pin tied to ground).
pub const DEFAULT_ADDRESS: u8 = 0x48;

/// An exclusive session with one TMP117 on the bus.
///
/// Created once at startup, bound to the sensor's fixed address, and owned
/// for the whole sensing lifetime.
pub struct Tmp117<I2C> {
    i2c: I2C,
    address: u8,
}

impl<E, I2C> Tmp117<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
{
    /// Claim the bus for the sensor at `address`.
    #[inline]
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Give the bus back, ending the session.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Write a single value byte to `register`.
    ///
    /// Issued as one bus write carrying the register pointer and the value
    /// back to back.
    pub fn write_register(&mut self, register: Register, value: u8) -> Result<(), Error<E>> {
        self.i2c.write(self.address, &[register as u8, value])?;
        Ok(())
    }

    /// Fill `buf` from `register`.
    ///
    /// The pointer write and the data read form one transaction; the bus is
    /// not released in between. No retry is attempted here; the caller
    /// decides whether a failure is worth another attempt.
    pub fn read_register(&mut self, register: Register, buf: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c.write_read(self.address, &[register as u8], buf)?;
        Ok(())
    }

    fn read_u16(&mut self, register: Register) -> Result<[u8; 2], Error<E>> {
        let mut buf = [0u8; 2];
        self.read_register(register, &mut buf)?;
        Ok(buf)
    }

    /// Read the identification register.
    pub fn device_id(&mut self) -> Result<DeviceId, Error<E>> {
        Ok(DeviceId::from_be_bytes(self.read_u16(Register::DeviceId)?))
    }

    /// Check that the device on the other end is a TMP117.
    ///
    /// Returns the full ID register (identifier + silicon revision) on a
    /// match, [`Error::UnknownDevice`] otherwise.
    pub fn identify(&mut self) -> Result<DeviceId, Error<E>> {
        let id = self.device_id()?;
        if id.is_tmp117() {
            Ok(id)
        } else {
            Err(Error::UnknownDevice(id.0))
        }
    }

    /// Whether a fresh conversion result is waiting to be read.
    ///
    /// Reads the configuration register and extracts the data-ready flag;
    /// all other bits are ignored.
    pub fn data_ready(&mut self) -> Result<bool, Error<E>> {
        let raw = self.read_u16(Register::Configuration)?;
        Ok(Configuration::from_be_bytes(raw).data_ready())
    }

    /// Read and convert the most recent conversion result.
    ///
    /// Only meaningful when [`Tmp117::data_ready`] reported `true` since
    /// the last conversion; the register otherwise still holds the previous
    /// sample.
    pub fn read_temperature(&mut self) -> Result<Temperature, Error<E>> {
        let raw = self.read_u16(Register::TempResult)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("temp result: {=u8}, {=u8}", raw[0], raw[1]);
        Ok(temperature::from_raw(raw))
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal_mock::{
        i2c::{Mock as I2cMock, Transaction as I2cTransaction},
        MockError,
    };
    use std::io::ErrorKind;

    use super::*;

    #[test]
    fn write_register_is_pointer_then_value() {
        let i2c = I2cMock::new(&[I2cTransaction::write(DEFAULT_ADDRESS, vec![0x01, 0xAA])]);

        let mut tmp = Tmp117::new(i2c, DEFAULT_ADDRESS);
        tmp.write_register(Register::Configuration, 0xAA).unwrap();

        tmp.release().done();
    }

    #[test]
    fn read_register_is_one_two_phase_transaction() {
        let i2c = I2cMock::new(&[I2cTransaction::write_read(
            DEFAULT_ADDRESS,
            vec![0x0F],
            vec![0x01, 0x17],
        )]);

        let mut tmp = Tmp117::new(i2c, DEFAULT_ADDRESS);
        let mut buf = [0u8; 2];
        tmp.read_register(Register::DeviceId, &mut buf).unwrap();
        assert_eq!(buf, [0x01, 0x17]);

        tmp.release().done();
    }

    #[test]
    fn identify_accepts_a_tmp117() {
        let i2c = I2cMock::new(&[I2cTransaction::write_read(
            DEFAULT_ADDRESS,
            vec![0x0F],
            vec![0x11, 0x17],
        )]);

        let mut tmp = Tmp117::new(i2c, DEFAULT_ADDRESS);
        let id = tmp.identify().unwrap();
        assert_eq!(id.device_id(), DEVICE_ID_VALUE);
        assert_eq!(id.revision(), 1);

        tmp.release().done();
    }

    #[test]
    fn identify_rejects_anything_else() {
        let i2c = I2cMock::new(&[I2cTransaction::write_read(
            DEFAULT_ADDRESS,
            vec![0x0F],
            vec![0x00, 0x00],
        )]);

        let mut tmp = Tmp117::new(i2c, DEFAULT_ADDRESS);
        let err = tmp.identify().unwrap_err();
        assert!(matches!(err, Error::UnknownDevice(0x0000)));
        assert_eq!(err.as_str(), "Unknown device");

        tmp.release().done();
    }

    #[test]
    fn data_ready_tracks_bit_13_only() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write_read(DEFAULT_ADDRESS, vec![0x01], vec![0x20, 0x00]),
            I2cTransaction::write_read(DEFAULT_ADDRESS, vec![0x01], vec![0xDF, 0xFF]),
        ]);

        let mut tmp = Tmp117::new(i2c, DEFAULT_ADDRESS);
        assert!(tmp.data_ready().unwrap());
        assert!(!tmp.data_ready().unwrap());

        tmp.release().done();
    }

    #[test]
    fn read_temperature_converts_twos_complement() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write_read(DEFAULT_ADDRESS, vec![0x00], vec![0x01, 0x90]),
            I2cTransaction::write_read(DEFAULT_ADDRESS, vec![0x00], vec![0xFF, 0x70]),
        ]);

        let mut tmp = Tmp117::new(i2c, DEFAULT_ADDRESS);
        assert_eq!(tmp.read_temperature().unwrap(), Temperature::from_bits(400));
        assert_eq!(
            tmp.read_temperature().unwrap(),
            Temperature::from_bits(-144)
        );

        tmp.release().done();
    }

    #[test]
    fn bus_faults_propagate() {
        let i2c = I2cMock::new(&[I2cTransaction::write_read(
            DEFAULT_ADDRESS,
            vec![0x01],
            vec![0x00, 0x00],
        )
        .with_error(MockError::Io(ErrorKind::Other))]);

        let mut tmp = Tmp117::new(i2c, DEFAULT_ADDRESS);
        assert!(matches!(tmp.data_ready(), Err(Error::Bus(_))));

        tmp.release().done();
    }
}
