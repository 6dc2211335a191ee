#![no_std]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

//! Driver and poll loop for the TI TMP117 digital temperature sensor.
//!
//! The sensor is a slave on a shared two-wire bus. This crate talks to it
//! through the blocking [`embedded-hal`] traits, so any platform that
//! provides an I2C peripheral and a millisecond delay can run it; where the
//! samples go is up to the caller.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/0.2
//!
//! ```
//! use tmp117_monitor::{Config, Monitor, RunFlag, Tmp117, DEFAULT_ADDRESS};
//! # use embedded_hal_mock::delay::MockNoop;
//! # use embedded_hal_mock::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
//! # let i2c = I2cMock::new(&[
//! #     I2cTransaction::write_read(0x48, vec![0x0F], vec![0x01, 0x17]),
//! #     I2cTransaction::write_read(0x48, vec![0x01], vec![0x20, 0x00]),
//! #     I2cTransaction::write_read(0x48, vec![0x00], vec![0x01, 0x90]),
//! # ]);
//! # let delay = MockNoop::new();
//! let run = RunFlag::new();
//! let mut monitor = Monitor::new(
//!     Tmp117::new(i2c, DEFAULT_ADDRESS),
//!     delay,
//!     Config::default(),
//! );
//!
//! monitor.run(&run, |temp| {
//!     // Hand the sample to the telemetry collaborator.
//!     let _ = temp.to_num::<f32>();
//!     run.stop();
//! })?;
//! # Ok::<(), tmp117_monitor::Error<embedded_hal_mock::MockError>>(())
//! ```

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod monitor;
pub mod temperature;
pub mod tmp117;

pub use crate::{
    monitor::{Config, Monitor, RunFlag, State},
    temperature::Temperature,
    tmp117::{Error, Tmp117, DEFAULT_ADDRESS},
};
