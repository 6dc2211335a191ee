//! Startup probe and poll loop around a [`Tmp117`] session.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::blocking::{
    delay::DelayMs,
    i2c::{Write, WriteRead},
};
use fugit::MillisDurationU32;

use crate::{
    temperature::Temperature,
    tmp117::{Error, Tmp117},
};

/// Delay and retry parameters for [`Monitor::run`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Pause after power-up before touching the bus.
    pub power_up_delay: MillisDurationU32,
    /// Further pause for the sensor to settle before the probe.
    pub settle_delay: MillisDurationU32,
    /// Sleep that ends every Active iteration, sample or not.
    pub poll_interval: MillisDurationU32,
    /// Consecutive failed iterations tolerated before the session aborts.
    pub max_retries: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            power_up_delay: MillisDurationU32::millis(1_000),
            settle_delay: MillisDurationU32::millis(500),
            poll_interval: MillisDurationU32::millis(500),
            max_retries: 3,
        }
    }
}

/// Where the session currently is.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// No bus transaction has happened yet.
    Uninitialized,
    /// Settled, reading the identification register.
    Probing,
    /// Probe succeeded, polling for samples.
    Active,
    /// Terminal: a stopped monitor never touches the bus again.
    Stopped,
}

/// Externally owned run condition for the poll loop.
///
/// The owner clears the flag to stop the monitor; the monitor checks it
/// once per iteration boundary, never mid-transaction.
pub struct RunFlag(AtomicBool);

impl RunFlag {
    /// A set flag; the loop runs until [`RunFlag::stop`].
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicBool::new(true))
    }

    /// Ask the monitor to stop at the next iteration boundary.
    pub fn stop(&self) {
        self.0.store(false, Ordering::Release);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for RunFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives the startup probe and the sampling loop for one sensor.
pub struct Monitor<I2C, D> {
    sensor: Tmp117<I2C>,
    delay: D,
    config: Config,
    state: State,
}

impl<E, I2C, D> Monitor<I2C, D>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
    D: DelayMs<u32>,
{
    pub const fn new(sensor: Tmp117<I2C>, delay: D, config: Config) -> Self {
        Self {
            sensor,
            delay,
            config,
            state: State::Uninitialized,
        }
    }

    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Probe the sensor, then poll it until `run` is cleared.
    ///
    /// Each sample whose ready flag was set is handed to `sink`; emitting
    /// it further (serial, radio, storage) is the caller's business.
    ///
    /// Returns `Ok(())` once the run flag stops the loop. Returns the error
    /// and stops if the probe fails, or if [`Config::max_retries`]
    /// consecutive iterations fail on the bus. A stopped session is not
    /// reusable; calling `run` again is a no-op.
    pub fn run<F>(&mut self, run: &RunFlag, mut sink: F) -> Result<(), Error<E>>
    where
        F: FnMut(Temperature),
    {
        if self.state != State::Uninitialized {
            return Ok(());
        }

        // Give the supply and the bus time to come up before the first
        // transaction.
        self.delay.delay_ms(self.config.power_up_delay.to_millis());
        self.delay.delay_ms(self.config.settle_delay.to_millis());

        self.state = State::Probing;
        match self.sensor.identify() {
            Ok(_id) => {
                #[cfg(feature = "defmt")]
                defmt::info!("TMP117 found, revision {=u8}", _id.revision());
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("TMP117 not found: {}", e.as_str());
                self.state = State::Stopped;
                return Err(e);
            }
        }
        self.state = State::Active;

        let mut failures = 0u8;
        while run.is_running() {
            match self.poll(&mut sink) {
                Ok(()) => failures = 0,
                Err(e) => {
                    failures = failures.saturating_add(1);
                    if failures > self.config.max_retries {
                        #[cfg(feature = "defmt")]
                        defmt::error!("giving up after {=u8} failures: {}", failures, e.as_str());
                        self.state = State::Stopped;
                        return Err(e);
                    }
                    #[cfg(feature = "defmt")]
                    defmt::warn!(
                        "poll failed ({=u8}/{=u8}): {}",
                        failures,
                        self.config.max_retries,
                        e.as_str()
                    );
                }
            }
            self.delay.delay_ms(self.config.poll_interval.to_millis());
        }

        #[cfg(feature = "defmt")]
        defmt::info!("TMP117 monitor stopped");
        self.state = State::Stopped;
        Ok(())
    }

    /// One Active iteration: check the ready flag, read a sample if there
    /// is one. A failed iteration never hands a partial buffer onwards.
    fn poll<F>(&mut self, sink: &mut F) -> Result<(), Error<E>>
    where
        F: FnMut(Temperature),
    {
        if self.sensor.data_ready()? {
            let temp = self.sensor.read_temperature()?;
            #[cfg(feature = "defmt")]
            defmt::debug!("temperature: {=f32}", temp.to_num::<f32>());
            sink(temp);
        }
        Ok(())
    }
}
