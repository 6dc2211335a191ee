/// Failures surfaced by a TMP117 session.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The underlying two-wire transfer was not acknowledged or failed
    /// outright.
    Bus(E),

    /// The identification register did not report a TMP117. Carries the raw
    /// register value so the caller can see what answered instead.
    UnknownDevice(u16),
}

impl<E> Error<E> {
    pub fn as_str(&self) -> &'static str {
        match self {
            Error::Bus(_) => "Bus transfer failed",
            Error::UnknownDevice(_) => "Unknown device",
        }
    }
}

impl<E> From<E> for Error<E> {
    fn from(value: E) -> Self {
        Self::Bus(value)
    }
}
