//! TMP117 register map and register-level field access.
//!
//! Register contents arrive as big-endian byte pairs; the newtypes below
//! assemble them and expose each field through an explicit mask/shift
//! accessor, independent of host byte order.

/// Register pointer offsets.
///
/// The pointer byte written in the first phase of every register access.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    TempResult = 0x00,
    Configuration = 0x01,
    THighLimit = 0x02,
    TLowLimit = 0x03,
    EepromUnlock = 0x04,
    Eeprom1 = 0x05,
    Eeprom2 = 0x06,
    TempOffset = 0x07,
    Eeprom3 = 0x08,
    DeviceId = 0x0F,
}

/// Identifier reported in the low 12 bits of [`Register::DeviceId`] by
/// every TMP117, regardless of revision.
pub const DEVICE_ID_VALUE: u16 = 0x117;

/// Contents of the configuration register.
///
/// Field layout, bit 0 = least significant:
///
/// | bits  | width | field            |
/// |-------|-------|------------------|
/// | 0     | 1     | reserved         |
/// | 1     | 1     | soft reset       |
/// | 2     | 1     | alert pin select |
/// | 3     | 1     | alert polarity   |
/// | 4     | 1     | therm/alert mode |
/// | 5-6   | 2     | averaging        |
/// | 7-9   | 3     | conversion cycle |
/// | 10-11 | 2     | conversion mode  |
/// | 12    | 1     | EEPROM busy      |
/// | 13    | 1     | data ready       |
/// | 14    | 1     | low alert        |
/// | 15    | 1     | high alert       |
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration(pub u16);

impl Configuration {
    /// Assemble from the big-endian register bytes.
    #[must_use]
    pub const fn from_be_bytes(raw: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(raw))
    }

    const fn bit(self, offset: u8) -> bool {
        self.0 >> offset & 1 == 1
    }

    const fn field(self, offset: u8, width: u8) -> u8 {
        ((self.0 >> offset) & ((1_u16 << width) - 1)) as u8
    }

    /// Software reset requested.
    #[must_use]
    pub const fn soft_reset(self) -> bool {
        self.bit(1)
    }

    /// ALERT pin reflects the data-ready flag instead of the alert flags.
    #[must_use]
    pub const fn alert_pin_select(self) -> bool {
        self.bit(2)
    }

    /// ALERT pin active high.
    #[must_use]
    pub const fn alert_polarity(self) -> bool {
        self.bit(3)
    }

    /// Therm mode instead of alert mode.
    #[must_use]
    pub const fn therm_mode(self) -> bool {
        self.bit(4)
    }

    /// Conversion averaging mode, 2 bits.
    #[must_use]
    pub const fn averaging(self) -> u8 {
        self.field(5, 2)
    }

    /// Conversion cycle time, 3 bits.
    #[must_use]
    pub const fn conversion_cycle(self) -> u8 {
        self.field(7, 3)
    }

    /// Conversion mode, 2 bits.
    #[must_use]
    pub const fn mode(self) -> u8 {
        self.field(10, 2)
    }

    /// An EEPROM programming cycle is still in progress.
    #[must_use]
    pub const fn eeprom_busy(self) -> bool {
        self.bit(12)
    }

    /// A new conversion result is waiting in the temperature register.
    #[must_use]
    pub const fn data_ready(self) -> bool {
        self.bit(13)
    }

    #[must_use]
    pub const fn low_alert(self) -> bool {
        self.bit(14)
    }

    #[must_use]
    pub const fn high_alert(self) -> bool {
        self.bit(15)
    }
}

/// Contents of the device ID register: identifier in bits 0-11, silicon
/// revision in bits 12-15.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId(pub u16);

impl DeviceId {
    /// Assemble from the big-endian register bytes.
    #[must_use]
    pub const fn from_be_bytes(raw: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(raw))
    }

    /// The device identifier, low 12 bits.
    #[must_use]
    pub const fn device_id(self) -> u16 {
        self.0 & 0x0FFF
    }

    /// The silicon revision, high 4 bits.
    #[must_use]
    pub const fn revision(self) -> u8 {
        (self.0 >> 12) as u8
    }

    /// Whether the identifier matches [`DEVICE_ID_VALUE`].
    #[must_use]
    pub const fn is_tmp117(self) -> bool {
        self.device_id() == DEVICE_ID_VALUE
    }
}
