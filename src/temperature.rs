//! Temperature sample interface

use fixed::types::I9F7;

/// I9F7 is a fixed point number with 7 fractional bits and 9 integer bits.
/// This gives us a precision of 0.0078125 degrees Celsius & a range of
/// [-256, 256). One bit is exactly one LSB of the sensor's result register,
/// so conversion from a raw sample is lossless; use `.to_num::<f32>()` for
/// a float reading.
pub type Temperature = I9F7;

/// Interpret a big-endian register pair as a temperature.
///
/// The raw sample is a signed 16-bit two's-complement count of
/// 0.0078125 °C steps.
#[must_use]
pub const fn from_raw(raw: [u8; 2]) -> Temperature {
    Temperature::from_bits(i16::from_be_bytes(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_sample() {
        // 400 LSBs of 0.0078125 °C
        let temp = from_raw([0x01, 0x90]);
        assert_eq!(temp, Temperature::from_bits(400));
        assert_eq!(temp.to_num::<f32>(), 3.125);
    }

    #[test]
    fn negative_sample() {
        // -144 LSBs, two's complement
        let temp = from_raw([0xFF, 0x70]);
        assert_eq!(temp, Temperature::from_bits(-144));
        assert_eq!(temp.to_num::<f32>(), -1.125);
    }

    #[test]
    fn zero_sample() {
        assert_eq!(from_raw([0x00, 0x00]).to_num::<f32>(), 0.0);
    }

    #[test]
    fn full_scale() {
        assert_eq!(from_raw([0x7F, 0xFF]).to_num::<f32>(), 255.992_187_5);
        assert_eq!(from_raw([0x80, 0x00]).to_num::<f32>(), -256.0);
    }

    #[test]
    fn scale_is_one_lsb() {
        assert_eq!(from_raw([0x00, 0x01]).to_num::<f32>(), 0.007_812_5);
        assert_eq!(from_raw([0xFF, 0xFF]).to_num::<f32>(), -0.007_812_5);
    }
}
