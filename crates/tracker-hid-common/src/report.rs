//! Fixed-size HID report serialization.
//!
//! Fields are written in declaration order, little-endian, with no padding.
//! The writer never allocates; the reader borrows the captured bytes.

use crate::{UsbHostError, UsbHostResult};

/// Sequential little-endian writer over a fixed-size report buffer.
///
/// Writes past the end of the buffer are dropped and flagged; callers that
/// size `N` from the report layout never hit that path.
#[derive(Debug, Clone, Copy)]
pub struct ReportWriter<const N: usize> {
    buffer: [u8; N],
    position: usize,
    overflowed: bool,
}

impl<const N: usize> ReportWriter<N> {
    pub fn new() -> Self {
        Self {
            buffer: [0u8; N],
            position: 0,
            overflowed: false,
        }
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        match self.buffer.get_mut(self.position) {
            Some(slot) => {
                *slot = value;
                self.position = self.position.saturating_add(1);
            }
            None => self.overflowed = true,
        }
        self
    }

    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write_u8(u8::from(value))
    }

    pub fn write_u16_le(&mut self, value: u16) -> &mut Self {
        let [lo, hi] = value.to_le_bytes();
        self.write_u8(lo).write_u8(hi)
    }

    pub fn write_i16_le(&mut self, value: i16) -> &mut Self {
        let [lo, hi] = value.to_le_bytes();
        self.write_u8(lo).write_u8(hi)
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.position
    }

    pub fn is_empty(&self) -> bool {
        self.position == 0
    }

    /// Whether any write was dropped for lack of space.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn as_slice(&self) -> &[u8] {
        self.buffer.get(..self.position).unwrap_or(&[])
    }

    /// The whole buffer, including any unwritten (zero) tail.
    pub fn into_inner(self) -> [u8; N] {
        self.buffer
    }
}

impl<const N: usize> Default for ReportWriter<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequential little-endian reader over captured report bytes.
#[derive(Debug, Clone, Copy)]
pub struct ReportReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ReportReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    pub fn read_u8(&mut self) -> UsbHostResult<u8> {
        let value = self.data.get(self.position).copied().ok_or_else(|| {
            UsbHostError::InvalidReport(format!("truncated at byte {}", self.position))
        })?;
        self.position = self.position.saturating_add(1);
        Ok(value)
    }

    pub fn read_u16_le(&mut self) -> UsbHostResult<u16> {
        let lo = self.read_u8()?;
        let hi = self.read_u8()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    pub fn read_i16_le(&mut self) -> UsbHostResult<i16> {
        let lo = self.read_u8()?;
        let hi = self.read_u8()?;
        Ok(i16::from_le_bytes([lo, hi]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_little_endian_layout() {
        let mut writer = ReportWriter::<7>::new();
        writer
            .write_u8(0xB4)
            .write_i16_le(-100)
            .write_u16_le(0xFF00)
            .write_bool(true)
            .write_bool(false);

        assert!(!writer.overflowed());
        assert_eq!(writer.len(), 7);
        assert_eq!(
            writer.into_inner(),
            [0xB4, 0x9C, 0xFF, 0x00, 0xFF, 0x01, 0x00]
        );
    }

    #[test]
    fn test_writer_overflow_is_flagged_not_written() {
        let mut writer = ReportWriter::<2>::new();
        writer.write_u8(1).write_u8(2).write_u8(3);
        assert!(writer.overflowed());
        assert_eq!(writer.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_writer_partial_slice() {
        let mut writer = ReportWriter::<6>::new();
        writer.write_u8(0xB3).write_u8(0x03);
        assert_eq!(writer.as_slice(), &[0xB3, 0x03]);
        assert_eq!(writer.into_inner(), [0xB3, 0x03, 0, 0, 0, 0]);
    }

    #[test]
    fn test_reader_reads_fields_in_order() -> Result<(), UsbHostError> {
        let data = [0x0A, 0x64, 0x00, 0x9C, 0xFF, 0x00, 0xFF];
        let mut reader = ReportReader::new(&data);
        assert_eq!(reader.read_u8()?, 0x0A);
        assert_eq!(reader.read_i16_le()?, 100);
        assert_eq!(reader.read_i16_le()?, -100);
        assert_eq!(reader.read_u16_le()?, 0xFF00);
        assert_eq!(reader.remaining(), 0);
        Ok(())
    }

    #[test]
    fn test_reader_truncated() {
        let data = [0x01];
        let mut reader = ReportReader::new(&data);
        assert_eq!(
            reader.read_u16_le(),
            Err(UsbHostError::InvalidReport("truncated at byte 1".to_string()))
        );
    }
}
