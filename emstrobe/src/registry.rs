//! Textual configuration surface
//!
//! Operator-facing attribute files reduce to a small key/value interface:
//! typed get/set through a [`Control`] handle, with textual marshaling
//! confined to this boundary. Each attribute reads back as a single line,
//! `"<name> <value> usec\n"`, and accepts a base-10 integer on write.
//! Malformed input is rejected without mutating the stored value.

use core::fmt::Write;

use crate::core::{InvalidValue, Micros};
use crate::device::Control;

/// Fits the longest rendered line, `"duration 4294967295 usec\n"`.
pub const LINE_CAPACITY: usize = 32;

/// Attribute key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Offset,
    Duration,
}

impl Key {
    pub const ALL: [Key; 2] = [Key::Offset, Key::Duration];

    pub const fn name(self) -> &'static str {
        match self {
            Key::Offset => "offset",
            Key::Duration => "duration",
        }
    }

    /// Looks a key up by its attribute name.
    pub fn from_name(name: &str) -> Option<Key> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

/// Key/value view over a device `Control` handle.
pub struct Registry<'a> {
    control: Control<'a>,
}

impl<'a> Registry<'a> {
    pub fn new(control: Control<'a>) -> Self {
        Self { control }
    }

    /// Renders the attribute read-back line.
    pub fn read(&self, key: Key) -> heapless::String<LINE_CAPACITY> {
        let value = match key {
            Key::Offset => self.control.offset(),
            Key::Duration => self.control.duration(),
        };
        let mut line = heapless::String::new();
        // The capacity fits the longest line, the write cannot fail
        let _ = write!(&mut line, "{} {} usec\n", key.name(), value.into_u32());
        line
    }

    /// Parses a base-10 value and stores it.
    ///
    /// Surrounding whitespace, including a trailing newline, is accepted.
    /// Rejected input leaves the stored value unchanged.
    pub fn write(&mut self, key: Key, text: &str) -> Result<(), InvalidValue> {
        let value: u32 = text.trim().parse().map_err(|_| InvalidValue)?;
        let value = Micros::from_u32(value);
        match key {
            Key::Offset => self.control.set_offset(value),
            Key::Duration => self.control.set_duration(value),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use critical_section as _;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

    use super::*;
    use crate::core::PulseShape;
    use crate::device::StrobeDevice;

    #[test]
    fn test_read_format() {
        let mut device = StrobeDevice::<CriticalSectionRawMutex>::new(PulseShape::default());
        let (_, control, _, _) = device.split();
        let registry = Registry::new(control);

        assert_eq!(registry.read(Key::Offset).as_str(), "offset 0 usec\n");
        assert_eq!(registry.read(Key::Duration).as_str(), "duration 0 usec\n");
    }

    #[test]
    fn test_write_then_read() {
        let mut device = StrobeDevice::<CriticalSectionRawMutex>::new(PulseShape::default());
        let (_, control, _, _) = device.split();
        let mut registry = Registry::new(control);

        registry.write(Key::Offset, "100").unwrap();
        registry.write(Key::Duration, "500\n").unwrap();

        assert_eq!(registry.read(Key::Offset).as_str(), "offset 100 usec\n");
        assert_eq!(registry.read(Key::Duration).as_str(), "duration 500 usec\n");
    }

    #[test]
    fn test_malformed_write_rejected() {
        let mut device = StrobeDevice::<CriticalSectionRawMutex>::new(PulseShape {
            offset: Micros::from_u32(42),
            duration: Micros::ZERO,
        });
        let (_, control, _, _) = device.split();
        let mut registry = Registry::new(control);

        assert!(registry.write(Key::Offset, "abc").is_err());
        assert!(registry.write(Key::Offset, "-5").is_err());
        assert!(registry.write(Key::Offset, "").is_err());

        // prior value survives every rejected write
        assert_eq!(registry.read(Key::Offset).as_str(), "offset 42 usec\n");
    }

    #[test]
    fn test_key_lookup() {
        assert_eq!(Key::from_name("offset"), Some(Key::Offset));
        assert_eq!(Key::from_name("duration"), Some(Key::Duration));
        assert_eq!(Key::from_name("width"), None);
    }
}
