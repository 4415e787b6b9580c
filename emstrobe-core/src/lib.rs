//! Strobe controller core data types
//!
//! This crate provides basic data type definitions used by other Emstrobe crates.
//! Emstrobe users should not depend on this crate directly. Use `emstrobe::core` reexport instead.
#![no_std]

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidValue;

/// A microsecond interval
///
/// Both pulse tunables (offset and duration) are expressed in whole
/// microseconds. The full `u32` range is accepted; the busy-wait primitive of
/// the target platform bounds what is practical.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Micros(u32);

impl Micros {
    pub const ZERO: Micros = Micros(0);
    pub const MAX: Micros = Micros(u32::MAX);

    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    pub const fn into_u32(self) -> u32 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Micros {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<Micros> for u32 {
    fn from(value: Micros) -> Self {
        value.into_u32()
    }
}

/// Shape of one generated pulse
///
/// `offset` delays the assert edge relative to trigger service; `duration` is
/// the hold time before the unconditional deassert. A zero-duration pulse
/// still transitions high then low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseShape {
    pub offset: Micros,
    pub duration: Micros,
}

/// Snapshot of the device event counters
///
/// `triggered` counts captured edges; `handled` counts completed pulses.
/// Both are monotonic for the device lifetime and wrap at `u32::MAX`.
/// `handled` lags `triggered` by the number of edges coalesced while a pulse
/// was in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseStats {
    pub triggered: u32,
    pub handled: u32,
}

impl PulseStats {
    /// Edges that did not get a pulse of their own.
    ///
    /// Wrapping-aware, so the drift stays correct after either counter wraps.
    pub const fn coalesced(self) -> u32 {
        self.triggered.wrapping_sub(self.handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesced_drift() {
        let stats = PulseStats {
            triggered: 5,
            handled: 1,
        };
        assert_eq!(stats.coalesced(), 4);

        let stats = PulseStats {
            triggered: 7,
            handled: 7,
        };
        assert_eq!(stats.coalesced(), 0);
    }

    #[test]
    fn test_coalesced_across_wrap() {
        // triggered has wrapped past zero while handled has not yet
        let stats = PulseStats {
            triggered: 2,
            handled: u32::MAX - 1,
        };
        assert_eq!(stats.coalesced(), 4);
    }
}
