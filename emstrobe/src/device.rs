//! Strobe device context
//!
//! The device context owns everything the pipeline shares: the pending-edge
//! slot, the pulse shape, and the event counters. It is an explicit object,
//! so multiple independent devices can coexist and tests can construct one
//! on the heap or stack.
//!
//! ## Examples
//!
//! A device can be created as simply as:
//! ```
//! use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex as Mutex;
//! use emstrobe::core::PulseShape;
//! use emstrobe::device::StrobeDevice;
//!
//! let mut device = StrobeDevice::<Mutex>::new(PulseShape::default());
//! let (link, control, counters, runner) = device.split();
//! ```
//! However, static allocation is typically used to obtain `'static` handles
//! that can be passed to spawned tasks:
//! ```
//! # use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex as Mutex;
//! # use emstrobe::core::PulseShape;
//! # use emstrobe::device::StrobeDevice;
//! use static_cell::StaticCell;
//!
//! static CELL: StaticCell<StrobeDevice<Mutex>> = StaticCell::new();
//! let device = CELL.init(StrobeDevice::new(PulseShape::default()));
//! let (link, control, counters, runner) = device.split();
//! ```

use crate::core::{Micros, PulseShape, PulseStats};

mod runner;
mod state;

pub use emstrobe_driver::link::Link;
pub use runner::Runner;
pub use state::StrobeDevice;

pub(crate) trait DynamicControl {
    fn shape(&self) -> PulseShape;
    fn set_offset(&self, offset: Micros);
    fn set_duration(&self, duration: Micros);
}

/// Pulse shape control handle
///
/// Writes are single-word atomic stores: they need no lock shared with the
/// capture path, and they become visible to the pulse runner at its next
/// invocation. A write during an in-flight pulse affects the next pulse.
pub struct Control<'a>(&'a (dyn DynamicControl + Sync));

impl<'a> Control<'a> {
    pub(crate) fn new(device: &'a (dyn DynamicControl + Sync)) -> Self {
        Self(device)
    }

    pub fn shape(&self) -> PulseShape {
        self.0.shape()
    }

    pub fn offset(&self) -> Micros {
        self.0.shape().offset
    }

    pub fn duration(&self) -> Micros {
        self.0.shape().duration
    }

    pub fn set_offset(&mut self, offset: Micros) {
        self.0.set_offset(offset);
    }

    pub fn set_duration(&mut self, duration: Micros) {
        self.0.set_duration(duration);
    }
}

pub(crate) trait DynamicCounters {
    fn stats(&self) -> PulseStats;
}

/// Read-only diagnostics handle
///
/// Counter reads are independent relaxed loads; a snapshot taken while the
/// pipeline is active may observe a `triggered` increment before the matching
/// `handled` one, never the reverse by more than the coalescing drift.
#[derive(Clone, Copy)]
pub struct Counters<'a>(&'a (dyn DynamicCounters + Sync));

impl<'a> Counters<'a> {
    pub(crate) fn new(device: &'a (dyn DynamicCounters + Sync)) -> Self {
        Self(device)
    }

    pub fn stats(&self) -> PulseStats {
        self.0.stats()
    }

    pub fn triggered(&self) -> u32 {
        self.stats().triggered
    }

    pub fn handled(&self) -> u32 {
        self.stats().handled
    }
}
