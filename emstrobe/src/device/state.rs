use core::cell::Cell;
use core::sync::atomic::{AtomicU32, Ordering};
use core::task::{Context, Poll};
use embassy_sync::blocking_mutex::{Mutex, raw::RawMutex};
use embassy_sync::waitqueue::AtomicWaker;
use emstrobe_driver::edge::Edge;
use emstrobe_driver::internal::{DynamicLink, DynamicTrigger};
use emstrobe_driver::link::Link;

use crate::core::{Micros, PulseShape, PulseStats};
use crate::device::runner::{DynamicPulse, Runner};
use crate::device::{Control, Counters, DynamicControl, DynamicCounters};

/// Strobe device context.
///
/// Everything is zeroed at construction except the pulse shape, which takes
/// the given initial value. Nothing persists across a restart.
pub struct StrobeDevice<M: RawMutex> {
    state: DeviceState<M>,
}

impl<M: RawMutex + Sync> StrobeDevice<M> {
    pub fn new(shape: PulseShape) -> Self {
        Self {
            state: DeviceState::new(shape),
        }
    }

    pub fn split(&mut self) -> (Link<'_>, Control<'_>, Counters<'_>, Runner<'_>) {
        let link = Link::new(&self.state);
        let control = Control::new(&self.state);
        let counters = Counters::new(&self.state);
        let runner = Runner::new(&self.state);
        (link, control, counters, runner)
    }
}

struct DeviceState<M: RawMutex> {
    /// Single pending-edge slot. A raise into an occupied slot replaces the
    /// edge; the excess service opportunity is coalesced, not queued.
    pending: Mutex<M, Cell<Option<Edge>>>,
    waker: AtomicWaker,
    triggered: AtomicU32,
    handled: AtomicU32,
    offset_us: AtomicU32,
    duration_us: AtomicU32,
}

impl<M: RawMutex> DeviceState<M> {
    fn new(shape: PulseShape) -> Self {
        Self {
            pending: Mutex::new(Cell::new(None)),
            waker: AtomicWaker::new(),
            triggered: AtomicU32::new(0),
            handled: AtomicU32::new(0),
            offset_us: AtomicU32::new(shape.offset.into_u32()),
            duration_us: AtomicU32::new(shape.duration.into_u32()),
        }
    }
}

impl<M: RawMutex> DynamicTrigger for DeviceState<M> {
    fn raise(&self, edge: &Edge) {
        self.triggered.fetch_add(1, Ordering::Relaxed);
        // The critical section covers only the slot update
        self.pending.lock(|slot| slot.set(Some(*edge)));
        self.waker.wake();
    }
}

impl<M: RawMutex> DynamicLink for DeviceState<M> {}

impl<M: RawMutex> DynamicControl for DeviceState<M> {
    fn shape(&self) -> PulseShape {
        PulseShape {
            offset: Micros::from_u32(self.offset_us.load(Ordering::Relaxed)),
            duration: Micros::from_u32(self.duration_us.load(Ordering::Relaxed)),
        }
    }

    fn set_offset(&self, offset: Micros) {
        self.offset_us.store(offset.into_u32(), Ordering::Relaxed);
    }

    fn set_duration(&self, duration: Micros) {
        self.duration_us.store(duration.into_u32(), Ordering::Relaxed);
    }
}

impl<M: RawMutex> DynamicCounters for DeviceState<M> {
    fn stats(&self) -> PulseStats {
        PulseStats {
            triggered: self.triggered.load(Ordering::Relaxed),
            handled: self.handled.load(Ordering::Relaxed),
        }
    }
}

impl<M: RawMutex> DynamicPulse for DeviceState<M> {
    fn poll_pending(&self, cx: &mut Context<'_>) -> Poll<Edge> {
        if let Some(edge) = self.pending.lock(|slot| slot.take()) {
            return Poll::Ready(edge);
        }
        self.waker.register(cx.waker());
        // Re-check after registration: a raise may have slipped in between
        match self.pending.lock(|slot| slot.take()) {
            Some(edge) => Poll::Ready(edge),
            None => Poll::Pending,
        }
    }

    fn shape(&self) -> PulseShape {
        DynamicControl::shape(self)
    }

    fn note_handled(&self) {
        self.handled.fetch_add(1, Ordering::Relaxed);
    }

    fn stats(&self) -> PulseStats {
        DynamicCounters::stats(self)
    }
}
