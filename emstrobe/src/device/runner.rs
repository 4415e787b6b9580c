use core::future::poll_fn;
use core::task::{Context, Poll};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use emstrobe_driver::edge::Edge;

use crate::core::{PulseShape, PulseStats};
use crate::time::Instant;

pub(crate) trait DynamicPulse {
    fn poll_pending(&self, cx: &mut Context<'_>) -> Poll<Edge>;
    fn shape(&self) -> PulseShape;
    fn note_handled(&self);
    fn stats(&self) -> PulseStats;
}

/// Pulse generation runner.
///
/// Run for proper device operation. The runner busy-waits for the configured
/// offset and duration, so it must execute in a context where blocking is
/// permitted; never run it at the capture path's interrupt level.
pub struct Runner<'a> {
    device: &'a (dyn DynamicPulse + Sync),
}

impl<'a> Runner<'a> {
    pub(crate) fn new(device: &'a (dyn DynamicPulse + Sync)) -> Self {
        Self { device }
    }

    /// Generates one pulse per drained edge.
    ///
    /// Each service reads the shape once, then runs the fixed sequence:
    /// optional offset delay, assert, duration delay, deassert, count. The
    /// deassert is unconditional, so a zero-duration pulse still transitions
    /// high then low, and the line is never left asserted between services.
    ///
    /// The runner is the slot's only consumer; at most one pulse sequence is
    /// in flight per device.
    pub async fn run<O, D>(&mut self, mut strobe: O, mut delay: D) -> !
    where
        O: OutputPin,
        D: DelayNs,
    {
        loop {
            let edge = poll_fn(|cx| self.device.poll_pending(cx)).await;
            let shape = self.device.shape();
            debug!(
                "edge {} serviced after {} us",
                self.device.stats().triggered,
                (Instant::now() - edge.timestamp).as_micros(),
            );

            if !shape.offset.is_zero() {
                delay.delay_us(shape.offset.into_u32());
            }
            // Line writes are assumed to succeed once the line is configured;
            // there is no corrective action at this layer.
            if strobe.set_high().is_err() {
                warn!("strobe line assert failed");
            }
            delay.delay_us(shape.duration.into_u32());
            if strobe.set_low().is_err() {
                warn!("strobe line deassert failed");
            }
            self.device.note_handled();
        }
    }
}
