//! # Emstrobe
//!
//! This library answers an asynchronous hardware trigger edge with a precisely
//! timed output pulse in no_std environments: a configurable pre-delay
//! (offset), assert, a configurable hold (duration), deassert. It is built for
//! trigger sources that can fire faster than a pulse takes to generate, and
//! for capture paths with tight interrupt latency requirements: edge capture
//! never blocks, and all critical section durations are bounded.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────┐  raise   ┌───────────────────────────────┐
//! │ Capture runner ├─────────►│         StrobeDevice          │
//! │ (line driver)  │   Link   │ ┌────────────┐ ┌────────────┐ │
//! └────────────────┘          │ │ edge slot  │ │ shape (µs) │ │
//!                             │ ├────────────┤ ├────────────┤ │
//!                             │ │ counters   │ │            │ │
//!                             │ └──────┬─────┘ └─────▲──────┘ │
//!                             └────────┼─────────────┼────────┘
//!                                 wait │             │ get/set
//!                             ┌────────▼─────┐ ┌─────┴───────┐
//!                             │ Pulse runner │ │  Control /  │
//!                             │ (strobe pin) │ │  Registry   │
//!                             └──────────────┘ └─────────────┘
//! ```
//! Components:
//! * _StrobeDevice_ holds the whole device context: the single pending-edge
//!   slot, the pulse shape words, and the event counters. `split` hands out
//!   the borrowed handles below.
//! * _Link_ is the non-blocking edge channel a trigger line driver consumes
//!   (see the `emstrobe-driver` crate).
//! * _Pulse runner_ is the worker that drains the slot and performs the timed
//!   sequence against an output pin. It may busy-wait, so it belongs in a
//!   context where blocking is permitted.
//! * _Control_ is the typed get/set handle for offset and duration.
//! * _Counters_ is the read-only diagnostics handle.
//! * _Registry_ is the textual key/value boundary over `Control` for
//!   operator-facing configuration surfaces.
//!
//! ## Concurrency model
//!
//! Two execution contexts touch the device: the capture context (`raise`,
//! possibly an interrupt or an interrupt-priority executor) and the worker
//! context (the pulse runner). The only shared state needing a lock is the
//! pending-edge slot, and the lock is held only across the slot update.
//! There are two mutex implementation options:
//! * _CriticalSectionRawMutex_ allows capture and worker to run at different
//!   interrupt levels, at the cost of a short global critical section per
//!   raise.
//! * _ThreadModeRawMutex_ has no system-wide effects but requires both
//!   runners to share the thread-mode executor.
//!
//! The slot coalesces: a raise into an occupied slot replaces the pending
//! edge. Bursts therefore cost one pulse, and the `triggered`/`handled`
//! counter drift records how many edges were absorbed. This favors bounded
//! latency for the most recent trigger over fairness across a burst.
//!
//! Offset and duration are independent atomic words read at the start of each
//! pulse. A write concurrent with a read yields the old or the new value,
//! never a torn one; a write during an in-flight pulse affects the next pulse.

#![no_std]

pub use emstrobe_core as core;
pub use emstrobe_driver::{edge, time};

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod device;
pub mod registry;
