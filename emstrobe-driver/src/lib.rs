//! Emstrobe driver interface
//!
//! The crate provides an interface between a trigger line driver and the Emstrobe
//! engine. Limited scope facilitates compatibility across versions.
//! Driver crates should depend on this crate. Emstrobe users should depend on
//! the `emstrobe` crate instead.
//!
//! A `Link` carries a single channel: `Trigger` consumes captured edge events.
//! The driver runner pushes edges into the engine; the engine never calls back
//! into the driver, so a driver needs no dispatch task of its own beyond the
//! edge wait loop.
//!
//! `Trigger::raise` is non-blocking, allocation-free, and safe to call from
//! interrupt context (given an interrupt-capable mutex on the engine side).
//! The engine keeps a single pending-edge slot: an edge raised while a
//! previous one is still unserviced replaces it. The engine guarantees at
//! least one service after the most recent raise, not one service per raise.
//! Drivers should therefore treat `raise` as lossy under bursts and rely on
//! the engine's counters to observe the coalescing drift.
//!
//! Edge timestamps should encode the instant the driver observed the edge,
//! as close to the hardware event as the execution context allows.

#![no_std]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod edge;
pub mod internal;
pub mod link;

pub mod time {
    pub use embassy_time::{Duration, Instant};
}
