//! STM32 EXTI trigger capture adapter for the Emstrobe engine
//!
//! This adapter connects an EXTI-capable input pin from the Embassy framework
//! to the Emstrobe engine as the trigger line.
//!
//! # Features
//!
//! * Rising or falling active edge, selected at bind time
//! * Edge timestamping with `embassy_time::Instant`
//!
//! # Limitations
//!
//! * One trigger line per EXTI channel, an STM32 EXTI constraint
//! * Timestamping happens when the capture task resumes, so executor
//!   scheduling latency is included in the recorded capture time. Run the
//!   capture runner on an `InterruptExecutor` to keep it bounded
//! * Edges arriving while a pulse is in flight are coalesced by the engine;
//!   the EXTI pending bit itself is never missed
//!
//! # Examples
//!
//! See the `strobe_basic` example in the `nucleo-g431rb` crate.

#![no_std]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
mod driver;

pub use driver::{CaptureRunner, bind};
