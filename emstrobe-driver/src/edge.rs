//! Captured trigger edge event

use crate::time::Instant;

/// A single active edge captured on the trigger line.
///
/// Carries no payload beyond the capture time. The timestamp encodes the
/// instant the driver observed the edge; the engine uses it to report
/// capture-to-service latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Edge {
    pub timestamp: Instant,
}
