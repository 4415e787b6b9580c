//! Channel connecting driver and Emstrobe engine

use crate::edge::Edge;
use crate::internal;

/// Consumer of captured trigger edges
///
/// The engine behind this handle keeps a single pending-edge slot. Raising an
/// edge while a previous one is unserviced replaces it; the engine services
/// at least the most recent edge, and its counters record the drift.
///
/// `raise` never blocks, never allocates, and cannot fail. It is safe to call
/// from interrupt context.
pub struct Trigger<'a>(&'a (dyn internal::DynamicTrigger + Sync));

impl<'a> Trigger<'a> {
    /// Records a captured edge. Non-blocking.
    pub fn raise(&mut self, edge: Edge) {
        self.0.raise(&edge);
    }
}

/// Channel container. A driver should consume it.
pub struct Link<'a>(&'a (dyn internal::DynamicLink + Sync));

impl<'a> Link<'a> {
    pub fn new(access: &'a (dyn internal::DynamicLink + Sync)) -> Self {
        Self(access)
    }

    pub fn split(self) -> Trigger<'a> {
        Trigger(self.0)
    }
}
