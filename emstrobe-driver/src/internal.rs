/// Private interfaces for the Emstrobe engine
///
/// Drivers should not use this module.
/// Backward-incompatible changes can be made without major version bump.
use crate::edge::Edge;

pub trait DynamicTrigger {
    fn raise(&self, edge: &Edge);
}

pub trait DynamicLink: DynamicTrigger {}
