/// Edge polarity that starts a strobe cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveEdge {
    /// Capture on the rising edge of the trigger line
    Rising,
    /// Capture on the falling edge of the trigger line
    Falling,
}

/// Adapter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Config {
    /// Edge polarity that starts a strobe cycle
    pub active_edge: ActiveEdge,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            active_edge: ActiveEdge::Rising,
        }
    }
}
