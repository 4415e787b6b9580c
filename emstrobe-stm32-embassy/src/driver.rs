use embassy_stm32::exti::ExtiInput;
use emstrobe_driver::edge::Edge;
use emstrobe_driver::link::{Link, Trigger};
use emstrobe_driver::time::Instant;

use crate::config::{ActiveEdge, Config};

/// Connect the EXTI trigger input to the link.
///
/// Run the produced runner for proper operation.
pub fn bind<'a>(trigger: ExtiInput<'static>, link: Link<'a>, config: Config) -> CaptureRunner<'a> {
    CaptureRunner {
        trigger,
        link: link.split(),
        active_edge: config.active_edge,
    }
}

/// Trigger capture runner.
///
/// Run for proper driver operation. Waits for the configured edge, stamps it,
/// and raises it into the engine. The raise itself never blocks, so a burst
/// of edges leaves the capture loop ready for the next wait immediately; the
/// engine coalesces whatever the pulse stage has not yet drained.
pub struct CaptureRunner<'a> {
    trigger: ExtiInput<'static>,
    link: Trigger<'a>,
    active_edge: ActiveEdge,
}

impl<'a> CaptureRunner<'a> {
    pub async fn run(&mut self) -> ! {
        loop {
            match self.active_edge {
                ActiveEdge::Rising => self.trigger.wait_for_rising_edge().await,
                ActiveEdge::Falling => self.trigger.wait_for_falling_edge().await,
            }
            self.link.raise(Edge {
                timestamp: Instant::now(),
            });
        }
    }
}
