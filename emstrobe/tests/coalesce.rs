use core::cell::RefCell;
use core::convert::Infallible;
use critical_section as _;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Instant, MockDriver};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use emstrobe::core::{Micros, PulseShape};
use emstrobe::device::{Runner, StrobeDevice};
use emstrobe::edge::Edge;
use futures_executor::LocalPool;
use futures_task::LocalSpawn;
use std::boxed::Box;
use std::rc::Rc;

/// Records each output transition with the mock time it happened at.
struct RecordingPin(Rc<RefCell<Vec<(Instant, bool)>>>);

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().push((Instant::now(), false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().push((Instant::now(), true));
        Ok(())
    }
}

/// Busy-wait stand-in: spinning is advancing the mock clock.
struct MockDelay;

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        MockDriver::get().advance(Duration::from_micros(u64::from(ns.div_ceil(1000))));
    }

    fn delay_us(&mut self, us: u32) {
        MockDriver::get().advance(Duration::from_micros(u64::from(us)));
    }
}

#[test]
fn test_trigger_coalescing() {
    let mut executor = LocalPool::new();
    let spawner = executor.spawner();

    let (link, mut control, counters, runner) = {
        let device = StrobeDevice::<CriticalSectionRawMutex>::new(PulseShape::default());
        let device = Box::leak(Box::new(device));
        device.split()
    };
    let mut trigger = link.split();

    let transitions = Rc::new(RefCell::new(Vec::new()));
    spawner
        .spawn_local_obj(Box::new(pulse_runner(runner, RecordingPin(transitions.clone()))).into())
        .unwrap();

    control.set_duration(Micros::from_u32(100));

    // A burst that outruns the pulse stage: every edge lands before the
    // runner drains the slot, so the burst collapses into one service.
    for _ in 0..5 {
        trigger.raise(Edge {
            timestamp: Instant::now(),
        });
    }
    executor.run_until_stalled();

    let stats = counters.stats();
    assert_eq!(stats.triggered, 5);
    assert_eq!(stats.handled, 1);
    assert_eq!(stats.coalesced(), 4);
    assert_eq!(transitions.borrow().len(), 2);

    // Spaced triggers: each one fully serviced before the next lands
    for _ in 0..3 {
        trigger.raise(Edge {
            timestamp: Instant::now(),
        });
        executor.run_until_stalled();
    }

    let stats = counters.stats();
    assert_eq!(stats.triggered, 8);
    assert_eq!(stats.handled, 4);
    assert_eq!(stats.coalesced(), 0);
    assert_eq!(transitions.borrow().len(), 8);
}

async fn pulse_runner(mut runner: Runner<'static>, strobe: RecordingPin) {
    runner.run(strobe, MockDelay).await
}
