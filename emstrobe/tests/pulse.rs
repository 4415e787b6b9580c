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
fn test_pulse_timing() {
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

    control.set_offset(Micros::from_u32(100));
    control.set_duration(Micros::from_u32(500));

    let t0 = Instant::now();
    trigger.raise(Edge { timestamp: t0 });
    executor.run_until_stalled();

    assert_eq!(
        transitions.borrow()[..],
        [
            (t0 + Duration::from_micros(100), true),
            (t0 + Duration::from_micros(600), false),
        ]
    );
    assert_eq!(counters.triggered(), 1);
    assert_eq!(counters.handled(), 1);

    // Setting the same shape again must not change the relative timing
    control.set_offset(Micros::from_u32(100));
    control.set_duration(Micros::from_u32(500));

    let t1 = Instant::now();
    trigger.raise(Edge { timestamp: t1 });
    executor.run_until_stalled();

    assert_eq!(
        transitions.borrow()[2..],
        [
            (t1 + Duration::from_micros(100), true),
            (t1 + Duration::from_micros(600), false),
        ]
    );

    // Zero offset asserts at service time; zero duration still pulses
    control.set_offset(Micros::ZERO);
    control.set_duration(Micros::ZERO);

    let t2 = Instant::now();
    trigger.raise(Edge { timestamp: t2 });
    executor.run_until_stalled();

    assert_eq!(transitions.borrow()[4..], [(t2, true), (t2, false)]);
    assert_eq!(counters.triggered(), 3);
    assert_eq!(counters.handled(), 3);
}

async fn pulse_runner(mut runner: Runner<'static>, strobe: RecordingPin) {
    runner.run(strobe, MockDelay).await
}
