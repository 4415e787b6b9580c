//! Strobe pipeline with the capture runner on an interrupt-priority executor.
//!
//! The pulse runner busy-waits in thread mode; the capture runner preempts
//! it, so an edge arriving mid-pulse is stamped and counted immediately and
//! the engine coalesces it into the next service.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Delay, Duration, Timer};
use emstrobe::core::{Micros, PulseShape};
use emstrobe::device::{Runner, StrobeDevice};
use emstrobe_stm32_embassy as emstrobe_stm32;
use nucleo_g431rb::board;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

const SHAPE: PulseShape = PulseShape {
    offset: Micros::from_u32(100),
    duration: Micros::from_u32(500),
};

static EXECUTOR_CAPTURE: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn USART1() {
    unsafe { EXECUTOR_CAPTURE.on_interrupt() }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(board::make_peripheral_config());

    let trigger = ExtiInput::new(p.PC13, p.EXTI13, Pull::Down);
    let strobe = Output::new(p.PA5, Level::Low, Speed::VeryHigh);

    // Capture preempts the pulse worker, so the slot needs an
    // interrupt-capable mutex.
    let (link, _, counters, runner) = {
        static CELL: StaticCell<StrobeDevice<CriticalSectionRawMutex>> = StaticCell::new();
        let device = CELL.init(StrobeDevice::new(SHAPE));
        device.split()
    };

    let capture = emstrobe_stm32::bind(trigger, link, Default::default());

    interrupt::USART1.set_priority(Priority::P6);
    let capture_spawner = EXECUTOR_CAPTURE.start(interrupt::USART1);
    unwrap!(capture_spawner.spawn(capture_runner(capture)));

    unwrap!(spawner.spawn(pulse_runner(runner, strobe)));

    loop {
        Timer::after(Duration::from_secs(5)).await;
        let stats = counters.stats();
        info!("triggered {} handled {}", stats.triggered, stats.handled);
    }
}

#[embassy_executor::task]
async fn capture_runner(mut runner: emstrobe_stm32::CaptureRunner<'static>) {
    runner.run().await
}

#[embassy_executor::task]
async fn pulse_runner(mut runner: Runner<'static>, strobe: Output<'static>) {
    runner.run(strobe, Delay).await
}
