//! Button-triggered strobe pulse on the Nucleo-G431RB user LED.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_time::{Delay, Duration, Timer};
use emstrobe::core::{Micros, PulseShape};
use emstrobe::device::{Runner, StrobeDevice};
use emstrobe_stm32_embassy as emstrobe_stm32;
use nucleo_g431rb::board;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

// A flash long enough to see on the LED.
const SHAPE: PulseShape = PulseShape {
    offset: Micros::ZERO,
    duration: Micros::from_u32(250_000),
};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(board::make_peripheral_config());

    // B1 user button and LD2 user LED
    let trigger = ExtiInput::new(p.PC13, p.EXTI13, Pull::Down);
    let strobe = Output::new(p.PA5, Level::Low, Speed::VeryHigh);

    let (link, _, counters, runner) = {
        static CELL: StaticCell<StrobeDevice<ThreadModeRawMutex>> = StaticCell::new();
        let device = CELL.init(StrobeDevice::new(SHAPE));
        device.split()
    };

    let capture = emstrobe_stm32::bind(trigger, link, Default::default());
    unwrap!(spawner.spawn(capture_runner(capture)));
    unwrap!(spawner.spawn(pulse_runner(runner, strobe)));

    loop {
        Timer::after(Duration::from_secs(5)).await;
        let stats = counters.stats();
        info!(
            "triggered {} handled {} coalesced {}",
            stats.triggered,
            stats.handled,
            stats.coalesced()
        );
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
