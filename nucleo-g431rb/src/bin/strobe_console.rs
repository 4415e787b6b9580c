//! Operator console for the strobe registry over the ST-Link virtual COM port.
//!
//! Line protocol, one command per line:
//! * `<name>` reads an attribute back as `"<name> <value> usec"`
//! * `<name> <value>` stores a new value
//!
//! Unknown names and malformed values are answered with an error line and
//! leave the configuration untouched.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use embassy_stm32::mode::Async;
use embassy_stm32::usart::{self, Uart, UartRx, UartTx};
use embassy_stm32::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_time::Delay;
use emstrobe::core::PulseShape;
use emstrobe::device::{Control, Runner, StrobeDevice};
use emstrobe::registry::{Key, Registry};
use emstrobe_stm32_embassy as emstrobe_stm32;
use nucleo_g431rb::board;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    LPUART1 => usart::InterruptHandler<peripherals::LPUART1>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(board::make_peripheral_config());

    let trigger = ExtiInput::new(p.PC13, p.EXTI13, Pull::Down);
    let strobe = Output::new(p.PA5, Level::Low, Speed::VeryHigh);

    // LPUART1 on PA2/PA3 is wired to the ST-Link VCP
    let uart = unwrap!(Uart::new(
        p.LPUART1,
        p.PA3,
        p.PA2,
        Irqs,
        p.DMA1_CH1,
        p.DMA1_CH2,
        usart::Config::default(),
    ));
    let (tx, rx) = uart.split();

    let (link, control, _, runner) = {
        static CELL: StaticCell<StrobeDevice<ThreadModeRawMutex>> = StaticCell::new();
        let device = CELL.init(StrobeDevice::new(PulseShape::default()));
        device.split()
    };

    let capture = emstrobe_stm32::bind(trigger, link, Default::default());
    unwrap!(spawner.spawn(capture_runner(capture)));
    unwrap!(spawner.spawn(pulse_runner(runner, strobe)));
    unwrap!(spawner.spawn(console(tx, rx, control)));
}

#[embassy_executor::task]
async fn console(
    mut tx: UartTx<'static, Async>,
    mut rx: UartRx<'static, Async>,
    control: Control<'static>,
) {
    let mut registry = Registry::new(control);
    let mut line: heapless::Vec<u8, 64> = heapless::Vec::new();

    loop {
        let mut byte = [0u8; 1];
        if rx.read(&mut byte).await.is_err() {
            warn!("console read error");
            line.clear();
            continue;
        }
        match byte[0] {
            b'\r' | b'\n' => {
                if !line.is_empty() {
                    let response = handle_line(&mut registry, &line);
                    let _ = tx.write(response.as_bytes()).await;
                    line.clear();
                }
            }
            byte => {
                // An oversized command is dropped wholesale
                if line.push(byte).is_err() {
                    line.clear();
                }
            }
        }
    }
}

fn handle_line(registry: &mut Registry<'_>, raw: &[u8]) -> heapless::String<64> {
    let mut response = heapless::String::new();

    let Ok(text) = core::str::from_utf8(raw) else {
        let _ = response.push_str("invalid input\n");
        return response;
    };

    let mut parts = text.trim().splitn(2, ' ');
    let name = parts.next().unwrap_or("");
    let Some(key) = Key::from_name(name) else {
        let _ = response.push_str("unknown attribute\n");
        return response;
    };

    match parts.next() {
        None => {
            let _ = response.push_str(&registry.read(key));
        }
        Some(value) => match registry.write(key, value) {
            Ok(()) => {
                let _ = response.push_str("ok\n");
            }
            Err(_) => {
                let _ = response.push_str("invalid value\n");
            }
        },
    }
    response
}

#[embassy_executor::task]
async fn capture_runner(mut runner: emstrobe_stm32::CaptureRunner<'static>) {
    runner.run().await
}

#[embassy_executor::task]
async fn pulse_runner(mut runner: Runner<'static>, strobe: Output<'static>) {
    runner.run(strobe, Delay).await
}
