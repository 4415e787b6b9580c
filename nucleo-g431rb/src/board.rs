pub fn make_peripheral_config() -> embassy_stm32::Config {
    use embassy_stm32::rcc;
    use embassy_stm32::time::Hertz;

    let mut config = embassy_stm32::Config::default();
    config.rcc.hsi = false;
    config.rcc.hse = Some(rcc::Hse {
        freq: Hertz::mhz(24),
        mode: rcc::HseMode::Oscillator,
    });
    config.rcc.pll = Some(rcc::Pll {
        source: rcc::PllSource::HSE,
        prediv: rcc::PllPreDiv::DIV3,
        mul: rcc::PllMul::MUL40, // 320 MHz
        divp: None,
        divq: None,
        divr: Some(rcc::PllRDiv::DIV2), // 160 MHz sysclock
    });
    config.rcc.sys = rcc::Sysclk::PLL1_R;
    config.rcc.boost = true; // Required for freq > 150MHz
    config
}
