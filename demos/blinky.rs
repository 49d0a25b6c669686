//! Blinky example using fast pins
//!
//! Additional note on LEDs when using the REB1 development board:
//! Be not afraid: Pulling the GPIOs low makes the LEDs blink. See REB1
//! schematic for more details.
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use fastpin::{
    boards::va108xx::{self, enable_gpio_clocks, Va108xx},
    pac, FastPin, PinMode,
};
use panic_halt as _;

#[entry]
fn main() -> ! {
    let mut dp = pac::Peripherals::take().unwrap();
    enable_gpio_clocks(&mut dp.SYSCONFIG);
    let mut led1 = FastPin::<Va108xx>::with_setup(va108xx::PA10, PinMode::Output).unwrap();
    let mut led2 = FastPin::<Va108xx>::with_setup(va108xx::PA7, PinMode::Output).unwrap();
    let mut led3 = FastPin::<Va108xx>::with_setup(va108xx::PA6, PinMode::Output).unwrap();
    for _ in 0..10 {
        led1.write(false);
        led2.write(false);
        led3.write(false);
        cortex_m::asm::delay(5_000_000);
        led1.write(true);
        led2.write(true);
        led3.write(true);
        cortex_m::asm::delay(5_000_000);
    }
    loop {
        led1.toggle();
        cortex_m::asm::delay(5_000_000);
        led2.toggle();
        cortex_m::asm::delay(5_000_000);
        led3.toggle();
        cortex_m::asm::delay(5_000_000);
    }
}
