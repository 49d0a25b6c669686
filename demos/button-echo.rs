//! Mirror an input pin on an LED and log level changes over RTT
//!
//! Tie PORTA[0] to GND through a push button. The internal pull-up keeps the
//! pin high while the button is released.
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use fastpin::{
    boards::va108xx::{self, enable_gpio_clocks, Va108xx},
    pac,
    prelude::*,
    FastPin, PinError, PinMode,
};
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("-- FastPin button echo --");
    let mut dp = pac::Peripherals::take().unwrap();
    enable_gpio_clocks(&mut dp.SYSCONFIG);

    let button = FastPin::<Va108xx>::with_setup(va108xx::PA0, PinMode::InputPullUp).unwrap();
    let mut led = FastPin::<Va108xx>::new();
    // Pin numbers past PORTB are rejected and leave the pin unconfigured
    if let Err(PinError::NotAPin(pin)) = led.setup(va108xx::PB23 + 1, PinMode::Output) {
        rprintln!("Pin {} does not exist", pin);
    }
    led.setup(va108xx::PA10, PinMode::Output).unwrap();

    let mut was_pressed = false;
    loop {
        let pressed = button.is_low().unwrap();
        // LED is active low
        led.write(!pressed);
        if pressed != was_pressed {
            rprintln!("Button {}", if pressed { "pressed" } else { "released" });
            was_pressed = pressed;
        }
        cortex_m::asm::delay(100_000);
    }
}
