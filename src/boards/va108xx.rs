//! # Vorago VA108xx
//!
//! Pins are numbered consecutively: `0..=31` are PORTA[0..=31] and `32..=55`
//! are PORTB[0..=23]. Constants for each pin are provided, e.g. [`PA10`] or
//! [`PB22`].
//!
//! The GPIO registers of the VA108xx are 32 bits wide but allow byte access,
//! so every byte lane of a port is exposed as its own [`PortBlock`]. The pins
//! are accessed through the raw input and output registers, which means the
//! DATAMASK register of the port has no effect on a [`FastPin`](crate::FastPin).
//!
//! Setting up a pin also writes its IOCONFIG register: the pin is routed back
//! to GPIO (function select 0) and the pull resistor is configured there, on
//! top of the output register bit written for input pins.
//!
//! The clocks of the PORTA, PORTB, GPIO and IOCONFIG peripherals need to be
//! enabled before the pins can be used, see [`enable_gpio_clocks`].
use crate::board::{Board, PortBlock, PortRegisters};
use crate::fastpin::PinMode;
use va108xx::{porta, IOCONFIG, PORTA, PORTB, SYSCONFIG};

const LANES_PER_PORT: u8 = 4;

/// Number of PORTA pins. PORTB pins start at this number
pub const NUM_PORTA_PINS: u8 = 32;
/// Number of PORTB pins
pub const NUM_PORTB_PINS: u8 = 24;

/// Board marker type for the VA108xx family
pub struct Va108xx;

impl Va108xx {
    /// PORTA and PORTB share the same register block layout
    #[inline]
    fn port_reg(port: PortBlock) -> &'static porta::RegisterBlock {
        // Safety: Only used to take register addresses
        unsafe {
            if port.0 < LANES_PER_PORT {
                &(*PORTA::ptr())
            } else {
                &(*PORTB::ptr())
            }
        }
    }
}

unsafe impl Board for Va108xx {
    #[inline]
    fn port(pin: u8) -> Option<PortBlock> {
        if pin < NUM_PORTA_PINS {
            Some(PortBlock(pin / 8))
        } else if pin < NUM_PORTA_PINS + NUM_PORTB_PINS {
            Some(PortBlock(LANES_PER_PORT + (pin - NUM_PORTA_PINS) / 8))
        } else {
            None
        }
    }

    #[inline]
    fn registers(port: PortBlock) -> PortRegisters {
        let portreg = Self::port_reg(port);
        let lane = (port.0 % LANES_PER_PORT) as usize;
        PortRegisters {
            dir: portreg.dirbyte()[lane].as_ptr(),
            input: portreg.datainrawbyte()[lane].as_ptr(),
            output: portreg.dataoutrawbyte()[lane].as_ptr(),
        }
    }

    #[inline]
    fn bit_mask(pin: u8) -> u8 {
        1 << (pin % 8)
    }

    #[inline]
    fn default_register() -> *mut u8 {
        Self::port_reg(PortBlock(0)).dataoutrawbyte()[0].as_ptr()
    }

    /// Route the pin to GPIO (function select 0) and set up the pull resistor
    fn configure_pin(pin: u8, mode: PinMode) {
        let pull_up = mode == PinMode::InputPullUp;
        // Safety: Only the IOCONFIG register of this pin is modified
        let iocfg = unsafe { &(*IOCONFIG::ptr()) };
        if pin < NUM_PORTA_PINS {
            iocfg.porta[pin as usize].modify(|_, w| {
                w.pen().bit(pull_up);
                w.plevel().bit(pull_up);
                unsafe { w.funsel().bits(0) }
            });
        } else {
            iocfg.portb[(pin - NUM_PORTA_PINS) as usize].modify(|_, w| {
                w.pen().bit(pull_up);
                w.plevel().bit(pull_up);
                unsafe { w.funsel().bits(0) }
            });
        }
    }
}

/// Enable the peripheral clocks required for GPIO access
pub fn enable_gpio_clocks(syscfg: &mut SYSCONFIG) {
    syscfg.peripheral_clk_enable.modify(|_, w| {
        w.porta().set_bit();
        w.portb().set_bit();
        w.gpio().set_bit();
        w.ioconfig().set_bit()
    });
}

pin_numbers!(
    "PORTA",
    [
        (PA0, 0),
        (PA1, 1),
        (PA2, 2),
        (PA3, 3),
        (PA4, 4),
        (PA5, 5),
        (PA6, 6),
        (PA7, 7),
        (PA8, 8),
        (PA9, 9),
        (PA10, 10),
        (PA11, 11),
        (PA12, 12),
        (PA13, 13),
        (PA14, 14),
        (PA15, 15),
        (PA16, 16),
        (PA17, 17),
        (PA18, 18),
        (PA19, 19),
        (PA20, 20),
        (PA21, 21),
        (PA22, 22),
        (PA23, 23),
        (PA24, 24),
        (PA25, 25),
        (PA26, 26),
        (PA27, 27),
        (PA28, 28),
        (PA29, 29),
        (PA30, 30),
        (PA31, 31),
    ]
);

pin_numbers!(
    "PORTB",
    [
        (PB0, 32),
        (PB1, 33),
        (PB2, 34),
        (PB3, 35),
        (PB4, 36),
        (PB5, 37),
        (PB6, 38),
        (PB7, 39),
        (PB8, 40),
        (PB9, 41),
        (PB10, 42),
        (PB11, 43),
        (PB12, 44),
        (PB13, 45),
        (PB14, 46),
        (PB15, 47),
        (PB16, 48),
        (PB17, 49),
        (PB18, 50),
        (PB19, 51),
        (PB20, 52),
        (PB21, 53),
        (PB22, 54),
        (PB23, 55),
    ]
);
