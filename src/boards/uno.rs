//! # Arduino Uno (ATmega328P)
//!
//! Uses the Arduino pin numbering: `D0`-`D7` live on PORTD, `D8`-`D13` on
//! PORTB and the analog pins `A0`-`A5` on PORTC. Input pull-ups are enabled
//! through the PORTx register, so no extra pin configuration is needed.
//!
//! Note that writing a one to a PINx register toggles the corresponding PORTx
//! bit on this chip. Writing to a pin set up as an input therefore flips its
//! pull-up.
use crate::board::{Board, PortBlock, PortRegisters};

// Register addresses in the data address space: (PINx, DDRx, PORTx)
const PORT_B: (usize, usize, usize) = (0x23, 0x24, 0x25);
const PORT_C: (usize, usize, usize) = (0x26, 0x27, 0x28);
const PORT_D: (usize, usize, usize) = (0x29, 0x2A, 0x2B);

const BLOCK_B: PortBlock = PortBlock(0);
const BLOCK_C: PortBlock = PortBlock(1);
const BLOCK_D: PortBlock = PortBlock(2);

/// Number of digital pins, including the analog pins used as GPIO
pub const NUM_PINS: u8 = 20;

/// Board marker type for the Arduino Uno
pub struct Uno;

unsafe impl Board for Uno {
    #[inline]
    fn port(pin: u8) -> Option<PortBlock> {
        match pin {
            0..=7 => Some(BLOCK_D),
            8..=13 => Some(BLOCK_B),
            14..=19 => Some(BLOCK_C),
            _ => None,
        }
    }

    #[inline]
    fn registers(port: PortBlock) -> PortRegisters {
        let (pin, ddr, port) = match port {
            BLOCK_C => PORT_C,
            BLOCK_D => PORT_D,
            _ => PORT_B,
        };
        PortRegisters {
            dir: ddr as *mut u8,
            input: pin as *mut u8,
            output: port as *mut u8,
        }
    }

    #[inline]
    fn bit_mask(pin: u8) -> u8 {
        match pin {
            0..=7 => 1 << pin,
            8..=13 => 1 << (pin - 8),
            14..=19 => 1 << (pin - 14),
            _ => 0,
        }
    }

    #[inline]
    fn default_register() -> *mut u8 {
        PORT_B.2 as *mut u8
    }
}

pin_numbers!(
    "PORTD",
    [
        (D0, 0),
        (D1, 1),
        (D2, 2),
        (D3, 3),
        (D4, 4),
        (D5, 5),
        (D6, 6),
        (D7, 7),
    ]
);

pin_numbers!(
    "PORTB",
    [
        (D8, 8),
        (D9, 9),
        (D10, 10),
        (D11, 11),
        (D12, 12),
        (D13, 13),
    ]
);

pin_numbers!(
    "PORTC",
    [
        (A0, 14),
        (A1, 15),
        (A2, 16),
        (A3, 17),
        (A4, 18),
        (A5, 19),
    ]
);
