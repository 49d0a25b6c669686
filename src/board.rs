//! # Board description
//!
//! A [`FastPin`](crate::FastPin) does not know anything about the chip it runs on.
//! Everything board specific is supplied through the [`Board`] trait: how a pin
//! number maps to a port block, which byte registers belong to that port block
//! and where the pin sits inside those registers.
//!
//! All registers are treated as byte-wide. Chips with wider GPIO registers can
//! expose one [`PortBlock`] per byte lane, like the VA108xx board does.
use crate::fastpin::PinMode;
use core::ptr::{read_volatile, write_volatile};

//==================================================================================================
//  Port blocks
//==================================================================================================

/// Value-level identifier of a group of pins sharing one set of registers
///
/// The numbering is private to the [`Board`] which handed it out.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortBlock(pub u8);

/// Registers of a single port block
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PortRegisters {
    /// Direction register. A set bit configures the pin as an output
    pub dir: *mut u8,
    /// Input register, reflects the level on the pins
    pub input: *mut u8,
    /// Output register, drives the level of output pins
    pub output: *mut u8,
}

//==================================================================================================
//  Board
//==================================================================================================

/// Hardware description used to resolve pin numbers
///
/// Implementers are zero-sized marker types. All functions are associated
/// functions so that a [`FastPin`](crate::FastPin) only has to carry the resolved
/// register address and mask.
///
/// # Safety
///
/// Every pointer handed out by [`registers`](Self::registers) and
/// [`default_register`](Self::default_register) must point to a byte register
/// which may be read and written for the whole lifetime of the program.
/// [`bit_mask`](Self::bit_mask) must return a mask with exactly one bit set
/// for every pin that [`port`](Self::port) accepts.
pub unsafe trait Board {
    /// Map a pin number to its port block. `None` if the number is not a pin
    fn port(pin: u8) -> Option<PortBlock>;

    /// Registers of a port block returned by [`port`](Self::port)
    fn registers(port: PortBlock) -> PortRegisters;

    /// Bit of the pin inside the registers of its port block
    fn bit_mask(pin: u8) -> u8;

    /// Some register which is always safe to access. Used by unconfigured pins
    fn default_register() -> *mut u8;

    /// Chip specific configuration applied at the end of every setup
    ///
    /// Called after the direction bit has been written and, for input modes,
    /// after the pin's bit in the output register has been set (pull-up) or
    /// cleared (floating). That output bit is how most 8-bit MCUs select the
    /// input pull-up, so the default implementation does nothing. Chips with
    /// separate pull or function select registers configure them here.
    #[inline]
    fn configure_pin(_pin: u8, _mode: PinMode) {}
}

//==================================================================================================
//  Register helpers
//==================================================================================================

/// Set `mask` bits of a byte register, leaving all other bits untouched
///
/// # Safety
///
/// `reg` must point to a valid byte register
#[inline(always)]
pub unsafe fn set_bits(reg: *mut u8, mask: u8) {
    write_volatile(reg, read_volatile(reg) | mask);
}

/// Clear `mask` bits of a byte register, leaving all other bits untouched
///
/// # Safety
///
/// `reg` must point to a valid byte register
#[inline(always)]
pub unsafe fn clear_bits(reg: *mut u8, mask: u8) {
    write_volatile(reg, read_volatile(reg) & !mask);
}

/// Check whether any of the `mask` bits is set in a byte register
///
/// # Safety
///
/// `reg` must point to a valid byte register
#[inline(always)]
pub unsafe fn bits_set(reg: *const u8, mask: u8) -> bool {
    read_volatile(reg) & mask != 0
}
