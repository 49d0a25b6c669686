//! # Fast digital pin access
//!
//! A pin number is looked up once, when a [`FastPin`] is set up. Afterwards,
//! reads and writes go straight to the port register of the pin.
//!
//! The chip specific parts (pin to port mapping, register addresses) are
//! described by a [`Board`]. Descriptions for some boards are provided in
//! [`boards`]. The VA108xx description and the re-exported PAC require the
//! `va108xx` feature.
#![cfg_attr(not(test), no_std)]

#[cfg(feature = "va108xx")]
pub use va108xx;
#[cfg(feature = "va108xx")]
pub use va108xx as pac;

pub mod board;
pub mod boards;
pub mod fastpin;
pub mod prelude;

pub use board::{Board, PortBlock, PortRegisters};
pub use fastpin::{FastPin, PinError, PinMode};
