//! # Board descriptions
//!
//! Ready-made [`Board`](crate::Board) implementations. Other boards can be
//! supported by implementing the trait in the board support crate.

/// Declare `pub const` pin numbers with generated docs
macro_rules! pin_numbers {
    ($Port:tt, [$(($Id:ident, $NUM:literal),)+]) => {
        // Need paste macro to use ident in doc attribute
        paste::paste! {
            $(
                #[doc = "Pin number of " $Id " (" $Port ")"]
                pub const $Id: u8 = $NUM;
            )+
        }
    };
}

pub mod uno;
#[cfg(feature = "va108xx")]
pub mod va108xx;
