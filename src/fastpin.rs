//! # Pre-resolved GPIO pins
//!
//! A [`FastPin`] looks up its pin number once, when it is set up. The lookup
//! yields the port register of the pin and the pin's bit inside that register.
//! Afterwards, [`read`](FastPin::read) and [`write`](FastPin::write) only
//! touch that register, which makes them about as fast as hand-written port
//! manipulation.
//!
//! ```no_run
//! use fastpin::{boards::uno::{self, Uno}, FastPin, PinMode};
//!
//! # fn main() -> Result<(), fastpin::PinError> {
//! let mut led = FastPin::<Uno>::with_setup(uno::D13, PinMode::Output)?;
//! led.write(true);
//! # Ok(())
//! # }
//! ```
//!
//! Setup is the only place where things can go wrong. Reads and writes trust
//! the caller: writing to a pin which was set up as an input changes the
//! pull-up or input register of the port, depending on the chip.
//!
//! Read-modify-write sequences are not protected against interrupts. Pins
//! sharing a port with pins driven from interrupt context need an external
//! critical section.
//!
//! # Embedded HAL traits
//!
//! [`FastPin`] implements [`InputPin`], [`OutputPin`], [`StatefulOutputPin`]
//! and [`ToggleableOutputPin`]. None of them can fail, so the error type is
//! [`Infallible`].
use crate::board::{bits_set, clear_bits, set_bits, Board};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin, StatefulOutputPin, ToggleableOutputPin};

//==================================================================================================
//  Errors and Definitions
//==================================================================================================

/// Pin setup error
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// The pin number does not belong to any port of the board
    NotAPin(u8),
}

/// Value-level `enum` for the supported pin modes
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    Output,
    InputFloating,
    InputPullUp,
}

//==================================================================================================
//  FastPin
//==================================================================================================

/// A GPIO pin resolved to a port register and a bit mask
///
/// The register is the output register for [`PinMode::Output`] and the
/// input register for the input modes.
pub struct FastPin<B: Board> {
    register: *mut u8,
    mask: u8,
    board: PhantomData<B>,
}

// NOTE(unsafe) the pin only carries the address of a register which exists for the whole program
unsafe impl<B: Board> Send for FastPin<B> {}

impl<B: Board> FastPin<B> {
    /// Create an unconfigured pin
    ///
    /// The mask is empty, so [`read`](Self::read) always returns `false` and
    /// [`write`](Self::write) does not change anything until the pin is set up.
    #[inline]
    pub fn new() -> Self {
        FastPin {
            register: B::default_register(),
            mask: 0,
            board: PhantomData,
        }
    }

    /// Create a pin and set it up immediately
    #[inline]
    pub fn with_setup(pin: u8, mode: PinMode) -> Result<Self, PinError> {
        let mut fast_pin = Self::new();
        fast_pin.setup(pin, mode)?;
        Ok(fast_pin)
    }

    /// Set up the pin by its number and mode
    ///
    /// Configures the direction (and the pull-up for input pins) of the pin
    /// and binds the pin to its output or input register.
    ///
    /// Returns [`PinError::NotAPin`] if the number does not map to a port. In
    /// that case, neither the registers nor the current configuration of the
    /// pin are touched.
    pub fn setup(&mut self, pin: u8, mode: PinMode) -> Result<(), PinError> {
        let port = B::port(pin).ok_or(PinError::NotAPin(pin))?;
        let regs = B::registers(port);
        let mask = B::bit_mask(pin);
        // Safety: The board guarantees valid registers. Only the bit of this pin is modified
        let register = unsafe {
            match mode {
                PinMode::Output => {
                    set_bits(regs.dir, mask);
                    regs.output
                }
                PinMode::InputFloating => {
                    clear_bits(regs.dir, mask);
                    clear_bits(regs.output, mask);
                    regs.input
                }
                PinMode::InputPullUp => {
                    clear_bits(regs.dir, mask);
                    set_bits(regs.output, mask);
                    regs.input
                }
            }
        };
        B::configure_pin(pin, mode);
        self.register = register;
        self.mask = mask;
        Ok(())
    }

    /// Read the pin's bit from the bound register
    #[inline(always)]
    pub fn read(&self) -> bool {
        // Safety: Either the default register or a register handed out by the board
        unsafe { bits_set(self.register, self.mask) }
    }

    /// Write the pin's bit in the bound register
    #[inline(always)]
    pub fn write(&mut self, value: bool) {
        // Safety: Only the bit for this pin is modified
        unsafe {
            if value {
                set_bits(self.register, self.mask);
            } else {
                clear_bits(self.register, self.mask);
            }
        }
    }

    /// Invert the pin's bit in the bound register
    #[inline]
    pub fn toggle(&mut self) {
        let value = self.read();
        self.write(!value);
    }

    /// Bit mask of the pin. Zero for unconfigured pins
    #[inline]
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Whether the pin has been set up successfully
    #[inline]
    pub fn is_configured(&self) -> bool {
        self.mask != 0
    }
}

impl<B: Board> Default for FastPin<B> {
    fn default() -> Self {
        Self::new()
    }
}

//==================================================================================================
//  Embedded HAL traits
//==================================================================================================

impl<B: Board> OutputPin for FastPin<B> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }
}

impl<B: Board> StatefulOutputPin for FastPin<B> {
    #[inline]
    fn is_set_high(&self) -> Result<bool, Self::Error> {
        Ok(self.read())
    }

    #[inline]
    fn is_set_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.read())
    }
}

impl<B: Board> ToggleableOutputPin for FastPin<B> {
    type Error = Infallible;

    #[inline]
    fn toggle(&mut self) -> Result<(), Self::Error> {
        FastPin::<B>::toggle(self);
        Ok(())
    }
}

impl<B: Board> InputPin for FastPin<B> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.read())
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PortBlock, PortRegisters};
    use core::cell::UnsafeCell;

    // Layout per port: [dir, input, output]
    const PORTS: usize = 2;
    const DEFAULT_REG: usize = PORTS * 3;

    std::thread_local! {
        static REGS: UnsafeCell<[u8; PORTS * 3 + 1]> = const { UnsafeCell::new([0; PORTS * 3 + 1]) };
    }

    fn reg(idx: usize) -> *mut u8 {
        REGS.with(|regs| unsafe { (regs.get() as *mut u8).add(idx) })
    }

    fn peek(idx: usize) -> u8 {
        unsafe { *reg(idx) }
    }

    fn poke(idx: usize, value: u8) {
        unsafe { *reg(idx) = value }
    }

    fn reset() {
        REGS.with(|regs| unsafe { *regs.get() = [0; PORTS * 3 + 1] });
    }

    fn snapshot() -> [u8; PORTS * 3 + 1] {
        REGS.with(|regs| unsafe { *regs.get() })
    }

    /// Pins 0..=7 on port 0, pins 8..=15 on port 1
    struct MockBoard;

    unsafe impl Board for MockBoard {
        fn port(pin: u8) -> Option<PortBlock> {
            if pin < 16 {
                Some(PortBlock(pin / 8))
            } else {
                None
            }
        }

        fn registers(port: PortBlock) -> PortRegisters {
            let base = port.0 as usize * 3;
            PortRegisters {
                dir: reg(base),
                input: reg(base + 1),
                output: reg(base + 2),
            }
        }

        fn bit_mask(pin: u8) -> u8 {
            1 << (pin % 8)
        }

        fn default_register() -> *mut u8 {
            reg(DEFAULT_REG)
        }
    }

    type Pin = FastPin<MockBoard>;

    std::thread_local! {
        static CONFIGURED: core::cell::Cell<Option<(u8, PinMode)>> = const { core::cell::Cell::new(None) };
    }

    /// Same layout as [`MockBoard`], but with chip specific pin configuration
    struct MockBoardWithIoConfig;

    unsafe impl Board for MockBoardWithIoConfig {
        fn port(pin: u8) -> Option<PortBlock> {
            MockBoard::port(pin)
        }

        fn registers(port: PortBlock) -> PortRegisters {
            MockBoard::registers(port)
        }

        fn bit_mask(pin: u8) -> u8 {
            MockBoard::bit_mask(pin)
        }

        fn default_register() -> *mut u8 {
            MockBoard::default_register()
        }

        fn configure_pin(pin: u8, mode: PinMode) {
            CONFIGURED.with(|cfg| cfg.set(Some((pin, mode))));
        }
    }

    #[test]
    fn unconfigured_pin_is_inert() {
        reset();
        poke(DEFAULT_REG, 0xff);
        let mut pin = Pin::new();
        assert!(!pin.is_configured());
        assert!(!pin.read());
        let before = snapshot();
        pin.write(true);
        pin.write(false);
        pin.toggle();
        assert_eq!(snapshot(), before);
        assert!(!Pin::default().read());
    }

    #[test]
    fn output_write_then_read() {
        reset();
        let mut pin = Pin::with_setup(3, PinMode::Output).unwrap();
        assert_eq!(pin.mask(), 0b0000_1000);
        assert_eq!(peek(0) & 0b0000_1000, 0b0000_1000);
        pin.write(true);
        assert!(pin.read());
        assert_eq!(peek(2), 0b0000_1000);
        pin.write(false);
        assert!(!pin.read());
        assert_eq!(peek(2), 0);
    }

    #[test]
    fn write_keeps_other_bits() {
        reset();
        poke(5, 0b1010_0101);
        let mut pin = Pin::with_setup(9, PinMode::Output).unwrap();
        pin.write(true);
        assert_eq!(peek(5), 0b1010_0111);
        pin.write(false);
        assert_eq!(peek(5), 0b1010_0101);
        pin.toggle();
        assert_eq!(peek(5), 0b1010_0111);
    }

    #[test]
    fn input_pull_up_sets_output_bit() {
        reset();
        poke(0, 0xff);
        let pin = Pin::with_setup(6, PinMode::InputPullUp).unwrap();
        assert_eq!(peek(0), 0b1011_1111);
        assert_eq!(peek(2) & 0b0100_0000, 0b0100_0000);
        poke(1, 0b0100_0000);
        assert!(pin.read());
        poke(1, 0b1011_1111);
        assert!(!pin.read());
    }

    #[test]
    fn floating_input_clears_output_bit() {
        reset();
        poke(5, 0xff);
        let _pin = Pin::with_setup(12, PinMode::InputFloating).unwrap();
        assert_eq!(peek(3) & 0b0001_0000, 0);
        assert_eq!(peek(5), 0b1110_1111);
    }

    #[test]
    fn invalid_pin_keeps_previous_configuration() {
        reset();
        let mut pin = Pin::with_setup(1, PinMode::Output).unwrap();
        let before = snapshot();
        assert_eq!(
            pin.setup(42, PinMode::InputPullUp),
            Err(PinError::NotAPin(42))
        );
        assert_eq!(snapshot(), before);
        assert_eq!(pin.mask(), 0b0000_0010);
        pin.write(true);
        assert_eq!(peek(2), 0b0000_0010);
        assert!(Pin::with_setup(16, PinMode::Output).is_err());
    }

    #[test]
    fn setup_retargets_pin() {
        reset();
        let mut pin = Pin::with_setup(0, PinMode::Output).unwrap();
        pin.setup(15, PinMode::Output).unwrap();
        pin.write(true);
        assert_eq!(peek(2), 0);
        assert_eq!(peek(5), 0b1000_0000);
        assert!(pin.read());
        pin.setup(2, PinMode::InputFloating).unwrap();
        poke(1, 0b0000_0100);
        assert!(pin.read());
    }

    #[test]
    fn embedded_hal_traits() {
        reset();
        let mut pin = Pin::with_setup(4, PinMode::Output).unwrap();
        pin.set_high().unwrap();
        assert!(pin.is_set_high().unwrap());
        assert!(pin.is_high().unwrap());
        ToggleableOutputPin::toggle(&mut pin).unwrap();
        assert!(pin.is_set_low().unwrap());
        assert!(pin.is_low().unwrap());
        pin.set_low().unwrap();
        assert_eq!(peek(2), 0);
    }

    #[test]
    fn output_bit_written_with_custom_pin_config() {
        reset();
        CONFIGURED.with(|cfg| cfg.set(None));
        poke(2, 0b0000_0001);
        let _floating = FastPin::<MockBoardWithIoConfig>::with_setup(0, PinMode::InputFloating).unwrap();
        assert_eq!(peek(2), 0);
        assert_eq!(CONFIGURED.with(|cfg| cfg.get()), Some((0, PinMode::InputFloating)));

        let _pulled_up = FastPin::<MockBoardWithIoConfig>::with_setup(9, PinMode::InputPullUp).unwrap();
        assert_eq!(peek(5), 0b0000_0010);
        assert_eq!(peek(3), 0);
        assert_eq!(CONFIGURED.with(|cfg| cfg.get()), Some((9, PinMode::InputPullUp)));

        let _out = FastPin::<MockBoardWithIoConfig>::with_setup(3, PinMode::Output).unwrap();
        assert_eq!(peek(0), 0b0000_1000);
        assert_eq!(CONFIGURED.with(|cfg| cfg.get()), Some((3, PinMode::Output)));
    }

    #[test]
    fn invalid_pin_skips_custom_pin_config() {
        reset();
        CONFIGURED.with(|cfg| cfg.set(None));
        assert!(FastPin::<MockBoardWithIoConfig>::with_setup(16, PinMode::Output).is_err());
        assert_eq!(CONFIGURED.with(|cfg| cfg.get()), None);
    }
}
