//! Output pin boundary.
//!
//! Defines the [`OutputLine`] trait the core drives, the [`Led`] wrapper that
//! applies polarity so the rest of the crate only deals in logical on/off, and
//! [`HalPin`] which adapts any `embedded-hal` stateful output pin.

use embedded_hal::digital::{PinState, StatefulOutputPin};

/// Electrical level of a digital line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level == Level::High
    }
}

impl core::ops::Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// Trait for abstracting a single digital output line.
///
/// Implement this for your GPIO. Handle hardware errors internally - these
/// methods cannot fail.
pub trait OutputLine {
    /// Puts the line in output mode. Typestate HALs can leave this empty.
    fn configure_as_output(&mut self) {}

    /// Drives the line to `level`.
    fn write(&mut self, level: Level);

    /// Reads back the currently driven level.
    fn read(&mut self) -> Level;
}

/// Adapter from an `embedded-hal` 1.0 stateful output pin.
///
/// Errors from the pin are discarded; a failed read reports `Low`.
pub struct HalPin<P>(pub P);

impl<P: StatefulOutputPin> HalPin<P> {
    pub fn new(pin: P) -> Self {
        HalPin(pin)
    }

    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P: StatefulOutputPin> OutputLine for HalPin<P> {
    fn write(&mut self, level: Level) {
        let _ = self.0.set_state(PinState::from(bool::from(level)));
    }

    fn read(&mut self) -> Level {
        Level::from(self.0.is_set_high().unwrap_or(false))
    }
}

/// Immediate pin requests that bypass the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinAction {
    On,
    Off,
    Toggle,
}

/// An output line with polarity applied.
pub struct Led<P: OutputLine> {
    pin: P,
    active_high: bool,
}

impl<P: OutputLine> Led<P> {
    pub fn new(pin: P, active_high: bool) -> Self {
        Self { pin, active_high }
    }

    /// Changes polarity. Does not touch the line.
    pub fn set_active_high(&mut self, active_high: bool) {
        self.active_high = active_high;
    }

    pub fn configure(&mut self) {
        self.pin.configure_as_output();
    }

    #[inline]
    fn active_level(&self) -> Level {
        Level::from(self.active_high)
    }

    pub fn on(&mut self) {
        let level = self.active_level();
        self.pin.write(level);
    }

    pub fn off(&mut self) {
        let level = !self.active_level();
        self.pin.write(level);
    }

    /// Inverts whatever level the line currently drives.
    pub fn toggle(&mut self) {
        let level = self.pin.read();
        self.pin.write(!level);
    }

    pub fn is_on(&mut self) -> bool {
        self.pin.read() == self.active_level()
    }

    pub fn apply(&mut self, action: PinAction) {
        match action {
            PinAction::On => self.on(),
            PinAction::Off => self.off(),
            PinAction::Toggle => self.toggle(),
        }
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn into_pin(self) -> P {
        self.pin
    }
}
