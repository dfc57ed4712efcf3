//! LED configuration and its validation.

use crate::timing::Timing;
use crate::types::{ConfigError, MAX_DELAY_MS, MIN_DELAY_MS};

/// Pin used when no configuration is given (the usual on-board LED).
pub const DEFAULT_PIN: u16 = 13;

/// Highest pin identifier accepted.
pub const MAX_PIN: u16 = 255;

/// Platform inter-pulse delay used by `submit_simple`, in milliseconds.
pub const DEFAULT_DELAY_MS: u32 = 250;

/// Configuration applied by `initialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedConfig {
    /// Identifier of the output pin, for the caller's bookkeeping.
    pub pin: u16,

    /// True if driving the pin high lights the LED.
    pub active_high: bool,

    /// Default inter-pulse delay, validated with the rest of the
    /// configuration. `submit_simple` always uses `DEFAULT_DELAY_MS`.
    pub default_delay_ms: u32,

    /// Tick interval, pulse width and command gap.
    pub timing: Timing,
}

impl LedConfig {
    pub const DEFAULT: Self = Self {
        pin: DEFAULT_PIN,
        active_high: true,
        default_delay_ms: DEFAULT_DELAY_MS,
        timing: Timing::DEFAULT,
    };

    /// Default configuration on another pin.
    pub const fn with_pin(pin: u16) -> Self {
        Self {
            pin,
            ..Self::DEFAULT
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pin > MAX_PIN {
            return Err(ConfigError::PinOutOfRange(self.pin));
        }

        if !(MIN_DELAY_MS..=MAX_DELAY_MS).contains(&self.default_delay_ms) {
            return Err(ConfigError::DefaultDelayOutOfRange(self.default_delay_ms));
        }

        if !self.timing.is_valid() {
            return Err(ConfigError::ZeroTiming);
        }

        Ok(())
    }
}

impl Default for LedConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
