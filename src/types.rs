//! Core types shared by the queue, state machine and control surface.

/// Smallest accepted pulse count.
pub const MIN_PULSE_COUNT: u16 = 1;

/// Largest accepted pulse count.
pub const MAX_PULSE_COUNT: u16 = 1000;

/// Shortest accepted inter-pulse delay in milliseconds.
pub const MIN_DELAY_MS: u32 = 10;

/// Longest accepted inter-pulse delay in milliseconds.
pub const MAX_DELAY_MS: u32 = 10_000;

/// One requested pulse train.
///
/// Commands are plain values: the queue stores them by value and the state
/// machine reads them in place at the front of the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkCommand {
    /// Number of pulses requested.
    pub pulse_count: u16,

    /// Off time between two pulses of the train, in milliseconds.
    pub inter_pulse_delay_ms: u32,

    /// Completion bound for the train. Equal to `pulse_count` and never
    /// decremented; the machine counts completed pulses separately.
    pub target_count: u16,
}

impl BlinkCommand {
    /// Creates a command. Range checks are the caller's responsibility.
    #[inline]
    pub const fn new(pulse_count: u16, inter_pulse_delay_ms: u32) -> Self {
        Self {
            pulse_count,
            inter_pulse_delay_ms,
            target_count: pulse_count,
        }
    }

    /// Returns true once `completed` pulses finish this train.
    #[inline]
    pub fn is_complete(&self, completed: u16) -> bool {
        completed >= self.target_count
    }
}

/// Which configuration field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin identifier above the representable range.
    PinOutOfRange(u16),

    /// Default inter-pulse delay outside the accepted range.
    DefaultDelayOutOfRange(u32),

    /// A timing constant was zero.
    ZeroTiming,
}

/// Which submission argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgumentError {
    /// Pulse count outside `MIN_PULSE_COUNT..=MAX_PULSE_COUNT`.
    PulseCount(u16),

    /// Delay outside `MIN_DELAY_MS..=MAX_DELAY_MS`.
    Delay(u32),
}

/// Errors returned by the blink subsystem.
///
/// None of these are fatal; the subsystem stays usable after any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkError {
    /// Configuration rejected at initialization.
    InvalidConfig(ConfigError),

    /// Submission arguments out of range.
    InvalidArgument(ArgumentError),

    /// The command queue is at capacity.
    Full,
}

impl From<ConfigError> for BlinkError {
    fn from(err: ConfigError) -> Self {
        BlinkError::InvalidConfig(err)
    }
}

impl From<ArgumentError> for BlinkError {
    fn from(err: ArgumentError) -> Self {
        BlinkError::InvalidArgument(err)
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::PinOutOfRange(pin) => write!(f, "pin {} is out of range", pin),
            ConfigError::DefaultDelayOutOfRange(delay) => write!(
                f,
                "default delay {} ms is outside {}..={} ms",
                delay, MIN_DELAY_MS, MAX_DELAY_MS
            ),
            ConfigError::ZeroTiming => write!(f, "timing constants must be non-zero"),
        }
    }
}

impl core::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArgumentError::PulseCount(count) => write!(
                f,
                "pulse count {} is outside {}..={}",
                count, MIN_PULSE_COUNT, MAX_PULSE_COUNT
            ),
            ArgumentError::Delay(delay) => write!(
                f,
                "delay {} ms is outside {}..={} ms",
                delay, MIN_DELAY_MS, MAX_DELAY_MS
            ),
        }
    }
}

impl core::fmt::Display for BlinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BlinkError::InvalidConfig(err) => write!(f, "invalid configuration: {}", err),
            BlinkError::InvalidArgument(err) => write!(f, "invalid argument: {}", err),
            BlinkError::Full => write!(f, "command queue is full"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BlinkError {}

/// Checks a submission against the accepted ranges.
///
/// Out-of-range input is rejected, never clamped. A delay of 0 does not
/// select a default.
pub fn validate_submission(pulse_count: u16, delay_ms: u32) -> Result<(), ArgumentError> {
    if !(MIN_PULSE_COUNT..=MAX_PULSE_COUNT).contains(&pulse_count) {
        return Err(ArgumentError::PulseCount(pulse_count));
    }

    if !(MIN_DELAY_MS..=MAX_DELAY_MS).contains(&delay_ms) {
        return Err(ArgumentError::Delay(delay_ms));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::string::ToString;

    #[test]
    fn target_count_mirrors_pulse_count() {
        let cmd = BlinkCommand::new(7, 100);
        assert_eq!(cmd.target_count, 7);
        assert!(!cmd.is_complete(6));
        assert!(cmd.is_complete(7));
    }

    #[test]
    fn submission_bounds_are_inclusive() {
        assert!(validate_submission(1, 10).is_ok());
        assert!(validate_submission(1000, 10_000).is_ok());
        assert_eq!(validate_submission(0, 100), Err(ArgumentError::PulseCount(0)));
        assert_eq!(validate_submission(1001, 100), Err(ArgumentError::PulseCount(1001)));
        assert_eq!(validate_submission(1, 9), Err(ArgumentError::Delay(9)));
        assert_eq!(validate_submission(1, 10_001), Err(ArgumentError::Delay(10_001)));
    }

    #[test]
    fn zero_delay_is_rejected() {
        assert_eq!(validate_submission(5, 0), Err(ArgumentError::Delay(0)));
    }

    #[test]
    fn errors_display_the_rejected_value() {
        let err: BlinkError = ArgumentError::Delay(9).into();
        assert_eq!(err.to_string(), "invalid argument: delay 9 ms is outside 10..=10000 ms");

        let err: BlinkError = ConfigError::PinOutOfRange(300).into();
        assert_eq!(err.to_string(), "invalid configuration: pin 300 is out of range");
    }
}
