//! Tick-counted timing.
//!
//! The state machine has no clock. Every call to `tick()` accounts for one
//! fixed tick interval, so a caller that ticks late or irregularly stretches
//! every duration by the same factor.

/// Nominal interval between two `tick()` calls in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 25;

/// On time of a single pulse in milliseconds.
pub const DEFAULT_PULSE_WIDTH_MS: u32 = 200;

/// Pause after a finished train before the next one starts, in milliseconds.
pub const DEFAULT_COMMAND_GAP_MS: u32 = 200;

/// Platform timing constants.
///
/// Pulse width and command gap are fixed per platform. The per-command delay
/// only controls the off time between pulses of one train.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Time credited per `tick()` call.
    pub tick_interval_ms: u32,

    /// On time of every pulse.
    pub pulse_width_ms: u32,

    /// Idle gap after each completed train.
    pub command_gap_ms: u32,
}

impl Timing {
    /// The reference platform timing: 25 ms ticks, 200 ms pulses, 200 ms gaps.
    pub const DEFAULT: Self = Self {
        tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        pulse_width_ms: DEFAULT_PULSE_WIDTH_MS,
        command_gap_ms: DEFAULT_COMMAND_GAP_MS,
    };

    /// Returns true if every constant is non-zero.
    pub fn is_valid(&self) -> bool {
        self.tick_interval_ms > 0 && self.pulse_width_ms > 0 && self.command_gap_ms > 0
    }

    /// Number of ticks needed for `millis` to elapse, rounded up.
    pub fn ticks_for(&self, millis: u32) -> u32 {
        millis.div_ceil(self.tick_interval_ms.max(1))
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Elapsed-time accumulator advanced in whole ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickTimer {
    elapsed_ms: u32,
}

impl TickTimer {
    pub const fn new() -> Self {
        Self { elapsed_ms: 0 }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }

    /// Credits one tick and reports whether `duration_ms` has elapsed.
    #[inline]
    pub fn advance(&mut self, tick_ms: u32, duration_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(tick_ms);
        self.elapsed_ms >= duration_ms
    }

    #[inline]
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_expires_on_reaching_duration() {
        let mut timer = TickTimer::new();
        for _ in 0..7 {
            assert!(!timer.advance(25, 200));
        }
        assert!(timer.advance(25, 200));
        assert_eq!(timer.elapsed_ms(), 200);

        timer.reset();
        assert_eq!(timer.elapsed_ms(), 0);
    }

    #[test]
    fn timer_saturates() {
        let mut timer = TickTimer::new();
        timer.advance(u32::MAX, 1);
        assert!(timer.advance(u32::MAX, u32::MAX));
    }

    #[test]
    fn ticks_round_up() {
        let timing = Timing::DEFAULT;
        assert_eq!(timing.ticks_for(200), 8);
        assert_eq!(timing.ticks_for(10), 1);
        assert_eq!(timing.ticks_for(110), 5);
    }

    #[test]
    fn zero_constants_are_invalid() {
        assert!(Timing::DEFAULT.is_valid());
        let timing = Timing {
            tick_interval_ms: 0,
            ..Timing::DEFAULT
        };
        assert!(!timing.is_valid());
    }
}
