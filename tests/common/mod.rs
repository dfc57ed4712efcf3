//! Shared test infrastructure for blink-code integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use blink_code::{BlinkCode, BlinkState, Level, OutputLine, Timing};

// ============================================================================
// Mock Pin
// ============================================================================

/// Mock output line that records every write
pub struct MockPin {
    level: Level,
    configured: bool,
    history: heapless::Vec<Level, 256>,
}

impl MockPin {
    pub fn new() -> Self {
        Self {
            level: Level::Low,
            configured: false,
            history: heapless::Vec::new(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn history(&self) -> &[Level] {
        &self.history
    }

    pub fn write_count(&self) -> usize {
        self.history.len()
    }
}

impl OutputLine for MockPin {
    fn configure_as_output(&mut self) {
        self.configured = true;
    }

    fn write(&mut self, level: Level) {
        self.level = level;
        let _ = self.history.push(level);
    }

    fn read(&mut self) -> Level {
        self.level
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Ticks the default timing needs for `millis` to elapse
pub fn ticks(millis: u32) -> u32 {
    Timing::DEFAULT.ticks_for(millis)
}

/// Blinker with default configuration and queue capacity
pub fn default_blinker() -> BlinkCode<MockPin> {
    BlinkCode::new(MockPin::new())
}

/// Ticks until the machine is idle, returning how many ticks that took
pub fn run_until_idle<const N: usize>(blinker: &mut BlinkCode<MockPin, N>, max_ticks: u32) -> u32 {
    for tick in 1..=max_ticks {
        if blinker.tick() == BlinkState::Idle {
            return tick;
        }
    }
    panic!("blinker still active after {} ticks", max_ticks);
}

/// Ticks until the state changes, returning how many ticks that took
pub fn ticks_until_change<const N: usize>(
    blinker: &mut BlinkCode<MockPin, N>,
    max_ticks: u32,
) -> (u32, BlinkState) {
    let start = blinker.current_state();
    for tick in 1..=max_ticks {
        let state = blinker.tick();
        if state != start {
            return (tick, state);
        }
    }
    panic!("state {:?} unchanged after {} ticks", start, max_ticks);
}
