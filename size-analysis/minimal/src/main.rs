#![no_std]
#![no_main]

use blink_code::{BlinkAction, BlinkCode, Level, LedConfig, OutputLine, PinAction, Timing};
use cortex_m_rt::entry;
use panic_halt as _;

// ============================================================================
// Minimal Output Line
// ============================================================================

/// Output line that only remembers its level, for measuring library overhead
pub struct MinimalPin {
    level: Level,
}

impl OutputLine for MinimalPin {
    fn write(&mut self, level: Level) {
        self.level = core::hint::black_box(level);
    }

    fn read(&mut self) -> Level {
        self.level
    }
}

// ============================================================================
// Exercised API
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn exercise_blinker() {
    let config = LedConfig {
        timing: Timing {
            tick_interval_ms: 10,
            ..Timing::DEFAULT
        },
        ..LedConfig::DEFAULT
    };

    // Default capacity
    let blinker: Result<BlinkCode<MinimalPin>, _> =
        BlinkCode::with_config(MinimalPin { level: Level::Low }, config);
    if let Ok(mut blinker) = blinker {
        let _ = blinker.submit(3, 100);
        let _ = blinker.submit_simple(2);
        for _ in 0..64 {
            core::hint::black_box(blinker.tick());
        }
        blinker.set_pin_immediate(PinAction::Toggle);
        core::hint::black_box(blinker.pending_count());
        core::hint::black_box(blinker);
    }

    // Larger queue driven through actions
    let mut blinker = BlinkCode::<MinimalPin, 32>::new(MinimalPin { level: Level::Low });
    let _ = blinker.handle_action(BlinkAction::Submit {
        pulse_count: 42,
        delay_ms: 300,
    });
    let _ = blinker.handle_action(BlinkAction::ClearQueue);
    core::hint::black_box(blinker.is_active());
    core::hint::black_box(blinker);
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    exercise_blinker();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
