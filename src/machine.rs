//! Tick-driven blink state machine.
//!
//! The machine renders one command at a time. The command being rendered
//! stays at the front of the queue for the whole train and is only dequeued
//! once its last pulse ends, so new submissions can never reuse its slot.

use crate::log::trace;
use crate::pin::{Led, OutputLine};
use crate::queue::CommandQueue;
use crate::timing::{TickTimer, Timing};

/// The current state of the blink machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkState {
    /// Nothing to render.
    Idle,
    /// Pulse in progress. Pin is active.
    On,
    /// Between two pulses of a train. Pin is inactive.
    Off,
    /// Gap after a finished train. Pin keeps its last level.
    Wait,
}

/// Renders queued commands as pulse trains.
#[derive(Debug, Clone)]
pub struct BlinkMachine {
    state: BlinkState,
    state_timer: TickTimer,
    pulse_timer: TickTimer,
    pulse_phase: u16,
}

impl BlinkMachine {
    pub const fn new() -> Self {
        Self {
            state: BlinkState::Idle,
            state_timer: TickTimer::new(),
            pulse_timer: TickTimer::new(),
            pulse_phase: 0,
        }
    }

    pub fn state(&self) -> BlinkState {
        self.state
    }

    /// Pulses completed so far in the current train.
    pub fn pulse_phase(&self) -> u16 {
        self.pulse_phase
    }

    /// Returns true while a train is being rendered or its gap is running.
    pub fn is_active(&self) -> bool {
        self.state != BlinkState::Idle
    }

    /// Drops back to `Idle` without touching the pin.
    pub fn reset(&mut self) {
        self.state = BlinkState::Idle;
        self.state_timer.reset();
        self.pulse_timer.reset();
        self.pulse_phase = 0;
    }

    /// Starts the train at the front of the queue if the machine is idle.
    ///
    /// Returns true if a train was started.
    pub fn try_start<P: OutputLine, const N: usize>(
        &mut self,
        queue: &CommandQueue<N>,
        led: &mut Led<P>,
    ) -> bool {
        if self.state != BlinkState::Idle || queue.front().is_none() {
            return false;
        }

        self.begin_train(led);
        true
    }

    /// Advances the machine by one tick interval.
    pub fn tick<P: OutputLine, const N: usize>(
        &mut self,
        queue: &mut CommandQueue<N>,
        led: &mut Led<P>,
        timing: &Timing,
    ) -> BlinkState {
        match self.state {
            BlinkState::Idle => {
                self.try_start(queue, led);
            }
            BlinkState::On => {
                let Some(command) = queue.front().copied() else {
                    return self.fault();
                };

                if self.pulse_timer.advance(timing.tick_interval_ms, timing.pulse_width_ms) {
                    self.enter(BlinkState::Off, led);
                    self.pulse_timer.reset();
                    self.pulse_phase = self.pulse_phase.saturating_add(1);

                    if command.is_complete(self.pulse_phase) {
                        queue.dequeue();
                        self.enter(BlinkState::Wait, led);
                        self.state_timer.reset();
                    }
                }
            }
            BlinkState::Off => {
                let Some(command) = queue.front().copied() else {
                    return self.fault();
                };

                if self
                    .pulse_timer
                    .advance(timing.tick_interval_ms, command.inter_pulse_delay_ms)
                {
                    self.enter(BlinkState::On, led);
                    self.pulse_timer.reset();
                }
            }
            BlinkState::Wait => {
                if self.state_timer.advance(timing.tick_interval_ms, timing.command_gap_ms) {
                    if queue.front().is_some() {
                        self.begin_train(led);
                    } else {
                        self.enter(BlinkState::Idle, led);
                        self.state_timer.reset();
                    }
                }
            }
        }

        self.state
    }

    fn begin_train<P: OutputLine>(&mut self, led: &mut Led<P>) {
        self.pulse_phase = 0;
        self.pulse_timer.reset();
        self.state_timer.reset();
        self.enter(BlinkState::On, led);
    }

    // On/Off without a command at the front means the queue was emptied
    // under the machine.
    fn fault(&mut self) -> BlinkState {
        trace!("blink: no command for {}, forcing idle", self.state);
        self.state = BlinkState::Idle;
        self.state
    }

    fn enter<P: OutputLine>(&mut self, state: BlinkState, led: &mut Led<P>) {
        trace!("blink: {} -> {}", self.state, state);
        self.state = state;

        match state {
            BlinkState::On => led.on(),
            BlinkState::Off => led.off(),
            BlinkState::Idle | BlinkState::Wait => {}
        }
    }
}

impl Default for BlinkMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pin::Level;

    struct LevelPin {
        level: Level,
        writes: usize,
    }

    impl OutputLine for LevelPin {
        fn write(&mut self, level: Level) {
            self.level = level;
            self.writes += 1;
        }

        fn read(&mut self) -> Level {
            self.level
        }
    }

    fn setup() -> (BlinkMachine, CommandQueue<4>, Led<LevelPin>) {
        let pin = LevelPin {
            level: Level::Low,
            writes: 0,
        };
        (BlinkMachine::new(), CommandQueue::new(), Led::new(pin, true))
    }

    #[test]
    fn idle_tick_starts_queued_train() {
        let (mut machine, mut queue, mut led) = setup();
        queue.enqueue(2, 50).unwrap();

        let state = machine.tick(&mut queue, &mut led, &Timing::DEFAULT);
        assert_eq!(state, BlinkState::On);
        assert_eq!(led.pin().level, Level::High);
        assert_eq!(queue.size(), 1);
    }

    #[test]
    fn idle_tick_with_empty_queue_stays_idle() {
        let (mut machine, mut queue, mut led) = setup();
        for _ in 0..10 {
            assert_eq!(machine.tick(&mut queue, &mut led, &Timing::DEFAULT), BlinkState::Idle);
        }
        assert_eq!(led.pin().writes, 0);
    }

    #[test]
    fn single_pulse_goes_straight_to_wait() {
        let (mut machine, mut queue, mut led) = setup();
        queue.enqueue(1, 10).unwrap();
        assert!(machine.try_start(&queue, &mut led));

        for _ in 0..7 {
            assert_eq!(machine.tick(&mut queue, &mut led, &Timing::DEFAULT), BlinkState::On);
        }
        assert_eq!(machine.tick(&mut queue, &mut led, &Timing::DEFAULT), BlinkState::Wait);
        assert_eq!(machine.pulse_phase(), 1);
        assert_eq!(led.pin().level, Level::Low);
        assert!(queue.is_empty());
    }

    #[test]
    fn wait_starts_next_train_with_fresh_phase() {
        let (mut machine, mut queue, mut led) = setup();
        queue.enqueue(1, 10).unwrap();
        queue.enqueue(1, 10).unwrap();
        machine.try_start(&queue, &mut led);

        for _ in 0..8 {
            machine.tick(&mut queue, &mut led, &Timing::DEFAULT);
        }
        assert_eq!(machine.state(), BlinkState::Wait);

        for _ in 0..7 {
            assert_eq!(machine.tick(&mut queue, &mut led, &Timing::DEFAULT), BlinkState::Wait);
        }
        assert_eq!(machine.tick(&mut queue, &mut led, &Timing::DEFAULT), BlinkState::On);
        assert_eq!(machine.pulse_phase(), 0);
        assert_eq!(led.pin().level, Level::High);
    }

    #[test]
    fn try_start_ignored_while_busy() {
        let (mut machine, mut queue, mut led) = setup();
        queue.enqueue(3, 10).unwrap();
        assert!(machine.try_start(&queue, &mut led));
        assert!(!machine.try_start(&queue, &mut led));
    }

    #[test]
    fn emptied_queue_forces_idle() {
        let (mut machine, mut queue, mut led) = setup();
        queue.enqueue(3, 10).unwrap();
        machine.try_start(&queue, &mut led);
        let writes = led.pin().writes;

        queue.clear();
        assert_eq!(machine.tick(&mut queue, &mut led, &Timing::DEFAULT), BlinkState::Idle);
        assert_eq!(led.pin().writes, writes);
    }
}
