//! Blink-code context with configuration, submission and introspection.
//!
//! Provides [`BlinkCode`], which owns the output pin, the command queue and the
//! state machine for a single LED. Drive it by calling [`BlinkCode::tick`] once
//! per configured tick interval from your main loop.

use crate::command::BlinkAction;
use crate::config::{DEFAULT_DELAY_MS, LedConfig};
use crate::log::debug;
use crate::machine::{BlinkMachine, BlinkState};
use crate::pin::{Led, OutputLine, PinAction};
use crate::queue::{CommandQueue, DEFAULT_QUEUE_CAPACITY};
use crate::types::{BlinkError, validate_submission};

/// Signals small integers as countable blinks on a single LED.
///
/// Every operation is non-blocking. The context is not reentrant and must be
/// driven from one logical thread.
///
/// # Type Parameters
/// * `P` - Output line implementation
/// * `N` - Command queue capacity
pub struct BlinkCode<P: OutputLine, const N: usize = DEFAULT_QUEUE_CAPACITY> {
    led: Led<P>,
    config: LedConfig,
    queue: CommandQueue<N>,
    machine: BlinkMachine,
}

impl<P: OutputLine, const N: usize> BlinkCode<P, N> {
    /// Creates an idle blinker with the default configuration.
    ///
    /// The pin is configured as output and driven to its inactive level.
    pub fn new(pin: P) -> Self {
        Self::from_validated(pin, LedConfig::DEFAULT)
    }

    /// Creates a blinker and applies `config`.
    ///
    /// # Errors
    /// * `InvalidConfig` - The configuration failed validation
    pub fn with_config(pin: P, config: LedConfig) -> Result<Self, BlinkError> {
        config.validate()?;
        Ok(Self::from_validated(pin, config))
    }

    // The pin sees exactly one write, at the inactive level of `config`.
    fn from_validated(pin: P, config: LedConfig) -> Self {
        let mut led = Led::new(pin, config.active_high);
        led.configure();
        led.off();

        Self {
            led,
            config,
            queue: CommandQueue::new(),
            machine: BlinkMachine::new(),
        }
    }

    /// Applies `config`, or the platform defaults when `None`.
    ///
    /// On success the pin is reconfigured and driven inactive, and the queue
    /// and state machine are reset. On failure nothing changes.
    ///
    /// # Errors
    /// * `InvalidConfig` - Pin out of range, default delay out of range, or a
    ///   zero timing constant
    pub fn initialize(&mut self, config: Option<LedConfig>) -> Result<(), BlinkError> {
        let config = config.unwrap_or_default();
        if let Err(err) = config.validate() {
            debug!("blink: rejected config: {}", err);
            return Err(err.into());
        }

        self.config = config;
        self.led.set_active_high(config.active_high);
        self.led.configure();
        self.led.off();
        self.queue.clear();
        self.machine.reset();
        Ok(())
    }

    /// Advances the state machine by one tick interval.
    ///
    /// Call this at the configured `timing.tick_interval_ms` cadence. Never
    /// blocks. Returns the state after the tick.
    pub fn tick(&mut self) -> BlinkState {
        self.machine
            .tick(&mut self.queue, &mut self.led, &self.config.timing)
    }

    /// Queues a train of `pulse_count` pulses separated by `delay_ms`.
    ///
    /// If the machine is idle the train starts right away and the pin turns
    /// on before this returns.
    ///
    /// # Errors
    /// * `InvalidArgument` - Count outside 1..=1000 or delay outside
    ///   10..=10000 ms (0 is not a default)
    /// * `Full` - The queue is at capacity
    pub fn submit(&mut self, pulse_count: u16, delay_ms: u32) -> Result<(), BlinkError> {
        if let Err(err) = validate_submission(pulse_count, delay_ms) {
            debug!("blink: rejected submission: {}", err);
            return Err(err.into());
        }

        self.queue.enqueue(pulse_count, delay_ms)?;
        self.machine.try_start(&self.queue, &mut self.led);
        Ok(())
    }

    /// Queues a train using the platform default delay of 250 ms.
    ///
    /// The configured `default_delay_ms` does not apply here.
    pub fn submit_simple(&mut self, pulse_count: u16) -> Result<(), BlinkError> {
        self.submit(pulse_count, DEFAULT_DELAY_MS)
    }

    /// Drives the pin directly, bypassing the queue and state machine.
    ///
    /// A train in progress keeps running and will overwrite the level on its
    /// next transition.
    pub fn set_pin_immediate(&mut self, action: PinAction) {
        self.led.apply(action);
    }

    pub fn led_on(&mut self) {
        self.set_pin_immediate(PinAction::On);
    }

    pub fn led_off(&mut self) {
        self.set_pin_immediate(PinAction::Off);
    }

    pub fn toggle(&mut self) {
        self.set_pin_immediate(PinAction::Toggle);
    }

    /// Abandons all queued commands and any train in progress.
    ///
    /// The machine is idle when this returns. The pin is left at its current
    /// level.
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.machine.reset();
    }

    /// Dispatches a [`BlinkAction`].
    pub fn handle_action(&mut self, action: BlinkAction) -> Result<(), BlinkError> {
        match action {
            BlinkAction::Submit {
                pulse_count,
                delay_ms,
            } => self.submit(pulse_count, delay_ms),
            BlinkAction::SubmitSimple(pulse_count) => self.submit_simple(pulse_count),
            BlinkAction::Pin(pin_action) => {
                self.set_pin_immediate(pin_action);
                Ok(())
            }
            BlinkAction::ClearQueue => {
                self.clear_queue();
                Ok(())
            }
        }
    }

    /// Returns the current state of the machine.
    pub fn current_state(&self) -> BlinkState {
        self.machine.state()
    }

    /// Returns true unless the machine is idle.
    pub fn is_active(&self) -> bool {
        self.machine.is_active()
    }

    /// Number of commands occupying the queue, including the one in flight.
    pub fn pending_count(&self) -> usize {
        self.queue.size()
    }

    pub fn config(&self) -> &LedConfig {
        &self.config
    }

    pub fn pin(&self) -> &P {
        self.led.pin()
    }

    /// Consumes the blinker and returns the pin.
    pub fn release(self) -> P {
        self.led.into_pin()
    }
}
