#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`BlinkCode`**: Owns one LED and renders queued blink counts on it
//! - **`BlinkCommand`**: A requested pulse train (count + inter-pulse delay)
//! - **`CommandQueue`**: Fixed-capacity FIFO feeding the state machine
//! - **`BlinkMachine`**: Tick-driven Idle/On/Off/Wait renderer
//! - **`BlinkState`**: Current state of the renderer
//! - **`LedConfig`** / **`Timing`**: Pin, polarity, default delay and platform timing
//! - **`OutputLine`**: Trait to implement for your GPIO (or wrap an
//!   `embedded-hal` pin in `HalPin`)
//! - **`BlinkAction`**: Requests that can be routed to a blinker
//!
//! Time is counted in ticks. Each `tick()` call accounts for
//! `Timing::tick_interval_ms`, so call it at that cadence.

pub mod blinker;
pub mod command;
pub mod config;
mod log;
pub mod machine;
pub mod pin;
pub mod queue;
pub mod timing;
pub mod types;

pub use blinker::BlinkCode;
pub use command::BlinkAction;
pub use config::{DEFAULT_DELAY_MS, DEFAULT_PIN, LedConfig, MAX_PIN};
pub use machine::{BlinkMachine, BlinkState};
pub use pin::{HalPin, Led, Level, OutputLine, PinAction};
pub use queue::{CommandQueue, DEFAULT_QUEUE_CAPACITY};
pub use timing::{TickTimer, Timing};
pub use types::{
    ArgumentError, BlinkCommand, BlinkError, ConfigError, MAX_DELAY_MS, MAX_PULSE_COUNT,
    MIN_DELAY_MS, MIN_PULSE_COUNT,
};
