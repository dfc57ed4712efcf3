//! Command-based control for the blinker.

use crate::pin::PinAction;

/// Requests that can be routed to a [`BlinkCode`](crate::BlinkCode).
///
/// Useful when producers run in a different task than the loop that owns the
/// pin and calls `tick()`: send these over a channel and dispatch them with
/// `handle_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkAction {
    /// Queue a train with an explicit delay.
    Submit { pulse_count: u16, delay_ms: u32 },
    /// Queue a train with the platform default delay.
    SubmitSimple(u16),
    /// Drive the pin directly.
    Pin(PinAction),
    /// Abandon everything queued and in flight.
    ClearQueue,
}
