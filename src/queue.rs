//! Fixed-capacity FIFO of blink commands.

use crate::types::{BlinkCommand, BlinkError};
use heapless::Deque;

/// Capacity of the reference platform's command queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// Bounded FIFO of [`BlinkCommand`]s.
///
/// When full, new commands are rejected with [`BlinkError::Full`]; nothing is
/// overwritten or dropped. Commands are stored by value, and slots outside the
/// live range are unreachable.
///
/// # Type Parameters
/// * `N` - Maximum number of commands held at once
#[derive(Debug)]
pub struct CommandQueue<const N: usize> {
    commands: Deque<BlinkCommand, N>,
    full: bool,
}

impl<const N: usize> CommandQueue<N> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            commands: Deque::new(),
            full: false,
        }
    }

    /// Appends a command at the back.
    ///
    /// No range validation happens here.
    pub fn enqueue(&mut self, pulse_count: u16, delay_ms: u32) -> Result<(), BlinkError> {
        if self.full {
            return Err(BlinkError::Full);
        }

        self.commands
            .push_back(BlinkCommand::new(pulse_count, delay_ms))
            .map_err(|_| BlinkError::Full)?;
        self.full = self.commands.is_full();
        self.check_invariants();
        Ok(())
    }

    /// Removes and returns the front command, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<BlinkCommand> {
        let command = self.commands.pop_front()?;
        self.full = false;
        self.check_invariants();
        Some(command)
    }

    /// The command at the front, without removing it.
    pub fn front(&self) -> Option<&BlinkCommand> {
        self.commands.front()
    }

    /// Drops every command and resets the bookkeeping.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.full = false;
        self.check_invariants();
    }

    /// Current occupancy.
    pub fn size(&self) -> usize {
        self.commands.len()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Iterates the queued commands front to back.
    pub fn iter(&self) -> impl Iterator<Item = &BlinkCommand> {
        self.commands.iter()
    }

    #[inline]
    fn check_invariants(&self) {
        debug_assert!(self.commands.len() <= N);
        debug_assert_eq!(self.full, self.commands.len() == N);
    }
}

impl<const N: usize> Default for CommandQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
