//! Portable bounded mailbox for `no_std` environments.
//!
//! Built on `critical-section` and `heapless::Deque`, so a GPIO interrupt
//! handler can publish button events while the main loop polls them at its
//! checkpoints. Publishing into a full mailbox evicts the oldest entry: the
//! most recent events always survive. With a capacity of one this is the
//! single-slot "latest transition wins" buffering of the key scanner.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::input::{ButtonEvent, InputSource};

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, interrupt-safe channel that keeps the newest values.
pub struct Channel<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Publish a value, evicting the oldest one if the channel is full.
    ///
    /// Returns the value that was dropped, if any.
    pub fn publish(&self, value: T) -> Option<T> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            let evicted = if queue.is_full() {
                queue.pop_front()
            } else {
                None
            };
            match queue.push_back(value) {
                Ok(()) => evicted,
                // Zero capacity: nothing can be stored
                Err(value) => Some(value),
            }
        })
    }

    /// Try to receive the oldest retained value.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of retained values
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`Channel`].
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    /// Publish a value, see [`Channel::publish`].
    pub fn publish(&self, value: T) -> Option<T> {
        self.channel.publish(value)
    }
}

/// A receiver handle for a [`Channel`].
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    /// Try to receive a value from the channel.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }
}

/// Button mailbox holding up to `SIZE` of the newest events
pub type ButtonChannel<const SIZE: usize> = Channel<ButtonEvent, SIZE>;

/// Single-slot button mailbox: only the latest transition is kept
pub type LatestButtonChannel = ButtonChannel<1>;

/// Publishing side of a [`ButtonChannel`], typically owned by an interrupt
pub type ButtonSender<'a, const SIZE: usize> = Sender<'a, ButtonEvent, SIZE>;

/// Polling side of a [`ButtonChannel`], handed to the scheduler
pub type ButtonReceiver<'a, const SIZE: usize> = Receiver<'a, ButtonEvent, SIZE>;

impl<const SIZE: usize> InputSource for Receiver<'_, ButtonEvent, SIZE> {
    fn poll_event(&mut self) -> Option<ButtonEvent> {
        self.try_receive().ok()
    }
}
