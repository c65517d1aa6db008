//! Notification delivery
//!
//! The ledger builds [`Notification`] values and passes them to a
//! [`NotificationSink`]. Delivery is best-effort: a sink never reports
//! failure back to the component that raised the event.
//!
//! # Sinks
//!
//! - `Vec<Notification>`: collects events in memory
//! - [`ConsoleSink`]: writes one human-readable line per event
//! - [`JournalSink`]: appends events to a JSONL journal file
//! - [`Tee`]: fans one event out to two sinks
//! - [`NullSink`]: discards everything

mod console;
mod journal;

pub use console::ConsoleSink;
pub use journal::{JournalEntry, JournalSink};

use crate::models::Notification;

/// Receives notifications raised by the ledger
pub trait NotificationSink {
    /// Deliver one event
    fn deliver(&mut self, notification: &Notification);
}

impl NotificationSink for Vec<Notification> {
    fn deliver(&mut self, notification: &Notification) {
        self.push(notification.clone());
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for &mut S {
    fn deliver(&mut self, notification: &Notification) {
        (**self).deliver(notification);
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for Box<S> {
    fn deliver(&mut self, notification: &Notification) {
        (**self).deliver(notification);
    }
}

/// Sink that drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn deliver(&mut self, _notification: &Notification) {}
}

/// Delivers each event to two sinks, first `A` then `B`
#[derive(Debug)]
pub struct Tee<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: NotificationSink, B: NotificationSink> NotificationSink for Tee<A, B> {
    fn deliver(&mut self, notification: &Notification) {
        self.first.deliver(notification);
        self.second.deliver(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_collects() {
        let mut events: Vec<Notification> = Vec::new();
        events.deliver(&Notification::new(500, "Income added: 1.00"));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 500);
    }

    #[test]
    fn test_tee_delivers_to_both() {
        let mut tee = Tee::new(Vec::new(), Vec::new());
        tee.deliver(&Notification::new(600, "Profile updated successfully!"));
        assert_eq!(tee.first.len(), 1);
        assert_eq!(tee.second.len(), 1);
    }

    #[test]
    fn test_dyn_sink_through_reference() {
        let mut events: Vec<Notification> = Vec::new();
        {
            let sink: &mut dyn NotificationSink = &mut events;
            sink.deliver(&Notification::new(700, "New investment added: PPF"));
        }
        assert_eq!(events[0].message, "New investment added: PPF");
    }

    #[test]
    fn test_null_sink_discards() {
        let mut sink = NullSink;
        sink.deliver(&Notification::new(1, "ignored"));
    }
}
