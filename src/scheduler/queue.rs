// SPDX-License-Identifier: MPL-2.0
//! Ordered backlog of cards awaiting a slot.
//!
//! The queue is deliberately asymmetric: plain messages come out strictly
//! FIFO, while urgent ones can be pulled out of order by a single forward
//! scan. With at most one preemption applied per tick and a handful of
//! pending messages at any time, a priority heap would buy nothing.

use std::collections::VecDeque;

use super::message::Message;

#[derive(Debug, Default)]
pub struct NotificationQueue {
    messages: VecDeque<Message>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the back. O(1).
    pub fn push(&mut self, message: Message) {
        self.messages.push_back(message);
    }

    /// Removes and returns the head of the queue.
    pub fn pop_front(&mut self) -> Option<Message> {
        self.messages.pop_front()
    }

    /// Removes and returns the first urgent message, preserving the relative
    /// order of everything else.
    pub fn extract_first_urgent(&mut self) -> Option<Message> {
        let pos = self.messages.iter().position(Message::urgent)?;
        self.messages.remove(pos)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Front-to-back view of the pending messages.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulerConfig;
    use crate::i18n::LocalizedText;
    use crate::scheduler::message::MessageKind;

    fn message(tag: &str, urgent: bool) -> Message {
        Message::new(
            MessageKind::Alert,
            LocalizedText::new(tag, tag),
            urgent,
            None,
            None,
            &SchedulerConfig::default(),
        )
    }

    fn tags(queue: &NotificationQueue) -> Vec<String> {
        queue
            .iter()
            .map(|m| m.content().get(crate::i18n::Language::English).to_string())
            .collect()
    }

    #[test]
    fn pop_front_is_fifo() {
        let mut queue = NotificationQueue::new();
        queue.push(message("a", false));
        queue.push(message("b", false));
        queue.push(message("c", false));

        let head = queue.pop_front().expect("queue should not be empty");
        assert_eq!(head.content().get(crate::i18n::Language::English), "a");
        assert_eq!(tags(&queue), vec!["b", "c"]);
    }

    #[test]
    fn pop_front_on_empty_returns_none() {
        let mut queue = NotificationQueue::new();
        assert!(queue.pop_front().is_none());
    }

    #[test]
    fn extract_first_urgent_skips_plain_messages() {
        let mut queue = NotificationQueue::new();
        queue.push(message("a", false));
        queue.push(message("b", false));
        queue.push(message("u1", true));
        queue.push(message("c", false));
        queue.push(message("u2", true));

        let urgent = queue.extract_first_urgent().expect("u1 should be found");
        assert_eq!(urgent.content().get(crate::i18n::Language::English), "u1");
        // Relative order of the rest is untouched, including the later urgent.
        assert_eq!(tags(&queue), vec!["a", "b", "c", "u2"]);
    }

    #[test]
    fn extract_first_urgent_returns_none_without_urgents() {
        let mut queue = NotificationQueue::new();
        queue.push(message("a", false));
        assert!(queue.extract_first_urgent().is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn clear_empties_the_queue() {
        let mut queue = NotificationQueue::new();
        queue.push(message("a", false));
        queue.clear();
        assert!(queue.is_empty());
    }
}
