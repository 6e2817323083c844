use crate::Timestamp;

use super::ScheduledEvent;

const TYPICAL_PENDING_EVENT_COUNT: usize = 16;

/// The time-ordered queue of pending automation events for one parameter
///
/// Events are kept ascending by start time. Callers schedule non-overlapping
/// events in time order (the monotonic scheduling contract of an audio
/// clock), so the front of the queue is always the next event to govern the
/// parameter.
pub(crate) struct EventTimeline {
    events: Vec<ScheduledEvent>,
}

impl EventTimeline {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(TYPICAL_PENDING_EVENT_COUNT),
        }
    }

    /// Insert an already validated and anchored event in time order
    pub fn insert(&mut self, event: ScheduledEvent) {
        self.events.push(event);
        self.events.sort_by_key(ScheduledEvent::start_time);
    }

    /// Discard every front event whose end time has passed
    ///
    /// An open-ended exponential approach has no end time, but it is
    /// discarded once the event after it has started (it has been
    /// superseded). Returns the terminal value of the last event discarded,
    /// which is the constant the parameter holds from that event's end
    /// onwards.
    pub fn retire_expired(&mut self, time: Timestamp) -> Option<f64> {
        let mut terminal_value = None;

        while let Some(front) = self.events.first() {
            let superseded = self
                .events
                .get(1)
                .is_some_and(|next| next.start_time() <= time);

            match front.end_time() {
                Some(end_time) if end_time <= time => {
                    terminal_value = Some(front.terminal_value());
                    self.events.remove(0);
                }
                None if superseded => {
                    terminal_value = Some(front.terminal_value());
                    self.events.remove(0);
                }
                _ => break,
            }
        }

        terminal_value
    }

    /// The event governing the parameter at `time`, if any
    pub fn governing(&self, time: Timestamp) -> Option<&ScheduledEvent> {
        self.events.first().filter(|event| event.start_time() <= time)
    }

    /// Remove the front event regardless of its end time
    ///
    /// Used when an open-ended exponential approach has converged onto its
    /// target.
    pub fn retire_front(&mut self) -> Option<f64> {
        if self.events.is_empty() {
            return None;
        }

        Some(self.events.remove(0).terminal_value())
    }

    /// The start time of the next pending event
    pub fn next_activation(&self) -> Option<Timestamp> {
        self.events.first().map(ScheduledEvent::start_time)
    }

    /// The start time of the event after the front one
    ///
    /// This bounds how long the front event can stay governing: an
    /// open-ended approach runs until the event behind it starts.
    pub fn upcoming_activation(&self) -> Option<Timestamp> {
        self.events.get(1).map(ScheduledEvent::start_time)
    }

    /// The most recently ending pending event
    pub fn last(&self) -> Option<&ScheduledEvent> {
        self.events.last()
    }

    /// Discard every pending event
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
