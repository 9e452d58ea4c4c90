//! `EventQueue` — time-ordered queue of scheduled events.
//!
//! Timed events are bucketed by trigger tick in a `BTreeMap`, so draining
//! everything due at `now` is one `split_off` rather than a scan of the whole
//! queue.  Within a bucket events keep enqueue order, which gives the drain
//! order: ascending trigger time, then enqueue order.  Events left behind keep
//! their relative order.
//!
//! Untimed events are held apart and handled per [`UntimedEventPolicy`].

use std::collections::BTreeMap;

use sy_core::{SimPolicy, Tick, UnknownEventPolicy, UntimedEventPolicy};
use tracing::{debug, warn};

use crate::{EventError, EventKind, EventResult, ScheduledEvent};

#[derive(Debug)]
pub struct EventQueue {
    timed: BTreeMap<Tick, Vec<ScheduledEvent>>,
    /// Untimed events under `Retain`.  Never drained.
    stuck: Vec<ScheduledEvent>,
    /// Untimed events under `FireImmediately`.  Drained first, at the next drain.
    immediate: Vec<ScheduledEvent>,
    /// Cached count of timed events.
    timed_len: usize,
    untimed_policy: UntimedEventPolicy,
    unknown_policy: UnknownEventPolicy,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::with_policy(&SimPolicy::default())
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: &SimPolicy) -> Self {
        Self {
            timed:          BTreeMap::new(),
            stuck:          Vec::new(),
            immediate:      Vec::new(),
            timed_len:      0,
            untimed_policy: policy.untimed_events,
            unknown_policy: policy.unknown_events,
        }
    }

    /// Add an event.
    ///
    /// Only the stricter policies can fail: `UnknownEventPolicy::Reject`
    /// refuses unrecognized types and known types missing their id field,
    /// and `UntimedEventPolicy::Reject` refuses
    /// events without a trigger time.  Nothing is queued on error.
    pub fn enqueue(&mut self, event: ScheduledEvent) -> EventResult<()> {
        if self.unknown_policy == UnknownEventPolicy::Reject {
            match &event.kind {
                EventKind::Unrecognized(_) => {
                    return Err(EventError::UnknownType(event.kind.type_name().to_owned()));
                }
                EventKind::Incomplete { event_type, field } => {
                    return Err(EventError::Malformed(format!(
                        "{event_type} requires a non-empty {field:?}"
                    )));
                }
                _ => {}
            }
        }

        match event.trigger {
            Some(tick) => {
                debug!(%event, "event queued");
                self.timed.entry(tick).or_default().push(event);
                self.timed_len += 1;
            }
            None => match self.untimed_policy {
                UntimedEventPolicy::Retain => {
                    warn!(%event, "event has no trigger time and will never fire");
                    self.stuck.push(event);
                }
                UntimedEventPolicy::Reject => {
                    return Err(EventError::MissingTriggerTime(event.kind.type_name().to_owned()));
                }
                UntimedEventPolicy::FireImmediately => {
                    debug!(%event, "untimed event queued to fire at next drain");
                    self.immediate.push(event);
                }
            },
        }
        Ok(())
    }

    /// Remove and return every event due at `now` (trigger <= `now`), plus any
    /// untimed events queued to fire immediately.
    ///
    /// Immediate events come first, then timed events by ascending trigger
    /// and enqueue order.
    pub fn drain_due(&mut self, now: Tick) -> Vec<ScheduledEvent> {
        let mut due = std::mem::take(&mut self.immediate);

        let later = match now.0.checked_add(1) {
            Some(next) => self.timed.split_off(&Tick(next)),
            None       => BTreeMap::new(),
        };
        let ready = std::mem::replace(&mut self.timed, later);
        for (_, bucket) in ready {
            self.timed_len -= bucket.len();
            due.extend(bucket);
        }
        due
    }

    /// The earliest trigger among queued timed events.
    pub fn next_trigger(&self) -> Option<Tick> {
        self.timed.keys().next().copied()
    }

    /// All queued events, including untimed ones that will never fire.
    pub fn len(&self) -> usize {
        self.timed_len + self.stuck.len() + self.immediate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Untimed events held under `Retain`.
    pub fn untimed_len(&self) -> usize {
        self.stuck.len()
    }

    /// Queued events in drain order, followed by the untimed ones.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduledEvent> {
        self.immediate
            .iter()
            .chain(self.timed.values().flatten())
            .chain(self.stuck.iter())
    }
}
