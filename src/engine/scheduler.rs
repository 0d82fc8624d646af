//! Presentation-paced scheduling of computer-seat turns.
//!
//! Computer-seat cascades are an explicit FIFO queue consumed by one loop
//! (`TurnEngine::step`), not nested delayed callbacks. The presentation
//! delay rides along on each task as metadata for the host to honor between
//! steps; it is never correctness-relevant, and tests run with a zero delay.
//! Staleness is handled at dequeue time: the engine re-validates that the
//! task's seat is still the unblocked active seat before acting.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::trace;

use crate::core::SeatId;

/// A scheduled computer-seat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    /// The seat expected to act.
    pub seat: SeatId,
    /// Suggested pause before running the task. Observability only.
    pub delay: Duration,
}

/// FIFO queue of pending computer-seat turns.
#[derive(Clone, Debug)]
pub struct TurnScheduler {
    queue: VecDeque<ScheduledTask>,
    presentation_delay: Duration,
}

impl TurnScheduler {
    /// Create a scheduler with the given presentation delay.
    #[must_use]
    pub fn new(presentation_delay: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            presentation_delay,
        }
    }

    /// Enqueue a turn for `seat`.
    pub fn schedule_turn(&mut self, seat: SeatId) {
        trace!(?seat, "computer turn scheduled");
        self.queue.push_back(ScheduledTask {
            seat,
            delay: self.presentation_delay,
        });
    }

    /// Dequeue the oldest task.
    pub fn pop(&mut self) -> Option<ScheduledTask> {
        self.queue.pop_front()
    }

    /// The oldest task, without dequeuing it.
    #[must_use]
    pub fn peek(&self) -> Option<&ScheduledTask> {
        self.queue.front()
    }

    /// Number of queued tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no tasks are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop all queued tasks.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl Default for TurnScheduler {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}
