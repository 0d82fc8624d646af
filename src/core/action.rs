//! Recorded actions for the table's append-only history.
//!
//! The engine records every accepted operation in order. The history backs
//! the strict-ordering guarantee in tests and lets a host replay or debug a
//! round; it is never consulted for rule decisions.

use serde::{Deserialize, Serialize};

use super::seat::SeatId;
use crate::cards::{Card, Color};

/// An accepted operation, as recorded in history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordedAction {
    /// A card was played to the discard pile.
    Played(Card),
    /// One card was drawn. `forced` distinguishes owed draws from voluntary ones.
    Drew { forced: bool },
    /// A color was chosen for a wild card.
    ChoseColor(Color),
    /// The seat announced it was down to one card.
    AnnouncedLowCard,
}

/// A recorded action with the seat that took it and its global ordinal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: SeatId,
    pub action: RecordedAction,
    /// Position in the round's accepted-action order, starting at 0.
    pub ordinal: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(seat: SeatId, action: RecordedAction, ordinal: u32) -> Self {
        Self {
            seat,
            action,
            ordinal,
        }
    }
}
