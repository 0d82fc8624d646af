//! Seats: participant slots around the table.
//!
//! Seat 0 is always the human seat; every other seat is computer-controlled.
//! A `SeatId` is an index into `TableState::seats`, kept as a newtype so seat
//! arithmetic (rotation steps, wraparound) stays in one place.

use serde::{Deserialize, Serialize};

use crate::cards::Hand;

/// Identifier for a seat (index into the seat list).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// The human seat.
    pub const HUMAN: SeatId = SeatId(0);

    /// Create a seat ID.
    #[must_use]
    pub fn new(index: u8) -> Self {
        Self(index)
    }

    /// Index into the seat list.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seat IDs for a table of `count` seats.
    pub fn all(count: usize) -> impl Iterator<Item = SeatId> {
        (0..count).map(|i| SeatId(i as u8))
    }
}

/// Who controls a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    Human,
    Computer,
}

/// Signed step direction for turn rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    /// Ascending seat indices (+1).
    Forward,
    /// Descending seat indices (-1).
    Backward,
}

impl Rotation {
    /// The signed step this direction applies to a seat index.
    #[must_use]
    pub fn step(self) -> i8 {
        match self {
            Rotation::Forward => 1,
            Rotation::Backward => -1,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Rotation::Forward => Rotation::Backward,
            Rotation::Backward => Rotation::Forward,
        }
    }
}

/// A participant slot: hand, controller, and the low-card announcement flag.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub hand: Hand,
    pub controller: Controller,
    pub has_announced_low_card: bool,
}

impl Seat {
    /// Create an empty-handed seat.
    #[must_use]
    pub fn new(id: SeatId, controller: Controller) -> Self {
        Self {
            id,
            hand: Hand::new(),
            controller,
            has_announced_low_card: false,
        }
    }

    /// Whether this seat is computer-controlled.
    #[must_use]
    pub fn is_computer(&self) -> bool {
        self.controller == Controller::Computer
    }
}
