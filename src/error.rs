//! Error taxonomy for the public operations.
//!
//! Every rejection is a complete no-op: validation runs before any mutation,
//! so a returned error guarantees the table state is unchanged. Deck
//! exhaustion is not represented here; it recovers automatically by
//! reshuffling the discard pile.

use thiserror::Error;

use crate::core::SeatId;

/// Why a public operation was rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The card fails the legality predicate.
    #[error("card cannot legally be played")]
    InvalidPlay,

    /// A draw was attempted while a legal move exists and none is owed.
    #[error("drawing is not permitted while a legal move exists")]
    InvalidDraw,

    /// The seat may not act in the current state.
    #[error("seat {0:?} may not act now")]
    OutOfTurn(SeatId),

    /// `choose_color` was called with no wild play suspended.
    #[error("no color choice is pending")]
    NoColorChoicePending,

    /// The seat index names no seat at this table.
    #[error("no seat {0:?} at this table")]
    UnknownSeat(SeatId),

    /// The hand index names no card.
    #[error("no card at hand index {0}")]
    UnknownCard(usize),

    /// The round has ended; only a restart (a fresh state) continues play.
    #[error("the round has ended")]
    RoundOver,
}
