//! The canonical table state.
//!
//! One `TableState` instance exists per round and every rule decision reads
//! from it. Mutation goes through `TurnEngine`; the methods here are the
//! primitive moves (seat arithmetic, pile transfers, history recording) that
//! the engine and effect resolution compose.
//!
//! The turn machine is a single explicit [`Phase`] enum plus the optional
//! [`PendingDraw`]; the legacy boolean queries (`is_drawing_cards`,
//! `is_waiting_for_color_choice`) are derived from it rather than stored as
//! independently-settable flags.

use im::Vector;

use super::action::{ActionRecord, RecordedAction};
use super::rng::GameRng;
use super::seat::{Rotation, Seat, SeatId};
use crate::cards::{Card, Color};

/// The turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The active seat may play or draw.
    AwaitingPlay,
    /// The human seat owes forced draws; all plays are blocked.
    AwaitingHumanForcedDraw,
    /// A human wild play is suspended on a color choice.
    AwaitingColorChoice {
        /// Whether the suspended card was a WildDrawFour, in which case the
        /// forced draw begins once the color arrives.
        wild_draw_four: bool,
    },
    /// Terminal until an external restart builds a fresh `TableState`.
    RoundEnded,
}

/// A multi-card draw obligation imposed on the human seat.
///
/// At most one is outstanding at any time. `restore` is the seat that must
/// become active again once the owed draws complete; it is recorded whenever
/// the obligation temporarily overrides the active seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingDraw {
    /// Draws still owed.
    pub owed: u8,
    /// The obligated seat.
    pub target: SeatId,
    /// Seat to restore as active when `owed` reaches zero.
    pub restore: Option<SeatId>,
}

/// The single shared game record.
///
/// Piles are stacks with the top at the end of the vec. `active_color` is
/// always a base color even when the top discard is wild.
#[derive(Clone, Debug)]
pub struct TableState {
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub seats: Vec<Seat>,
    pub active_seat: SeatId,
    pub rotation: Rotation,
    pub active_color: Color,
    pub round_winner: Option<SeatId>,
    pub phase: Phase,
    pub pending_draw: Option<PendingDraw>,
    /// Append-only record of accepted operations, in acceptance order.
    pub history: Vector<ActionRecord>,
    pub rng: GameRng,
}

impl TableState {
    /// Create a bare state: given seats, empty piles, seat 0 active, forward
    /// rotation. Callers (the game builder, tests) fill in piles and color.
    #[must_use]
    pub fn new(seats: Vec<Seat>, seed: u64) -> Self {
        assert!(
            (2..=4).contains(&seats.len()),
            "table seats 2-4 participants"
        );
        Self {
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
            seats,
            active_seat: SeatId::HUMAN,
            rotation: Rotation::Forward,
            active_color: Color::Red,
            round_winner: None,
            phase: Phase::AwaitingPlay,
            pending_draw: None,
            history: Vector::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Number of seats at the table.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Get a seat.
    #[must_use]
    pub fn seat(&self, id: SeatId) -> &Seat {
        &self.seats[id.index()]
    }

    /// Get a mutable seat.
    pub fn seat_mut(&mut self, id: SeatId) -> &mut Seat {
        &mut self.seats[id.index()]
    }

    /// Whether `id` names a seat at this table.
    #[must_use]
    pub fn has_seat(&self, id: SeatId) -> bool {
        id.index() < self.seats.len()
    }

    /// The top card of the discard pile, if any.
    #[must_use]
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    // === Seat arithmetic ===

    /// The seat `steps` rotation steps away from `from` under the current
    /// direction, wrapping around the table.
    #[must_use]
    pub fn seat_at_offset(&self, from: SeatId, steps: i8) -> SeatId {
        let count = self.seat_count() as i16;
        let delta = i16::from(steps) * i16::from(self.rotation.step());
        let index = (from.index() as i16 + delta).rem_euclid(count);
        SeatId::new(index as u8)
    }

    /// Move the active seat one rotation step.
    pub fn advance_active_seat(&mut self) {
        self.active_seat = self.seat_at_offset(self.active_seat, 1);
    }

    // === Pile transfers ===

    /// Take the top card of the draw pile, reshuffling the discard pile
    /// (minus its top card) into a fresh draw pile if it is empty.
    ///
    /// Panics if both piles are empty; card conservation makes that state
    /// unreachable, so hitting it is a programming error.
    pub fn draw_from_pile(&mut self) -> Card {
        if self.draw_pile.is_empty() {
            self.reshuffle_discard_into_draw();
        }
        self.draw_pile
            .pop()
            .expect("both piles empty while a draw is required")
    }

    /// Move every discard except the top card into a freshly shuffled draw
    /// pile. The top card stays put so legality still has a reference.
    fn reshuffle_discard_into_draw(&mut self) {
        if self.discard_pile.len() <= 1 {
            return;
        }
        let top = self.discard_pile.pop().expect("checked non-empty");
        self.draw_pile.append(&mut self.discard_pile);
        self.discard_pile.push(top);
        self.rng.shuffle(&mut self.draw_pile);
    }

    // === Derived queries ===

    /// Whether the human seat is mid forced-draw.
    #[must_use]
    pub fn is_drawing_cards(&self) -> bool {
        self.phase == Phase::AwaitingHumanForcedDraw
    }

    /// Whether a human wild play is suspended on a color choice.
    #[must_use]
    pub fn is_waiting_for_color_choice(&self) -> bool {
        matches!(self.phase, Phase::AwaitingColorChoice { .. })
    }

    /// Total cards across both piles and every hand. Always 108 for a state
    /// built from the standard deck.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.seats.iter().map(|s| s.hand.len()).sum::<usize>()
    }

    // === History ===

    /// Append an accepted operation to the history.
    pub fn record(&mut self, seat: SeatId, action: RecordedAction) {
        let ordinal = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(seat, action, ordinal));
    }
}
