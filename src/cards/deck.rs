//! Deck construction and setup.
//!
//! Implements the deck-factory collaborator interface: the closed 108-card
//! composition, shuffling, dealing, and the initial-discard pick. The engine
//! consumes these at game start and never rebuilds cards afterwards.

use smallvec::SmallVec;

use super::card::{Card, Color, Rank};
use super::Hand;
use crate::core::GameRng;

/// Total cards in the closed deck.
pub const DECK_SIZE: usize = 108;

/// Build the full 108-card deck in a fixed order.
///
/// Per color: one 0, two each of 1-9, two each of Skip/Reverse/DrawTwo
/// (25 cards x 4 colors), plus 4 Wild and 4 WildDrawFour.
#[must_use]
pub fn build() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for color in Color::ALL {
        deck.push(Card::colored(color, Rank::Number(0)));
        for n in 1..=9 {
            deck.push(Card::colored(color, Rank::Number(n)));
            deck.push(Card::colored(color, Rank::Number(n)));
        }
        for rank in [Rank::Skip, Rank::Reverse, Rank::DrawTwo] {
            deck.push(Card::colored(color, rank));
            deck.push(Card::colored(color, rank));
        }
    }

    for _ in 0..4 {
        deck.push(Card::wild());
        deck.push(Card::wild_draw_four());
    }

    debug_assert_eq!(deck.len(), DECK_SIZE);
    deck
}

/// Shuffle a deck in place.
pub fn shuffle(deck: &mut [Card], rng: &mut GameRng) {
    rng.shuffle(deck);
}

/// Deal `per_seat` cards to each of `seat_count` hands, round-robin from the
/// top of the deck (end of the vec).
#[must_use]
pub fn deal(deck: &mut Vec<Card>, seat_count: usize, per_seat: usize) -> Vec<Hand> {
    assert!(
        deck.len() >= seat_count * per_seat,
        "deck too small for the requested deal"
    );

    let mut hands: Vec<Hand> = (0..seat_count).map(|_| SmallVec::new()).collect();
    for _ in 0..per_seat {
        for hand in hands.iter_mut() {
            // Cannot fail: size checked above.
            if let Some(card) = deck.pop() {
                hand.push(card);
            }
        }
    }
    hands
}

/// Remove and return the first numeral card from the top of the deck.
///
/// Special and wild cards are skipped over (left in place); returns `None`
/// if the deck holds no numeral at all.
pub fn pick_initial_discard(deck: &mut Vec<Card>) -> Option<Card> {
    let pos = deck.iter().rposition(Card::is_number)?;
    Some(deck.remove(pos))
}
