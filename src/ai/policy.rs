//! Computer-seat decision policy.
//!
//! Deliberately simple: first legal card wins, wild colors follow the most
//! frequent color in hand. Predictable play is the point, not a placeholder
//! for something smarter.

use crate::cards::{Card, Color};
use crate::rules::legality;

/// The leftmost hand index holding a playable card, if any.
#[must_use]
pub fn choose_card_to_play(
    hand: &[Card],
    top_discard: Option<&Card>,
    active_color: Color,
) -> Option<usize> {
    hand.iter()
        .position(|card| legality::can_play(card, top_discard, active_color, hand))
}

/// The base color appearing most often among non-wild cards in `hand`.
///
/// Ties break in the fixed order Red, Blue, Green, Yellow; a hand with no
/// colored cards yields Red.
#[must_use]
pub fn choose_color_on_wild(hand: &[Card]) -> Color {
    let mut best = Color::Red;
    let mut best_count = 0usize;

    for color in Color::ALL {
        let count = hand.iter().filter(|c| c.color == Some(color)).count();
        if count > best_count {
            best = color;
            best_count = count;
        }
    }

    best
}
