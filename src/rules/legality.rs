//! Card legality: the pure predicate behind every play.
//!
//! Legality is judged against the top discard, the active color, and the
//! candidate's own hand (the WildDrawFour gate inspects the hand). It never
//! mutates state, so both the engine and the AI policy share it.

use crate::cards::{Card, Color, Rank};

/// Can `card` be played now?
///
/// - A standard Wild is always playable.
/// - A WildDrawFour is playable only when the hand holds no card matching
///   the active color and no non-wild card matching the top discard's rank.
///   The rank restriction is stricter than the common color-only house rule
///   and is intentional.
/// - With no top discard (pre-game), any card is playable.
/// - Otherwise the card must match the active color or the top rank.
#[must_use]
pub fn can_play(card: &Card, top_discard: Option<&Card>, active_color: Color, hand: &[Card]) -> bool {
    let Some(top) = top_discard else {
        return true;
    };

    match card.rank {
        Rank::Wild => true,
        Rank::WildDrawFour => {
            let color_match = hand.iter().any(|c| c.color == Some(active_color));
            let rank_match = hand.iter().any(|c| !c.is_wild() && c.rank == top.rank);
            !color_match && !rank_match
        }
        _ => card.color == Some(active_color) || card.rank == top.rank,
    }
}

/// Does any card in `hand` satisfy [`can_play`]?
#[must_use]
pub fn has_legal_move(hand: &[Card], top_discard: Option<&Card>, active_color: Color) -> bool {
    hand.iter()
        .any(|card| can_play(card, top_discard, active_color, hand))
}
