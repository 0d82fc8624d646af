//! Special-effect resolution.
//!
//! Maps a just-played card to its state transition. The outcome tells the
//! engine who owns the subsequent turn advancement: `AdvanceNormally` leaves
//! the standard one-step post-play advance to the engine, the other variants
//! own it themselves (the forced-draw path repositions the active seat, a
//! human color choice suspends the turn entirely).

use tracing::debug;

use super::forced_draw::{self, DrawOutcome};
use crate::ai;
use crate::cards::{Card, Rank};
use crate::core::{RecordedAction, SeatId, TableState};

/// The transition a played card produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectOutcome {
    /// No advancement happened here; the engine applies its normal
    /// one-step post-play advance.
    AdvanceNormally,
    /// A forced draw ran (or is pending); advancement is already handled.
    ForcedDraw(DrawOutcome),
    /// A human wild play is suspended until a color arrives.
    AwaitColorChoice { wild_draw_four: bool },
}

/// Resolve the effect of `card`, just played by `played_by`.
///
/// The card is already on the discard pile and win pre-emption has already
/// been checked by the engine.
pub fn resolve(state: &mut TableState, card: &Card, played_by: SeatId) -> EffectOutcome {
    if let Some(color) = card.color {
        state.active_color = color;
    }

    match card.rank {
        Rank::Number(_) => EffectOutcome::AdvanceNormally,
        Rank::Skip => {
            // Step onto the skipped seat; the engine's normal advance then
            // lands one seat further, skipping it entirely.
            state.advance_active_seat();
            debug!(skipped = ?state.active_seat, "skip resolved");
            EffectOutcome::AdvanceNormally
        }
        Rank::Reverse => {
            state.rotation = state.rotation.flipped();
            if state.seat_count() == 2 {
                // Two-player Reverse behaves as Skip: step once under the
                // new direction so the normal advance returns the turn to
                // the seat that played.
                state.advance_active_seat();
            }
            debug!(rotation = ?state.rotation, "reverse resolved");
            EffectOutcome::AdvanceNormally
        }
        Rank::DrawTwo => EffectOutcome::ForcedDraw(forced_draw::begin(state, 2)),
        Rank::Wild => {
            if state.seat(played_by).is_computer() {
                let color = ai::choose_color_on_wild(&state.seat(played_by).hand);
                state.active_color = color;
                state.record(played_by, RecordedAction::ChoseColor(color));
                EffectOutcome::AdvanceNormally
            } else {
                EffectOutcome::AwaitColorChoice {
                    wild_draw_four: false,
                }
            }
        }
        Rank::WildDrawFour => {
            if state.seat(played_by).is_computer() {
                let color = ai::choose_color_on_wild(&state.seat(played_by).hand);
                state.active_color = color;
                state.record(played_by, RecordedAction::ChoseColor(color));
                EffectOutcome::ForcedDraw(forced_draw::begin(state, 4))
            } else {
                EffectOutcome::AwaitColorChoice {
                    wild_draw_four: true,
                }
            }
        }
    }
}
