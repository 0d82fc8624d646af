//! Presentation collaborators.
//!
//! The engine notifies these after every committed transition and never
//! reads anything back: rendering and audio are fire-and-forget, and the
//! choice gateway only signals that a color decision is wanted (the host
//! answers later through `TurnEngine::choose_color`). The `Null*`
//! implementations make all three optional.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};
use crate::core::{Controller, Rotation, SeatId, TableState};

/// Audio cue points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioEvent {
    CardPlayed,
    TurnBegan,
    ForcedDrawRequired,
    RoundWon,
    LowCardAnnounced,
}

/// Per-seat view inside a [`TableSnapshot`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub id: SeatId,
    pub controller: Controller,
    pub hand: Vec<Card>,
    pub has_announced_low_card: bool,
}

/// Serializable view of the table, handed to the render gateway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub top_discard: Option<Card>,
    pub active_seat: SeatId,
    pub active_color: Color,
    pub rotation: Rotation,
    pub draw_pile_size: usize,
    pub discard_pile_size: usize,
    pub seats: Vec<SeatView>,
    pub round_winner: Option<SeatId>,
    /// Draws still owed by the human seat, if any.
    pub owed_draws: Option<u8>,
}

impl TableSnapshot {
    /// Capture the current table.
    #[must_use]
    pub fn capture(state: &TableState) -> Self {
        Self {
            top_discard: state.top_discard().copied(),
            active_seat: state.active_seat,
            active_color: state.active_color,
            rotation: state.rotation,
            draw_pile_size: state.draw_pile.len(),
            discard_pile_size: state.discard_pile.len(),
            seats: state
                .seats
                .iter()
                .map(|seat| SeatView {
                    id: seat.id,
                    controller: seat.controller,
                    hand: seat.hand.to_vec(),
                    has_announced_low_card: seat.has_announced_low_card,
                })
                .collect(),
            round_winner: state.round_winner,
            owed_draws: state.pending_draw.map(|p| p.owed),
        }
    }
}

/// Receives a snapshot after every committed transition.
pub trait RenderGateway {
    fn render(&mut self, snapshot: &TableSnapshot);
}

/// Receives audio cue points.
pub trait AudioGateway {
    fn cue(&mut self, event: AudioEvent);
}

/// Signalled when a human wild play needs a color.
pub trait ChoiceGateway {
    fn request_color_choice(&mut self);
}

/// Render gateway that drops every snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRender;

impl RenderGateway for NullRender {
    fn render(&mut self, _snapshot: &TableSnapshot) {}
}

/// Audio gateway that drops every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioGateway for NullAudio {
    fn cue(&mut self, _event: AudioEvent) {}
}

/// Choice gateway that ignores requests (the host polls the state instead).
#[derive(Clone, Copy, Debug, Default)]
pub struct NullChoice;

impl ChoiceGateway for NullChoice {
    fn request_color_choice(&mut self) {}
}
