//! Forced-draw sequencing.
//!
//! A DrawTwo or WildDrawFour imposes a draw obligation on the next seat in
//! rotation. Computer targets are served immediately and skipped; a human
//! target gets a [`PendingDraw`] that spans turn boundaries, served one card
//! per `draw_card` call, while every play stays blocked. Only one obligation
//! may be outstanding at a time, which the phase machine enforces: a new
//! draw-effect card cannot be played while the table is awaiting owed draws.

use tracing::debug;

use crate::core::{PendingDraw, RecordedAction, SeatId, TableState};

/// How a new obligation resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Computer target drew everything; the active seat already sits one
    /// step past the skipped target.
    TargetServed,
    /// The human seat owes the draws; a [`PendingDraw`] is installed and the
    /// human seat is (temporarily) active.
    HumanOwes,
}

/// Progress of a single owed human draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServeProgress {
    /// More draws owed; the human must draw again.
    StillOwed { remaining: u8 },
    /// The obligation completed; the active seat now sits past the target.
    Completed,
}

/// Impose a `count`-card obligation on the seat one rotation step from the
/// active seat.
pub fn begin(state: &mut TableState, count: u8) -> DrawOutcome {
    debug_assert!(state.pending_draw.is_none(), "one obligation at a time");

    let source = state.active_seat;
    let target = state.seat_at_offset(source, 1);
    debug!(?source, ?target, count, "forced draw begins");

    if state.seat(target).is_computer() {
        for _ in 0..count {
            let card = state.draw_from_pile();
            state.seat_mut(target).hand.push(card);
            state.record(target, RecordedAction::Drew { forced: true });
        }
        // The target's turn is consumed by the draws.
        state.active_seat = state.seat_at_offset(target, 1);
        DrawOutcome::TargetServed
    } else {
        let restore = (source != target).then_some(source);
        state.pending_draw = Some(PendingDraw {
            owed: count,
            target,
            restore,
        });
        state.active_seat = target;
        DrawOutcome::HumanOwes
    }
}

/// Serve one owed draw to the human target.
///
/// On the final owed card: restores the recorded seat as active, clears the
/// obligation, and advances the turn once more so the target's turn is
/// skipped entirely.
pub fn serve_one_human_draw(state: &mut TableState) -> ServeProgress {
    let pending = state
        .pending_draw
        .expect("serve called without an outstanding obligation");

    let card = state.draw_from_pile();
    state.seat_mut(pending.target).hand.push(card);
    state.record(pending.target, RecordedAction::Drew { forced: true });

    let remaining = pending.owed - 1;
    if remaining > 0 {
        state.pending_draw = Some(PendingDraw {
            owed: remaining,
            ..pending
        });
        return ServeProgress::StillOwed { remaining };
    }

    state.pending_draw = None;
    if let Some(restore) = pending.restore {
        state.active_seat = restore;
    }
    state.advance_active_seat();
    if state.active_seat == pending.target {
        state.advance_active_seat();
    }
    debug!(target = ?pending.target, next = ?state.active_seat, "forced draw completed");
    ServeProgress::Completed
}

/// Whether `seat` is the target of the outstanding obligation.
#[must_use]
pub fn owes_draws(state: &TableState, seat: SeatId) -> bool {
    state
        .pending_draw
        .is_some_and(|pending| pending.target == seat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{deck, Card, Color, Rank};
    use crate::core::{Controller, Rotation, Seat};

    fn state_with(count: usize) -> TableState {
        let seats = SeatId::all(count)
            .map(|id| {
                let controller = if id == SeatId::HUMAN {
                    Controller::Human
                } else {
                    Controller::Computer
                };
                Seat::new(id, controller)
            })
            .collect();
        let mut state = TableState::new(seats, 42);
        state.draw_pile = deck::build();
        state.discard_pile
            .push(state.draw_pile.pop().expect("non-empty deck"));
        state
    }

    #[test]
    fn test_computer_target_served_and_skipped() {
        let mut state = state_with(3);
        state.active_seat = SeatId::new(1); // seat 2 is the target

        let outcome = begin(&mut state, 2);

        assert_eq!(outcome, DrawOutcome::TargetServed);
        assert_eq!(state.seat(SeatId::new(2)).hand.len(), 2);
        assert_eq!(state.active_seat, SeatId::new(0));
        assert!(state.pending_draw.is_none());
    }

    #[test]
    fn test_human_target_installs_obligation() {
        let mut state = state_with(3);
        state.active_seat = SeatId::new(2); // human seat 0 is the target

        let outcome = begin(&mut state, 4);

        assert_eq!(outcome, DrawOutcome::HumanOwes);
        assert_eq!(state.active_seat, SeatId::HUMAN);
        let pending = state.pending_draw.expect("obligation installed");
        assert_eq!(pending.owed, 4);
        assert_eq!(pending.target, SeatId::HUMAN);
        assert_eq!(pending.restore, Some(SeatId::new(2)));
        assert!(owes_draws(&state, SeatId::HUMAN));
        assert!(!owes_draws(&state, SeatId::new(1)));
    }

    #[test]
    fn test_serving_completes_and_skips_human() {
        let mut state = state_with(3);
        state.active_seat = SeatId::new(2);
        begin(&mut state, 2);

        assert_eq!(
            serve_one_human_draw(&mut state),
            ServeProgress::StillOwed { remaining: 1 }
        );
        assert_eq!(serve_one_human_draw(&mut state), ServeProgress::Completed);

        assert_eq!(state.seat(SeatId::HUMAN).hand.len(), 2);
        assert!(state.pending_draw.is_none());
        // Restored to seat 2, then advanced past the human: seat 1 is next.
        assert_eq!(state.active_seat, SeatId::new(1));
    }

    #[test]
    fn test_backward_rotation_targets_previous_seat() {
        let mut state = state_with(4);
        state.rotation = Rotation::Backward;
        state.active_seat = SeatId::new(3); // backward: target is seat 2

        let outcome = begin(&mut state, 2);

        assert_eq!(outcome, DrawOutcome::TargetServed);
        assert_eq!(state.seat(SeatId::new(2)).hand.len(), 2);
        assert_eq!(state.active_seat, SeatId::new(1));
    }

    #[test]
    fn test_mid_sequence_reshuffle() {
        let mut state = state_with(2);
        state.active_seat = SeatId::new(1);
        state.draw_pile = vec![Card::colored(Color::Red, Rank::Number(1))];
        state.discard_pile = vec![
            Card::colored(Color::Blue, Rank::Number(2)),
            Card::colored(Color::Green, Rank::Number(3)),
        ];

        begin(&mut state, 2);
        serve_one_human_draw(&mut state);
        serve_one_human_draw(&mut state);

        assert_eq!(state.seat(SeatId::HUMAN).hand.len(), 2);
        // Top discard survived the reshuffle.
        assert_eq!(
            state.top_discard(),
            Some(&Card::colored(Color::Green, Rank::Number(3)))
        );
    }
}
