//! End-to-end scenarios over the public operations: wins, special cards,
//! and the pinned per-seat-count Reverse behavior.

mod common;

use common::{crafted_state, RecordingChoice};
use uno_engine::{Card, Color, GameError, Phase, Rank, SeatId, TurnEngine};

fn card(color: Color, n: u8) -> Card {
    Card::colored(color, Rank::Number(n))
}

#[test]
fn scenario_a_playing_last_card_wins() {
    // 2 seats, seat 0 holds only Red-5, top discard Red-3.
    let state = crafted_state(
        &[&[card(Color::Red, 5)], &[card(Color::Blue, 1)]],
        card(Color::Red, 3),
        Color::Red,
    );
    let mut engine = TurnEngine::with_state(state);

    engine.play_card(SeatId::HUMAN, 0).unwrap();

    assert_eq!(engine.state().top_discard(), Some(&card(Color::Red, 5)));
    assert!(engine.state().seat(SeatId::HUMAN).hand.is_empty());
    assert_eq!(engine.state().round_winner, Some(SeatId::HUMAN));
    assert_eq!(engine.state().phase, Phase::RoundEnded);
}

#[test]
fn scenario_b_skip_schedules_seat_two() {
    // 3 seats, seat 0 plays Blue Skip.
    let state = crafted_state(
        &[
            &[Card::colored(Color::Blue, Rank::Skip), card(Color::Red, 9)],
            &[card(Color::Green, 1)],
            &[card(Color::Green, 2)],
        ],
        card(Color::Blue, 3),
        Color::Blue,
    );
    let mut engine = TurnEngine::with_state(state);

    engine.play_card(SeatId::HUMAN, 0).unwrap();

    assert_eq!(engine.state().active_color, Color::Blue);
    assert_eq!(engine.state().active_seat, SeatId::new(2));
    // Seat 2's turn was queued automatically.
    assert_eq!(engine.next_scheduled(), Some(SeatId::new(2)));
}

#[test]
fn scenario_c_wild_draw_four_rejected_with_color_match() {
    // Seat 0 holds a Green-5 while the active color is Green: the
    // WildDrawFour gate forbids the play.
    let state = crafted_state(
        &[
            &[Card::wild_draw_four(), card(Color::Green, 5)],
            &[card(Color::Red, 1)],
        ],
        card(Color::Green, 3),
        Color::Green,
    );
    let mut engine = TurnEngine::with_state(state);

    let before_history = engine.state().history.len();
    assert_eq!(
        engine.play_card(SeatId::HUMAN, 0),
        Err(GameError::InvalidPlay)
    );
    assert_eq!(engine.state().seat(SeatId::HUMAN).hand.len(), 2);
    assert_eq!(engine.state().history.len(), before_history);
    assert_eq!(engine.state().top_discard(), Some(&card(Color::Green, 3)));
}

#[test]
fn skip_in_three_seats_lands_two_ahead() {
    let state = crafted_state(
        &[
            &[Card::colored(Color::Blue, Rank::Skip), card(Color::Red, 9)],
            &[card(Color::Green, 1)],
            &[card(Color::Green, 2)],
        ],
        card(Color::Blue, 7),
        Color::Blue,
    );
    let mut engine = TurnEngine::with_state(state);

    engine.play_card(SeatId::HUMAN, 0).unwrap();

    // Seat 1 is skipped entirely.
    assert_eq!(engine.state().active_seat, SeatId::new(2));
    assert_eq!(engine.state().active_color, Color::Blue);
}

#[test]
fn skip_in_two_seats_keeps_the_turn() {
    let state = crafted_state(
        &[
            &[Card::colored(Color::Blue, Rank::Skip), card(Color::Red, 9)],
            &[card(Color::Green, 1)],
        ],
        card(Color::Blue, 7),
        Color::Blue,
    );
    let mut engine = TurnEngine::with_state(state);

    engine.play_card(SeatId::HUMAN, 0).unwrap();

    assert_eq!(engine.state().active_seat, SeatId::HUMAN);
}

#[test]
fn reverse_in_two_seats_behaves_as_skip() {
    let state = crafted_state(
        &[
            &[
                Card::colored(Color::Green, Rank::Reverse),
                card(Color::Red, 9),
            ],
            &[card(Color::Blue, 1)],
        ],
        card(Color::Green, 7),
        Color::Green,
    );
    let mut engine = TurnEngine::with_state(state);

    engine.play_card(SeatId::HUMAN, 0).unwrap();

    // Turn returns to the seat that played.
    assert_eq!(engine.state().active_seat, SeatId::HUMAN);
    assert_eq!(engine.state().phase, Phase::AwaitingPlay);
}

#[test]
fn reverse_in_three_seats_hands_turn_to_previous_seat() {
    let state = crafted_state(
        &[
            &[
                Card::colored(Color::Green, Rank::Reverse),
                card(Color::Red, 9),
            ],
            &[card(Color::Blue, 1)],
            &[card(Color::Blue, 2)],
        ],
        card(Color::Green, 7),
        Color::Green,
    );
    let mut engine = TurnEngine::with_state(state);

    engine.play_card(SeatId::HUMAN, 0).unwrap();

    assert_eq!(engine.state().active_seat, SeatId::new(2));
}

#[test]
fn reverse_in_four_seats_hands_turn_to_previous_seat() {
    let state = crafted_state(
        &[
            &[
                Card::colored(Color::Green, Rank::Reverse),
                card(Color::Red, 9),
            ],
            &[card(Color::Blue, 1)],
            &[card(Color::Blue, 2)],
            &[card(Color::Blue, 3)],
        ],
        card(Color::Green, 7),
        Color::Green,
    );
    let mut engine = TurnEngine::with_state(state);

    engine.play_card(SeatId::HUMAN, 0).unwrap();

    assert_eq!(engine.state().active_seat, SeatId::new(3));
}

#[test]
fn human_wild_suspends_until_color_arrives() {
    let state = crafted_state(
        &[
            &[Card::wild(), card(Color::Red, 9)],
            &[card(Color::Blue, 1)],
            &[card(Color::Blue, 2)],
        ],
        card(Color::Green, 7),
        Color::Green,
    );
    let mut engine = TurnEngine::with_state(state);
    let choice = RecordingChoice::default();
    engine.set_choice_gateway(Box::new(choice.clone()));

    engine.play_card(SeatId::HUMAN, 0).unwrap();

    assert_eq!(
        engine.state().phase,
        Phase::AwaitingColorChoice {
            wild_draw_four: false
        }
    );
    assert_eq!(*choice.requests.borrow(), 1);
    // Everything but choose_color is blocked while suspended.
    assert_eq!(
        engine.play_card(SeatId::HUMAN, 0),
        Err(GameError::OutOfTurn(SeatId::HUMAN))
    );
    assert_eq!(
        engine.draw_card(SeatId::HUMAN),
        Err(GameError::OutOfTurn(SeatId::HUMAN))
    );
    // No computer turn runs while suspended.
    engine.run_until_idle();
    assert_eq!(engine.state().active_seat, SeatId::HUMAN);

    engine.choose_color(Color::Blue).unwrap();

    assert_eq!(engine.state().active_color, Color::Blue);
    assert_eq!(engine.state().active_seat, SeatId::new(1));
    assert_eq!(engine.next_scheduled(), Some(SeatId::new(1)));
}

#[test]
fn human_wild_draw_four_draws_begin_after_color() {
    // 3 seats: seat 1 (computer) is the target once the color arrives.
    let state = crafted_state(
        &[
            &[Card::wild_draw_four(), card(Color::Red, 9)],
            &[card(Color::Blue, 1)],
            &[card(Color::Blue, 2)],
        ],
        card(Color::Green, 7),
        Color::Green,
    );
    let mut engine = TurnEngine::with_state(state);

    engine.play_card(SeatId::HUMAN, 0).unwrap();
    assert_eq!(
        engine.state().phase,
        Phase::AwaitingColorChoice {
            wild_draw_four: true
        }
    );
    // The target has not drawn yet.
    assert_eq!(engine.state().seat(SeatId::new(1)).hand.len(), 1);

    engine.choose_color(Color::Red).unwrap();

    assert_eq!(engine.state().active_color, Color::Red);
    assert_eq!(engine.state().seat(SeatId::new(1)).hand.len(), 5);
    // The target's turn is skipped; seat 2 is up.
    assert_eq!(engine.state().active_seat, SeatId::new(2));
    assert_eq!(engine.next_scheduled(), Some(SeatId::new(2)));
}
