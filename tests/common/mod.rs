//! Shared fixtures: crafted table states and recording gateways.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use uno_engine::{
    deck, AudioEvent, AudioGateway, Card, ChoiceGateway, Color, Controller, RenderGateway, Seat,
    SeatId, TableSnapshot, TableState,
};

/// Build a state with rigged hands: `hands[i]` is seat `i`'s hand, seat 0 is
/// human, the top discard and active color are as given, and a full spare
/// deck backs the draw pile.
pub fn crafted_state(hands: &[&[Card]], top: Card, active_color: Color) -> TableState {
    let seats = hands
        .iter()
        .zip(SeatId::all(hands.len()))
        .map(|(hand, id)| {
            let controller = if id == SeatId::HUMAN {
                Controller::Human
            } else {
                Controller::Computer
            };
            let mut seat = Seat::new(id, controller);
            seat.hand.extend(hand.iter().copied());
            seat
        })
        .collect();

    let mut state = TableState::new(seats, 42);
    state.draw_pile = deck::build();
    state.discard_pile.push(top);
    state.active_color = active_color;
    state
}

/// Audio gateway that records every cue.
#[derive(Clone, Default)]
pub struct RecordingAudio {
    pub events: Rc<RefCell<Vec<AudioEvent>>>,
}

impl AudioGateway for RecordingAudio {
    fn cue(&mut self, event: AudioEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Render gateway that keeps every snapshot.
#[derive(Clone, Default)]
pub struct RecordingRender {
    pub snapshots: Rc<RefCell<Vec<TableSnapshot>>>,
}

impl RenderGateway for RecordingRender {
    fn render(&mut self, snapshot: &TableSnapshot) {
        self.snapshots.borrow_mut().push(snapshot.clone());
    }
}

/// Choice gateway that counts color requests.
#[derive(Clone, Default)]
pub struct RecordingChoice {
    pub requests: Rc<RefCell<usize>>,
}

impl ChoiceGateway for RecordingChoice {
    fn request_color_choice(&mut self) {
        *self.requests.borrow_mut() += 1;
    }
}
