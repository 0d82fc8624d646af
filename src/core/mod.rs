//! Core types: seats, rotation, the table state machine, RNG, history.

mod action;
mod rng;
mod seat;
mod state;

pub use action::{ActionRecord, RecordedAction};
pub use rng::GameRng;
pub use seat::{Controller, Rotation, Seat, SeatId};
pub use state::{PendingDraw, Phase, TableState};
