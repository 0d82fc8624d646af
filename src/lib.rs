//! # uno-engine
//!
//! Turn/rule state machine for a 2-4 seat Uno-style card game: one human
//! seat (seat 0) and up to three computer-controlled seats.
//!
//! ## Design
//!
//! - **One record, one mutator**: all game data lives in a single
//!   [`TableState`]; only [`TurnEngine`] mutates it, and every public
//!   operation validates fully before touching anything, so rejections are
//!   complete no-ops.
//! - **Explicit state machine**: blocking conditions are a single [`Phase`]
//!   enum plus an optional [`PendingDraw`], never independent boolean flags.
//! - **Queue, not callbacks**: computer-seat cascades go through an explicit
//!   FIFO [`TurnScheduler`] stepped by the host (or tests, deterministically);
//!   dequeued tasks re-validate before acting, which bounds stale-callback
//!   hazards to one check.
//! - **Presentation is a collaborator**: rendering, audio, and the human
//!   color prompt sit behind fire-and-forget gateway traits.
//!
//! ## Modules
//!
//! - `cards`: card values and deck construction
//! - `core`: seats, rotation, the table state, RNG, history
//! - `rules`: the card-legality predicate
//! - `ai`: the computer-seat policy (first legal card, most-frequent color)
//! - `effects`: special-card resolution and forced-draw sequencing
//! - `engine`: the turn engine, scheduler, and game builder
//! - `gateway`: presentation collaborator traits and the render snapshot

pub mod ai;
pub mod cards;
pub mod core;
pub mod effects;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod rules;

pub use crate::cards::{deck, Card, Color, Hand, Rank};
pub use crate::core::{
    ActionRecord, Controller, GameRng, PendingDraw, Phase, RecordedAction, Rotation, Seat, SeatId,
    TableState,
};
pub use crate::effects::{DrawOutcome, EffectOutcome, ServeProgress};
pub use crate::engine::{GameBuilder, ScheduledTask, TurnEngine, TurnScheduler};
pub use crate::error::GameError;
pub use crate::gateway::{
    AudioEvent, AudioGateway, ChoiceGateway, NullAudio, NullChoice, NullRender, RenderGateway,
    SeatView, TableSnapshot,
};
pub use crate::rules::{can_play, has_legal_move};
