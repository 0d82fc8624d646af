//! The turn engine: owner and sole mutator of the table state.
//!
//! Every externally-visible operation (`play_card`, `draw_card`,
//! `choose_color`, `announce_low_card`) enters here, validates fully before
//! touching anything, commits the transition, notifies the presentation
//! gateways, and finally asks the scheduler to queue the next computer seat
//! if one is due. Computer cascades are driven by [`step`](TurnEngine::step)
//! / [`run_until_idle`](TurnEngine::run_until_idle), which re-validate each
//! dequeued task before acting.

use std::time::Duration;

use tracing::{debug, warn};

use crate::ai;
use crate::cards::{deck, Color};
use crate::core::{Controller, Phase, RecordedAction, Seat, SeatId, TableState};
use crate::effects::{self, DrawOutcome, EffectOutcome, ServeProgress};
use crate::error::GameError;
use crate::gateway::{
    AudioEvent, AudioGateway, ChoiceGateway, NullAudio, NullChoice, NullRender, RenderGateway,
    TableSnapshot,
};
use crate::rules::legality;

use super::scheduler::TurnScheduler;

/// The game engine for one round.
pub struct TurnEngine {
    state: TableState,
    scheduler: TurnScheduler,
    render: Box<dyn RenderGateway>,
    audio: Box<dyn AudioGateway>,
    choice: Box<dyn ChoiceGateway>,
    /// Card count at construction; conservation is checked against it.
    expected_total: usize,
}

impl TurnEngine {
    /// Build an engine over an already-constructed state, with no-op
    /// gateways and a zero presentation delay.
    ///
    /// This is the restart path: a new round is a fresh `TableState`, never
    /// a partial reset of the old one. If the state's active seat is
    /// computer-controlled, its turn is queued immediately.
    #[must_use]
    pub fn with_state(state: TableState) -> Self {
        let expected_total = state.total_cards();
        let mut engine = Self {
            state,
            scheduler: TurnScheduler::default(),
            render: Box::new(NullRender),
            audio: Box::new(NullAudio),
            choice: Box::new(NullChoice),
            expected_total,
        };
        engine.schedule_active_if_computer();
        engine
    }

    /// Replace the render gateway.
    pub fn set_render_gateway(&mut self, gateway: Box<dyn RenderGateway>) {
        self.render = gateway;
    }

    /// Replace the audio gateway.
    pub fn set_audio_gateway(&mut self, gateway: Box<dyn AudioGateway>) {
        self.audio = gateway;
    }

    /// Replace the choice gateway.
    pub fn set_choice_gateway(&mut self, gateway: Box<dyn ChoiceGateway>) {
        self.choice = gateway;
    }

    // === Read access ===

    /// The canonical state. Read-only; all writes go through the operations.
    #[must_use]
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Serializable view of the table.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::capture(&self.state)
    }

    /// Number of queued computer turns.
    #[must_use]
    pub fn scheduled_turns(&self) -> usize {
        self.scheduler.len()
    }

    /// The seat of the next queued computer turn, if any.
    #[must_use]
    pub fn next_scheduled(&self) -> Option<SeatId> {
        self.scheduler.peek().map(|task| task.seat)
    }

    // === Public operations ===

    /// Play the card at `hand_index` from `seat`'s hand.
    ///
    /// Rejected (state unchanged) when it is not that seat's turn, a forced
    /// draw or color choice blocks play, or the card fails legality.
    pub fn play_card(&mut self, seat: SeatId, hand_index: usize) -> Result<(), GameError> {
        if !self.state.has_seat(seat) {
            return Err(GameError::UnknownSeat(seat));
        }
        match self.state.phase {
            Phase::RoundEnded => return Err(GameError::RoundOver),
            Phase::AwaitingHumanForcedDraw | Phase::AwaitingColorChoice { .. } => {
                return Err(GameError::OutOfTurn(seat));
            }
            Phase::AwaitingPlay => {}
        }
        if seat != self.state.active_seat {
            return Err(GameError::OutOfTurn(seat));
        }
        let hand = &self.state.seat(seat).hand;
        let Some(card) = hand.get(hand_index).copied() else {
            return Err(GameError::UnknownCard(hand_index));
        };
        if !legality::can_play(
            &card,
            self.state.top_discard(),
            self.state.active_color,
            hand,
        ) {
            return Err(GameError::InvalidPlay);
        }

        self.commit_play(seat, hand_index);
        self.check_conservation();
        Ok(())
    }

    /// Draw a card for `seat`.
    ///
    /// While the human owes forced draws this serves one owed card; each
    /// owed card takes its own call. Otherwise it is a voluntary draw,
    /// rejected while a legal move exists. A voluntary draw whose card is
    /// unplayable ends the turn.
    pub fn draw_card(&mut self, seat: SeatId) -> Result<(), GameError> {
        if !self.state.has_seat(seat) {
            return Err(GameError::UnknownSeat(seat));
        }
        match self.state.phase {
            Phase::RoundEnded => return Err(GameError::RoundOver),
            Phase::AwaitingColorChoice { .. } => return Err(GameError::OutOfTurn(seat)),
            Phase::AwaitingHumanForcedDraw => {
                if !effects::forced_draw::owes_draws(&self.state, seat) {
                    return Err(GameError::OutOfTurn(seat));
                }
                self.serve_owed_draw();
                self.check_conservation();
                return Ok(());
            }
            Phase::AwaitingPlay => {}
        }
        if seat != self.state.active_seat {
            return Err(GameError::OutOfTurn(seat));
        }
        {
            let hand = &self.state.seat(seat).hand;
            if legality::has_legal_move(hand, self.state.top_discard(), self.state.active_color) {
                return Err(GameError::InvalidDraw);
            }
        }

        let card = self.state.draw_from_pile();
        self.state.seat_mut(seat).hand.push(card);
        self.state.record(seat, RecordedAction::Drew { forced: false });
        debug!(?seat, "voluntary draw");

        let playable = legality::can_play(
            &card,
            self.state.top_discard(),
            self.state.active_color,
            &self.state.seat(seat).hand,
        );
        if playable {
            // The seat keeps its turn and may play the drawn card.
            self.notify_render();
        } else {
            self.state.advance_active_seat();
            self.enter_awaiting_play();
            self.notify_render();
        }
        self.check_conservation();
        Ok(())
    }

    /// Supply the color for a suspended human wild play.
    pub fn choose_color(&mut self, color: Color) -> Result<(), GameError> {
        let Phase::AwaitingColorChoice { wild_draw_four } = self.state.phase else {
            return Err(GameError::NoColorChoicePending);
        };

        self.state.active_color = color;
        let chooser = self.state.active_seat;
        self.state.record(chooser, RecordedAction::ChoseColor(color));
        debug!(?chooser, ?color, "color chosen");

        if wild_draw_four {
            match effects::forced_draw::begin(&mut self.state, 4) {
                DrawOutcome::TargetServed => self.enter_awaiting_play(),
                DrawOutcome::HumanOwes => self.enter_forced_draw(),
            }
        } else {
            self.state.advance_active_seat();
            self.enter_awaiting_play();
        }
        self.notify_render();
        self.check_conservation();
        Ok(())
    }

    /// Mark `seat` as having announced its low card.
    pub fn announce_low_card(&mut self, seat: SeatId) -> Result<(), GameError> {
        if !self.state.has_seat(seat) {
            return Err(GameError::UnknownSeat(seat));
        }
        self.state.seat_mut(seat).has_announced_low_card = true;
        self.state.record(seat, RecordedAction::AnnouncedLowCard);
        self.audio.cue(AudioEvent::LowCardAnnounced);
        self.notify_render();
        Ok(())
    }

    // === Scheduler loop ===

    /// Run one queued computer turn, if any.
    ///
    /// Returns whether a task was consumed. A task whose seat is no longer
    /// the unblocked active computer seat is stale and dropped without
    /// acting; that is the only cancellation mechanism.
    pub fn step(&mut self) -> bool {
        let Some(task) = self.scheduler.pop() else {
            return false;
        };
        if !self.task_still_valid(task.seat) {
            debug!(seat = ?task.seat, "stale scheduled turn dropped");
            return true;
        }
        self.run_computer_turn(task.seat);
        self.check_conservation();
        true
    }

    /// Run queued computer turns until the table waits on the human (or the
    /// round ends). Presentation delays are skipped; hosts that want pacing
    /// call [`step`](Self::step) themselves.
    pub fn run_until_idle(&mut self) {
        while self.step() {}
    }

    fn task_still_valid(&self, seat: SeatId) -> bool {
        self.state.phase == Phase::AwaitingPlay
            && self.state.round_winner.is_none()
            && self.state.active_seat == seat
            && self.state.seat(seat).is_computer()
    }

    fn run_computer_turn(&mut self, seat: SeatId) {
        let top = self.state.top_discard().copied();
        let choice = ai::choose_card_to_play(
            &self.state.seat(seat).hand,
            top.as_ref(),
            self.state.active_color,
        );

        if let Some(index) = choice {
            if let Err(err) = self.play_card(seat, index) {
                // Defensive: the guard should have made this impossible.
                warn!(?seat, %err, "computer play rejected");
            }
            return;
        }

        // No legal card: draw exactly one and play it if it fits.
        let card = self.state.draw_from_pile();
        self.state.seat_mut(seat).hand.push(card);
        self.state.record(seat, RecordedAction::Drew { forced: false });
        debug!(?seat, "computer seat drew");

        let playable = legality::can_play(
            &card,
            self.state.top_discard(),
            self.state.active_color,
            &self.state.seat(seat).hand,
        );
        if playable {
            let index = self.state.seat(seat).hand.len() - 1;
            if let Err(err) = self.play_card(seat, index) {
                warn!(?seat, %err, "computer play of drawn card rejected");
            }
        } else {
            self.state.advance_active_seat();
            self.enter_awaiting_play();
            self.notify_render();
        }
    }

    // === Transition plumbing ===

    fn commit_play(&mut self, seat: SeatId, hand_index: usize) {
        let card = self.state.seat_mut(seat).hand.remove(hand_index);
        self.state.discard_pile.push(card);
        self.state.record(seat, RecordedAction::Played(card));
        self.audio.cue(AudioEvent::CardPlayed);
        debug!(?seat, ?card, "card played");

        // Win pre-emption: an emptied hand ends the round before any
        // special effect, so a forced-draw target never draws.
        if self.state.seat(seat).hand.is_empty() {
            self.state.round_winner = Some(seat);
            self.state.phase = Phase::RoundEnded;
            self.scheduler.clear();
            self.audio.cue(AudioEvent::RoundWon);
            self.notify_render();
            debug!(winner = ?seat, "round won");
            return;
        }

        match effects::resolve(&mut self.state, &card, seat) {
            EffectOutcome::AdvanceNormally => {
                self.state.advance_active_seat();
                self.enter_awaiting_play();
            }
            EffectOutcome::ForcedDraw(DrawOutcome::TargetServed) => self.enter_awaiting_play(),
            EffectOutcome::ForcedDraw(DrawOutcome::HumanOwes) => self.enter_forced_draw(),
            EffectOutcome::AwaitColorChoice { wild_draw_four } => {
                self.state.phase = Phase::AwaitingColorChoice { wild_draw_four };
                self.choice.request_color_choice();
            }
        }
        self.notify_render();
    }

    fn serve_owed_draw(&mut self) {
        match effects::forced_draw::serve_one_human_draw(&mut self.state) {
            ServeProgress::StillOwed { remaining } => {
                debug!(remaining, "owed draw served");
            }
            ServeProgress::Completed => self.enter_awaiting_play(),
        }
        self.notify_render();
    }

    fn enter_awaiting_play(&mut self) {
        self.state.phase = Phase::AwaitingPlay;
        self.audio.cue(AudioEvent::TurnBegan);
        self.schedule_active_if_computer();
    }

    fn enter_forced_draw(&mut self) {
        self.state.phase = Phase::AwaitingHumanForcedDraw;
        self.audio.cue(AudioEvent::ForcedDrawRequired);
    }

    fn schedule_active_if_computer(&mut self) {
        if self.state.phase == Phase::AwaitingPlay
            && self.state.round_winner.is_none()
            && self.state.seat(self.state.active_seat).is_computer()
        {
            self.scheduler.schedule_turn(self.state.active_seat);
        }
    }

    fn notify_render(&mut self) {
        let snapshot = TableSnapshot::capture(&self.state);
        self.render.render(&snapshot);
    }

    fn check_conservation(&self) {
        debug_assert_eq!(
            self.state.total_cards(),
            self.expected_total,
            "card conservation violated"
        );
    }
}

/// Configures and builds a [`TurnEngine`] with a freshly dealt table.
///
/// Seat 0 is the human seat; remaining seats are computer-controlled.
pub struct GameBuilder {
    seat_count: usize,
    cards_per_seat: usize,
    seed: u64,
    presentation_delay: Duration,
    render: Box<dyn RenderGateway>,
    audio: Box<dyn AudioGateway>,
    choice: Box<dyn ChoiceGateway>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            seat_count: 4,
            cards_per_seat: 7,
            seed: 0,
            presentation_delay: Duration::ZERO,
            render: Box::new(NullRender),
            audio: Box::new(NullAudio),
            choice: Box::new(NullChoice),
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of seats, 2-4.
    #[must_use]
    pub fn seat_count(mut self, count: usize) -> Self {
        assert!((2..=4).contains(&count), "seat count must be 2-4");
        self.seat_count = count;
        self
    }

    /// Cards dealt to each seat (default 7).
    #[must_use]
    pub fn cards_per_seat(mut self, count: usize) -> Self {
        self.cards_per_seat = count;
        self
    }

    /// RNG seed for the shuffle.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Pause suggested before each scheduled computer turn.
    #[must_use]
    pub fn presentation_delay(mut self, delay: Duration) -> Self {
        self.presentation_delay = delay;
        self
    }

    #[must_use]
    pub fn render_gateway(mut self, gateway: Box<dyn RenderGateway>) -> Self {
        self.render = gateway;
        self
    }

    #[must_use]
    pub fn audio_gateway(mut self, gateway: Box<dyn AudioGateway>) -> Self {
        self.audio = gateway;
        self
    }

    #[must_use]
    pub fn choice_gateway(mut self, gateway: Box<dyn ChoiceGateway>) -> Self {
        self.choice = gateway;
        self
    }

    /// Shuffle, deal, flip the initial discard, and build the engine.
    #[must_use]
    pub fn build(self) -> TurnEngine {
        let seats: Vec<Seat> = SeatId::all(self.seat_count)
            .map(|id| {
                let controller = if id == SeatId::HUMAN {
                    Controller::Human
                } else {
                    Controller::Computer
                };
                Seat::new(id, controller)
            })
            .collect();
        let mut state = TableState::new(seats, self.seed);

        let mut cards = deck::build();
        deck::shuffle(&mut cards, &mut state.rng);

        let hands = deck::deal(&mut cards, self.seat_count, self.cards_per_seat);
        for (seat, hand) in state.seats.iter_mut().zip(hands) {
            seat.hand = hand;
        }

        // 76 cards remain after the largest deal and only 32 of 108 are
        // non-numeral, so a numeral is always present.
        let initial = deck::pick_initial_discard(&mut cards)
            .expect("a shuffled deck always holds a numeral");
        state.active_color = initial.color.expect("initial discard is a numeral");
        state.discard_pile.push(initial);
        state.draw_pile = cards;

        let expected_total = state.total_cards();
        debug_assert_eq!(expected_total, deck::DECK_SIZE);
        debug!(
            seats = self.seat_count,
            seed = self.seed,
            "game built"
        );

        let mut engine = TurnEngine {
            state,
            scheduler: TurnScheduler::new(self.presentation_delay),
            render: self.render,
            audio: self.audio,
            choice: self.choice,
            expected_total,
        };
        engine.schedule_active_if_computer();
        engine
    }
}
