//! Game state and the move engine.
//!
//! ## State
//!
//! - `tableau`: ten piles
//! - `stock`: face-down reserve, top at the end, dealt ten at a time
//! - `completed`: runs that left play (never returned)
//! - `won` / `lost`: one-way latches, reset only by undo or a new deal
//! - `history`: bounded undo snapshots
//!
//! ## Mutation protocol
//!
//! Every mutating entry point validates first, captures a snapshot, mutates,
//! then runs the completion scan and (once the stock is empty) loss
//! detection. A failed operation leaves the state exactly as it was.
//!
//! ```
//! use spider_engine::cards::SuitVariant;
//! use spider_engine::core::GameConfig;
//! use spider_engine::game::GameState;
//!
//! let mut game = GameState::with_config(GameConfig::new(SuitVariant::OneSuit).with_seed(7)).unwrap();
//! assert_eq!(game.view().stock_count, 50);
//!
//! game.deal_row().unwrap();
//! assert_eq!(game.view().stock_count, 40);
//!
//! game.undo().unwrap();
//! assert_eq!(game.view().stock_count, 50);
//! ```

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, error, info, instrument, warn};

use super::history::{History, Snapshot};
use super::view::GameView;
use crate::cards::{Card, SpiderDeck, SuitVariant, SPIDER_DECK_SIZE};
use crate::core::{DealRng, GameConfig, SpiderError};
use crate::events::{EventSink, GameEvent};
use crate::rules::{is_complete_run, is_lost, is_valid_sequence, is_won, RUN_LENGTH};
use crate::zones::{CardInPile, Pile, Tableau, TABLEAU_PILES};

/// Piles that receive the larger initial stack.
pub const FIRST_PILE_COUNT: usize = 4;
/// Initial cards on each of the first piles.
pub const FIRST_PILE_CARDS: usize = 6;
/// Initial cards on the remaining piles.
pub const REST_PILE_CARDS: usize = 5;

/// A completed King-to-Ace run, King first.
pub type Run = SmallVec<[Card; RUN_LENGTH]>;

/// A game of spider.
pub struct GameState {
    tableau: Tableau,
    stock: Vector<Card>,
    completed: Vector<Run>,
    won: bool,
    lost: bool,
    history: History,
    config: GameConfig,
    seed: Option<u64>,
    sink: Option<Box<dyn EventSink>>,
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("tableau", &self.tableau)
            .field("stock", &self.stock.len())
            .field("completed", &self.completed.len())
            .field("won", &self.won)
            .field("lost", &self.lost)
            .field("history", &self.history.len())
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl GameState {
    // === Construction ===

    /// Deal a new game of the given suit variant with default settings.
    pub fn new(suit_variant: SuitVariant) -> Result<Self, SpiderError> {
        Self::with_config(GameConfig::new(suit_variant))
    }

    /// Deal a new game from a full configuration.
    #[instrument]
    pub fn with_config(config: GameConfig) -> Result<Self, SpiderError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => DealRng::new(seed),
            None => DealRng::from_entropy(),
        };

        let mut deck = SpiderDeck::new(config.suit_variant);
        deck.shuffle(&mut rng);

        if deck.len() != SPIDER_DECK_SIZE {
            return Err(SpiderError::InsufficientCards {
                expected: SPIDER_DECK_SIZE,
                found: deck.len(),
            });
        }

        let mut tableau = Tableau::new();
        for (i, pile) in tableau.iter_mut().enumerate() {
            let count = if i < FIRST_PILE_COUNT {
                FIRST_PILE_CARDS
            } else {
                REST_PILE_CARDS
            };
            for j in 0..count {
                let card = deck.draw()?;
                pile.add_card(card, j == count - 1);
            }
        }

        let stock: Vector<Card> = deck.draw_all().into_iter().collect();

        info!(
            seed = rng.seed(),
            variant = ?config.suit_variant,
            stock = stock.len(),
            "dealt new game"
        );

        Ok(Self {
            tableau,
            stock,
            completed: Vector::new(),
            won: false,
            lost: false,
            history: History::new(config.history_capacity),
            seed: Some(rng.seed()),
            config,
            sink: None,
        })
    }

    /// Deal a new game and report it to `sink` as the first event.
    pub fn with_sink(config: GameConfig, sink: impl EventSink + 'static) -> Result<Self, SpiderError> {
        let mut game = Self::with_config(config)?;
        game.set_event_sink(sink);
        if let Some(seed) = game.seed {
            let suit_variant = game.config.suit_variant;
            game.emit(GameEvent::Dealt { seed, suit_variant });
        }
        Ok(game)
    }

    /// Assemble a game from an arbitrary position.
    ///
    /// No scan runs and history starts empty. The win latch reflects
    /// `completed`; the loss latch starts clear. Uses the default
    /// configuration, so [`validate`](Self::validate) only passes for
    /// positions that hold a full two-suit deck.
    pub fn from_parts(
        tableau: Tableau,
        stock: impl IntoIterator<Item = Card>,
        completed: impl IntoIterator<Item = Run>,
    ) -> Self {
        let config = GameConfig::default();
        let completed: Vector<Run> = completed.into_iter().collect();
        Self {
            won: is_won(completed.len()),
            lost: false,
            tableau,
            stock: stock.into_iter().collect(),
            completed,
            history: History::new(config.history_capacity),
            config,
            seed: None,
            sink: None,
        }
    }

    // === Observer ===

    /// Install the event sink, replacing any previous one.
    pub fn set_event_sink(&mut self, sink: impl EventSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    /// Remove the event sink.
    pub fn clear_event_sink(&mut self) {
        self.sink = None;
    }

    fn emit(&mut self, event: GameEvent) {
        if let Some(sink) = self.sink.as_mut() {
            sink.on_event(&event);
        }
    }

    // === Queries ===

    /// The piles.
    #[must_use]
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Cards left in the stock.
    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Number of completed runs.
    #[must_use]
    pub fn completed_runs(&self) -> usize {
        self.completed.len()
    }

    /// Completed runs, oldest first.
    pub fn completed(&self) -> impl Iterator<Item = &Run> + '_ {
        self.completed.iter()
    }

    /// Win latch.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Loss latch.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.lost
    }

    /// The configuration this game was dealt with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shuffle seed of the deal, `None` for assembled positions.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// True if the stock holds a full row.
    #[must_use]
    pub fn can_deal_row(&self) -> bool {
        self.stock.len() >= TABLEAU_PILES
    }

    /// Snapshots available to undo.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// True if [`undo`](Self::undo) would succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Fresh read-only projection for renderers.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::project(self)
    }

    // === Operations ===

    /// Deal one face-up card from the stock onto each pile.
    #[instrument(skip(self), fields(stock = self.stock.len()))]
    pub fn deal_row(&mut self) -> Result<(), SpiderError> {
        if !self.can_deal_row() {
            warn!("not enough stock to deal a row");
            return Err(SpiderError::InsufficientStock {
                available: self.stock.len(),
            });
        }

        self.push_history();

        let row = self.stock.split_off(self.stock.len() - TABLEAU_PILES);
        for (pile, card) in self.tableau.iter_mut().zip(row.into_iter().rev()) {
            pile.add_card(card, true);
        }

        debug!(stock = self.stock.len(), "dealt row");
        let stock_remaining = self.stock.len();
        self.emit(GameEvent::RowDealt { stock_remaining });

        self.settle();
        Ok(())
    }

    /// Move the cards from `start` to the top of pile `source` onto pile `dest`.
    ///
    /// All-or-nothing: on any error the tableau, stock and history are
    /// unchanged.
    #[instrument(skip(self))]
    pub fn move_sequence(&mut self, source: usize, start: usize, dest: usize) -> Result<(), SpiderError> {
        let sequence = match self.validate_move(source, start, dest) {
            Ok(sequence) => sequence,
            Err(err) => {
                warn!(error = %err, "move rejected");
                return Err(err);
            }
        };

        let before = self.snapshot();
        let moved = match self.execute_move(source, start, dest, &sequence) {
            Ok(moved) => moved,
            Err(err) => {
                error!(error = %err, "move failed after validation");
                self.restore(before);
                return Err(err);
            }
        };
        self.history.push(before);

        debug!(cards = moved, "moved sequence");
        self.emit(GameEvent::SequenceMoved {
            from: source,
            start,
            to: dest,
            cards: moved,
        });

        self.settle();
        Ok(())
    }

    /// Restore the state captured before the most recent operation.
    #[instrument(skip(self), fields(history = self.history.len()))]
    pub fn undo(&mut self) -> Result<(), SpiderError> {
        let snapshot = self.history.pop().ok_or(SpiderError::NoHistory)?;
        self.restore(snapshot);

        let history_remaining = self.history.len();
        debug!(history_remaining, "undone");
        self.emit(GameEvent::Undone { history_remaining });
        Ok(())
    }

    /// Remove every complete run sitting on top of a pile.
    ///
    /// Runs after each move and row deal; calling it again with nothing new
    /// to remove is a no-op. Returns how many runs were removed. Sets the
    /// win latch once enough runs are complete.
    pub fn scan_completed_runs(&mut self) -> usize {
        let mut removed = 0;

        for index in 0..TABLEAU_PILES {
            while let Some(run) = take_complete_run(&mut self.tableau[index]) {
                let suit = run[0].suit;
                self.completed.push_back(run);
                removed += 1;

                let completed = self.completed.len();
                debug!(pile = index, ?suit, completed, "run completed");
                self.emit(GameEvent::RunCompleted {
                    pile: index,
                    suit,
                    completed,
                });
            }
        }

        if !self.won && is_won(self.completed.len()) {
            self.won = true;
            info!(completed = self.completed.len(), "game won");
            self.emit(GameEvent::Won);
        }

        removed
    }

    /// Check the card-conservation invariant.
    ///
    /// Every card of the configured deck must be present exactly as many
    /// times as the suit variant prescribes, across stock, piles and
    /// completed runs.
    pub fn validate(&self) -> Result<(), SpiderError> {
        let total = self.stock.len() + self.tableau.card_count() + self.completed.len() * RUN_LENGTH;
        if total != SPIDER_DECK_SIZE {
            return Err(SpiderError::InvariantViolation {
                message: format!("expected {SPIDER_DECK_SIZE} cards, found {total}"),
            });
        }

        if let Some(run) = self.completed.iter().find(|run| run.len() != RUN_LENGTH) {
            return Err(SpiderError::InvariantViolation {
                message: format!("completed run holds {} cards", run.len()),
            });
        }

        let mut counts: FxHashMap<Card, usize> = FxHashMap::default();
        let cards = self
            .stock
            .iter()
            .copied()
            .chain(self.tableau.iter().flat_map(|pile| pile.iter().map(|c| c.card)))
            .chain(self.completed.iter().flat_map(|run| run.iter().copied()));
        for card in cards {
            *counts.entry(card).or_insert(0) += 1;
        }

        let variant = self.config.suit_variant;
        let expected = variant.copies_per_card();
        for (card, count) in counts {
            if !variant.suits().contains(&card.suit) {
                return Err(SpiderError::InvariantViolation {
                    message: format!("{card} is not part of a {variant:?} deck"),
                });
            }
            if count != expected {
                return Err(SpiderError::InvariantViolation {
                    message: format!("{card} appears {count} times, expected {expected}"),
                });
            }
        }

        Ok(())
    }

    /// Capture the undoable part of the state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tableau: self.tableau.clone(),
            stock: self.stock.clone(),
            completed: self.completed.clone(),
            won: self.won,
            lost: self.lost,
        }
    }

    // === Internals ===

    fn push_history(&mut self) {
        let snapshot = self.snapshot();
        self.history.push(snapshot);
    }

    fn restore(&mut self, snapshot: Snapshot) {
        let Snapshot {
            tableau,
            stock,
            completed,
            won,
            lost,
        } = snapshot;
        self.tableau = tableau;
        self.stock = stock;
        self.completed = completed;
        self.won = won;
        self.lost = lost;
    }

    /// Post-mutation bookkeeping: completion scan, then loss detection once
    /// the stock is gone.
    fn settle(&mut self) {
        self.scan_completed_runs();
        if self.stock.is_empty() {
            self.check_lost();
        }
    }

    fn check_lost(&mut self) {
        if !self.lost && is_lost(&self.tableau, self.stock.len()) {
            self.lost = true;
            info!("no moves left, game lost");
            self.emit(GameEvent::Lost);
        }
    }

    fn validate_move(&self, source: usize, start: usize, dest: usize) -> Result<Vec<CardInPile>, SpiderError> {
        let src = self
            .tableau
            .get(source)
            .ok_or(SpiderError::InvalidSourceIndex { index: source })?;
        let dst = self
            .tableau
            .get(dest)
            .ok_or(SpiderError::InvalidDestinationIndex { index: dest })?;
        if source == dest {
            return Err(SpiderError::SamePileMove);
        }
        if start >= src.len() {
            return Err(SpiderError::InvalidStartIndex {
                index: start,
                len: src.len(),
            });
        }

        let sequence = src.cards().split_off(start);
        if sequence.is_empty() {
            return Err(SpiderError::NoCardsToMove);
        }
        if let Some(offset) = sequence.iter().position(|c| !c.face_up) {
            return Err(SpiderError::CardFaceDown {
                position: start + offset,
            });
        }
        if !is_valid_sequence(&sequence) {
            return Err(SpiderError::InvalidSequence);
        }
        if !dst.can_accept(&sequence) {
            return Err(SpiderError::DestinationNotAccepting);
        }

        Ok(sequence)
    }

    fn execute_move(
        &mut self,
        source: usize,
        start: usize,
        dest: usize,
        sequence: &[CardInPile],
    ) -> Result<usize, SpiderError> {
        let (src, dst) = self
            .tableau
            .pair_mut(source, dest)
            .ok_or(SpiderError::SamePileMove)?;

        let removed = src
            .remove_cards_from(start)
            .map_err(|source| SpiderError::RemoveCardsFailed { source })?;

        if removed != sequence {
            src.add_cards(removed);
            return Err(SpiderError::SequenceMismatch);
        }

        let moved = removed.len();
        dst.add_cards(removed);
        src.flip_top_card_if_face_down()
            .map_err(|source| SpiderError::FlipFailed { source })?;

        Ok(moved)
    }
}

/// Detach the top thirteen cards of `pile` if they form a complete run,
/// exposing the next card.
fn take_complete_run(pile: &mut Pile) -> Option<Run> {
    let start = pile.len().checked_sub(RUN_LENGTH)?;
    let tail: SmallVec<[CardInPile; RUN_LENGTH]> = pile.iter().skip(start).copied().collect();
    if !is_complete_run(&tail) {
        return None;
    }

    let removed = match pile.remove_cards_from(start) {
        Ok(removed) => removed,
        Err(err) => {
            error!(error = %err, "failed to detach complete run");
            return None;
        }
    };
    if let Err(err) = pile.flip_top_card_if_face_down() {
        error!(error = %err, "failed to flip card under completed run");
    }
    Some(removed.into_iter().map(|c| c.card).collect())
}
