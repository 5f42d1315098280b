//! Game store that owns the state and drives persist/render.

use crate::config::GameConfig;
use crate::core::{fallback_name, GameState, HistoryEntry};
use crate::render::{render, GameView, HistoryView, Renderer};
use crate::rules::{ScoreChange, ScoreRules, ScoreRulesBuilder, ScoreViolation};
use crate::storage::{clear_game, load_game, save_game, Storage};
use crate::store::outcome::MutationOutcome;
use chrono::{DateTime, Utc};
use stillwater::validation::Validation;
use tracing::{debug, info, instrument, warn};

/// Owns the game and is the only way to change it.
///
/// Each entry point performs one mutation, persists the result through the
/// [`Storage`] and re-renders through the [`Renderer`]. Storage failures
/// are logged and never reach the caller.
///
/// # Example
///
/// ```rust
/// use muggins::config::GameConfig;
/// use muggins::render::GameView;
/// use muggins::storage::MemoryStorage;
/// use muggins::store::GameStore;
///
/// let mut store = GameStore::open(GameConfig::default(), MemoryStorage::new(), |_: &GameView| {});
///
/// assert!(store.add_score(0, 35).is_applied());
/// assert_eq!(store.state().player(0).unwrap().score(), 35);
///
/// assert!(store.undo_score(0).is_applied());
/// assert_eq!(store.state().player(0).unwrap().score(), 0);
/// ```
pub struct GameStore<S: Storage, R: Renderer> {
    config: GameConfig,
    rules: ScoreRules,
    storage: S,
    renderer: R,
    state: GameState,
    history_view: HistoryView,
}

impl<S: Storage, R: Renderer> GameStore<S, R> {
    /// Load the saved game (or defaults) and draw it once.
    #[instrument(skip_all, fields(key = config.storage_key()))]
    pub fn open(config: GameConfig, storage: S, renderer: R) -> Self {
        let state = load_game(&storage, &config);
        let mut store = Self {
            rules: config.rules(),
            config,
            storage,
            renderer,
            state,
            history_view: HistoryView::Closed,
        };
        store.redraw();
        store
    }

    /// Add house rules on top of the configured ones.
    ///
    /// The configured score limit always applies; a builder can only
    /// tighten it.
    pub fn with_rules(mut self, rules: ScoreRulesBuilder) -> Self {
        self.rules = rules.cap_at(self.config.max_score()).build();
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn history_view(&self) -> HistoryView {
        self.history_view
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Current view (pure).
    pub fn view(&self) -> GameView {
        render(&self.state, self.history_view, &self.config)
    }

    /// Add `points` to a player, stamped with the current time.
    pub fn add_score(&mut self, index: usize, points: u32) -> MutationOutcome {
        self.add_score_at(index, points, Utc::now())
    }

    /// Add `points` to a player with an explicit timestamp.
    ///
    /// Refused without touching the state when the player does not exist,
    /// `points` is zero, or the new score would pass the score limit.
    #[instrument(skip(self))]
    pub fn add_score_at(
        &mut self,
        index: usize,
        points: u32,
        timestamp: DateTime<Utc>,
    ) -> MutationOutcome {
        let Some(player) = self.state.player(index) else {
            warn!("Unknown player");
            return MutationOutcome::rejected(ScoreViolation::UnknownPlayer { index });
        };

        let change = ScoreChange {
            player: index,
            current_score: player.score(),
            points,
        };
        if let Validation::Failure(errors) = self.rules.enforce(&change) {
            let violations: Vec<ScoreViolation> = errors.iter().cloned().collect();
            warn!(?violations, "Increment refused");
            return MutationOutcome::Rejected(violations);
        }

        if let Some(player) = self.state.player_mut(index) {
            player.record(HistoryEntry::new(points, timestamp));
            debug!(score = player.score(), "Points added");
        }
        self.commit();
        MutationOutcome::Applied
    }

    /// Reverse a player's most recent increment.
    #[instrument(skip(self))]
    pub fn undo_score(&mut self, index: usize) -> MutationOutcome {
        let Some(player) = self.state.player_mut(index) else {
            warn!("Unknown player");
            return MutationOutcome::rejected(ScoreViolation::UnknownPlayer { index });
        };

        let Some(undone) = player.undo() else {
            debug!("Nothing to undo");
            return MutationOutcome::rejected(ScoreViolation::NothingToUndo { index });
        };
        debug!(points = undone.points, score = player.score(), "Increment undone");

        self.commit();
        MutationOutcome::Applied
    }

    /// Store the edited name field for a player.
    ///
    /// The text is trimmed; a blank name becomes `Player N`. The name field
    /// already shows the edit, so only persistence follows.
    #[instrument(skip(self))]
    pub fn rename_player(&mut self, index: usize, text: &str) -> MutationOutcome {
        let Some(player) = self.state.player_mut(index) else {
            warn!("Unknown player");
            return MutationOutcome::rejected(ScoreViolation::UnknownPlayer { index });
        };

        let trimmed = text.trim();
        let name = if trimmed.is_empty() {
            fallback_name(index)
        } else {
            trimmed.to_string()
        };
        debug!(%name, "Player renamed");
        player.set_name(name);

        save_game(&mut self.storage, &self.config, &self.state);
        MutationOutcome::Applied
    }

    /// Zero every score, clear every history and close the history view.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.state.reset();
        self.history_view = HistoryView::Closed;
        info!("Scores reset");
        self.commit();
    }

    /// Forget the saved game entirely and start over from defaults.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        clear_game(&mut self.storage, &self.config);
        self.state = load_game(&self.storage, &self.config);
        self.history_view = HistoryView::Closed;
        info!("New game started");
        self.redraw();
    }

    /// Open the history view for a player.
    #[instrument(skip(self))]
    pub fn show_history(&mut self, index: usize) -> MutationOutcome {
        if self.state.player(index).is_none() {
            warn!("Unknown player");
            return MutationOutcome::rejected(ScoreViolation::UnknownPlayer { index });
        }
        self.history_view = HistoryView::Open { player: index };
        self.redraw();
        MutationOutcome::Applied
    }

    /// Close the history view.
    #[instrument(skip(self))]
    pub fn close_history(&mut self) {
        self.history_view = HistoryView::Closed;
        self.redraw();
    }

    fn commit(&mut self) {
        save_game(&mut self.storage, &self.config, &self.state);
        self.redraw();
    }

    /// Draw the current view again without changing anything.
    pub fn redraw(&mut self) {
        let view = self.view();
        self.renderer.render(&view);
    }
}
