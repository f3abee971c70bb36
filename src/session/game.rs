//! The game orchestrator.
//!
//! `Game` owns everything a running session needs: the current
//! `SessionState`, the RNG, the clock, the hint deadline and the score
//! store. Player input goes through `click_tile`, `request_shuffle` and
//! `request_hint`; time goes through `advance`.
//!
//! ## Example
//!
//! ```
//! use rust_mahjong::core::Difficulty;
//! use rust_mahjong::session::{Game, Status};
//!
//! let mut game = Game::for_difficulty(Difficulty::Easy, "Asha").unwrap();
//! assert_eq!(game.status(), Status::Idle);
//!
//! let first = game.free_tiles()[0];
//! game.click_tile(first);
//! assert_eq!(game.status(), Status::Playing);
//!
//! game.advance(2500);
//! assert_eq!(game.elapsed_secs(), 2);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::board::{self, Board};
use crate::core::{
    Difficulty, DifficultyConfig, EngineConfig, EngineError, GameRng, GameRngState, StoreError,
    TileId,
};
use crate::scores::{MemoryStore, NewScore, ScoreEntry, ScoreStore};
use crate::solver::Hint;

use super::action::{Action, Transition};
use super::schedule::{Deadline, RepeatingTask};
use super::state::{SessionState, Status};

/// Transitions produced by one call to `Game::advance`.
///
/// Usually a tick or two and maybe a hint expiry, so this stays inline.
pub type Fired = SmallVec<[Transition; 4]>;

/// A running session.
#[derive(Debug)]
pub struct Game<S: ScoreStore = MemoryStore> {
    config: DifficultyConfig,
    engine: EngineConfig,
    player: String,
    store: S,
    rng: GameRng,
    state: SessionState,
    ticker: RepeatingTask,
    hint_clear: Deadline,
}

/// Everything needed to resume a session.
#[derive(Serialize, Deserialize)]
struct Checkpoint {
    state: SessionState,
    rng: GameRngState,
    ticker: RepeatingTask,
    hint_clear: Deadline,
}

impl Game<MemoryStore> {
    /// A built-in level with default engine settings and an in-memory
    /// leaderboard.
    pub fn for_difficulty(
        difficulty: Difficulty,
        player: impl Into<String>,
    ) -> Result<Self, EngineError> {
        Game::new(
            DifficultyConfig::for_difficulty(difficulty),
            EngineConfig::default(),
            player,
            MemoryStore::new(),
        )
    }
}

impl<S: ScoreStore> Game<S> {
    /// Deal a fresh board for `config` and start in `Idle`.
    pub fn new(
        config: DifficultyConfig,
        engine: EngineConfig,
        player: impl Into<String>,
        store: S,
    ) -> Result<Self, EngineError> {
        let mut rng = GameRng::new(engine.seed);
        let board = board::generate(&config, &mut rng, engine.max_attempts)?;
        Ok(Self::assemble(config, engine, player.into(), store, rng, board))
    }

    /// Start a session on a board dealt elsewhere.
    ///
    /// The RNG is still seeded from `engine.seed`; it drives shuffles and
    /// any later `restart`.
    pub fn with_board(
        config: DifficultyConfig,
        engine: EngineConfig,
        player: impl Into<String>,
        store: S,
        board: Board,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let rng = GameRng::new(engine.seed);
        Ok(Self::assemble(config, engine, player.into(), store, rng, board))
    }

    fn assemble(
        config: DifficultyConfig,
        engine: EngineConfig,
        player: String,
        store: S,
        rng: GameRng,
        board: Board,
    ) -> Self {
        let state = SessionState::new(board, &config);
        let ticker = RepeatingTask::new(engine.tick_interval_ms);
        Self {
            config,
            engine,
            player,
            store,
            rng,
            state,
            ticker,
            hint_clear: Deadline::new(),
        }
    }

    // === Views ===

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.state.status
    }

    #[must_use]
    pub fn free_tiles(&self) -> Vec<TileId> {
        self.state.free_tiles()
    }

    #[must_use]
    pub fn selection(&self) -> Option<TileId> {
        self.state.selection
    }

    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        self.state.hint
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.state.elapsed_secs
    }

    #[must_use]
    pub fn shuffles_remaining(&self) -> u32 {
        self.state.shuffles_remaining
    }

    #[must_use]
    pub fn hints_remaining(&self) -> u32 {
        self.state.hints_remaining
    }

    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.state.matched_pairs
    }

    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        self.state.total_pairs
    }

    /// Leaderboard position of this session's win.
    #[must_use]
    pub fn rank(&self) -> Option<usize> {
        self.state.rank
    }

    #[must_use]
    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Milliseconds until the current hint is cleared.
    #[must_use]
    pub fn hint_remaining_ms(&self) -> Option<u32> {
        self.hint_clear.remaining_ms()
    }

    /// Ranked entries for this session's difficulty.
    pub fn leaderboard(&self) -> Result<Vec<ScoreEntry>, StoreError> {
        self.store.load_ranked(self.state.difficulty)
    }

    // === Actions ===

    pub fn click_tile(&mut self, id: TileId) -> Transition {
        self.dispatch(Action::Click(id))
    }

    pub fn request_shuffle(&mut self) -> Transition {
        self.dispatch(Action::Shuffle)
    }

    pub fn request_hint(&mut self) -> Transition {
        self.dispatch(Action::Hint)
    }

    /// Throw the session away and deal a new board for the same level.
    ///
    /// On error the current session is left as it was.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        let board = board::generate(&self.config, &mut self.rng, self.engine.max_attempts)?;
        self.state = SessionState::new(board, &self.config);
        self.ticker.cancel();
        self.hint_clear.cancel();
        debug!(difficulty = %self.config.difficulty, "session restarted");
        Ok(())
    }

    /// Let `elapsed_ms` of wall time pass.
    ///
    /// Fires the clock once per elapsed tick interval while playing, and
    /// clears the hint when its display time runs out.
    pub fn advance(&mut self, elapsed_ms: u32) -> Fired {
        let mut fired = Fired::new();
        for _ in 0..self.ticker.advance(elapsed_ms) {
            let transition = self.dispatch(Action::Tick);
            if !transition.is_ignored() {
                fired.push(transition);
            }
        }
        if self.hint_clear.advance(elapsed_ms) {
            let transition = self.dispatch(Action::ClearHint);
            if !transition.is_ignored() {
                fired.push(transition);
            }
        }
        fired
    }

    fn dispatch(&mut self, action: Action) -> Transition {
        let step = self
            .state
            .apply(&action, &mut self.rng, self.engine.max_attempts);
        let before = self.state.status;
        self.state = step.state;
        let transition = step.transition;

        match transition {
            Transition::HintShown(_) => self.hint_clear.arm(self.engine.hint_display_ms),
            Transition::HintCleared => self.hint_clear.cancel(),
            t if t.mutates_board() => self.hint_clear.cancel(),
            _ => {}
        }

        if self.state.status != before {
            debug!(from = ?before, to = ?self.state.status, "status changed");
        }
        if let Transition::Won { .. } = transition {
            self.record_win();
        }
        self.sync_ticker();
        transition
    }

    fn record_win(&mut self) {
        let score = NewScore::now(self.player.clone(), self.state.elapsed_secs);
        match self.store.append_and_rank(self.state.difficulty, score) {
            Ok(rank) => {
                self.state.rank = rank;
                info!(
                    player = %self.player,
                    difficulty = %self.state.difficulty,
                    elapsed_secs = self.state.elapsed_secs,
                    rank = ?rank,
                    "board cleared"
                );
            }
            Err(err) => {
                warn!(error = %err, "failed to record score");
                self.state.rank = None;
            }
        }
    }

    fn sync_ticker(&mut self) {
        if self.state.status == Status::Playing {
            self.ticker.start();
        } else {
            self.ticker.cancel();
        }
    }

    // === Checkpoints ===

    /// Encode the session so it can be picked up later with `resume`.
    pub fn snapshot(&self) -> Result<Vec<u8>, EngineError> {
        let checkpoint = Checkpoint {
            state: self.state.clone(),
            rng: self.rng.state(),
            ticker: self.ticker,
            hint_clear: self.hint_clear,
        };
        Ok(bincode::serialize(&checkpoint)?)
    }

    /// Rebuild a session from `snapshot` bytes.
    ///
    /// The checkpoint must have been taken on the same difficulty as
    /// `config`.
    pub fn resume(
        bytes: &[u8],
        config: DifficultyConfig,
        engine: EngineConfig,
        player: impl Into<String>,
        store: S,
    ) -> Result<Self, EngineError> {
        let checkpoint: Checkpoint = bincode::deserialize(bytes)?;
        if checkpoint.state.difficulty != config.difficulty {
            return Err(EngineError::InvalidConfig(format!(
                "checkpoint is for {}, config is for {}",
                checkpoint.state.difficulty, config.difficulty
            )));
        }
        Ok(Self {
            config,
            engine,
            player: player.into(),
            store,
            rng: GameRng::from_state(&checkpoint.rng),
            state: checkpoint.state,
            ticker: checkpoint.ticker,
            hint_clear: checkpoint.hint_clear,
        })
    }
}
