use serde::{Deserialize, Serialize};

use crate::*;

/// Progress of the whole multi-level session.
///
/// Valid transitions:
/// - `Playing` -> `LevelComplete` (last mine found, more levels remain)
/// - `Playing` -> `AllComplete` (last mine of the last level found)
/// - `LevelComplete` -> `Playing` (explicit advance)
/// - any -> `Playing` at level 0 (explicit restart)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Clicks on the current level are accepted.
    Playing,
    /// Current level cleared; waiting for `advance_level`.
    LevelComplete,
    /// Last level cleared; only `restart` leaves this state.
    AllComplete,
}

impl SessionState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Terminal for the current level: no further clicks are accepted.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::LevelComplete | Self::AllComplete)
    }
}

/// What a single click did, for the rendering layer to react to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Out of bounds, already revealed, or not currently playing.
    Ignored,
    /// Safe cell; carries the number of cells uncovered, cascade included.
    Opened(CellCount),
    /// A mine, with the level quota still unmet.
    MineFound,
    /// The level's last mine; the session now waits in `LevelComplete`.
    LevelCleared,
    /// The last mine of the last level; the score has been reported.
    AllCleared,
}

impl ClickOutcome {
    /// Whether this outcome changed anything worth redrawing.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Owns the level table, the active board, and all session counters.
///
/// Single-owner by design: one session processes one click to completion at
/// a time, so the board is never shared or aliased mid-reveal.
pub struct GameSession<G, R> {
    levels: LevelSequence,
    generator: G,
    reporter: R,
    board: Board,
    current_level: usize,
    total_clicks: u32,
    exploded_mines: CellCount,
    state: SessionState,
}

impl<R: ScoreReporter> GameSession<RandomMineGenerator, R> {
    /// Session over `levels` with uniform random mine placement.
    pub fn new(levels: LevelSequence, seed: u64, reporter: R) -> Self {
        Self::with_generator(levels, RandomMineGenerator::new(seed), reporter)
    }
}

impl<G: MineGenerator, R: ScoreReporter> GameSession<G, R> {
    /// Session with a caller-supplied placement strategy. `levels` is
    /// already validated by construction, so level 0 starts immediately.
    pub fn with_generator(levels: LevelSequence, mut generator: G, reporter: R) -> Self {
        let board = Board::generate(&levels[0], &mut generator);
        Self {
            levels,
            generator,
            reporter,
            board,
            current_level: 0,
            total_clicks: 0,
            exploded_mines: 0,
            state: SessionState::Playing,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn level(&self) -> &LevelConfig {
        &self.levels[self.current_level]
    }

    pub fn total_clicks(&self) -> u32 {
        self.total_clicks
    }

    pub fn exploded_mines(&self) -> CellCount {
        self.exploded_mines
    }

    /// Mines still hidden on the current level; the HUD counts this down.
    pub fn mines_left(&self) -> CellCount {
        self.level().mines - self.exploded_mines
    }

    /// Applies one player click. Every accepted click costs exactly one
    /// point of `total_clicks`, mine or not; rejected clicks cost nothing.
    pub fn click(&mut self, pos: Pos) -> ClickOutcome {
        if !self.state.is_playing() || !self.board.in_bounds(pos) || self.board.is_revealed(pos) {
            return ClickOutcome::Ignored;
        }

        self.total_clicks += 1;

        match self.board.reveal(pos) {
            RevealOutcome::Opened(opened) => ClickOutcome::Opened(opened),
            RevealOutcome::HitMine => {
                self.exploded_mines += 1;
                if self.exploded_mines < self.level().mines {
                    return ClickOutcome::MineFound;
                }
                if self.levels.is_last(self.current_level) {
                    // the win is committed before the report is attempted
                    self.state = SessionState::AllComplete;
                    self.report_score();
                    ClickOutcome::AllCleared
                } else {
                    self.state = SessionState::LevelComplete;
                    ClickOutcome::LevelCleared
                }
            }
        }
    }

    /// (Re)initializes the board and per-level counters at `index`,
    /// keeping the cumulative click total.
    pub fn start_level(&mut self, index: usize) -> Result<()> {
        if self.levels.get(index).is_none() {
            return Err(GameError::UnknownLevel(index));
        }
        self.begin_level(index);
        Ok(())
    }

    /// Moves to the next level; only valid while waiting in `LevelComplete`.
    pub fn advance_level(&mut self) -> Result<()> {
        match self.state {
            SessionState::LevelComplete => {
                // `LevelComplete` is only entered when a next level exists
                self.begin_level(self.current_level + 1);
                Ok(())
            }
            SessionState::Playing | SessionState::AllComplete => Err(GameError::AdvanceNotAllowed),
        }
    }

    /// Back to level 0 with zeroed counters, from any state.
    pub fn restart(&mut self) {
        self.total_clicks = 0;
        self.begin_level(0);
    }

    fn begin_level(&mut self, index: usize) {
        self.current_level = index;
        let config = *self.level();
        self.board = Board::generate(&config, &mut self.generator);
        self.exploded_mines = 0;
        self.state = SessionState::Playing;
        log::debug!("level {} started", config.id);
    }

    fn report_score(&mut self) {
        if let Err(err) = self.reporter.submit(self.total_clicks) {
            log::warn!("score submission failed: {}", err);
        }
    }
}
