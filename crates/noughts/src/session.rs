//! Game session: sequences the board engine and the decision engine.
//!
//! The session is the only place that knows whose turn it is and when a
//! game is over. Both engines stay stateless; the session calls them
//! synchronously and gates every call on the current state, so a caller
//! that adds a "thinking" pause between [`Session::play_human`] and
//! [`Session::play_automated`] cannot observe a half-applied board.

use derive_new::new;
use noughts_board::{
    BalancedMarks, Board, GameOutcome, InvariantViolation, Mark, MonotonicTransition, Move,
    MoveError, Position, classify, invariants, new_game,
};
use noughts_decision::{DecisionEngine, DecisionError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Match-level view of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    /// Moves are still possible.
    InProgress,
    /// The human completed a line.
    HumanWin,
    /// The automated player completed a line.
    AutomatedWin,
    /// Full board, no line.
    Draw,
}

impl MatchState {
    /// Derives the match state from a classified board.
    ///
    /// An outcome whose line index is off the board has no winner and
    /// maps to `InProgress`.
    pub fn from_outcome(outcome: GameOutcome, board: &Board) -> Self {
        match outcome {
            GameOutcome::InProgress => MatchState::InProgress,
            GameOutcome::Draw => MatchState::Draw,
            won => match won.winner(board) {
                Some(Mark::PlayerA) => MatchState::HumanWin,
                Some(Mark::PlayerB) => MatchState::AutomatedWin,
                None => MatchState::InProgress,
            },
        }
    }

    /// Returns true once no further move is accepted.
    pub fn is_terminal(self) -> bool {
        self != MatchState::InProgress
    }
}

/// Finished-game counts for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by the human.
    pub human: u32,
    /// Games won by the automated player.
    pub automated: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, state: MatchState) {
        match state {
            MatchState::HumanWin => self.human += 1,
            MatchState::AutomatedWin => self.automated += 1,
            MatchState::Draw => self.draws += 1,
            MatchState::InProgress => {}
        }
    }
}

/// Result of one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Turn {
    /// The move that was applied.
    pub played: Move,
    /// Board classification after the move.
    pub outcome: GameOutcome,
    /// Match state after the move.
    pub state: MatchState,
}

/// Error from a session operation. The session is unchanged on error.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum SessionError {
    /// The board engine rejected the move.
    #[display("{}", _0)]
    Move(MoveError),

    /// The decision engine could not choose a move.
    #[display("{}", _0)]
    Decision(DecisionError),

    /// The game is over; start a new one first.
    #[display("Game is already over")]
    GameOver,

    /// The given mark is not the one to move.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Mark),

    /// A move broke a board invariant.
    #[display("{}", _0)]
    Invariant(InvariantViolation),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(err) => Some(err),
            SessionError::Decision(err) => Some(err),
            SessionError::Invariant(err) => Some(err),
            SessionError::GameOver | SessionError::NotYourTurn(_) => None,
        }
    }
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

impl From<DecisionError> for SessionError {
    fn from(err: DecisionError) -> Self {
        SessionError::Decision(err)
    }
}

impl From<InvariantViolation> for SessionError {
    fn from(err: InvariantViolation) -> Self {
        SessionError::Invariant(err)
    }
}

/// One human against the decision engine, over any number of games.
#[derive(Debug, Clone)]
pub struct Session {
    engine: DecisionEngine,
    board: Board,
    to_move: Mark,
    tally: Tally,
}

impl Session {
    /// Starts a session; the human opens the first game.
    #[instrument(skip(engine))]
    pub fn new(engine: DecisionEngine) -> Self {
        info!("Creating new session");
        Self {
            engine,
            board: new_game(),
            to_move: Mark::PlayerA,
            tally: Tally::default(),
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Classification of the current board, computed afresh.
    pub fn outcome(&self) -> GameOutcome {
        classify(&self.board)
    }

    /// Match state of the current game.
    pub fn state(&self) -> MatchState {
        MatchState::from_outcome(self.outcome(), &self.board)
    }

    /// Mark expected to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Results of finished games so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// The decision engine in use.
    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// Applies the human's move at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameOver`] if the current game has finished.
    /// - [`SessionError::NotYourTurn`] if the automated player is to move.
    /// - [`SessionError::Move`] for off-board or occupied cells.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, row: usize, col: usize) -> Result<Turn, SessionError> {
        self.ensure_turn(Mark::PlayerA)?;
        let position = Position::new(row, col)?;
        self.play(Move::new(position, Mark::PlayerA))
    }

    /// Asks the decision engine for a move and applies it.
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameOver`] if the current game has finished.
    /// - [`SessionError::NotYourTurn`] if the human is to move.
    /// - [`SessionError::Decision`] if the engine fails.
    #[instrument(skip(self))]
    pub fn play_automated(&mut self) -> Result<Turn, SessionError> {
        self.ensure_turn(Mark::PlayerB)?;
        let position = self.engine.select_move(&self.board)?;
        self.play(Move::new(position, Mark::PlayerB))
    }

    /// Clears the board and returns the mark that opens the new game.
    ///
    /// The automated player opens if and only if it won the game just
    /// finished; otherwise the human opens. Abandoning an unfinished game
    /// also hands the opening to the human.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> Mark {
        let opener = match self.state() {
            MatchState::AutomatedWin => Mark::PlayerB,
            _ => Mark::PlayerA,
        };
        self.board = new_game();
        self.to_move = opener;
        info!(?opener, "New game");
        opener
    }

    fn ensure_turn(&self, mark: Mark) -> Result<(), SessionError> {
        if self.outcome().is_terminal() {
            debug!("Move after game over");
            return Err(SessionError::GameOver);
        }
        if self.to_move != mark {
            warn!(?mark, expected = ?self.to_move, "Move out of turn");
            return Err(SessionError::NotYourTurn(mark));
        }
        Ok(())
    }

    fn play(&mut self, mov: Move) -> Result<Turn, SessionError> {
        let next = self.board.apply(mov)?;

        if cfg!(debug_assertions) {
            invariants::check::<Board, BalancedMarks>(&next)?;
            invariants::check::<(Board, Board), MonotonicTransition>(&(self.board, next))?;
        }

        let outcome = classify(&next);
        let state = MatchState::from_outcome(outcome, &next);

        self.board = next;
        self.to_move = mov.mark.opponent();
        if state.is_terminal() {
            self.tally.record(state);
            info!(?state, %outcome, "Game over");
        }

        Ok(Turn::new(mov, outcome, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_decision::{CellCodes, DenseLayer, ModelConfig};

    /// Engine whose scores follow `bias` and ignore the board.
    fn positional(bias: [f64; 9]) -> DecisionEngine {
        let rows = bias
            .iter()
            .map(|b| {
                let mut row = vec![0.0; 10];
                row[0] = *b;
                row
            })
            .collect();
        let layer = DenseLayer::new(rows, true).unwrap();
        DecisionEngine::from_config(ModelConfig::new(CellCodes::default(), vec![layer])).unwrap()
    }

    /// Prefers the top row, left to right.
    fn top_row_engine() -> DecisionEngine {
        positional([0.9, 0.8, 0.7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
    }

    #[test]
    fn test_human_opens_first_game() {
        let session = Session::new(top_row_engine());
        assert_eq!(session.to_move(), Mark::PlayerA);
        assert_eq!(session.state(), MatchState::InProgress);
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = Session::new(top_row_engine());
        let turn = session.play_human(1, 1).unwrap();
        assert_eq!(turn.state, MatchState::InProgress);
        assert_eq!(session.to_move(), Mark::PlayerB);

        assert_eq!(
            session.play_human(2, 2),
            Err(SessionError::NotYourTurn(Mark::PlayerA))
        );

        let turn = session.play_automated().unwrap();
        assert_eq!(turn.played.position.index(), 0);
        assert_eq!(session.to_move(), Mark::PlayerA);
    }

    #[test]
    fn test_rejected_move_leaves_session_unchanged() {
        let mut session = Session::new(top_row_engine());
        session.play_human(1, 1).unwrap();
        session.play_automated().unwrap();
        let before = *session.board();

        assert_eq!(
            session.play_human(0, 0),
            Err(SessionError::Move(MoveError::CellOccupied(Position::ALL[0])))
        );
        assert_eq!(
            session.play_human(0, 3),
            Err(SessionError::Move(MoveError::OutOfRange { row: 0, col: 3 }))
        );
        assert_eq!(*session.board(), before);
        assert_eq!(session.to_move(), Mark::PlayerA);
    }

    #[test]
    fn test_automated_win_then_automated_opens() {
        let mut session = Session::new(top_row_engine());
        // Human fills the left column under the engine's first mark; engine takes row 0.
        for (row, col) in [(1, 0), (2, 0)] {
            session.play_human(row, col).unwrap();
            session.play_automated().unwrap();
        }
        session.play_human(2, 2).unwrap();
        let turn = session.play_automated().unwrap();

        assert_eq!(turn.outcome, GameOutcome::RowWin(0));
        assert_eq!(session.outcome(), classify(session.board()));
        assert_eq!(turn.state, MatchState::AutomatedWin);
        assert_eq!(session.tally().automated, 1);
        assert_eq!(session.play_human(1, 1), Err(SessionError::GameOver));
        assert_eq!(session.play_automated(), Err(SessionError::GameOver));

        assert_eq!(session.new_game(), Mark::PlayerB);
        assert_eq!(*session.board(), Board::new());
        assert_eq!(session.state(), MatchState::InProgress);
        assert!(session.play_automated().is_ok());
    }

    #[test]
    fn test_human_win_then_human_opens() {
        let mut session = Session::new(top_row_engine());
        for (row, col) in [(2, 0), (2, 1)] {
            session.play_human(row, col).unwrap();
            session.play_automated().unwrap();
        }
        let turn = session.play_human(2, 2).unwrap();

        assert_eq!(turn.state, MatchState::HumanWin);
        assert_eq!(session.tally().human, 1);
        assert_eq!(session.new_game(), Mark::PlayerA);
    }

    #[test]
    fn test_outcome_follows_board() {
        let mut session = Session::new(top_row_engine());
        assert_eq!(session.outcome(), GameOutcome::InProgress);
        session.play_human(2, 0).unwrap();
        session.play_automated().unwrap();
        assert_eq!(session.outcome(), classify(session.board()));

        session.new_game();
        assert_eq!(session.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_off_board_outcome_is_not_a_win() {
        assert_eq!(
            MatchState::from_outcome(GameOutcome::RowWin(3), &Board::new()),
            MatchState::InProgress
        );
    }

    #[test]
    fn test_state_from_outcome() {
        let board: Board = "OOO XX. X..".parse().unwrap();
        assert_eq!(
            MatchState::from_outcome(classify(&board), &board),
            MatchState::AutomatedWin
        );
        let draw: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(
            MatchState::from_outcome(classify(&draw), &draw),
            MatchState::Draw
        );
    }
}
