//! Single-game session: owns the board and sequences human and agent moves.

use smallvec::SmallVec;
use std::time::Duration;
use tracing::{debug, info};

use crate::agent::{HeuristicPolicy, MoveChoice, MovePolicy};
use crate::core::{
    Board, EngineConfig, EngineError, GameRng, Move, MoveRecord, Player, Result, CELL_COUNT,
};
use crate::rules::{evaluate, GameOutcome};

use super::snapshot::GameSnapshot;

/// Moves of one game, in play order.
pub type MoveHistory = SmallVec<[MoveRecord; CELL_COUNT]>;

/// The agent's reply to a human move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentReply {
    pub choice: MoveChoice,
    pub outcome: GameOutcome,
}

/// Everything that happened in one call to `play_turn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// The human's move.
    pub human: Move,
    /// The agent's reply, absent if the human's move ended the game.
    pub agent: Option<AgentReply>,
    /// Outcome after the last move of the turn.
    pub outcome: GameOutcome,
}

/// One game between a human and the heuristic agent.
///
/// State machine:
/// - `InProgress`, human to move: `submit_human_move`
/// - `InProgress`, awaiting agent: `agent_respond`
/// - `Won(_)` / `Draw`: terminal until `reset`
///
/// The human always opens. A human win or a draw after the human's move ends
/// the game before the agent moves.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: EngineConfig,
    agent: HeuristicPolicy,
    board: Board,
    outcome: GameOutcome,
    awaiting_agent: bool,
    history: MoveHistory,
    rng: GameRng,
}

/// Builder for creating a GameSession.
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    config: EngineConfig,
}

impl SessionBuilder {
    /// Create a builder with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole config.
    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the agent's RNG for reproducible games.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Set the pause a front end shows before the agent replies.
    #[must_use]
    pub fn think_delay(mut self, delay: Duration) -> Self {
        self.config = self.config.with_think_delay(delay);
        self
    }

    /// Build a session with an empty board.
    #[must_use]
    pub fn build(self) -> GameSession {
        GameSession::new(self.config)
    }
}

impl GameSession {
    /// Start a new game.
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), "new game session");

        Self {
            config,
            agent: HeuristicPolicy::default(),
            board: Board::new(),
            outcome: GameOutcome::InProgress,
            awaiting_agent: false,
            history: MoveHistory::new(),
            rng,
        }
    }

    /// Resume a game from a snapshot.
    ///
    /// The RNG continues exactly where the snapshot left off. Fails with
    /// `InvalidSnapshot` unless the snapshot passes `GameSnapshot::validate`.
    pub fn restore(snapshot: GameSnapshot, config: EngineConfig) -> Result<Self> {
        snapshot.validate()?;
        debug!(
            moves = snapshot.history.len(),
            outcome = %snapshot.outcome,
            "restored game session"
        );

        Ok(Self {
            config,
            agent: HeuristicPolicy::default(),
            board: snapshot.board,
            outcome: snapshot.outcome,
            awaiting_agent: snapshot.awaiting_agent,
            history: snapshot.history,
            rng: GameRng::from_state(&snapshot.rng),
        })
    }

    /// Capture the session for later `restore`.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            outcome: self.outcome,
            awaiting_agent: self.awaiting_agent,
            history: self.history.clone(),
            rng: self.rng.state(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True between a non-final human move and the agent's reply.
    ///
    /// A front end disables input while this holds.
    #[must_use]
    pub fn is_awaiting_agent(&self) -> bool {
        self.awaiting_agent
    }

    /// How long a front end may pause before `agent_respond`.
    #[must_use]
    pub fn think_delay(&self) -> Duration {
        self.config.think_delay()
    }

    /// Play the human's move on `index`.
    ///
    /// Rejected with `GameOver` after the game ended, `AwaitingAgent` while the
    /// agent owes a reply, and `Occupied`/`OutOfBounds` for a bad cell. A
    /// rejected move changes nothing.
    pub fn submit_human_move(&mut self, index: usize) -> Result<GameOutcome> {
        if self.outcome.is_terminal() {
            return Err(EngineError::GameOver);
        }
        if self.awaiting_agent {
            return Err(EngineError::AwaitingAgent);
        }

        self.play(Player::Human, index)?;
        self.awaiting_agent = !self.outcome.is_terminal();
        Ok(self.outcome)
    }

    /// Let the agent reply to the human's last move.
    pub fn agent_respond(&mut self) -> Result<AgentReply> {
        if self.outcome.is_terminal() {
            return Err(EngineError::GameOver);
        }
        if !self.awaiting_agent {
            return Err(EngineError::NotAgentTurn);
        }

        let choice = self
            .agent
            .choose(&self.board, &mut self.rng)
            .ok_or(EngineError::BoardFull)?;
        self.play(Player::Agent, choice.index)?;
        self.awaiting_agent = false;

        Ok(AgentReply {
            choice,
            outcome: self.outcome,
        })
    }

    /// Human move followed, if the game goes on, by the agent's reply.
    pub fn play_turn(&mut self, index: usize) -> Result<TurnReport> {
        let mut outcome = self.submit_human_move(index)?;
        let human = Move::new(Player::Human, index);

        let agent = if outcome.is_terminal() {
            None
        } else {
            let reply = self.agent_respond()?;
            outcome = reply.outcome;
            Some(reply)
        };

        Ok(TurnReport {
            human,
            agent,
            outcome,
        })
    }

    /// Clear the board for a new game. The RNG keeps running.
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "reset game");
        self.board = Board::new();
        self.outcome = GameOutcome::InProgress;
        self.awaiting_agent = false;
        self.history.clear();
    }

    fn play(&mut self, player: Player, index: usize) -> Result<()> {
        self.board.place(player, index)?;

        let sequence = self.history.len() as u32;
        self.history
            .push(MoveRecord::new(Move::new(player, index), sequence));
        self.outcome = evaluate(&self.board, player);

        debug!(%player, index, sequence, outcome = %self.outcome, "move played");
        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, moves = self.history.len(), "game over");
        }
        Ok(())
    }
}
