use agent::{client::Opponent, strategy::TurnOrder};
use common::model::{
    game::{evaluate, Move, Outcome},
    messages::{Id, MatchResult, RoundResult},
    player::Player,
};
use tracing::{debug, warn};

use crate::{
    error::Result,
    model::internal::{GamePhase, GameState},
};

pub struct Match {
    player: Player,
    opponent: Opponent,
    state: GameState,
}

impl Match {
    pub fn new(player: Player, opponent: Opponent) -> Self {
        Match {
            player,
            opponent,
            state: GameState::new(),
        }
    }

    /// Plays one round, asking for the player's move at the point the
    /// opponent's turn order dictates. `None` from the reader ends the match.
    pub fn play_round<F>(&mut self, read_player_move: F) -> Result<Option<RoundResult>>
    where
        F: FnOnce(&Player) -> Result<Option<Move>>,
    {
        if self.state.is_done() {
            warn!("Tried to play a round after the match ended");
            return Ok(None);
        }
        if matches!(self.state.phase, GamePhase::OutcomeResolved { .. }) {
            self.next_round();
        }

        let (player_move, decision) = match self.opponent.turn_order() {
            TurnOrder::OpponentFirst => {
                let decision = self.opponent.play(self.player.history());
                self.state = self
                    .state
                    .with_phase(GamePhase::OpponentMoveSelected { decision });
                let Some(player_move) = read_player_move(&self.player)? else {
                    self.state = self.state.with_phase(GamePhase::Done);
                    return Ok(None);
                };
                self.player.record(player_move);
                (player_move, decision)
            }
            TurnOrder::PlayerFirst => {
                let Some(player_move) = read_player_move(&self.player)? else {
                    self.state = self.state.with_phase(GamePhase::Done);
                    return Ok(None);
                };
                self.player.record(player_move);
                let decision = self.opponent.play(self.player.history());
                self.state = self
                    .state
                    .with_phase(GamePhase::OpponentMoveSelected { decision });
                (player_move, decision)
            }
        };

        let (outcome, reward) = evaluate(player_move, decision.value);
        match outcome {
            Outcome::PlayerWins => self.player.award_point(),
            Outcome::OpponentWins => self.opponent.player_mut().award_point(),
            Outcome::Tie => {}
        }
        let result = RoundResult {
            player_move,
            opponent_move: decision.value,
            outcome,
            reward,
        };
        self.opponent.observe(&result);
        debug!("Round {}: {:?}", self.state.rounds_played + 1, result);

        self.state = GameState {
            phase: GamePhase::OutcomeResolved { result },
            rounds_played: self.state.rounds_played + 1,
        };
        Ok(Some(result))
    }

    pub fn next_round(&mut self) {
        if !self.state.is_done() {
            self.state = self.state.with_phase(GamePhase::AwaitPlayerMove);
        }
    }

    pub fn finish(&mut self, session: Id) -> MatchResult {
        self.state = self.state.with_phase(GamePhase::Done);
        MatchResult {
            session,
            player_score: self.player.score(),
            opponent_score: self.opponent.player().score(),
            rounds: self.state.rounds_played,
        }
    }

    pub fn phase(&self) -> &GamePhase {
        &self.state.phase
    }

    pub fn rounds_played(&self) -> u32 {
        self.state.rounds_played
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }
}
