use agent::strategy::Decision;
use common::model::messages::RoundResult;

#[derive(Debug, Clone, PartialEq)]
pub enum GamePhase {
    AwaitPlayerMove,
    OpponentMoveSelected { decision: Decision },
    OutcomeResolved { result: RoundResult },
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: GamePhase,
    pub rounds_played: u32,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            phase: GamePhase::AwaitPlayerMove,
            rounds_played: 0,
        }
    }

    pub fn with_phase(&self, phase: GamePhase) -> Self {
        GameState {
            phase,
            rounds_played: self.rounds_played,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, GamePhase::Done)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
