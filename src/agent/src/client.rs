use common::model::{history::MoveHistory, messages::RoundResult, player::Player};

use crate::strategy::{Decision, Strategy, TurnOrder};

pub const OPPONENT_NAME: &str = "JARVIS";

pub struct Opponent {
    player: Player,
    strategy: Box<dyn Strategy>,
    last_decision: Option<Decision>,
}

impl Opponent {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self::named(OPPONENT_NAME, strategy)
    }

    pub fn named(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Opponent {
            player: Player::new(name),
            strategy,
            last_decision: None,
        }
    }

    pub fn turn_order(&self) -> TurnOrder {
        self.strategy.turn_order()
    }

    pub fn play(&mut self, history: &MoveHistory) -> Decision {
        let decision = self.strategy.make_move(history);
        self.last_decision = Some(decision);
        decision
    }

    pub fn observe(&mut self, round: &RoundResult) {
        self.strategy.observe(round);
    }

    pub fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
}
