use common::model::{game::Move, history::MoveHistory, messages::RoundResult};
use rand::{rngs::StdRng, seq::IndexedRandom, Rng};
use tracing::debug;

use crate::{
    config::LearningParameters,
    error::Result,
    q_table::ActionValueTable,
    strategy::{build_rng, random_move, Decision, Rationale, Strategy, TurnOrder},
};

#[derive(Debug, Clone)]
pub struct QLearningStrategy {
    table: ActionValueTable,
    epsilon: f64,
    rng: StdRng,
    /// State the last decision was made in, consumed by `observe`.
    pending_state: Option<Move>,
}

impl QLearningStrategy {
    pub fn new(parameters: LearningParameters, seed: Option<u64>) -> Result<Self> {
        parameters.validate()?;
        Ok(Self {
            table: ActionValueTable::new(parameters.learning_rate, parameters.discount_factor),
            epsilon: parameters.epsilon,
            rng: build_rng(seed),
            pending_state: None,
        })
    }

    pub fn select_move(&mut self, state: Move) -> Decision {
        if self.rng.random::<f64>() < self.epsilon {
            return Decision::new(random_move(&mut self.rng), Rationale::Explored);
        }
        let best_actions = self.table.best_actions(state);
        let action = *best_actions.choose(&mut self.rng).unwrap_or(&Move::Rock);
        Decision::new(
            action,
            Rationale::Exploited {
                state,
                value: self.table.get(state, action),
            },
        )
    }

    pub fn update(&mut self, prior: Move, action: Move, reward: f64, next: Move) {
        self.table.q_learning_update(prior, action, reward, next);
        debug!(
            "Q[{:?}][{:?}] = {:.4} (reward {}, next state {:?})",
            prior,
            action,
            self.table.get(prior, action),
            reward,
            next
        );
    }

    pub fn table(&self) -> &ActionValueTable {
        &self.table
    }
}

impl Strategy for QLearningStrategy {
    fn turn_order(&self) -> TurnOrder {
        TurnOrder::OpponentFirst
    }

    fn make_move(&mut self, history: &MoveHistory) -> Decision {
        let state = history.last().unwrap_or(Move::Rock);
        self.pending_state = Some(state);
        self.select_move(state)
    }

    fn observe(&mut self, round: &RoundResult) {
        let prior = self.pending_state.take().unwrap_or(Move::Rock);
        self.update(prior, round.opponent_move, round.reward, round.player_move);
    }
}
