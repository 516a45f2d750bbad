use std::fmt;

use common::model::game::Move;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionValueTable {
    values: [[f64; 3]; 3],
    learning_rate: f64,
    discount_factor: f64,
}

impl ActionValueTable {
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            values: [[0.0; 3]; 3],
            learning_rate,
            discount_factor,
        }
    }

    pub fn get(&self, state: Move, action: Move) -> f64 {
        self.values[state.index()][action.index()]
    }

    pub fn set(&mut self, state: Move, action: Move, value: f64) {
        self.values[state.index()][action.index()] = value;
    }

    pub fn row(&self, state: Move) -> [f64; 3] {
        self.values[state.index()]
    }

    pub fn max_q(&self, state: Move) -> f64 {
        self.row(state).into_iter().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn best_actions(&self, state: Move) -> Vec<Move> {
        let max_q = self.max_q(state);
        Move::ALL
            .into_iter()
            .filter(|&action| self.get(state, action) == max_q)
            .collect()
    }

    /// Q-learning update
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    pub fn q_learning_update(&mut self, state: Move, action: Move, reward: f64, next_state: Move) {
        let current_q = self.get(state, action);
        let td_target = reward + self.discount_factor * self.max_q(next_state);
        let td_error = td_target - current_q;
        self.set(state, action, current_q + self.learning_rate * td_error);
    }
}

impl fmt::Display for ActionValueTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>10}", "")?;
        for action in Move::ALL {
            write!(f, "{:>10}", action)?;
        }
        for state in Move::ALL {
            writeln!(f)?;
            write!(f, "{:>10}", state)?;
            for value in self.row(state) {
                write!(f, "{:>10.4}", value)?;
            }
        }
        Ok(())
    }
}
