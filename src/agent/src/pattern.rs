use common::model::{game::Move, history::MoveHistory};
use itertools::Itertools;
use rand::rngs::StdRng;
use tracing::debug;

use crate::{
    strategy::{build_rng, random_move, Decision, Rationale, Strategy, TurnOrder},
    tree::{DecisionTree, Example},
};

pub fn training_set(history: &MoveHistory) -> Vec<Example> {
    history
        .iter()
        .tuple_windows()
        .map(|(&a, &b, &c)| Example {
            features: [a, b],
            label: c,
        })
        .collect()
}

pub struct PatternStrategy {
    rng: StdRng,
}

impl PatternStrategy {
    pub fn new(seed: Option<u64>) -> Self {
        PatternStrategy {
            rng: build_rng(seed),
        }
    }

    pub fn predict(history: &MoveHistory) -> Option<Move> {
        let tree = DecisionTree::fit(&training_set(history))?;
        let features = history.last_two()?;
        let prediction = tree.predict(features);
        debug!(
            "Predicted {:?} from {:?} (tree depth {})",
            prediction,
            features,
            tree.depth()
        );
        Some(prediction)
    }
}

impl Strategy for PatternStrategy {
    fn turn_order(&self) -> TurnOrder {
        TurnOrder::PlayerFirst
    }

    fn make_move(&mut self, history: &MoveHistory) -> Decision {
        match Self::predict(history) {
            Some(predicted) => Decision::new(predicted.counter(), Rationale::Predicted(predicted)),
            None => Decision::new(random_move(&mut self.rng), Rationale::InsufficientData),
        }
    }
}
