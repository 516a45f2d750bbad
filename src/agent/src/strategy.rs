use std::collections::VecDeque;

use common::model::{game::Move, history::MoveHistory, messages::RoundResult};
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOrder {
    PlayerFirst,
    OpponentFirst,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rationale {
    Uniform,
    InsufficientData,
    Predicted(Move),
    Explored,
    Exploited { state: Move, value: f64 },
    Scripted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub value: Move,
    pub rationale: Rationale,
}

impl Decision {
    pub fn new(value: Move, rationale: Rationale) -> Self {
        Decision { value, rationale }
    }
}

pub trait Strategy {
    fn turn_order(&self) -> TurnOrder;

    fn make_move(&mut self, history: &MoveHistory) -> Decision;

    fn observe(&mut self, _round: &RoundResult) {}
}

pub(crate) fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

pub(crate) fn random_move(rng: &mut StdRng) -> Move {
    *Move::ALL.choose(rng).unwrap_or(&Move::Rock)
}

// Trivial strategies
pub struct Constant(pub Move);
impl Strategy for Constant {
    fn turn_order(&self) -> TurnOrder {
        TurnOrder::OpponentFirst
    }

    fn make_move(&mut self, _: &MoveHistory) -> Decision {
        Decision::new(self.0, Rationale::Scripted)
    }
}

pub struct Scripted {
    moves: VecDeque<Move>,
}
impl Scripted {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        let moves: VecDeque<Move> = moves.into_iter().collect();
        assert!(!moves.is_empty());
        Scripted { moves }
    }
}
impl Strategy for Scripted {
    fn turn_order(&self) -> TurnOrder {
        TurnOrder::OpponentFirst
    }

    fn make_move(&mut self, _: &MoveHistory) -> Decision {
        let next = self.moves[0];
        self.moves.rotate_left(1);
        Decision::new(next, Rationale::Scripted)
    }
}

// Random
pub struct RandomMove {
    rng: StdRng,
}
impl RandomMove {
    pub fn new(seed: Option<u64>) -> Self {
        RandomMove {
            rng: build_rng(seed),
        }
    }
}
impl Strategy for RandomMove {
    fn turn_order(&self) -> TurnOrder {
        TurnOrder::PlayerFirst
    }

    fn make_move(&mut self, _: &MoveHistory) -> Decision {
        Decision::new(random_move(&mut self.rng), Rationale::Uniform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_wraps_around() {
        let history = MoveHistory::new();
        let mut strategy = Scripted::new([Move::Rock, Move::Scissors]);
        let moves: Vec<Move> = (0..3).map(|_| strategy.make_move(&history).value).collect();
        assert_eq!(moves, vec![Move::Rock, Move::Scissors, Move::Rock]);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let history = MoveHistory::new();
        let mut a = RandomMove::new(Some(7));
        let mut b = RandomMove::new(Some(7));
        for _ in 0..20 {
            let decision = a.make_move(&history);
            assert_eq!(decision, b.make_move(&history));
            assert_eq!(decision.rationale, Rationale::Uniform);
        }
    }
}
