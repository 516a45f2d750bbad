use std::collections::VecDeque;

use tracing::debug;

use super::game::Move;

pub const HISTORY_CAPACITY: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct MoveHistory {
    moves: VecDeque<Move>,
    capacity: usize,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0);
        MoveHistory {
            moves: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends to the tail, evicting the head once over capacity.
    pub fn record(&mut self, value: Move) {
        self.moves.push_back(value);
        if self.moves.len() > self.capacity {
            let evicted = self.moves.pop_front();
            debug!("Evicted {:?} from history", evicted);
        }
        debug!("History: {:?}", self.moves);
    }

    pub fn snapshot(&self) -> Vec<Move> {
        self.moves.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> + '_ {
        self.moves.iter()
    }

    pub fn last(&self) -> Option<Move> {
        self.moves.back().copied()
    }

    pub fn last_two(&self) -> Option<[Move; 2]> {
        let len = self.moves.len();
        if len < 2 {
            return None;
        }
        Some([self.moves[len - 2], self.moves[len - 1]])
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Move> for MoveHistory {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut history = MoveHistory::new();
        for value in iter {
            history.record(value);
        }
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::game::Move::{Paper, Rock, Scissors};

    #[test]
    fn keeps_the_five_most_recent() {
        let mut history = MoveHistory::new();
        for m in [Rock, Paper, Scissors, Rock, Paper, Scissors] {
            history.record(m);
        }
        assert_eq!(history.snapshot(), vec![Paper, Scissors, Rock, Paper, Scissors]);
        assert_eq!(history.len(), HISTORY_CAPACITY);
    }

    #[test]
    fn collecting_enforces_the_cap() {
        let history: MoveHistory = [Rock, Rock, Paper, Paper, Scissors, Scissors, Rock, Paper]
            .into_iter()
            .collect();
        assert_eq!(history.snapshot(), vec![Paper, Scissors, Scissors, Rock, Paper]);
    }

    #[test]
    fn snapshot_does_not_mutate() {
        let history: MoveHistory = [Rock, Paper].into_iter().collect();
        assert_eq!(history.snapshot(), history.snapshot());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn last_two_needs_two_moves() {
        let mut history = MoveHistory::new();
        assert_eq!(history.last(), None);
        history.record(Scissors);
        assert_eq!(history.last_two(), None);
        history.record(Rock);
        assert_eq!(history.last_two(), Some([Scissors, Rock]));
        assert_eq!(history.last(), Some(Rock));
    }
}
