use super::{game::Move, history::MoveHistory};

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    score: u32,
    history: MoveHistory,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            score: 0,
            history: MoveHistory::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn award_point(&mut self) {
        self.score += 1;
    }

    pub fn record(&mut self, value: Move) {
        self.history.record(value);
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }
}
