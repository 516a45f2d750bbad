use std::fs;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::game::{Move, Outcome};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum Event {
    Round {
        player: Move,
        opponent: Move,
        outcome: Option<Outcome>,
    },
    Score {
        player: u32,
        opponent: u32,
    },
    Comment {
        text: String,
    },
}

pub trait Harness {
    fn play(&mut self, player: Move, opponent: Move) -> Outcome;
    fn scores(&self) -> (u32, u32);
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TestCase {
    sequence: Vec<Event>,
}

impl TestCase {
    pub fn load(file_path: String, replacements: Vec<(impl ToString, impl ToString)>) -> Self {
        let mut text = fs::read_to_string(file_path).expect("Unable to read file");
        for (from, to) in replacements {
            let from = &format!("${{{}}}", from.to_string());
            text = text.replace(from, &to.to_string());
        }
        let test_case: Self = serde_json::from_str(&text).expect("Could not parse test case");
        test_case
    }

    pub fn player_moves(&self) -> Vec<Move> {
        self.rounds().map(|(player, _)| player).collect()
    }

    pub fn opponent_moves(&self) -> Vec<Move> {
        self.rounds().map(|(_, opponent)| opponent).collect()
    }

    /// Console lines for the player side: one move and one continue answer per round.
    pub fn input_script(&self) -> String {
        let moves = self.player_moves();
        let mut script = String::new();
        for (i, value) in moves.iter().enumerate() {
            script.push_str(value.as_str());
            script.push('\n');
            script.push_str(if i + 1 < moves.len() { "yes\n" } else { "no\n" });
        }
        script
    }

    pub fn final_score(&self) -> Option<(u32, u32)> {
        self.sequence.iter().rev().find_map(|event| match event {
            Event::Score { player, opponent } => Some((*player, *opponent)),
            _ => None,
        })
    }

    pub fn run(&self, harness: &mut impl Harness) {
        for event in self.sequence.iter() {
            match event {
                Event::Round {
                    player,
                    opponent,
                    outcome: expected,
                } => {
                    let outcome = harness.play(*player, *opponent);
                    debug!("{:?} vs {:?}: {:?}", player, opponent, outcome);
                    if let Some(expected) = expected {
                        assert_eq!(
                            *expected, outcome,
                            "Unexpected outcome for {:?} vs {:?}",
                            player, opponent
                        );
                    }
                }
                Event::Score { player, opponent } => {
                    assert_eq!((*player, *opponent), harness.scores());
                }
                Event::Comment { text } => {
                    info!("Comment: {:}", text)
                }
            }
        }
    }

    fn rounds(&self) -> impl Iterator<Item = (Move, Move)> + '_ {
        self.sequence.iter().filter_map(|event| match event {
            Event::Round {
                player, opponent, ..
            } => Some((*player, *opponent)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::game::evaluate;

    struct Tally(u32, u32);
    impl Harness for Tally {
        fn play(&mut self, player: Move, opponent: Move) -> Outcome {
            let (outcome, _) = evaluate(player, opponent);
            match outcome {
                Outcome::PlayerWins => self.0 += 1,
                Outcome::OpponentWins => self.1 += 1,
                Outcome::Tie => {}
            }
            outcome
        }
        fn scores(&self) -> (u32, u32) {
            (self.0, self.1)
        }
    }

    #[test]
    fn runs_inline_sequence() {
        let case: TestCase = serde_json::from_str(
            r#"{"sequence": [
                {"type": "Comment", "text": "rock loses to paper"},
                {"type": "Round", "player": "rock", "opponent": "paper", "outcome": "OpponentWins"},
                {"type": "Round", "player": "rock", "opponent": "scissors"},
                {"type": "Score", "player": 1, "opponent": 1}
            ]}"#,
        )
        .unwrap();
        case.run(&mut Tally(0, 0));
        assert_eq!(case.final_score(), Some((1, 1)));
        assert_eq!(case.input_script(), "rock\nyes\nrock\nno\n");
        assert_eq!(case.opponent_moves(), vec![Move::Paper, Move::Scissors]);
    }
}
