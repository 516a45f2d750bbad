use common::model::game::{evaluate, Move, Outcome};
use rand::rngs::StdRng;
use tracing::debug;

use crate::{
    q_learning::QLearningStrategy,
    strategy::{build_rng, random_move},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub next_state: Move,
    pub reward: f64,
    pub done: bool,
    pub player_move: Move,
}

pub trait Environment {
    fn reset(&mut self) -> Move;
    fn step(&mut self, action: Move) -> Step;
}

pub struct RandomPlayerEnvironment {
    rng: StdRng,
}

impl RandomPlayerEnvironment {
    pub fn new(seed: Option<u64>) -> Self {
        RandomPlayerEnvironment {
            rng: build_rng(seed),
        }
    }
}

impl Environment for RandomPlayerEnvironment {
    fn reset(&mut self) -> Move {
        random_move(&mut self.rng)
    }

    fn step(&mut self, action: Move) -> Step {
        let player_move = random_move(&mut self.rng);
        let (_, reward) = evaluate(player_move, action);
        Step {
            next_state: player_move,
            reward,
            done: true,
            player_move,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainingReport {
    pub episodes: usize,
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
}

impl TrainingReport {
    fn tally(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::OpponentWins => self.wins += 1,
            Outcome::PlayerWins => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

pub fn train(
    agent: &mut QLearningStrategy,
    environment: &mut impl Environment,
    episodes: usize,
) -> TrainingReport {
    let mut report = TrainingReport::default();
    for episode in 0..episodes {
        let mut state = environment.reset();
        loop {
            let action = agent.select_move(state).value;
            let step = environment.step(action);
            agent.update(state, action, step.reward, step.next_state);
            report.tally(evaluate(step.player_move, action).0);
            state = step.next_state;
            if step.done {
                break;
            }
        }
        report.episodes += 1;
        debug!("Episode {} done", episode);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LearningParameters;
    use common::model::game::Move::{Paper, Rock, Scissors};

    struct Stubborn(Move);
    impl Environment for Stubborn {
        fn reset(&mut self) -> Move {
            self.0
        }
        fn step(&mut self, action: Move) -> Step {
            let (_, reward) = evaluate(self.0, action);
            Step {
                next_state: self.0,
                reward,
                done: true,
                player_move: self.0,
            }
        }
    }

    #[test]
    fn counts_every_episode() {
        let mut agent = QLearningStrategy::new(LearningParameters::default(), Some(5)).unwrap();
        let mut environment = RandomPlayerEnvironment::new(Some(6));
        let report = train(&mut agent, &mut environment, 100);
        assert_eq!(report.episodes, 100);
        assert_eq!(report.wins + report.losses + report.ties, 100);
    }

    #[test]
    fn learns_against_stubborn_scissors() {
        let parameters = LearningParameters {
            epsilon: 0.0,
            ..Default::default()
        };
        let mut agent = QLearningStrategy::new(parameters, Some(9)).unwrap();
        train(&mut agent, &mut Stubborn(Scissors), 300);
        assert_eq!(agent.table().best_actions(Scissors), vec![Rock]);
        assert_eq!(agent.table().row(Paper), [0.0; 3]);
    }
}
