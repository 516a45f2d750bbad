use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{Error, Result},
    pattern::PatternStrategy,
    q_learning::QLearningStrategy,
    strategy::{RandomMove, Strategy},
    training::{train, RandomPlayerEnvironment},
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Random,
    #[default]
    Classifier,
    QLearning,
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(StrategyKind::Random),
            "classifier" => Ok(StrategyKind::Classifier),
            "q-learning" | "qlearning" | "rl" => Ok(StrategyKind::QLearning),
            other => Err(Error::UnknownStrategy(other.to_owned())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrategyKind::Random => "random",
            StrategyKind::Classifier => "classifier",
            StrategyKind::QLearning => "q-learning",
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct LearningParameters {
    pub learning_rate: f64,
    pub discount_factor: f64,
    pub epsilon: f64,
}

impl Default for LearningParameters {
    fn default() -> Self {
        LearningParameters {
            learning_rate: 0.1,
            discount_factor: 0.9,
            epsilon: 0.1,
        }
    }
}

impl LearningParameters {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("learning_rate", self.learning_rate),
            ("discount_factor", self.discount_factor),
            ("epsilon", self.epsilon),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct StrategyConfig {
    pub kind: StrategyKind,
    pub learning: LearningParameters,
    pub seed: Option<u64>,
    /// Offline episodes against a simulated random player before the session.
    pub pretrain_episodes: usize,
}

impl StrategyConfig {
    pub fn new(kind: StrategyKind) -> Self {
        StrategyConfig {
            kind,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(&self) -> Result<Box<dyn Strategy>> {
        if self.pretrain_episodes > 0 && self.kind != StrategyKind::QLearning {
            return Err(Error::PretrainUnsupported);
        }
        Ok(match self.kind {
            StrategyKind::Random => Box::new(RandomMove::new(self.seed)),
            StrategyKind::Classifier => Box::new(PatternStrategy::new(self.seed)),
            StrategyKind::QLearning => {
                let mut agent = QLearningStrategy::new(self.learning, self.seed)?;
                if self.pretrain_episodes > 0 {
                    let mut environment =
                        RandomPlayerEnvironment::new(self.seed.map(|s| s.wrapping_add(1)));
                    let report = train(&mut agent, &mut environment, self.pretrain_episodes);
                    info!("Pre-trained opponent: {:?}", report);
                }
                Box::new(agent)
            }
        })
    }
}
