use std::io::{BufRead, Write};

use agent::{
    client::Opponent,
    config::LearningParameters,
    q_learning::QLearningStrategy,
    training::{train, Environment, RandomPlayerEnvironment, TrainingReport},
};
use common::model::{
    game::evaluate,
    messages::{MatchResult, RoundResult},
    player::Player,
};
use tracing::{info, Level};

use crate::{
    config::GameConfig,
    error::Result,
    model::external,
    service::{console::Console, session::Session},
};

/// Init logging, ignore error if already set
pub fn init_logging(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn play<R, W>(config: &GameConfig, input: R, output: W) -> Result<MatchResult>
where
    R: BufRead,
    W: Write,
{
    info!("Starting {} opponent", config.strategy.kind);
    let strategy = config.strategy.build()?;
    let mut session = Session::new(
        Player::new(config.player_name.clone()),
        Opponent::named(config.opponent_name.clone(), strategy),
        Console::new(input, output),
    );
    session.run()
}

#[derive(Debug, Clone, Default)]
pub struct TrainConfig {
    pub episodes: usize,
    pub learning: LearningParameters,
    pub seed: Option<u64>,
}

pub fn train_offline<W: Write>(config: &TrainConfig, mut output: W) -> Result<TrainingReport> {
    let mut agent = QLearningStrategy::new(config.learning, config.seed)?;
    let mut environment = RandomPlayerEnvironment::new(config.seed.map(|s| s.wrapping_add(1)));
    let report = train(&mut agent, &mut environment, config.episodes);
    info!("Training finished: {:?}", report);

    writeln!(
        output,
        "Training complete after {} episodes ({} won, {} lost, {} tied).",
        report.episodes, report.wins, report.losses, report.ties
    )?;
    writeln!(output, "{}", agent.table())?;

    // No updates during the test round.
    let your_move = environment.reset();
    let decision = agent.select_move(your_move);
    let (outcome, reward) = evaluate(your_move, decision.value);
    writeln!(output, "You (randomly) picked: {}", your_move)?;
    writeln!(output, "JARVIS picked: {}", decision.value)?;
    let result = RoundResult {
        player_move: your_move,
        opponent_move: decision.value,
        outcome,
        reward,
    };
    writeln!(output, "{}", external::round_summary("You", "JARVIS", &result))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent::config::StrategyKind;
    use std::io::Cursor;

    #[test]
    fn plays_with_configured_names() {
        let mut config = GameConfig {
            player_name: "Ada".to_owned(),
            ..Default::default()
        };
        config.strategy.kind = StrategyKind::Random;
        config.strategy.seed = Some(1);
        let mut output = Vec::new();
        let result = play(&config, Cursor::new("rock\nyes\nscissors\nno\n"), &mut output).unwrap();
        assert_eq!(result.rounds, 2);
        assert!(result.player_score + result.opponent_score <= 2);
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Ada's move history: [rock, scissors]"));
    }

    #[test]
    fn bad_parameters_fail_before_playing() {
        let mut config = GameConfig::default();
        config.strategy.kind = StrategyKind::QLearning;
        config.strategy.learning.discount_factor = -0.5;
        assert!(play(&config, Cursor::new("rock\n"), Vec::new()).is_err());
    }

    #[test]
    fn offline_training_reports_every_episode() {
        let config = TrainConfig {
            episodes: 50,
            seed: Some(12),
            ..Default::default()
        };
        let mut output = Vec::new();
        let report = train_offline(&config, &mut output).unwrap();
        assert_eq!(report.episodes, 50);
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Training complete after 50 episodes"));
        assert!(output.contains("JARVIS picked:"));
    }
}
