use agent::strategy::Rationale;
use common::model::{
    game::{Move, Outcome},
    history::MoveHistory,
    messages::RoundResult,
    player::Player,
};
use itertools::Itertools;

pub const INVALID_MOVE: &str = "Invalid choice! Please enter rock, paper, or scissors.";
pub const CONTINUE_PROMPT: &str = "Would you like another round? (yes/no): ";

pub fn move_prompt(name: &str) -> String {
    format!("{}, enter your choice (rock, paper, scissors): ", name)
}

pub fn wants_another_round(answer: &str) -> bool {
    answer.trim().to_lowercase() == "yes"
}

pub fn greeting(opponent: &str) -> String {
    format!(
        "Greetings! I'm {}, ready for a game of Rock, Paper, Scissors. Shall we begin?",
        opponent
    )
}

pub fn rationale(opponent: &str, rationale: &Rationale, chosen: Move) -> Option<String> {
    match rationale {
        Rationale::Uniform | Rationale::Scripted => None,
        Rationale::InsufficientData => {
            Some(format!("{}: Not enough data yet, I'll guess randomly.", opponent))
        }
        Rationale::Predicted(predicted) => Some(format!(
            "{}: Based on your past moves, I predict you'll pick {}!",
            opponent, predicted
        )),
        Rationale::Explored => Some(format!("{}: Let me try something new.", opponent)),
        Rationale::Exploited { state, value } => Some(format!(
            "{}: After {}, {} has served me best so far ({:.2}).",
            opponent, state, chosen, value
        )),
    }
}

fn flavour(winner: Move) -> &'static str {
    match winner {
        Move::Rock => "Rock smashes scissors!",
        Move::Paper => "Paper covers the rock!",
        Move::Scissors => "Scissors cut the paper!",
    }
}

pub fn round_summary(player: &str, opponent: &str, result: &RoundResult) -> String {
    let verdict = match result.outcome {
        Outcome::Tie => "It's a tie! We're evenly matched.".to_owned(),
        Outcome::PlayerWins => format!(
            "{} You win this round, {}!",
            flavour(result.player_move),
            player
        ),
        Outcome::OpponentWins => format!(
            "{} {} wins this round!",
            flavour(result.opponent_move),
            opponent
        ),
    };
    format!(
        "{} chose {}, {} chose {}\n{}",
        player, result.player_move, opponent, result.opponent_move, verdict
    )
}

pub fn scoreboard(player: &Player, opponent: &Player) -> String {
    format!(
        "Scoreboard: {} - {}, {} - {}",
        player.name(),
        player.score(),
        opponent.name(),
        opponent.score()
    )
}

pub fn history(name: &str, history: &MoveHistory) -> String {
    format!("{}'s move history: [{}]", name, history.iter().join(", "))
}

pub fn farewell(player: &Player, opponent: &Player) -> String {
    format!(
        "Farewell! Final score: {} - {}, {} - {}",
        player.name(),
        player.score(),
        opponent.name(),
        opponent.score()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_yes_continues() {
        assert!(wants_another_round("yes\n"));
        assert!(wants_another_round("YES"));
        assert!(!wants_another_round("y"));
        assert!(!wants_another_round("no"));
        assert!(!wants_another_round(""));
    }

    #[test]
    fn summary_names_the_winning_move() {
        let result = RoundResult {
            player_move: Move::Scissors,
            opponent_move: Move::Paper,
            outcome: Outcome::PlayerWins,
            reward: -1.0,
        };
        let text = round_summary("Ada", "JARVIS", &result);
        assert!(text.starts_with("Ada chose scissors, JARVIS chose paper"));
        assert!(text.contains("Scissors cut the paper!"));
    }

    #[test]
    fn history_lists_moves_in_order() {
        let moves: MoveHistory = [Move::Rock, Move::Paper].into_iter().collect();
        assert_eq!(history("Ada", &moves), "Ada's move history: [rock, paper]");
    }
}
