use std::io::{BufRead, Write};

use agent::client::Opponent;
use common::model::{
    messages::{Id, MatchResult},
    player::Player,
};
use tracing::{info, info_span};

use super::{console::Console, round::Match};
use crate::{error::Result, model::external};

pub struct Session<R, W> {
    id: Id,
    console: Console<R, W>,
    game: Match,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(player: Player, opponent: Opponent, console: Console<R, W>) -> Self {
        Session {
            id: Id::new(),
            console,
            game: Match::new(player, opponent),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn run(&mut self) -> Result<MatchResult> {
        let id = self.id;
        let span = info_span!("session", %id);
        let _enter = span.enter();
        info!("Session started");

        let Session { console, game, .. } = self;
        let opponent_name = game.opponent().player().name().to_owned();
        console.say(external::greeting(&opponent_name))?;
        loop {
            let Some(result) = game.play_round(|player| console.read_move(player.name()))? else {
                break;
            };
            let player = game.player();
            if let Some(decision) = game.opponent().last_decision() {
                if let Some(line) =
                    external::rationale(&opponent_name, &decision.rationale, decision.value)
                {
                    console.say(line)?;
                }
            }
            console.say(external::round_summary(player.name(), &opponent_name, &result))?;
            console.say(external::scoreboard(player, game.opponent().player()))?;
            console.say(external::history(player.name(), player.history()))?;
            if !console.ask_continue()? {
                break;
            }
            game.next_round();
        }

        console.say(external::farewell(game.player(), game.opponent().player()))?;
        let result = game.finish(id);
        info!(
            "Session ended after {} rounds ({} - {})",
            result.rounds, result.player_score, result.opponent_score
        );
        Ok(result)
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
