pub mod game;
pub mod history;
pub mod messages;
pub mod player;
