pub mod game;
pub mod team_game;

pub use game::{Game, GameRecord};
pub use team_game::TeamGame;
