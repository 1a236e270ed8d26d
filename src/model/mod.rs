pub mod game;
pub mod scoreboard;
pub mod standings;
pub mod stats;
