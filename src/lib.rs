pub mod discord;
pub mod error;
pub mod game_time;
pub mod handler;
pub mod model;
pub mod nba;
pub mod report;
pub mod scoreboard;
pub mod standings;
pub mod teams;
