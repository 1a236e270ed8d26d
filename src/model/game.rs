use crate::game_time::ResolvedGameTime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameScore {
    pub game_id: String,
    pub away: String,
    pub away_score: i64,
    pub home: String,
    pub home_score: i64,
}

#[derive(Clone, Debug)]
pub struct ScheduledGame {
    pub game_id: String,
    pub away: String,
    pub home: String,
    pub time: ResolvedGameTime,
}
