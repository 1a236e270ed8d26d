use serde::{Deserialize, Serialize};

/// Row of the `Standings` result set of `leaguestandingsv3`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingRow {
    #[serde(rename = "TeamID")]
    pub team_id: i64,
    #[serde(rename = "TeamCity")]
    pub team_city: String,
    #[serde(rename = "TeamName")]
    pub team_name: String,
    // "East" or "West"
    #[serde(rename = "Conference")]
    pub conference: String,
    #[serde(rename = "PlayoffRank")]
    pub playoff_rank: i64,
    #[serde(rename = "WINS", default)]
    pub wins: Option<i64>,
    #[serde(rename = "LOSSES", default)]
    pub losses: Option<i64>,
}
