use serde::{Deserialize, Serialize};

/// Status id the scoreboard uses for finished games.
pub const STATUS_FINAL: i64 = 3;

/// Row of the `GameHeader` result set of `scoreboardv2`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct GameHeader {
    pub game_id: String,
    // "2024-01-15T00:00:00"
    pub game_date_est: String,
    pub game_status_id: i64,
    // Tip-off time before the game ("7:30 pm ET"), period or "Final" afterwards
    pub game_status_text: String,
    pub home_team_id: i64,
    pub visitor_team_id: i64,
}

/// Row of the `LineScore` result set of `scoreboardv2`: one per team per game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct LineScore {
    pub game_id: String,
    pub team_id: i64,
    #[serde(default)]
    pub team_abbreviation: Option<String>,
    #[serde(default)]
    pub team_city_name: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub pts: Option<i64>,
}

impl GameHeader {
    /// Date part of `GAME_DATE_EST`.
    pub fn date_text(&self) -> &str {
        self.game_date_est
            .split_once('T')
            .map(|(date, _)| date)
            .unwrap_or(&self.game_date_est)
    }

    pub fn is_final(&self) -> bool {
        self.game_status_id == STATUS_FINAL
    }
}
