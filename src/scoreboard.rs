use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{error, info, instrument, warn};

use crate::error::ReportError;
use crate::game_time::{GameTimeResolver, RawGameTime};
use crate::model::game::{GameScore, ScheduledGame};
use crate::model::scoreboard::{GameHeader, LineScore};
use crate::model::stats::StatsDocument;
use crate::nba;
use crate::teams;

/// Games of one day as reported by `scoreboardv2`.
#[derive(Debug)]
pub struct Scoreboard {
    game_headers: Vec<GameHeader>,
    // (game id, team id) -> line score
    line_scores: HashMap<(String, i64), LineScore>,
}

impl Scoreboard {
    /// Fetch the scoreboard for `date` (league calendar date).
    #[instrument(level = "info")]
    pub fn for_date(date: NaiveDate) -> Result<Self, ReportError> {
        let game_date = date.format("%Y-%m-%d").to_string();
        let body = nba::fetch_stats(
            "scoreboardv2",
            &[("GameDate", game_date.as_str()), ("LeagueID", "00"), ("DayOffset", "0")],
        )?;
        let scoreboard = Self::from_json(&body).inspect_err(|e| error!(error = %e, "Failed to read scoreboard"))?;
        info!(games = scoreboard.game_headers.len(), "Constructed Scoreboard");
        Ok(scoreboard)
    }

    /// Build from a raw `scoreboardv2` response body (no network).
    pub fn from_json(body: &str) -> Result<Self, ReportError> {
        let doc: StatsDocument = serde_json::from_str(body)?;
        let game_headers: Vec<GameHeader> = doc.result_set("GameHeader")?.rows()?;
        let line_scores = doc
            .result_set("LineScore")?
            .rows::<LineScore>()?
            .into_iter()
            .map(|ls| ((ls.game_id.clone(), ls.team_id), ls))
            .collect();
        Ok(Scoreboard { game_headers, line_scores })
    }

    pub fn game_headers(&self) -> &[GameHeader] {
        &self.game_headers
    }

    /// Final scores of finished games, in feed order.
    pub fn final_scores(&self) -> Vec<GameScore> {
        self.game_headers
            .iter()
            .filter(|game| game.is_final())
            .map(|game| GameScore {
                game_id: game.game_id.clone(),
                away: self.full_name(&game.game_id, game.visitor_team_id, "Visitor"),
                away_score: self.points(&game.game_id, game.visitor_team_id),
                home: self.full_name(&game.game_id, game.home_team_id, "Home"),
                home_score: self.points(&game.game_id, game.home_team_id),
            })
            .collect()
    }

    /// Games whose status still carries a tip-off time. Games that cannot be resolved
    /// (already started, finished, postponed) are logged and left out.
    pub fn scheduled_games(&self, resolver: &GameTimeResolver) -> Vec<ScheduledGame> {
        let mut games = Vec::new();
        for game in &self.game_headers {
            let raw = RawGameTime::new(game.game_status_text.as_str(), game.date_text());
            match resolver.resolve(&raw) {
                Ok(time) => games.push(ScheduledGame {
                    game_id: game.game_id.clone(),
                    away: self.nickname(&game.game_id, game.visitor_team_id, "Visitor"),
                    home: self.nickname(&game.game_id, game.home_team_id, "Home"),
                    time,
                }),
                Err(e) => warn!(game_id = %game.game_id, error = %e, "Skipping game without a tip-off time"),
            }
        }
        games
    }

    fn points(&self, game_id: &str, team_id: i64) -> i64 {
        self.line_score(game_id, team_id).and_then(|ls| ls.pts).unwrap_or(0)
    }

    fn line_score(&self, game_id: &str, team_id: i64) -> Option<&LineScore> {
        self.line_scores.get(&(game_id.to_string(), team_id))
    }

    /// Team directory name first, then "City Name" from the line score.
    fn full_name(&self, game_id: &str, team_id: i64, fallback: &str) -> String {
        if let Some(team) = teams::find_team_by_id(team_id) {
            return team.full_name.to_string();
        }
        let line = self.line_score(game_id, team_id);
        match (
            line.and_then(|ls| ls.team_city_name.as_deref()),
            line.and_then(|ls| ls.team_name.as_deref()),
        ) {
            (Some(city), Some(name)) => format!("{} {}", city, name),
            (None, Some(name)) => name.to_string(),
            _ => fallback.to_string(),
        }
    }

    fn nickname(&self, game_id: &str, team_id: i64, fallback: &str) -> String {
        teams::find_team_by_id(team_id)
            .map(|team| team.nickname)
            .or_else(|| self.line_score(game_id, team_id).and_then(|ls| ls.team_name.as_deref()))
            .unwrap_or(fallback)
            .to_string()
    }
}
