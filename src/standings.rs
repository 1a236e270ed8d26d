use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::error::ReportError;
use crate::model::standings::StandingRow;
use crate::model::stats::StatsDocument;
use crate::nba;

/// Conference standings, best playoff rank first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    #[serde(rename = "East")]
    pub east: Vec<String>,
    #[serde(rename = "West")]
    pub west: Vec<String>,
}

impl Standings {
    /// Fetch regular season standings for `season` ("2024-25").
    #[instrument(level = "info")]
    pub fn for_season(season: &str) -> Result<Self, ReportError> {
        let body = nba::fetch_stats(
            "leaguestandingsv3",
            &[("LeagueID", "00"), ("Season", season), ("SeasonType", "Regular Season")],
        )?;
        let standings = Self::from_json(&body).inspect_err(|e| error!(error = %e, "Failed to read standings"))?;
        info!(east = standings.east.len(), west = standings.west.len(), "Constructed Standings");
        Ok(standings)
    }

    /// Build from a raw `leaguestandingsv3` response body (no network).
    pub fn from_json(body: &str) -> Result<Self, ReportError> {
        let doc: StatsDocument = serde_json::from_str(body)?;
        let rows: Vec<StandingRow> = doc.result_set("Standings")?.rows()?;
        Ok(Self::from_rows(rows))
    }

    pub fn from_rows(mut rows: Vec<StandingRow>) -> Self {
        rows.sort_by_key(|r| r.playoff_rank);
        let mut standings = Standings::default();
        for row in rows {
            let name = format!("{} {}", row.team_city, row.team_name);
            if row.conference.eq_ignore_ascii_case("east") {
                standings.east.push(name);
            } else if row.conference.eq_ignore_ascii_case("west") {
                standings.west.push(name);
            } else {
                warn!(team = %name, conference = %row.conference, "Skipping standing row with unknown conference");
            }
        }
        standings
    }
}
