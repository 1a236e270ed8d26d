use std::time::Duration;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use tracing::{error, info, info_span};

use crate::error::ReportError;

pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// stats.nba.com drops requests that do not look like they come from the nba.com site.
const STATS_HEADERS: [(&str, &str); 6] = [
    ("User-Agent", "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36"),
    ("Referer", "https://www.nba.com/"),
    ("Origin", "https://www.nba.com"),
    ("Accept", "application/json, text/plain, */*"),
    ("x-nba-stats-origin", "stats"),
    ("x-nba-stats-token", "true"),
];

/// GET `{STATS_BASE_URL}/{endpoint}` with the given query parameters and return the body.
pub fn fetch_stats(endpoint: &str, params: &[(&str, &str)]) -> Result<String, ReportError> {
    let url = format!("{}/{}", STATS_BASE_URL, endpoint);
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(REQUEST_TIMEOUT))
        .build()
        .into();

    let response_result = {
        let _span = info_span!("stats_fetch", url = %url).entered();
        let mut request = agent.get(&url);
        for (name, value) in STATS_HEADERS {
            request = request.header(name, value);
        }
        for (name, value) in params {
            request = request.query(*name, *value);
        }
        request.call()
    };

    let response = response_result.inspect_err(|e| error!(error = %e, url = %url, "Stats request failed"))?;
    let body = response
        .into_body()
        .read_to_string()
        .inspect_err(|e| error!(error = %e, url = %url, "Failed to read stats response body"))?;
    info!(url = %url, bytes = body.len(), "Fetched stats response");
    Ok(body)
}

/// Season label ("2024-25") of the season `date` falls in. Seasons start in October.
pub fn season_for(date: NaiveDate) -> String {
    let start_year = if date.month() >= 10 { date.year() } else { date.year() - 1 };
    format!("{}-{:02}", start_year, (start_year + 1) % 100)
}

/// Calendar date in the league zone at instant `now`.
pub fn league_today(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&chrono_tz::America::New_York).date_naive()
}
