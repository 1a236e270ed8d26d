use std::env;
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::discord::{DISCORD_MAX_LEN, Discord};
use crate::error::ReportError;
use crate::game_time::GameTimeResolver;
use crate::nba;
use crate::report;
use crate::scoreboard::Scoreboard;
use crate::standings::Standings;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Test,
    Production,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Workflow {
    Scores,
    Standings,
    Schedule,
}

pub const ALL_WORKFLOWS: [Workflow; 3] = [Workflow::Scores, Workflow::Standings, Workflow::Schedule];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub discord_hook_url: Option<String>,
    #[serde(default)]
    pub test_discord_hook_url: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_display_timezone")]
    pub display_timezone: String,
    // Reference "today" in the league zone; defaults to the current date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub workflows: Vec<Workflow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

fn default_output_dir() -> String {
    "/tmp/nba-report".to_string()
}

fn default_display_timezone() -> String {
    "Europe/Paris".to_string()
}

impl Default for Request {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            discord_hook_url: None,
            test_discord_hook_url: None,
            output_dir: default_output_dir(),
            display_timezone: default_display_timezone(),
            date: None,
            workflows: Vec::new(),
        }
    }
}

impl Request {
    /// Requested workflows; all of them when none are named.
    pub fn workflows(&self) -> Vec<Workflow> {
        if self.workflows.is_empty() {
            ALL_WORKFLOWS.to_vec()
        } else {
            self.workflows.clone()
        }
    }

    /// Webhook for the request mode, falling back to the matching environment variable.
    pub fn hook_url(&self) -> Option<String> {
        let (configured, env_name) = match self.mode {
            Mode::Test => (&self.test_discord_hook_url, "TEST_DISCORD_HOOK_URL"),
            Mode::Production => (&self.discord_hook_url, "DISCORD_HOOK_URL"),
        };
        configured
            .clone()
            .or_else(|| env::var(env_name).ok())
            .filter(|url| !url.trim().is_empty())
    }

    pub fn league_today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| nba::league_today(Utc::now()))
    }
}

#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    Ok(run(event.payload).await?)
}

/// Run the requested workflows, each on its own blocking task, and summarize the outcome.
#[instrument(skip(request), fields(mode = ?request.mode))]
pub async fn run(request: Request) -> Result<Response, ReportError> {
    let resolver = GameTimeResolver::for_display(&request.display_timezone)?;
    let today = request.league_today();
    let output_dir = PathBuf::from(&request.output_dir);
    let discord = request.hook_url().map(Discord::new);
    if discord.is_none() {
        info!("No webhook configured; writing report files only");
    }

    let mut handles: Vec<tokio::task::JoinHandle<String>> = Vec::new();
    for wf in request.workflows() {
        // Each blocking task owns its inputs.
        let output_dir = output_dir.clone();
        let discord = discord.clone();
        let handle = tokio::task::spawn_blocking(move || match wf {
            Workflow::Scores => scores_workflow(today, &output_dir, discord.as_ref()),
            Workflow::Standings => standings_workflow(today, &output_dir, discord.as_ref()),
            Workflow::Schedule => schedule_workflow(today, &resolver, &output_dir, discord.as_ref()),
        });
        handles.push(handle);
    }

    let mut summaries: Vec<String> = Vec::new();
    for h in handles {
        match h.await {
            Ok(summary) => summaries.push(summary),
            Err(e) => summaries.push(format!("Workflow task join error: {}", e)),
        }
    }

    let message = if summaries.is_empty() {
        "No workflows executed".to_string()
    } else {
        summaries.join("; ")
    };
    info!(message = %message, "Report run finished");
    Ok(Response { message })
}

fn scores_workflow(today: NaiveDate, output_dir: &Path, discord: Option<&Discord>) -> String {
    let Some(yesterday) = today.checked_sub_days(Days::new(1)) else {
        return format!("Scores: no day before {}", today);
    };
    let scoreboard = match Scoreboard::for_date(yesterday) {
        Ok(sb) => sb,
        Err(e) => {
            error!(error = %e, "Scoreboard fetch failed");
            return format!("Scores fetch failed: {}", e);
        }
    };
    let results: Vec<String> = scoreboard.final_scores().iter().map(report::format_score).collect();
    info!(date = %yesterday, games = results.len(), "Prepared last night's results");
    let posts = report::results_posts(&results, DISCORD_MAX_LEN);
    publish("Scores", output_dir, report::LAST_GAMES_FILE, &results, &posts, discord)
}

fn standings_workflow(today: NaiveDate, output_dir: &Path, discord: Option<&Discord>) -> String {
    let season = nba::season_for(today);
    let standings = match Standings::for_season(&season) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, season = %season, "Standings fetch failed");
            return format!("Standings fetch failed: {}", e);
        }
    };
    let posts = report::standings_posts(&standings);
    publish("Standings", output_dir, report::STANDINGS_FILE, &standings, &posts, discord)
}

fn schedule_workflow(today: NaiveDate, resolver: &GameTimeResolver, output_dir: &Path, discord: Option<&Discord>) -> String {
    let scoreboard = match Scoreboard::for_date(today) {
        Ok(sb) => sb,
        Err(e) => {
            error!(error = %e, "Scoreboard fetch failed");
            return format!("Schedule fetch failed: {}", e);
        }
    };
    let mut games = scoreboard.scheduled_games(resolver);
    games.sort_by_key(|g| g.time.utc_time);
    let planned: Vec<String> = games.iter().map(report::format_scheduled).collect();
    info!(date = %today, games = planned.len(), "Prepared tonight's schedule");
    let posts = report::schedule_posts(&planned, DISCORD_MAX_LEN);
    publish("Schedule", output_dir, report::FUTURE_GAMES_FILE, &planned, &posts, discord)
}

/// Write the report file, then post to the webhook when one is configured.
fn publish<T: Serialize + ?Sized>(
    label: &str,
    output_dir: &Path,
    file_name: &str,
    value: &T,
    posts: &[String],
    discord: Option<&Discord>,
) -> String {
    if let Err(e) = report::write_json(output_dir, file_name, value) {
        error!(error = %e, file = file_name, "Failed to write report file");
        return format!("{} write failed: {}", label, e);
    }
    let Some(discord) = discord else {
        return format!("{}: wrote {}", label, file_name);
    };
    if posts.is_empty() {
        info!(label, "Nothing to post; skipping Discord post");
        return format!("{}: wrote {} (nothing to post)", label, file_name);
    }
    match discord.post_all(posts) {
        Ok(count) => format!("{}: wrote {}, posted {} message(s)", label, file_name, count),
        Err(e) => format!("{} post failed: {}", label, e),
    }
}
