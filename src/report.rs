use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::error::ReportError;
use crate::model::game::{GameScore, ScheduledGame};
use crate::standings::Standings;

pub const LAST_GAMES_FILE: &str = "last_games_score.json";
pub const STANDINGS_FILE: &str = "standing.json";
pub const FUTURE_GAMES_FILE: &str = "future_games.json";

pub const TAG: &str = "#NBA";
pub const RESULTS_HEADER: &str = "Results of the night:";
pub const SCHEDULE_HEADER: &str = "Tonight's games:";
pub const NO_GAMES_PLANNED: &str = "No games planned";

/// "--Away:score\nHome:score\n--"
pub fn format_score(game: &GameScore) -> String {
    format!("--{}:{}\n{}:{}\n--", game.away, game.away_score, game.home, game.home_score)
}

/// "Away vs. Home @ HH:MM", time shown in the resolver's display zone.
pub fn format_scheduled(game: &ScheduledGame) -> String {
    format!("{} vs. {} @ {}", game.away, game.home, game.time.local_time.format("%H:%M"))
}

/// Overwrite `dir/file_name` with `value` as pretty JSON (4-space indent).
pub fn write_json<T: Serialize + ?Sized>(dir: &Path, file_name: &str, value: &T) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    let writer = BufWriter::new(File::create(&path)?);
    let mut serializer = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    serializer.into_inner().flush()?;
    info!(path = %path.display(), "Wrote report file");
    Ok(path)
}

/// Posts for last night's results. Nothing to post when no game finished.
pub fn results_posts(records: &[String], max_len: usize) -> Vec<String> {
    chunk_records(RESULTS_HEADER, records, max_len)
}

/// Posts for tonight's schedule; an empty schedule still yields one post.
pub fn schedule_posts(records: &[String], max_len: usize) -> Vec<String> {
    if records.is_empty() {
        return vec![with_tag(format!("{}\n{}", SCHEDULE_HEADER, NO_GAMES_PLANNED))];
    }
    chunk_records(SCHEDULE_HEADER, records, max_len)
}

/// Two posts per conference, each holding half of the numbered table.
pub fn standings_posts(standings: &Standings) -> Vec<String> {
    let mut posts = Vec::new();
    for (conference, teams) in [("Eastern Conference", &standings.east), ("Western Conference", &standings.west)] {
        let numbered: Vec<String> = teams
            .iter()
            .enumerate()
            .map(|(i, team)| format!("{}. {}", i + 1, team))
            .collect();
        let half = numbered.len().div_ceil(2);
        let (first, second) = numbered.split_at(half);
        for chunk in [first, second] {
            if !chunk.is_empty() {
                posts.push(with_tag(format!("{} Standings:\n{}", conference, chunk.join("\n"))));
            }
        }
    }
    posts
}

/// Pack `records` into posts of at most `max_len` characters (tag included). The first
/// post opens with `header`. Records are never split; one that does not fit on its own
/// is posted alone.
pub fn chunk_records(header: &str, records: &[String], max_len: usize) -> Vec<String> {
    let tag_len = TAG.chars().count() + 1;
    let mut posts = Vec::new();
    let mut current = header.to_string();
    let mut has_records = false;

    for record in records {
        let separator = usize::from(!current.is_empty());
        let needed = current.chars().count() + separator + record.chars().count() + tag_len;
        if has_records && needed > max_len {
            posts.push(with_tag(std::mem::take(&mut current)));
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(record);
        has_records = true;
    }
    if has_records {
        posts.push(with_tag(current));
    }
    posts
}

fn with_tag(body: String) -> String {
    format!("{}\n{}", body, TAG)
}
