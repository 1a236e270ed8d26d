use nba_report_lambda_rust::game_time::GameTimeResolver;
use nba_report_lambda_rust::model::game::GameScore;
use nba_report_lambda_rust::report::{
    chunk_records, format_scheduled, format_score, results_posts, schedule_posts, standings_posts, write_json,
    FUTURE_GAMES_FILE, LAST_GAMES_FILE, NO_GAMES_PLANNED,
};
use nba_report_lambda_rust::scoreboard::Scoreboard;
use nba_report_lambda_rust::standings::Standings;
use tempfile::tempdir;

fn sample_score() -> GameScore {
    GameScore {
        game_id: "0022300560".to_string(),
        away: "New York Knicks".to_string(),
        away_score: 109,
        home: "Boston Celtics".to_string(),
        home_score: 118,
    }
}

#[test]
fn formats_final_score_block() {
    assert_eq!(format_score(&sample_score()), "--New York Knicks:109\nBoston Celtics:118\n--");
}

#[test]
fn formats_scheduled_game_in_display_zone() {
    let body = std::fs::read_to_string("tests/sample_scoreboard.json").unwrap();
    let sb = Scoreboard::from_json(&body).unwrap();
    let resolver = GameTimeResolver::for_display("Europe/Paris").unwrap();
    let lines: Vec<String> = sb.scheduled_games(&resolver).iter().map(format_scheduled).collect();

    assert_eq!(lines, vec!["Lakers vs. Heat @ 01:30", "Nuggets vs. Warriors @ 04:00"]);
}

#[test]
fn writes_pretty_json_with_four_space_indent() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("reports");
    let records = vec![format_score(&sample_score())];

    let path = write_json(&nested, LAST_GAMES_FILE, &records).expect("write failed");
    let written = std::fs::read_to_string(&path).unwrap();

    assert_eq!(path, nested.join(LAST_GAMES_FILE));
    assert!(written.starts_with("[\n    \""), "file was: {}", written);
    let back: Vec<String> = serde_json::from_str(&written).unwrap();
    assert_eq!(back, records);
}

#[test]
fn empty_schedule_is_an_empty_array_on_disk() {
    let dir = tempdir().unwrap();
    let planned: Vec<String> = Vec::new();
    let path = write_json(dir.path(), FUTURE_GAMES_FILE, &planned).unwrap();

    assert_eq!(std::fs::read_to_string(path).unwrap(), "[]");
}

#[test]
fn rewriting_overwrites_previous_report() {
    let dir = tempdir().unwrap();
    write_json(dir.path(), LAST_GAMES_FILE, &vec!["old".to_string(), "older".to_string()]).unwrap();
    let path = write_json(dir.path(), LAST_GAMES_FILE, &vec!["new".to_string()]).unwrap();

    let back: Vec<String> = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(back, vec!["new"]);
}

#[test]
fn empty_schedule_posts_sentinel() {
    let posts = schedule_posts(&[], 2000);
    assert_eq!(posts.len(), 1);
    assert!(posts[0].contains(NO_GAMES_PLANNED), "post was: {}", posts[0]);
    assert!(posts[0].ends_with("#NBA"));
}

#[test]
fn no_results_means_no_posts() {
    assert!(results_posts(&[], 2000).is_empty());
}

#[test]
fn chunks_respect_length_and_keep_records_whole() {
    let records: Vec<String> = (0..10).map(|i| format!("--Team {}:100\nOther {}:99\n--", i, i)).collect();
    let posts = chunk_records("Results of the night:", &records, 120);

    assert!(posts.len() > 1);
    assert!(posts[0].starts_with("Results of the night:\n--Team 0"));
    for post in &posts {
        assert!(post.chars().count() <= 120, "post too long: {}", post);
        assert!(post.ends_with("\n#NBA"));
    }
    for record in &records {
        assert_eq!(posts.iter().filter(|p| p.contains(record.as_str())).count(), 1, "record split or lost: {}", record);
    }
}

#[test]
fn oversized_record_gets_its_own_post() {
    let records = vec!["short".to_string(), "x".repeat(50), "tail".to_string()];
    let posts = chunk_records("Header:", &records, 30);

    assert_eq!(posts.len(), 3, "posts were: {:?}", posts);
    assert_eq!(posts[1], format!("{}\n#NBA", "x".repeat(50)));
}

#[test]
fn standings_split_each_conference_in_halves() {
    let body = std::fs::read_to_string("tests/sample_standings.json").unwrap();
    let standings = Standings::from_json(&body).unwrap();
    let posts = standings_posts(&standings);

    assert_eq!(posts.len(), 4, "posts were: {:?}", posts);
    assert_eq!(posts[0], "Eastern Conference Standings:\n1. Boston Celtics\n2. Milwaukee Bucks\n#NBA");
    assert_eq!(posts[1], "Eastern Conference Standings:\n3. Philadelphia 76ers\n#NBA");
    assert_eq!(posts[2], "Western Conference Standings:\n1. Minnesota Timberwolves\n#NBA");
    assert_eq!(posts[3], "Western Conference Standings:\n2. Oklahoma City Thunder\n#NBA");
}
