use nba_report_lambda_rust::model::standings::StandingRow;
use nba_report_lambda_rust::standings::Standings;

fn load_sample() -> String {
    std::fs::read_to_string("tests/sample_standings.json").expect("failed to read sample_standings.json")
}

#[test]
fn groups_by_conference_in_playoff_order() {
    let standings = Standings::from_json(&load_sample()).expect("from_json failed");

    assert_eq!(standings.east, vec!["Boston Celtics", "Milwaukee Bucks", "Philadelphia 76ers"]);
    assert_eq!(standings.west, vec!["Minnesota Timberwolves", "Oklahoma City Thunder"]);
}

#[test]
fn serializes_with_conference_keys() {
    let standings = Standings::from_json(&load_sample()).expect("from_json failed");
    let value = serde_json::to_value(&standings).unwrap();

    assert_eq!(value["East"][0], "Boston Celtics");
    assert_eq!(value["West"][1], "Oklahoma City Thunder");
}

#[test]
fn rows_outside_both_conferences_are_left_out() {
    let row = |city: &str, name: &str, conference: &str, rank: i64| StandingRow {
        team_id: rank,
        team_city: city.to_string(),
        team_name: name.to_string(),
        conference: conference.to_string(),
        playoff_rank: rank,
        wins: None,
        losses: None,
    };
    let standings = Standings::from_rows(vec![
        row("Boston", "Celtics", "East", 1),
        row("Team", "World", "Exhibition", 2),
        row("Denver", "Nuggets", "west", 3),
    ]);

    assert_eq!(standings.east, vec!["Boston Celtics"]);
    assert_eq!(standings.west, vec!["Denver Nuggets"]);
}
