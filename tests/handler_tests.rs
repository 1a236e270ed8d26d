use chrono::NaiveDate;
use nba_report_lambda_rust::handler::{run, Mode, Request, Workflow, ALL_WORKFLOWS};

#[test]
fn serde_mode_and_workflow_lowercase() {
    let m: Mode = serde_json::from_str("\"test\"").unwrap();
    assert_eq!(m, Mode::Test);
    let m2: Mode = serde_json::from_str("\"production\"").unwrap();
    assert_eq!(m2, Mode::Production);

    let w: Workflow = serde_json::from_str("\"scores\"").unwrap();
    assert_eq!(w, Workflow::Scores);
    let w2: Workflow = serde_json::from_str("\"standings\"").unwrap();
    assert_eq!(w2, Workflow::Standings);
    let w3: Workflow = serde_json::from_str("\"schedule\"").unwrap();
    assert_eq!(w3, Workflow::Schedule);
}

#[test]
fn empty_request_uses_defaults() {
    let req: Request = serde_json::from_value(serde_json::json!({})).unwrap();

    assert_eq!(req.mode, Mode::Test);
    assert_eq!(req.output_dir, "/tmp/nba-report");
    assert_eq!(req.display_timezone, "Europe/Paris");
    assert!(req.date.is_none());
    assert!(req.workflows.is_empty(), "workflows should default to empty vec");
    assert_eq!(req.workflows(), ALL_WORKFLOWS.to_vec());
}

#[test]
fn request_keeps_named_workflows_and_date() {
    let json = serde_json::json!({
        "mode": "production",
        "discord_hook_url": "https://example.invalid/prod",
        "test_discord_hook_url": "https://example.invalid/test",
        "output_dir": "/var/reports",
        "display_timezone": "America/Chicago",
        "date": "2024-01-15",
        "workflows": ["schedule", "scores"]
    });
    let req: Request = serde_json::from_value(json).unwrap();

    assert_eq!(req.workflows(), vec![Workflow::Schedule, Workflow::Scores]);
    assert_eq!(req.league_today(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert_eq!(req.hook_url().as_deref(), Some("https://example.invalid/prod"));
}

#[test]
fn test_mode_selects_test_hook() {
    let req = Request {
        mode: Mode::Test,
        discord_hook_url: Some("https://example.invalid/prod".to_string()),
        test_discord_hook_url: Some("https://example.invalid/test".to_string()),
        ..Request::default()
    };
    assert_eq!(req.hook_url().as_deref(), Some("https://example.invalid/test"));
}

#[tokio::test]
async fn run_rejects_unknown_display_zone_before_fetching() {
    let req = Request { display_timezone: "Mars/Olympus".to_string(), ..Request::default() };
    let err = run(req).await.unwrap_err();
    assert!(err.to_string().contains("Mars/Olympus"), "error was: {}", err);
}
