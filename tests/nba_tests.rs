use chrono::{NaiveDate, TimeZone, Utc};

use nba_report_lambda_rust::nba::{league_today, season_for};

#[test]
fn season_label_rolls_over_in_october() {
    assert_eq!(season_for(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()), "2023-24");
    assert_eq!(season_for(NaiveDate::from_ymd_opt(2024, 9, 30).unwrap()), "2023-24");
    assert_eq!(season_for(NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()), "2024-25");
    assert_eq!(season_for(NaiveDate::from_ymd_opt(1999, 11, 2).unwrap()), "1999-00");
}

#[test]
fn league_today_uses_eastern_calendar() {
    // 03:00 UTC is still the previous evening in New York.
    let now = Utc.with_ymd_and_hms(2024, 1, 16, 3, 0, 0).unwrap();
    assert_eq!(league_today(now), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

    let later = Utc.with_ymd_and_hms(2024, 1, 16, 6, 0, 0).unwrap();
    assert_eq!(league_today(later), NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
}
