use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::error::ReportError;

/// IANA zone the league publishes tip-off times in.
pub const LEAGUE_ZONE: &str = "America/New_York";

/// Marker the stats feed appends to Eastern tip-off times ("7:30 pm ET").
pub const LEAGUE_MARKER: &str = " ET";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%I:%M %p";

/// A tip-off time as published: 12-hour clock text plus a `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGameTime {
    pub time_text: String,
    pub date_text: String,
}

impl RawGameTime {
    pub fn new(time_text: impl Into<String>, date_text: impl Into<String>) -> Self {
        Self { time_text: time_text.into(), date_text: date_text.into() }
    }
}

/// One instant seen from the league zone, UTC and the display zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGameTime {
    pub league_time: DateTime<Tz>,
    pub utc_time: DateTime<Utc>,
    pub local_time: DateTime<Tz>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCause {
    #[error("time {0:?} is not h:mm AM/PM")]
    InvalidTime(String),
    #[error("date {0:?} is not a YYYY-MM-DD calendar date")]
    InvalidDate(String),
    #[error("unknown timezone {0:?}")]
    UnknownTimezone(String),
    #[error("{0} does not exist in {1}")]
    NonexistentLocalTime(NaiveDateTime, String),
}

/// Resolution failure, carrying the offending input for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot resolve game time {time:?} on {date:?}: {cause}", time = .raw.time_text, date = .raw.date_text)]
pub struct ParseError {
    pub raw: RawGameTime,
    pub cause: ParseCause,
}

/// Resolve `raw` with zones given as IANA identifiers.
pub fn resolve(raw: &RawGameTime, league_zone: &str, display_zone: &str) -> Result<ResolvedGameTime, ParseError> {
    let league = parse_zone(league_zone).map_err(|cause| ParseError { raw: raw.clone(), cause })?;
    let display = parse_zone(display_zone).map_err(|cause| ParseError { raw: raw.clone(), cause })?;
    resolve_in(raw, league, display)
}

/// Resolve `raw` with already parsed zones.
///
/// The naive date-time is localized into `league_zone` using that zone's rules for the
/// given date. A wall clock that falls in a DST gap is rejected; one that falls in a DST
/// overlap takes the earlier instant.
pub fn resolve_in(raw: &RawGameTime, league_zone: Tz, display_zone: Tz) -> Result<ResolvedGameTime, ParseError> {
    let fail = |cause: ParseCause| ParseError { raw: raw.clone(), cause };

    let date_text = raw.date_text.trim();
    let time_text = strip_league_marker(&raw.time_text);
    if !has_date_shape(date_text) {
        return Err(fail(ParseCause::InvalidDate(raw.date_text.clone())));
    }
    if !has_clock_shape(time_text) {
        return Err(fail(ParseCause::InvalidTime(raw.time_text.clone())));
    }

    let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
        .map_err(|_| fail(ParseCause::InvalidDate(raw.date_text.clone())))?;
    let time = NaiveTime::parse_from_str(time_text, TIME_FORMAT)
        .map_err(|_| fail(ParseCause::InvalidTime(raw.time_text.clone())))?;
    let naive = date.and_time(time);

    let league_time = match league_zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            return Err(fail(ParseCause::NonexistentLocalTime(naive, league_zone.name().to_string())));
        }
    };
    let utc_time = league_time.with_timezone(&Utc);
    let local_time = utc_time.with_timezone(&display_zone);

    Ok(ResolvedGameTime { league_time, utc_time, local_time })
}

/// Trim and drop a trailing league marker when present. Any other suffix is left for
/// the parser to reject.
fn strip_league_marker(time_text: &str) -> &str {
    let trimmed = time_text.trim();
    trimmed.strip_suffix(LEAGUE_MARKER).unwrap_or(trimmed).trim_end()
}

/// Exactly `YYYY-MM-DD`. chrono alone accepts "24-01-15" or "2024-1-5".
fn has_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// `h:mm` or `hh:mm` followed by whitespace; the meridiem is left to the parser.
fn has_clock_shape(text: &str) -> bool {
    let Some((hour, rest)) = text.split_once(':') else {
        return false;
    };
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let Some(minutes) = rest.get(..2) else {
        return false;
    };
    (1..=2).contains(&hour.len())
        && digits(hour)
        && digits(minutes)
        && rest[2..].starts_with(char::is_whitespace)
}

fn parse_zone(name: &str) -> Result<Tz, ParseCause> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ParseCause::UnknownTimezone(name.to_string()))
}

/// Resolver bound to a league zone and a display zone.
#[derive(Debug, Clone, Copy)]
pub struct GameTimeResolver {
    league_zone: Tz,
    display_zone: Tz,
}

impl GameTimeResolver {
    pub fn new(league_zone: Tz, display_zone: Tz) -> Self {
        Self { league_zone, display_zone }
    }

    /// League zone fixed to US Eastern, display zone looked up by IANA name.
    pub fn for_display(display_zone: &str) -> Result<Self, ReportError> {
        let display = display_zone
            .trim()
            .parse::<Tz>()
            .map_err(|_| ReportError::Timezone(display_zone.to_string()))?;
        Ok(Self::new(chrono_tz::America::New_York, display))
    }

    pub fn league_zone(&self) -> Tz {
        self.league_zone
    }

    pub fn display_zone(&self) -> Tz {
        self.display_zone
    }

    pub fn resolve(&self, raw: &RawGameTime) -> Result<ResolvedGameTime, ParseError> {
        resolve_in(raw, self.league_zone, self.display_zone)
    }
}
