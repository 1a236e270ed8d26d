/// A franchise entry from the league's static team list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NbaTeam {
    pub id: i64,
    pub abbreviation: &'static str,
    pub full_name: &'static str,
    pub nickname: &'static str,
}

const fn team(id: i64, abbreviation: &'static str, full_name: &'static str, nickname: &'static str) -> NbaTeam {
    NbaTeam { id, abbreviation, full_name, nickname }
}

pub static TEAMS: [NbaTeam; 30] = [
    team(1610612737, "ATL", "Atlanta Hawks", "Hawks"),
    team(1610612738, "BOS", "Boston Celtics", "Celtics"),
    team(1610612739, "CLE", "Cleveland Cavaliers", "Cavaliers"),
    team(1610612740, "NOP", "New Orleans Pelicans", "Pelicans"),
    team(1610612741, "CHI", "Chicago Bulls", "Bulls"),
    team(1610612742, "DAL", "Dallas Mavericks", "Mavericks"),
    team(1610612743, "DEN", "Denver Nuggets", "Nuggets"),
    team(1610612744, "GSW", "Golden State Warriors", "Warriors"),
    team(1610612745, "HOU", "Houston Rockets", "Rockets"),
    team(1610612746, "LAC", "Los Angeles Clippers", "Clippers"),
    team(1610612747, "LAL", "Los Angeles Lakers", "Lakers"),
    team(1610612748, "MIA", "Miami Heat", "Heat"),
    team(1610612749, "MIL", "Milwaukee Bucks", "Bucks"),
    team(1610612750, "MIN", "Minnesota Timberwolves", "Timberwolves"),
    team(1610612751, "BKN", "Brooklyn Nets", "Nets"),
    team(1610612752, "NYK", "New York Knicks", "Knicks"),
    team(1610612753, "ORL", "Orlando Magic", "Magic"),
    team(1610612754, "IND", "Indiana Pacers", "Pacers"),
    team(1610612755, "PHI", "Philadelphia 76ers", "76ers"),
    team(1610612756, "PHX", "Phoenix Suns", "Suns"),
    team(1610612757, "POR", "Portland Trail Blazers", "Trail Blazers"),
    team(1610612758, "SAC", "Sacramento Kings", "Kings"),
    team(1610612759, "SAS", "San Antonio Spurs", "Spurs"),
    team(1610612760, "OKC", "Oklahoma City Thunder", "Thunder"),
    team(1610612761, "TOR", "Toronto Raptors", "Raptors"),
    team(1610612762, "UTA", "Utah Jazz", "Jazz"),
    team(1610612763, "MEM", "Memphis Grizzlies", "Grizzlies"),
    team(1610612764, "WAS", "Washington Wizards", "Wizards"),
    team(1610612765, "DET", "Detroit Pistons", "Pistons"),
    team(1610612766, "CHA", "Charlotte Hornets", "Hornets"),
];

pub fn find_team_by_id(id: i64) -> Option<&'static NbaTeam> {
    TEAMS.iter().find(|t| t.id == id)
}
