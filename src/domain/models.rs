use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// First season whose leaderboards include rated battlegrounds
pub const FIRST_RBG_SEASON: u32 = 9;

/// Season number as used by the Blizzard leaderboard API; seasons order by it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonId(pub u32);

impl SeasonId {
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseSeasonError {
    #[error("season must be a positive number, got {0:?}")]
    Invalid(String),
}

impl FromStr for SeasonId {
    type Err = ParseSeasonError;

    /// Accepts `12` as well as `s12` / `S12`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('s')
            .or_else(|| trimmed.strip_prefix('S'))
            .unwrap_or(trimmed);

        match digits.parse::<u32>() {
            Ok(n) if n > 0 => Ok(SeasonId(n)),
            _ => Err(ParseSeasonError::Invalid(s.to_string())),
        }
    }
}

/// A competitive season with its own independent rankings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: SeasonId,
    pub label: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Season {
    /// Season with the default "Season N" label and no known dates
    pub fn new(id: SeasonId) -> Self {
        Self {
            id,
            label: default_label(id),
            start: None,
            end: None,
        }
    }

    /// Human readable date span, e.g. `2020-03-01 – 2020-06-30`
    pub fn date_span(&self) -> Option<String> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(format!("{} – {}", start, end)),
            (Some(start), None) => Some(format!("since {}", start)),
            (None, Some(end)) => Some(format!("until {}", end)),
            (None, None) => None,
        }
    }
}

pub fn default_label(id: SeasonId) -> String {
    format!("Season {}", id)
}

/// Arena team-size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bracket {
    #[serde(rename = "2v2")]
    TwoVsTwo,
    #[serde(rename = "3v3")]
    ThreeVsThree,
    #[serde(rename = "5v5")]
    FiveVsFive,
    #[serde(rename = "rbg")]
    Rbg,
}

impl Bracket {
    pub const ALL: [Bracket; 4] = [
        Bracket::TwoVsTwo,
        Bracket::ThreeVsThree,
        Bracket::FiveVsFive,
        Bracket::Rbg,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bracket::TwoVsTwo => "2v2",
            Bracket::ThreeVsThree => "3v3",
            Bracket::FiveVsFive => "5v5",
            Bracket::Rbg => "rbg",
        }
    }

    /// Rated battlegrounds only exist from season 9 onward
    pub fn available_in(&self, season: SeasonId) -> bool {
        match self {
            Bracket::Rbg => season.get() >= FIRST_RBG_SEASON,
            _ => true,
        }
    }

    pub fn for_season(season: SeasonId) -> Vec<Bracket> {
        Self::ALL
            .into_iter()
            .filter(|b| b.available_in(season))
            .collect()
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseBracketError {
    #[error("unknown bracket {0:?} (expected 2v2, 3v3, 5v5 or rbg)")]
    Unknown(String),
}

impl FromStr for Bracket {
    type Err = ParseBracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2v2" => Ok(Bracket::TwoVsTwo),
            "3v3" => Ok(Bracket::ThreeVsThree),
            "5v5" => Ok(Bracket::FiveVsFive),
            "rbg" => Ok(Bracket::Rbg),
            _ => Err(ParseBracketError::Unknown(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    Alliance,
    Horde,
}

impl Faction {
    /// Blizzard reports factions as `ALLIANCE` / `HORDE`
    pub fn from_api(kind: &str) -> Option<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "alliance" => Some(Faction::Alliance),
            "horde" => Some(Faction::Horde),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Faction::Alliance => "Alliance",
            Faction::Horde => "Horde",
        }
    }
}

/// A character listed on a team-era leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub realm: Option<String>,
    pub class: Option<String>,
    pub race: Option<String>,
}

/// One leaderboard row, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub season: SeasonId,
    pub bracket: Bracket,
    pub rank: u32,
    pub rating: i32,
    /// Character name, or the team name for team-era entries
    pub name: String,
    pub team: Option<String>,
    pub realm: Option<String>,
    pub faction: Option<Faction>,
    pub class: Option<String>,
    pub race: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub members: Vec<Member>,
}

impl PlayerRecord {
    pub fn games_played(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    /// Share of games won, `None` before any game was played
    pub fn win_rate(&self) -> Option<f64> {
        match self.games_played() {
            0 => None,
            games => Some(self.wins as f64 / games as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_parsing_is_case_insensitive() {
        assert_eq!("3V3".parse::<Bracket>(), Ok(Bracket::ThreeVsThree));
        assert_eq!(" rbg ".parse::<Bracket>(), Ok(Bracket::Rbg));
        assert!("4v4".parse::<Bracket>().is_err());
    }

    #[test]
    fn test_rbg_only_from_season_nine() {
        assert!(!Bracket::Rbg.available_in(SeasonId(8)));
        assert!(Bracket::Rbg.available_in(SeasonId(9)));
        assert_eq!(Bracket::for_season(SeasonId(5)).len(), 3);
        assert_eq!(Bracket::for_season(SeasonId(12)).len(), 4);
    }

    #[test]
    fn test_season_id_parsing() {
        assert_eq!("12".parse::<SeasonId>(), Ok(SeasonId(12)));
        assert_eq!("S3".parse::<SeasonId>(), Ok(SeasonId(3)));
        assert!("0".parse::<SeasonId>().is_err());
        assert!("latest".parse::<SeasonId>().is_err());
    }

    #[test]
    fn test_win_rate() {
        let mut record = PlayerRecord {
            season: SeasonId(1),
            bracket: Bracket::TwoVsTwo,
            rank: 1,
            rating: 2000,
            name: "Alice".to_string(),
            team: None,
            realm: None,
            faction: None,
            class: None,
            race: None,
            wins: 0,
            losses: 0,
            members: Vec::new(),
        };
        assert_eq!(record.win_rate(), None);

        record.wins = 3;
        record.losses = 1;
        assert_eq!(record.win_rate(), Some(0.75));

        record.wins = u32::MAX;
        record.losses = u32::MAX;
        assert_eq!(record.games_played(), 2 * u64::from(u32::MAX));
        assert_eq!(record.win_rate(), Some(0.5));
    }
}
