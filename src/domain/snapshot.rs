use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::models::{Bracket, Faction, Member, PlayerRecord, SeasonId};

/// Locales tried, in order, when a name comes back as a locale map
const PREFERRED_LOCALES: [&str; 3] = ["en_TW", "en_US", "zh_TW"];

#[derive(Debug, Error, PartialEq)]
pub enum EntryError {
    #[error("entry has neither a character nor a team")]
    MissingIdentity,
    #[error("rank must be positive, got {0}")]
    InvalidRank(i64),
}

// --- API Response Structures ---

/// Raw `pvp-leaderboard` response as dumped by the collection tool
#[derive(Debug, Deserialize, Serialize)]
pub struct LeaderboardSnapshot {
    pub entries: Vec<LeaderboardEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LeaderboardEntry {
    /// Present on individual leaderboards (season 9+)
    #[serde(default)]
    pub character: Option<CharacterRef>,
    /// Present on team leaderboards (season 8 and earlier)
    #[serde(default)]
    pub team: Option<TeamRef>,
    #[serde(default)]
    pub faction: Option<FactionRef>,
    pub rank: i64,
    pub rating: i32,
    #[serde(default)]
    pub season_match_statistics: Option<MatchStatistics>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CharacterRef {
    pub name: String,
    #[serde(default)]
    pub realm: Option<RealmRef>,
    #[serde(default)]
    pub playable_class: Option<NamedRef>,
    #[serde(default)]
    pub playable_race: Option<NamedRef>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RealmRef {
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NamedRef {
    #[serde(default)]
    pub name: Option<LocalizedName>,
}

/// Names are plain strings when a locale was requested, a locale map otherwise
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LocalizedName {
    Plain(String),
    Localized(BTreeMap<String, String>),
}

impl LocalizedName {
    pub fn resolve(&self) -> Option<String> {
        match self {
            LocalizedName::Plain(name) => Some(name.clone()),
            LocalizedName::Localized(names) => PREFERRED_LOCALES
                .iter()
                .find_map(|locale| names.get(*locale))
                .or_else(|| names.values().next())
                .cloned(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct FactionRef {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TeamRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub realm: Option<RealmRef>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TeamMember {
    #[serde(default)]
    pub character: Option<CharacterRef>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MatchStatistics {
    #[serde(default)]
    pub won: u32,
    #[serde(default)]
    pub lost: u32,
}

impl CharacterRef {
    pub fn realm_slug(&self) -> Option<String> {
        self.realm.as_ref().and_then(|r| r.slug.clone())
    }

    pub fn class_name(&self) -> Option<String> {
        resolve_named(&self.playable_class)
    }

    pub fn race_name(&self) -> Option<String> {
        resolve_named(&self.playable_race)
    }

    fn to_member(&self) -> Member {
        Member {
            name: self.name.clone(),
            realm: self.realm_slug(),
            class: self.class_name(),
            race: self.race_name(),
        }
    }
}

impl TeamRef {
    fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.member_names().join(" / "))
    }

    fn member_names(&self) -> Vec<String> {
        self.members
            .iter()
            .filter_map(|m| m.character.as_ref())
            .map(|c| c.name.clone())
            .collect()
    }
}

impl LeaderboardEntry {
    /// Convert into a domain record for the given season and bracket
    pub fn into_record(self, season: SeasonId, bracket: Bracket) -> Result<PlayerRecord, EntryError> {
        let rank = validate_rank(self.rank)?;
        let stats = self.season_match_statistics.unwrap_or_default();
        let faction = self.faction.as_ref().and_then(|f| Faction::from_api(&f.kind));

        let mut record = PlayerRecord {
            season,
            bracket,
            rank,
            rating: self.rating,
            name: String::new(),
            team: None,
            realm: None,
            faction,
            class: None,
            race: None,
            wins: stats.won,
            losses: stats.lost,
            members: Vec::new(),
        };

        if let Some(character) = self.character {
            record.name = character.name.clone();
            record.realm = character.realm_slug();
            record.class = character.class_name();
            record.race = character.race_name();
        } else if let Some(team) = self.team {
            record.name = team.display_name();
            record.team = team.name.clone().filter(|n| !n.trim().is_empty());
            record.realm = team.realm.as_ref().and_then(|r| r.slug.clone());
            record.members = team
                .members
                .iter()
                .filter_map(|m| m.character.as_ref())
                .map(CharacterRef::to_member)
                .collect();
        } else {
            return Err(EntryError::MissingIdentity);
        }

        Ok(record)
    }
}

/// One row of the delimited-text format
#[derive(Debug, Deserialize, Serialize)]
pub struct CsvRow {
    pub rank: i64,
    pub rating: i32,
    pub name: String,
    pub team: Option<String>,
    pub realm: Option<String>,
    pub class: Option<String>,
    pub race: Option<String>,
    pub faction: Option<String>,
    pub wins: u32,
    pub losses: u32,
}

impl CsvRow {
    pub fn into_record(self, season: SeasonId, bracket: Bracket) -> Result<PlayerRecord, EntryError> {
        Ok(PlayerRecord {
            season,
            bracket,
            rank: validate_rank(self.rank)?,
            rating: self.rating,
            name: self.name,
            team: self.team,
            realm: self.realm,
            faction: self.faction.as_deref().and_then(Faction::from_api),
            class: self.class,
            race: self.race,
            wins: self.wins,
            losses: self.losses,
            members: Vec::new(),
        })
    }
}

fn validate_rank(rank: i64) -> Result<u32, EntryError> {
    u32::try_from(rank)
        .ok()
        .filter(|r| *r > 0)
        .ok_or(EntryError::InvalidRank(rank))
}

fn resolve_named(named: &Option<NamedRef>) -> Option<String> {
    named.as_ref()?.name.as_ref()?.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_entry(json: &str) -> LeaderboardEntry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_individual_entry_conversion() {
        let entry = parse_entry(
            r#"{
                "character": {
                    "name": "Alice",
                    "id": 42,
                    "realm": {"id": 1, "slug": "maraudon"},
                    "playable_class": {"id": 8, "name": "Mage"},
                    "playable_race": {"id": 1, "name": {"en_US": "Human", "zh_TW": "人類"}}
                },
                "faction": {"type": "ALLIANCE"},
                "rank": 1,
                "rating": 2100,
                "season_match_statistics": {"played": 50, "won": 40, "lost": 10}
            }"#,
        );

        let record = entry.into_record(SeasonId(12), Bracket::ThreeVsThree).unwrap();

        assert_eq!(record.name, "Alice");
        assert_eq!(record.realm.as_deref(), Some("maraudon"));
        assert_eq!(record.class.as_deref(), Some("Mage"));
        assert_eq!(record.race.as_deref(), Some("Human"));
        assert_eq!(record.faction, Some(Faction::Alliance));
        assert_eq!((record.wins, record.losses), (40, 10));
        assert!(record.team.is_none());
    }

    #[test]
    fn test_team_entry_conversion() {
        let entry = parse_entry(
            r#"{
                "team": {
                    "name": "Sheep Happens",
                    "realm": {"slug": "ivus"},
                    "members": [
                        {"character": {"name": "Bob"}, "rating": 1900},
                        {"character": {"name": "Carol"}, "rating": 1880}
                    ]
                },
                "faction": {"type": "HORDE"},
                "rank": 3,
                "rating": 1890,
                "season_match_statistics": {"won": 20, "lost": 12}
            }"#,
        );

        let record = entry.into_record(SeasonId(5), Bracket::TwoVsTwo).unwrap();

        assert_eq!(record.name, "Sheep Happens");
        assert_eq!(record.team.as_deref(), Some("Sheep Happens"));
        assert_eq!(record.members.len(), 2);
        assert_eq!(record.members[1].name, "Carol");
        assert_eq!(record.faction, Some(Faction::Horde));
    }

    #[test]
    fn test_unnamed_team_uses_member_names() {
        let entry = parse_entry(
            r#"{"team": {"members": [{"character": {"name": "Bob"}}, {"character": {"name": "Dan"}}]}, "rank": 1, "rating": 1500}"#,
        );

        let record = entry.into_record(SeasonId(2), Bracket::TwoVsTwo).unwrap();

        assert_eq!(record.name, "Bob / Dan");
        assert!(record.team.is_none());
        assert_eq!(record.games_played(), 0);
    }

    #[test]
    fn test_invalid_entries_are_rejected() {
        let zero_rank = parse_entry(r#"{"character": {"name": "X"}, "rank": 0, "rating": 1500}"#);
        assert_eq!(
            zero_rank.into_record(SeasonId(1), Bracket::TwoVsTwo),
            Err(EntryError::InvalidRank(0))
        );

        let anonymous = parse_entry(r#"{"rank": 1, "rating": 1500}"#);
        assert_eq!(
            anonymous.into_record(SeasonId(1), Bracket::TwoVsTwo),
            Err(EntryError::MissingIdentity)
        );
    }
}
