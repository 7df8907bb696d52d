use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Playing position. Everything except `Goalie` is scored as a skater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    Center,
    Wing,
    Defense,
    Goalie,
    #[default]
    Unknown,
}

impl Position {
    /// Parse a position name or code ("C", "LW", "Defense", "G", ...).
    /// Unrecognized values map to `Unknown` rather than failing.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "center" | "centre" => Position::Center,
            "l" | "r" | "lw" | "rw" | "w" | "f" | "wing" | "left wing" | "right wing" => {
                Position::Wing
            }
            "d" | "defense" | "defence" | "defenseman" | "defenceman" => Position::Defense,
            "g" | "goalie" | "goaltender" => Position::Goalie,
            _ => Position::Unknown,
        }
    }

    pub fn is_goalie(&self) -> bool {
        matches!(self, Position::Goalie)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Center => "Center",
            Position::Wing => "Wing",
            Position::Defense => "Defense",
            Position::Goalie => "Goalie",
            Position::Unknown => "Unknown",
        }
    }

    /// Short code used in tables
    pub fn code(&self) -> &'static str {
        match self {
            Position::Center => "C",
            Position::Wing => "W",
            Position::Defense => "D",
            Position::Goalie => "G",
            Position::Unknown => "?",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Position::parse).unwrap_or_default())
    }
}

/// Raw playoff counters for one player. Missing fields are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatLine {
    pub goals: i64,
    pub assists: i64,
    pub wins: i64,
    pub shutouts: i64,
}

/// One roster entry in canonical form.
///
/// `player_id` and `fantasy_team` stay optional here: records missing either
/// one are carried through parsing and dropped at scoring time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fantasy_team: Option<String>,
    pub position: Position,
    pub current_stats: StatLine,
    pub points_before_acquiring: i64,
    pub playoff_round_drafted: u32,
    pub pre_acq_round_recorded: u32,
}

impl PlayerRecord {
    /// Identity fields needed for scoring, or None if the record must be skipped
    pub fn identity(&self) -> Option<(&str, &str)> {
        let id = self.player_id.as_deref().filter(|s| !s.is_empty())?;
        let team = self.fantasy_team.as_deref().filter(|s| !s.is_empty())?;
        Some((id, team))
    }

    /// Label for log messages: name when known, otherwise the id
    pub fn label(&self) -> String {
        match (&self.name, &self.player_id) {
            (Some(name), Some(id)) => format!("{} ({})", name, id),
            (Some(name), None) => name.clone(),
            (None, Some(id)) => id.clone(),
            (None, None) => "<unidentified>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_codes() {
        assert_eq!(Position::parse("C"), Position::Center);
        assert_eq!(Position::parse("LW"), Position::Wing);
        assert_eq!(Position::parse("rw"), Position::Wing);
        assert_eq!(Position::parse("D"), Position::Defense);
        assert_eq!(Position::parse("G"), Position::Goalie);
        assert_eq!(Position::parse(" Goaltender "), Position::Goalie);
    }

    #[test]
    fn test_position_unknown_is_skater() {
        let pos = Position::parse("Coach");
        assert_eq!(pos, Position::Unknown);
        assert!(!pos.is_goalie());
    }

    #[test]
    fn test_identity_requires_both_fields() {
        let mut record = PlayerRecord {
            player_id: Some("8478402".to_string()),
            fantasy_team: Some("Team A".to_string()),
            ..Default::default()
        };
        assert_eq!(record.identity(), Some(("8478402", "Team A")));

        record.fantasy_team = Some(String::new());
        assert!(record.identity().is_none());

        record.fantasy_team = Some("Team A".to_string());
        record.player_id = None;
        assert!(record.identity().is_none());
    }

    #[test]
    fn test_canonical_deserialize() {
        let json = r#"{
            "playerId": "1",
            "fantasyTeam": "A",
            "position": "G",
            "currentStats": {"wins": 3},
            "playoffRoundDrafted": 2,
            "preAcqRoundRecorded": 1
        }"#;
        let record: PlayerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.position, Position::Goalie);
        assert_eq!(record.current_stats.wins, 3);
        assert_eq!(record.current_stats.shutouts, 0);
        assert_eq!(record.points_before_acquiring, 0);
        assert_eq!(record.playoff_round_drafted, 2);
        assert_eq!(record.pre_acq_round_recorded, 1);
    }

    #[test]
    fn test_serialize_uses_canonical_names() {
        let record = PlayerRecord {
            player_id: Some("1".to_string()),
            fantasy_team: Some("A".to_string()),
            position: Position::Wing,
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["playerId"], "1");
        assert_eq!(value["fantasyTeam"], "A");
        assert_eq!(value["position"], "Wing");
        assert_eq!(value["preAcqRoundRecorded"], 0);
        assert!(value.get("name").is_none());
    }
}
