use serde_json::{Map, Value};

use super::types::{PlayerRecord, Position, StatLine};

// Accepted spellings, canonical name first.
const PLAYER_ID_KEYS: &[&str] = &["playerId", "Player ID", "player_id", "id"];
const NAME_KEYS: &[&str] = &["name", "Player", "playerName", "fullName"];
const FANTASY_TEAM_KEYS: &[&str] = &["fantasyTeam", "FantasyTeam", "fantasy_team", "Fantasy Team"];
const POSITION_KEYS: &[&str] = &["position", "Position", "positionCode"];
const STATS_KEYS: &[&str] = &["currentStats", "currentPlayoffStats", "current_stats", "stats"];
const GOALS_KEYS: &[&str] = &["goals", "Goals"];
const ASSISTS_KEYS: &[&str] = &["assists", "Assists"];
const WINS_KEYS: &[&str] = &["wins", "Wins"];
const SHUTOUTS_KEYS: &[&str] = &["shutouts", "Shutouts"];
const PRE_ACQ_POINTS_KEYS: &[&str] = &[
    "pointsBeforeAcquiring",
    "Points Before Acquiring",
    "points_before_acquiring",
];
const ROUND_DRAFTED_KEYS: &[&str] = &["playoffRoundDrafted", "playoff_round_drafted"];
const PRE_ACQ_ROUND_KEYS: &[&str] = &["preAcqRoundRecorded", "preAcqRound", "pre_acq_round"];

/// Resolve one upstream roster entry into a canonical `PlayerRecord`.
///
/// `key` is the entry's key when the document is an object-of-objects; it
/// stands in for a missing player id. Returns None when `value` is not a JSON
/// object.
pub fn normalize_record(value: &Value, key: Option<&str>) -> Option<PlayerRecord> {
    let obj = value.as_object()?;

    let player_id = lookup(obj, PLAYER_ID_KEYS)
        .and_then(as_identifier)
        .or_else(|| key.filter(|k| !k.is_empty()).map(str::to_string));

    let stats = match lookup(obj, STATS_KEYS).and_then(Value::as_object) {
        Some(stats) => stat_line(stats),
        // Older flat exports keep the counters on the record itself
        None => stat_line(obj),
    };

    Some(PlayerRecord {
        player_id,
        name: lookup(obj, NAME_KEYS).and_then(as_identifier),
        fantasy_team: lookup(obj, FANTASY_TEAM_KEYS).and_then(as_identifier),
        position: lookup(obj, POSITION_KEYS)
            .and_then(Value::as_str)
            .map(Position::parse)
            .unwrap_or_default(),
        current_stats: stats,
        points_before_acquiring: int_field(obj, PRE_ACQ_POINTS_KEYS),
        playoff_round_drafted: round_field(obj, ROUND_DRAFTED_KEYS),
        pre_acq_round_recorded: round_field(obj, PRE_ACQ_ROUND_KEYS),
    })
}

fn stat_line(obj: &Map<String, Value>) -> StatLine {
    StatLine {
        goals: int_field(obj, GOALS_KEYS),
        assists: int_field(obj, ASSISTS_KEYS),
        wins: int_field(obj, WINS_KEYS),
        shutouts: int_field(obj, SHUTOUTS_KEYS),
    }
}

/// First non-null value among the accepted spellings
fn lookup<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| !v.is_null())
}

/// Ids and names arrive as strings or bare numbers; empty strings count as missing
fn as_identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Integers pass through; fractional numbers and numeric strings truncate
fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => {
            let s = s.trim();
            s.parse()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    }
}

fn truncate(f: f64) -> Option<i64> {
    f.is_finite().then_some(f.trunc() as i64)
}

fn int_field(obj: &Map<String, Value>, keys: &[&str]) -> i64 {
    lookup(obj, keys).and_then(as_int).unwrap_or(0)
}

fn round_field(obj: &Map<String, Value>, keys: &[&str]) -> u32 {
    let raw = int_field(obj, keys);
    u32::try_from(raw).unwrap_or(if raw < 0 { 0 } else { u32::MAX })
}
