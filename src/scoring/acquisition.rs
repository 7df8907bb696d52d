use serde::{Serialize, Serializer};

use crate::roster::PlayerRecord;

/// Whether a player's recorded pre-acquisition points count against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreAcquisition {
    /// Drafted in round 1 or never drafted: the team owns the whole playoff run
    NotApplicable,
    /// The recorded figure belongs to the acquisition round and is subtracted
    Applied(i64),
    /// The figure was recorded for an earlier round than the acquisition
    Stale { drafted: u32, recorded: u32 },
}

impl PreAcquisition {
    pub fn for_player(player: &PlayerRecord) -> Self {
        let drafted = player.playoff_round_drafted;
        let recorded = player.pre_acq_round_recorded;

        if drafted <= 1 {
            PreAcquisition::NotApplicable
        } else if recorded >= drafted {
            PreAcquisition::Applied(player.points_before_acquiring)
        } else {
            PreAcquisition::Stale { drafted, recorded }
        }
    }

    /// Points to subtract from gross
    pub fn deduction(&self) -> i64 {
        match self {
            PreAcquisition::Applied(points) => *points,
            _ => 0,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, PreAcquisition::Stale { .. })
    }

    /// Stale with a non-zero figure, i.e. points the team may be over-credited
    pub fn needs_warning(&self, player: &PlayerRecord) -> bool {
        self.is_stale() && player.points_before_acquiring != 0
    }

    /// camelCase tag used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            PreAcquisition::NotApplicable => "notApplicable",
            PreAcquisition::Applied(_) => "applied",
            PreAcquisition::Stale { .. } => "stale",
        }
    }
}

// Reports carry only the tag; the deduction and rounds have their own fields
impl Serialize for PreAcquisition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drafted(round: u32, recorded: u32, points: i64) -> PlayerRecord {
        PlayerRecord {
            player_id: Some("1".to_string()),
            fantasy_team: Some("A".to_string()),
            playoff_round_drafted: round,
            pre_acq_round_recorded: recorded,
            points_before_acquiring: points,
            ..Default::default()
        }
    }

    #[test]
    fn test_round_one_never_deducts() {
        for round in [0, 1] {
            let status = PreAcquisition::for_player(&drafted(round, round, 5));
            assert_eq!(status, PreAcquisition::NotApplicable);
            assert_eq!(status.deduction(), 0);
        }
    }

    #[test]
    fn test_matching_round_applies() {
        let status = PreAcquisition::for_player(&drafted(3, 3, 4));
        assert_eq!(status, PreAcquisition::Applied(4));
        assert_eq!(status.deduction(), 4);
    }

    #[test]
    fn test_later_recorded_round_applies() {
        let status = PreAcquisition::for_player(&drafted(2, 3, 4));
        assert_eq!(status.deduction(), 4);
    }

    #[test]
    fn test_earlier_recorded_round_is_stale() {
        let status = PreAcquisition::for_player(&drafted(3, 2, 4));
        assert_eq!(
            status,
            PreAcquisition::Stale {
                drafted: 3,
                recorded: 2
            }
        );
        assert!(status.is_stale());
        assert_eq!(status.deduction(), 0);
    }

    #[test]
    fn test_warning_only_for_nonzero_stale_figure() {
        let player = drafted(3, 2, 4);
        let status = PreAcquisition::for_player(&player);
        assert!(status.needs_warning(&player));

        let player = drafted(3, 2, 0);
        let status = PreAcquisition::for_player(&player);
        assert!(status.is_stale());
        assert!(!status.needs_warning(&player));

        let player = drafted(3, 3, 4);
        assert!(!PreAcquisition::for_player(&player).needs_warning(&player));
    }

    #[test]
    fn test_serializes_as_tag() {
        assert_eq!(
            serde_json::to_value(PreAcquisition::Applied(4)).unwrap(),
            "applied"
        );
        assert_eq!(
            serde_json::to_value(PreAcquisition::Stale {
                drafted: 3,
                recorded: 2
            })
            .unwrap(),
            "stale"
        );
        assert_eq!(
            serde_json::to_value(PreAcquisition::NotApplicable).unwrap(),
            "notApplicable"
        );
    }
}
