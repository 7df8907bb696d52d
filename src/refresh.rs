use std::collections::HashMap;

use crate::roster::{PlayerRecord, StatLine};
use crate::scoring::{gross_points, ScoringConfig};

/// Outcome counts from a refresh pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    pub updated: usize,
    pub skipped: usize,
    pub missing: usize,
}

/// True when a player was acquired after round 1 and their recorded
/// pre-acquisition points predate the acquisition round.
pub fn needs_refresh(player: &PlayerRecord) -> bool {
    player.playoff_round_drafted > 1 && player.pre_acq_round_recorded < player.playoff_round_drafted
}

/// Recompute stale pre-acquisition points from a stats snapshot taken when
/// the players were acquired.
///
/// Each stale player found in `snapshot` (matched by player id) gets the gross
/// points of their snapshot stats, stamped with their acquisition round. Roster
/// order and every other field are left alone.
pub fn refresh_pre_acquisition(
    roster: &mut [PlayerRecord],
    snapshot: &[PlayerRecord],
    config: &ScoringConfig,
) -> RefreshSummary {
    let stats_by_id: HashMap<&str, &StatLine> = snapshot
        .iter()
        .filter_map(|p| Some((p.player_id.as_deref()?, &p.current_stats)))
        .collect();

    let mut summary = RefreshSummary::default();

    for player in roster.iter_mut() {
        let Some(id) = player.player_id.as_deref() else {
            summary.skipped += 1;
            continue;
        };

        if !needs_refresh(player) {
            log::debug!(
                "Skipping player {}: playoffRoundDrafted={}, preAcqRoundRecorded={}",
                player.label(),
                player.playoff_round_drafted,
                player.pre_acq_round_recorded
            );
            summary.skipped += 1;
            continue;
        }

        match stats_by_id.get(id) {
            Some(stats) => {
                let points = gross_points(stats, player.position, config);
                log::info!(
                    "Player {}: {} points before acquiring in round {}",
                    player.label(),
                    points,
                    player.playoff_round_drafted
                );
                player.points_before_acquiring = points;
                player.pre_acq_round_recorded = player.playoff_round_drafted;
                summary.updated += 1;
            }
            None => {
                log::warn!(
                    "Player {} needs a pre-acquisition refresh but has no stats in the snapshot",
                    player.label()
                );
                summary.missing += 1;
            }
        }
    }

    summary
}
