use super::acquisition::PreAcquisition;
use super::config::ScoringConfig;
use crate::roster::{PlayerRecord, Position, StatLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub gross: i64,
    pub deduction: i64,
    pub net: i64,
    pub is_goalie: bool,
    pub pre_acquisition: PreAcquisition,
}

/// Score a player with the standard weights.
/// Returns net points and whether the player counts as a goalie.
pub fn score(player: &PlayerRecord) -> (i64, bool) {
    let result = calculate_score(player, &ScoringConfig::default());
    (result.net, result.is_goalie)
}

pub fn calculate_score(player: &PlayerRecord, config: &ScoringConfig) -> ScoreResult {
    let is_goalie = player.position.is_goalie();
    let gross = gross_points(&player.current_stats, player.position, config);

    let pre_acquisition = PreAcquisition::for_player(player);
    if let PreAcquisition::Stale { drafted, recorded } = pre_acquisition {
        if pre_acquisition.needs_warning(player) {
            log::warn!(
                "Player {} drafted in round {}, but pre-acquisition points were recorded for round {}; scoring total playoff points until refreshed",
                player.label(),
                drafted,
                recorded
            );
        }
    }

    let deduction = pre_acquisition.deduction();

    // Net may go negative (deduction larger than gross); that is reported as-is
    ScoreResult {
        gross,
        deduction,
        net: gross.saturating_sub(deduction),
        is_goalie,
        pre_acquisition,
    }
}

/// Points from current stats alone, before any pre-acquisition deduction
pub fn gross_points(stats: &StatLine, position: Position, config: &ScoringConfig) -> i64 {
    if position.is_goalie() {
        weighted(stats.wins, config.win_points()).saturating_add(weighted(
            stats.shutouts,
            config.shutout_points(),
        ))
    } else {
        weighted(stats.goals, config.goal_points())
            .saturating_add(weighted(stats.assists, config.assist_points()))
    }
}

fn weighted(count: i64, points: i64) -> i64 {
    count.saturating_mul(points)
}
