use serde::Serialize;
use std::collections::HashMap;

use super::aggregate::{rank_teams, score_roster};
use crate::roster::{PlayerRecord, Position};
use crate::scoring::{PreAcquisition, ScoringConfig};

/// One player's contribution, with the numbers behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScore {
    pub player_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub team: String,
    pub position: Position,
    pub gross: i64,
    pub deduction: i64,
    pub net: i64,
    pub pre_acquisition: PreAcquisition,
}

/// Score every valid player and group them by team.
///
/// Teams appear in standings order; within a team players are sorted by net
/// points, highest first, ties in input order.
pub fn score_players(players: &[PlayerRecord], config: &ScoringConfig) -> Vec<PlayerScore> {
    let scored = score_roster(players, config);
    let team_rank: HashMap<String, usize> = rank_teams(&scored)
        .into_iter()
        .enumerate()
        .map(|(rank, standing)| (standing.team, rank))
        .collect();

    let mut rows: Vec<(usize, PlayerScore)> = scored
        .iter()
        .filter_map(|player| {
            let rank = *team_rank.get(player.team)?;
            Some((
                rank,
                PlayerScore {
                    player_id: player.id.to_string(),
                    name: player.record.name.clone(),
                    team: player.team.to_string(),
                    position: player.record.position,
                    gross: player.result.gross,
                    deduction: player.result.deduction,
                    net: player.result.net,
                    pre_acquisition: player.result.pre_acquisition,
                },
            ))
        })
        .collect();

    rows.sort_by(|(rank_a, a), (rank_b, b)| rank_a.cmp(rank_b).then(b.net.cmp(&a.net)));
    rows.into_iter().map(|(_, row)| row).collect()
}
