use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::roster::PlayerRecord;
use crate::scoring::{calculate_score, ScoreResult, ScoringConfig};

/// Player count and points for one half of a roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub count: u32,
    pub points: i64,
}

impl Bucket {
    fn add(&mut self, points: i64) {
        self.count += 1;
        self.points = self.points.saturating_add(points);
    }
}

/// One fantasy team's line in the standings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team: String,
    pub total_points: i64,
    pub skaters: Bucket,
    pub goalies: Bucket,
}

impl TeamStanding {
    fn new(team: &str) -> Self {
        Self {
            team: team.to_string(),
            total_points: 0,
            skaters: Bucket::default(),
            goalies: Bucket::default(),
        }
    }

    pub fn player_count(&self) -> u32 {
        self.skaters.count + self.goalies.count
    }
}

/// Aggregate standings with the standard scoring weights.
pub fn aggregate(players: &[PlayerRecord]) -> Vec<TeamStanding> {
    aggregate_with(players, &ScoringConfig::default())
}

/// Fold every scorable player into their team's totals and rank the teams by
/// total points, highest first. Teams tied on points keep the order in which
/// their first player appeared in `players`.
pub fn aggregate_with(players: &[PlayerRecord], config: &ScoringConfig) -> Vec<TeamStanding> {
    rank_teams(&score_roster(players, config))
}

/// A player that has both an id and a team, with its score
pub(crate) struct ScoredPlayer<'a> {
    pub id: &'a str,
    pub team: &'a str,
    pub record: &'a PlayerRecord,
    pub result: ScoreResult,
}

/// Score each scorable player once, in input order
pub(crate) fn score_roster<'a>(
    players: &'a [PlayerRecord],
    config: &ScoringConfig,
) -> Vec<ScoredPlayer<'a>> {
    let scored: Vec<ScoredPlayer<'a>> = players
        .iter()
        .filter_map(|record| {
            let Some((id, team)) = record.identity() else {
                log::debug!(
                    "Skipping player {}: missing player id or fantasy team",
                    record.label()
                );
                return None;
            };
            Some(ScoredPlayer {
                id,
                team,
                record,
                result: calculate_score(record, config),
            })
        })
        .collect();

    log::debug!(
        "Scored {} players ({} skipped)",
        scored.len(),
        players.len() - scored.len()
    );
    scored
}

pub(crate) fn rank_teams(scored: &[ScoredPlayer<'_>]) -> Vec<TeamStanding> {
    // Accumulators live in first-seen order; the index maps team -> slot
    let mut teams: Vec<TeamStanding> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for player in scored {
        let slot = *index.entry(player.team).or_insert_with(|| {
            teams.push(TeamStanding::new(player.team));
            teams.len() - 1
        });

        let net = player.result.net;
        let standing = &mut teams[slot];
        standing.total_points = standing.total_points.saturating_add(net);
        if player.result.is_goalie {
            standing.goalies.add(net);
        } else {
            standing.skaters.add(net);
        }
    }

    log::debug!("Ranked {} teams", teams.len());

    // sort_by is stable, so ties stay in first-seen order
    teams.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    teams
}
