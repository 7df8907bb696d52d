use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::PreAcquisition;
use crate::standings::{PlayerScore, TeamStanding};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// "count/points" cell for a skater or goalie bucket
fn format_bucket(count: u32, points: i64) -> String {
    format!("{}/{}", count, points)
}

// Fixed columns: index (3) + total (6) + skaters (9) + goalies (9), plus separators
const INDEX_WIDTH: usize = 3;
const TOTAL_WIDTH: usize = 6;
const BUCKET_WIDTH: usize = 9;
const SEPARATOR: &str = "  ";

/// Format standings as an aligned table, one team per line.
///
/// Columns: rank, total points, team, skaters (count/points), goalies
/// (count/points). No header row.
pub fn format_standings_table(standings: &[TeamStanding], use_colors: bool) -> String {
    if standings.is_empty() {
        return "No teams to rank.".to_string();
    }

    let longest = standings
        .iter()
        .map(|s| s.team.chars().count())
        .max()
        .unwrap_or(0);
    let fixed_width = INDEX_WIDTH + 1 + TOTAL_WIDTH + BUCKET_WIDTH * 2 + SEPARATOR.len() * 3;
    let team_width = match get_terminal_width() {
        Some(width) if width > fixed_width + 10 => longest.min(width - fixed_width),
        Some(_) => longest.min(20),
        None => longest,
    };

    standings
        .iter()
        .enumerate()
        .map(|(idx, standing)| {
            let index_str = format!("{:>2}.", idx + 1);
            let total_str = format!("{:>width$}", standing.total_points, width = TOTAL_WIDTH);
            let team = format!(
                "{:<width$}",
                truncate_name(&standing.team, team_width),
                width = team_width
            );
            let skaters = format!(
                "{:>width$}",
                format_bucket(standing.skaters.count, standing.skaters.points),
                width = BUCKET_WIDTH
            );
            let goalies = format!(
                "{:>width$}",
                format_bucket(standing.goalies.count, standing.goalies.points),
                width = BUCKET_WIDTH
            );

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    total_str.bold(),
                    SEPARATOR,
                    team.cyan(),
                    SEPARATOR,
                    skaters,
                    SEPARATOR,
                    goalies
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, total_str, SEPARATOR, team, SEPARATOR, skaters, SEPARATOR, goalies
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format standings as tab-separated values for scripting
/// Columns: team, total, skater count, skater points, goalie count, goalie points
pub fn format_standings_tsv(standings: &[TeamStanding]) -> String {
    standings
        .iter()
        .map(|s| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                s.team,
                s.total_points,
                s.skaters.count,
                s.skaters.points,
                s.goalies.count,
                s.goalies.points
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the per-player report as one line per player, grouped under team
/// headings.
pub fn format_player_table(rows: &[PlayerScore], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No players scored.".to_string();
    }

    let mut lines = Vec::new();
    let mut current_team: Option<&str> = None;

    for row in rows {
        if current_team != Some(row.team.as_str()) {
            if current_team.is_some() {
                lines.push(String::new());
            }
            if use_colors {
                lines.push(row.team.bold().to_string());
            } else {
                lines.push(row.team.clone());
            }
            current_team = Some(row.team.as_str());
        }

        let label = row.name.as_deref().unwrap_or(&row.player_id);
        let detail = match row.pre_acquisition {
            PreAcquisition::Applied(points) if points != 0 => {
                format!("{} - {}", row.gross, points)
            }
            PreAcquisition::Stale { .. } => format!("{} (stale pre-acq)", row.gross),
            _ => String::new(),
        };

        let line = format!(
            "  {:>4}  {}  {}{}",
            row.net,
            row.position.code(),
            label,
            if detail.is_empty() {
                String::new()
            } else {
                format!("  [{}]", detail)
            }
        );
        if use_colors && row.net < 0 {
            lines.push(line.red().to_string());
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}

/// Format the per-player report as tab-separated values
/// Columns: team, player id, name, position, gross, deduction, net
pub fn format_player_tsv(rows: &[PlayerScore]) -> String {
    rows.iter()
        .map(|r| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                r.team,
                r.player_id,
                r.name.as_deref().unwrap_or(""),
                r.position.code(),
                r.gross,
                r.deduction,
                r.net
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Position;
    use crate::standings::Bucket;

    fn standing(team: &str, skaters: (u32, i64), goalies: (u32, i64)) -> TeamStanding {
        TeamStanding {
            team: team.to_string(),
            total_points: skaters.1 + goalies.1,
            skaters: Bucket {
                count: skaters.0,
                points: skaters.1,
            },
            goalies: Bucket {
                count: goalies.0,
                points: goalies.1,
            },
        }
    }

    fn row(team: &str, id: &str, net: i64) -> PlayerScore {
        PlayerScore {
            player_id: id.to_string(),
            name: None,
            team: team.to_string(),
            position: Position::Center,
            gross: net,
            deduction: 0,
            net,
            pre_acquisition: PreAcquisition::NotApplicable,
        }
    }

    #[test]
    fn test_truncate_name_short() {
        assert_eq!(truncate_name("Short", 20), "Short");
    }

    #[test]
    fn test_truncate_name_long() {
        assert_eq!(truncate_name("The Zamboni Drivers", 10), "The Zam...");
    }

    #[test]
    fn test_truncate_name_very_narrow() {
        assert_eq!(truncate_name("Hello world", 3), "Hel");
    }

    #[test]
    fn test_standings_table_empty() {
        assert_eq!(format_standings_table(&[], false), "No teams to rank.");
    }

    #[test]
    fn test_standings_table_rows() {
        let standings = vec![standing("Team A", (3, 10), (1, 4)), standing("B", (2, 3), (0, 0))];
        let result = format_standings_table(&standings, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[0].contains("14"));
        assert!(lines[0].contains("Team A"));
        assert!(lines[0].contains("3/10"));
        assert!(lines[0].contains("1/4"));
        assert!(lines[1].starts_with(" 2."));
        assert!(lines[1].contains("0/0"));
    }

    #[test]
    fn test_standings_table_wide_buckets_stay_apart() {
        let standings = vec![standing("A", (12, 123456), (10, 100000))];
        let result = format_standings_table(&standings, false);
        assert!(result.ends_with("12/123456  10/100000"));
    }

    #[test]
    fn test_standings_tsv() {
        let standings = vec![standing("Team A", (3, 10), (1, 4))];
        assert_eq!(format_standings_tsv(&standings), "Team A\t14\t3\t10\t1\t4");
        assert_eq!(format_standings_tsv(&[]), "");
    }

    #[test]
    fn test_player_table_groups_teams() {
        let rows = vec![row("A", "1", 5), row("A", "2", 3), row("B", "3", 4)];
        let result = format_player_table(&rows, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines[0], "A");
        assert!(lines[1].contains("   5  C  1"));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "B");
    }

    #[test]
    fn test_player_table_shows_deduction() {
        let mut traded = row("A", "1", 7);
        traded.gross = 10;
        traded.deduction = 3;
        traded.pre_acquisition = PreAcquisition::Applied(3);
        traded.name = Some("Traded Winger".to_string());
        let result = format_player_table(&[traded], false);
        assert!(result.contains("Traded Winger  [10 - 3]"));
    }

    #[test]
    fn test_player_table_marks_stale() {
        let mut stale = row("A", "1", 6);
        stale.pre_acquisition = PreAcquisition::Stale {
            drafted: 3,
            recorded: 2,
        };
        let result = format_player_table(&[stale], false);
        assert!(result.contains("[6 (stale pre-acq)]"));
    }

    #[test]
    fn test_player_tsv() {
        let rows = vec![row("A", "1", 5)];
        assert_eq!(format_player_tsv(&rows), "A\t1\t\tC\t5\t0\t5");
    }
}
