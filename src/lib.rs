//! Playoff fantasy-hockey pool scoring.
//!
//! Turns a snapshot of rostered players and their playoff stats into ranked
//! team standings. Parsing and field-name normalization live in [`roster`],
//! per-player scoring in [`scoring`], team totals in [`standings`].

pub mod config;
pub mod output;
pub mod refresh;
pub mod roster;
pub mod scoring;
pub mod standings;

pub use roster::{parse_players, InputError, PlayerRecord, Position, StatLine};
pub use scoring::{calculate_score, score, ScoreResult, ScoringConfig};
pub use standings::{aggregate, aggregate_with, TeamStanding};
