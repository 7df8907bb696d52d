pub mod aggregate;
pub mod players;

pub use aggregate::{aggregate, aggregate_with, Bucket, TeamStanding};
pub use players::{score_players, PlayerScore};
