pub mod input;
pub mod normalize;
pub mod types;

pub use input::{load_players, parse_players, players_from_value, InputError};
pub use normalize::normalize_record;
pub use types::{PlayerRecord, Position, StatLine};
