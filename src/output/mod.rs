pub mod formatter;
pub mod writer;

pub use formatter::{
    format_player_table, format_player_tsv, format_standings_table, format_standings_tsv,
    should_use_colors,
};
pub use writer::{render_json, write_document};

use serde::{Deserialize, Serialize};

/// Output document format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON (the standings document)
    #[default]
    Json,
    /// Aligned text table
    Table,
    /// Tab-separated values
    Tsv,
}
