use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    /// Format used when no --format flag is given
    #[serde(default)]
    pub format: Option<OutputFormat>,
}
