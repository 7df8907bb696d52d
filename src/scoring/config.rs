use serde::{Deserialize, Serialize};

const DEFAULT_GOAL: i64 = 1;
const DEFAULT_ASSIST: i64 = 1;
const DEFAULT_WIN: i64 = 2;
const DEFAULT_SHUTOUT: i64 = 1;

/// Points awarded per counted stat.
///
/// Skaters earn `goal` and `assist` points; goalies earn `win` and `shutout`
/// points. Each weight is optional and falls back to the pool's standard
/// values (1, 1, 2, 1).
///
/// Example YAML:
/// ```yaml
/// scoring:
///   goal: 1
///   assist: 1
///   win: 2
///   shutout: 1
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Points per goal (skaters)
    #[serde(default)]
    pub goal: Option<i64>,

    /// Points per assist (skaters)
    #[serde(default)]
    pub assist: Option<i64>,

    /// Points per win (goalies)
    #[serde(default)]
    pub win: Option<i64>,

    /// Points per shutout (goalies), on top of the win itself
    #[serde(default)]
    pub shutout: Option<i64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            goal: Some(DEFAULT_GOAL),
            assist: Some(DEFAULT_ASSIST),
            win: Some(DEFAULT_WIN),
            shutout: Some(DEFAULT_SHUTOUT),
        }
    }
}

impl ScoringConfig {
    pub fn goal_points(&self) -> i64 {
        self.goal.unwrap_or(DEFAULT_GOAL)
    }

    pub fn assist_points(&self) -> i64 {
        self.assist.unwrap_or(DEFAULT_ASSIST)
    }

    pub fn win_points(&self) -> i64 {
        self.win.unwrap_or(DEFAULT_WIN)
    }

    pub fn shutout_points(&self) -> i64 {
        self.shutout.unwrap_or(DEFAULT_SHUTOUT)
    }
}
