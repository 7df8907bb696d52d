pub mod acquisition;
pub mod config;
pub mod engine;
pub mod validation;

pub use acquisition::PreAcquisition;
pub use config::*;
pub use engine::{calculate_score, gross_points, score, ScoreResult};
pub use validation::validate_scoring;
