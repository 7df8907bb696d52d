use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let weights = [
        ("goal", config.goal),
        ("assist", config.assist),
        ("win", config.win),
        ("shutout", config.shutout),
    ];

    for (name, weight) in weights {
        if let Some(points) = weight {
            if points < 0 {
                errors.push(format!(
                    "scoring.{}: must be non-negative (got {})",
                    name, points
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_config() {
        let config = ScoringConfig {
            goal: None,
            assist: None,
            win: None,
            shutout: None,
        };
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_zero_weight_allowed() {
        let config = ScoringConfig {
            shutout: Some(0),
            ..ScoringConfig::default()
        };
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_negative_weight() {
        let config = ScoringConfig {
            win: Some(-2),
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.win"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            goal: Some(-1),
            assist: Some(-1),
            win: None,
            shutout: Some(1),
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
