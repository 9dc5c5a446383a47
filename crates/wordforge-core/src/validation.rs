use crate::error::{Error, Result};
use crate::types::{GenerationConfig, RandomConfig};

/// Validate length bounds of an assembly configuration.
///
/// This checks:
/// - `min_len` is at least 1
/// - `min_len` does not exceed `max_len`
/// - decoration symbols are present when decoration is enabled
pub fn validate_generation_config(config: &GenerationConfig) -> Result<()> {
    check_bounds("generation", config.min_len, config.max_len)?;
    if config.use_symbols && config.symbols.is_empty() {
        return Err(Error::InvalidConfig(
            "generation: symbol decoration enabled without symbols".to_string(),
        ));
    }
    Ok(())
}

/// Validate length bounds of a random synthesis configuration.
///
/// Affixes that leave no room for a random core are accepted; the
/// synthesizer then produces no words.
pub fn validate_random_config(config: &RandomConfig) -> Result<()> {
    check_bounds("random", config.min_len, config.max_len)
}

fn check_bounds(ctx: &str, min_len: usize, max_len: usize) -> Result<()> {
    if min_len < 1 {
        return Err(Error::InvalidConfig(format!("{ctx}: min_len must be >= 1")));
    }
    if min_len > max_len {
        return Err(Error::InvalidConfig(format!(
            "{ctx}: min_len ({min_len}) must be <= max_len ({max_len})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        let config = GenerationConfig {
            min_len: 9,
            max_len: 4,
            ..GenerationConfig::default()
        };
        assert!(matches!(
            validate_generation_config(&config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_zero_min_len() {
        let config = RandomConfig {
            min_len: 0,
            ..RandomConfig::default()
        };
        assert!(validate_random_config(&config).is_err());
    }

    #[test]
    fn accepts_defaults() {
        assert!(validate_generation_config(&GenerationConfig::default()).is_ok());
        assert!(validate_random_config(&RandomConfig::default()).is_ok());
    }
}
