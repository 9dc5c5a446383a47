use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Estimated arrangement count above which a warning is logged before
    /// assembly starts. Enumeration is never capped.
    pub permutation_warn_threshold: u128,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            permutation_warn_threshold: 5_000_000,
        }
    }
}

/// Summary of the random synthesis stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomReport {
    pub requested: u64,
    pub generated: u64,
    pub attempts: u64,
    pub seeded: bool,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub inputs: u64,
    pub variant_pool: u64,
    pub estimated_arrangements: u64,
    pub pattern_matches: u64,
    pub concat_matches: u64,
    pub decorated: u64,
    pub assembled_words: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random: Option<RandomReport>,
    pub total_words: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, started_at: DateTime<Utc>) -> Self {
        Self {
            run_id,
            started_at,
            duration_ms: 0,
            inputs: 0,
            variant_pool: 0,
            estimated_arrangements: 0,
            pattern_matches: 0,
            concat_matches: 0,
            decorated: 0,
            assembled_words: 0,
            random: None,
            total_words: 0,
        }
    }

    /// True when random synthesis ran and fell short of its target.
    pub fn random_short(&self) -> bool {
        self.random
            .as_ref()
            .is_some_and(|random| random.generated < random.requested)
    }
}
