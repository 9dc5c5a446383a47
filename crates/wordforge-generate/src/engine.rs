use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, warn};

use wordforge_core::{
    GenerationRequest, Wordlist, validate_generation_config, validate_random_config,
};

use crate::assembler::{Assembly, assemble, estimate_work};
use crate::errors::GenerationError;
use crate::merge::merge;
use crate::model::{GenerateOptions, GenerationReport, RandomReport};
use crate::random::{RandomOutcome, rng_for, synthesize};
use crate::variants::expand_inputs;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub wordlist: Wordlist,
    pub report: GenerationReport,
}

/// Entry point for turning a parsed request into a wordlist.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Run a request, drawing random words from an rng built from the
    /// request's seed (or fresh entropy when no seed is set).
    pub fn run(&self, request: &GenerationRequest) -> Result<GenerationResult, GenerationError> {
        match &request.random {
            Some(random) => {
                let mut rng = rng_for(random);
                self.run_with_rng(request, &mut rng)
            }
            None => self.run_with_rng(request, &mut rand::rng()),
        }
    }

    /// Run a request with a caller-supplied source of randomness.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<GenerationResult, GenerationError> {
        validate_generation_config(&request.generation)?;
        if let Some(random) = &request.random {
            validate_random_config(random)?;
        }

        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let mut report = GenerationReport::new(run_id.clone(), chrono::Utc::now());
        report.inputs = request.inputs.len() as u64;

        info!(
            run_id = %run_id,
            inputs = request.inputs.len(),
            patterns = request.generation.patterns.len(),
            random = request.random.is_some(),
            "generation started"
        );

        let assembly = if request.inputs.is_empty() {
            debug!("no input words; skipping assembly");
            Assembly::default()
        } else {
            let pool = expand_inputs(&request.inputs, request.generation.use_replacements);
            let work = estimate_work(pool.len(), &request.generation);
            report.variant_pool = pool.len() as u64;
            report.estimated_arrangements = u64::try_from(work).unwrap_or(u64::MAX);
            if work > self.options.permutation_warn_threshold {
                warn!(
                    variant_pool = pool.len(),
                    estimated_arrangements = %work,
                    "large variant pool; assembly may take a long time"
                );
            } else {
                debug!(variant_pool = pool.len(), estimated_arrangements = %work, "assembling");
            }
            assemble(&pool, &request.generation)
        };
        report.pattern_matches = assembly.pattern_matches;
        report.concat_matches = assembly.concat_matches;
        report.decorated = assembly.decorated;
        report.assembled_words = assembly.words.len() as u64;

        let random_words = match &request.random {
            Some(config) => {
                let RandomOutcome { words, attempts } = synthesize(config, rng);
                if words.len() < config.count {
                    warn!(
                        requested = config.count,
                        generated = words.len(),
                        attempts,
                        "random synthesis produced fewer words than requested"
                    );
                }
                report.random = Some(RandomReport {
                    requested: config.count as u64,
                    generated: words.len() as u64,
                    attempts: attempts as u64,
                    seeded: config.seed.is_some(),
                });
                words
            }
            None => Default::default(),
        };

        let wordlist = merge(assembly.words, random_words);
        report.total_words = wordlist.len() as u64;
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %run_id,
            words = wordlist.len(),
            duration_ms = report.duration_ms,
            "generation finished"
        );

        Ok(GenerationResult { wordlist, report })
    }
}
