use crate::cipher::{Cipher, SubstitutionCipher};
use crate::config::Config;
use crate::error::{CfResult, CipherForgeError};
use crate::optimizer::{HillClimber, ProgressCallback};
use crate::scorer::Scorer;
use crate::vocab::Vocabulary;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Decides, before each attempt, whether the restart loop should give up.
pub trait StopPolicy {
    fn should_stop(&mut self, attempts: usize, elapsed: Duration) -> bool;
}

/// Never gives up. Must be chosen explicitly.
pub struct Unbounded;

impl StopPolicy for Unbounded {
    fn should_stop(&mut self, _attempts: usize, _elapsed: Duration) -> bool {
        false
    }
}

pub struct AttemptCap(pub usize);

impl StopPolicy for AttemptCap {
    fn should_stop(&mut self, attempts: usize, _elapsed: Duration) -> bool {
        attempts >= self.0
    }
}

pub struct Deadline(pub Duration);

impl StopPolicy for Deadline {
    fn should_stop(&mut self, _attempts: usize, elapsed: Duration) -> bool {
        elapsed >= self.0
    }
}

/// Attempt cap OR deadline, whichever trips first. Both `None` is unbounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Limits {
    pub max_attempts: Option<usize>,
    pub max_time: Option<Duration>,
}

impl StopPolicy for Limits {
    fn should_stop(&mut self, attempts: usize, elapsed: Duration) -> bool {
        self.max_attempts.is_some_and(|cap| attempts >= cap)
            || self.max_time.is_some_and(|limit| elapsed >= limit)
    }
}

impl<F: FnMut(usize, Duration) -> bool> StopPolicy for F {
    fn should_stop(&mut self, attempts: usize, elapsed: Duration) -> bool {
        self(attempts, elapsed)
    }
}

pub const DEFAULT_ITERATIONS: usize = 5_000;
pub const DEFAULT_THRESHOLD: f64 = 0.95;
pub const DEFAULT_MAX_ATTEMPTS: usize = 20;

#[derive(Debug, Clone)]
pub struct RestartOptions {
    /// Hill-climbing iterations per attempt.
    pub iterations: usize,
    /// Minimum vocabulary overlap for a candidate to be accepted.
    pub threshold: f64,
    pub max_attempts: Option<usize>,
    pub max_time: Option<Duration>,
    pub seed: Option<u64>,
}

impl Default for RestartOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            threshold: DEFAULT_THRESHOLD,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            max_time: None,
            seed: None,
        }
    }
}

impl RestartOptions {
    /// Removes both the attempt cap and the deadline.
    pub fn unbounded(mut self) -> Self {
        self.max_attempts = None;
        self.max_time = None;
        self
    }

    pub fn stop_policy(&self) -> Limits {
        Limits {
            max_attempts: self.max_attempts,
            max_time: self.max_time,
        }
    }

    fn attempt_rng(&self, attempt: usize) -> fastrand::Rng {
        match self.seed {
            Some(s) => fastrand::Rng::with_seed(s.wrapping_add(attempt as u64 * 100)),
            None => fastrand::Rng::new(),
        }
    }
}

impl From<&Config> for RestartOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            iterations: cfg.search.iterations,
            threshold: cfg.search.threshold,
            max_attempts: if cfg.search.unbounded {
                None
            } else {
                Some(cfg.search.max_attempts)
            },
            max_time: cfg.search.max_time.map(Duration::from_secs),
            seed: cfg.search.seed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RestartOutcome {
    pub cipher: SubstitutionCipher,
    pub fitness: f64,
    pub attempts: usize,
    pub overlap: f64,
    pub elapsed: Duration,
}

/// Reruns the hill climber from fresh random keys until the decrypted
/// ciphertext vocabulary is plausible English.
pub struct RestartController<'a> {
    scorer: &'a mut Scorer,
    options: RestartOptions,
}

impl<'a> RestartController<'a> {
    pub fn new(scorer: &'a mut Scorer, options: RestartOptions) -> Self {
        Self { scorer, options }
    }

    pub fn options(&self) -> &RestartOptions {
        &self.options
    }

    /// Runs with the stop policy derived from the options.
    pub fn solve<CB: ProgressCallback>(
        &mut self,
        ciphertext: &str,
        ciphertext_vocab: &Vocabulary,
        reference: &Vocabulary,
        callback: &mut CB,
    ) -> CfResult<RestartOutcome> {
        let mut stop = self.options.stop_policy();
        self.run(ciphertext, ciphertext_vocab, reference, &mut stop, callback)
    }

    pub fn run<S: StopPolicy, CB: ProgressCallback>(
        &mut self,
        ciphertext: &str,
        ciphertext_vocab: &Vocabulary,
        reference: &Vocabulary,
        stop: &mut S,
        callback: &mut CB,
    ) -> CfResult<RestartOutcome> {
        if ciphertext_vocab.is_empty() {
            return Err(CipherForgeError::Validation(
                "ciphertext vocabulary is empty; nothing to validate against".to_string(),
            ));
        }
        let threshold = self.options.threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(CipherForgeError::Config(format!(
                "threshold must be in (0, 1], got {}",
                threshold
            )));
        }

        let start = Instant::now();
        let mut attempts = 0;
        let mut best_overlap = 0.0f64;

        loop {
            if stop.should_stop(attempts, start.elapsed()) {
                return Err(CipherForgeError::RestartsExhausted {
                    attempts,
                    best_overlap,
                });
            }
            attempts += 1;

            let rng = self.options.attempt_rng(attempts);
            let result = HillClimber::new(&mut *self.scorer, ciphertext, None, rng)?
                .run(self.options.iterations, &mut *callback)?;

            let overlap = reference.overlap(&result.cipher, ciphertext_vocab);
            info!(
                attempt = attempts,
                fitness = result.fitness,
                overlap,
                "search attempt finished"
            );

            if overlap >= threshold {
                return Ok(RestartOutcome {
                    cipher: result.cipher,
                    fitness: result.fitness,
                    attempts,
                    overlap,
                    elapsed: start.elapsed(),
                });
            }

            debug!(
                key = %result.cipher.key(),
                overlap,
                threshold,
                "candidate rejected, restarting from a fresh key"
            );
            best_overlap = best_overlap.max(overlap);
        }
    }
}
