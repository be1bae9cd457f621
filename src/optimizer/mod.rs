pub mod mutation;
pub mod runner;

pub use self::runner::{
    AttemptCap, Deadline, Limits, RestartController, RestartOptions, RestartOutcome, StopPolicy,
    Unbounded,
};

use crate::alphabet::Alphabet;
use crate::cipher::{Cipher, SubstitutionCipher};
use crate::error::{CfResult, CipherForgeError};
use crate::scorer::Scorer;
use fastrand::Rng;

/// Receives every accepted child during a search.
pub trait ProgressCallback {
    fn on_progress(&mut self, iteration: usize, fitness: f64, key: &[char]);
}

/// Discards progress.
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&mut self, _iteration: usize, _fitness: f64, _key: &[char]) {}
}

impl<F: FnMut(usize, f64, &[char])> ProgressCallback for F {
    fn on_progress(&mut self, iteration: usize, fitness: f64, key: &[char]) {
        self(iteration, fitness, key)
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub cipher: SubstitutionCipher,
    pub fitness: f64,
    pub iterations: usize,
    pub stagnation: usize,
}

/// Single-lineage hill climber over cipher keys.
///
/// Each step swaps two positions of the parent key, decrypts the ciphertext
/// with the child and keeps the child only if its fitness is strictly higher
/// than the best so far. The first child competes against the fitness of the
/// raw ciphertext.
pub struct HillClimber<'a> {
    scorer: &'a mut Scorer,
    ciphertext: &'a str,
    alphabet: Alphabet,
    parent: Vec<char>,
    baseline: f64,
    best_fitness: f64,
    iteration: usize,
    stagnation: usize,
    rng: Rng,
}

impl<'a> HillClimber<'a> {
    pub fn new(
        scorer: &'a mut Scorer,
        ciphertext: &'a str,
        seed_key: Option<Vec<char>>,
        mut rng: Rng,
    ) -> CfResult<Self> {
        let alphabet = scorer.alphabet().clone();
        if alphabet.len() < 2 {
            return Err(CipherForgeError::InvalidAlphabet(format!(
                "need at least 2 symbols to search, got {}",
                alphabet.len()
            )));
        }

        let parent = match seed_key {
            Some(key) => {
                // Validates the seed is a bijection before the search relies on it.
                SubstitutionCipher::from_symbols(key.clone(), &alphabet)?;
                key
            }
            None => mutation::generate_key(&mut rng, &alphabet),
        };

        let baseline = scorer.score(ciphertext);

        Ok(Self {
            scorer,
            ciphertext,
            alphabet,
            parent,
            baseline,
            best_fitness: baseline,
            iteration: 0,
            stagnation: 0,
            rng,
        })
    }

    pub fn current_iteration(&self) -> usize {
        self.iteration
    }

    pub fn current_best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Fitness of the undecrypted ciphertext, the bar the first child must clear.
    pub fn baseline_fitness(&self) -> f64 {
        self.baseline
    }

    /// Rejected children so far. Informational only.
    pub fn stagnation(&self) -> usize {
        self.stagnation
    }

    pub fn best_key(&self) -> &[char] {
        &self.parent
    }

    /// One transition. Returns true if the child was accepted.
    pub fn step(&mut self) -> CfResult<bool> {
        let child = mutation::swap_mutate(&mut self.rng, &self.parent);
        let candidate = SubstitutionCipher::from_symbols(child, &self.alphabet)?;
        let fitness = self.scorer.score(&candidate.decrypt(self.ciphertext));
        self.iteration += 1;

        if fitness > self.best_fitness {
            self.parent = candidate.key_symbols().to_vec();
            self.best_fitness = fitness;
            Ok(true)
        } else {
            self.stagnation += 1;
            Ok(false)
        }
    }

    /// Runs exactly `n_iters` transitions and returns the best key found.
    pub fn run<CB: ProgressCallback>(
        mut self,
        n_iters: usize,
        callback: &mut CB,
    ) -> CfResult<SearchResult> {
        for _ in 0..n_iters {
            if self.step()? {
                callback.on_progress(self.iteration, self.best_fitness, &self.parent);
            }
        }

        Ok(SearchResult {
            cipher: SubstitutionCipher::from_symbols(self.parent, &self.alphabet)?,
            fitness: self.best_fitness,
            iterations: self.iteration,
            stagnation: self.stagnation,
        })
    }
}
