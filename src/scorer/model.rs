use crate::error::{CfResult, CipherForgeError};
use fnv::FnvHashMap;
use tracing::debug;

/// Probability mass given to an n-gram never seen in training, relative to one
/// observation.
pub const UNSEEN_MASS: f64 = 0.0001;

/// Smoothed log2-probability table over fixed-width n-grams.
///
/// Trained entries are fixed at build time. Fallback values for n-grams met
/// only during scoring are memoized separately so they never leak into a
/// persisted model.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    width: usize,
    total: u64,
    log_probs: FnvHashMap<String, f64>,
    fallbacks: FnvHashMap<String, f64>,
}

impl LanguageModel {
    /// Counts every overlapping window of `width` symbols in `text`.
    pub fn build(text: &str, width: usize) -> CfResult<Self> {
        if width == 0 {
            return Err(CipherForgeError::InvalidNgramWidth(width));
        }

        let mut counts: FnvHashMap<&str, u64> = FnvHashMap::default();
        for gram in sliding_windows(text, width) {
            *counts.entry(gram).or_default() += 1;
        }

        let total: u64 = counts.values().sum();
        if total == 0 {
            return Err(CipherForgeError::InsufficientCorpus {
                len: text.chars().count(),
                width,
            });
        }

        let n = total as f64;
        let log_probs = counts
            .into_iter()
            .map(|(gram, count)| (gram.to_string(), (count as f64 / n).log2()))
            .collect::<FnvHashMap<_, _>>();

        debug!(
            width,
            total,
            distinct = log_probs.len(),
            "built n-gram language model"
        );

        Ok(Self {
            width,
            total,
            log_probs,
            fallbacks: FnvHashMap::default(),
        })
    }

    /// Reassembles a model from persisted parts.
    pub fn from_parts(
        width: usize,
        total: u64,
        log_probs: FnvHashMap<String, f64>,
    ) -> CfResult<Self> {
        if width == 0 {
            return Err(CipherForgeError::InvalidNgramWidth(width));
        }
        if total == 0 || log_probs.is_empty() {
            return Err(CipherForgeError::Validation(
                "language model has no n-grams".to_string(),
            ));
        }
        if let Some(bad) = log_probs.keys().find(|g| g.chars().count() != width) {
            return Err(CipherForgeError::Validation(format!(
                "n-gram '{}' does not have width {}",
                bad, width
            )));
        }
        Ok(Self {
            width,
            total,
            log_probs,
            fallbacks: FnvHashMap::default(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of n-grams counted in the training text.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct trained n-grams.
    pub fn len(&self) -> usize {
        self.log_probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log_probs.is_empty()
    }

    /// Number of unseen n-grams memoized while scoring.
    pub fn memoized(&self) -> usize {
        self.fallbacks.len()
    }

    #[inline(always)]
    pub fn lookup(&self, gram: &str) -> Option<f64> {
        self.log_probs
            .get(gram)
            .or_else(|| self.fallbacks.get(gram))
            .copied()
    }

    /// Memoizes a value for an n-gram absent from the trained table.
    /// Trained entries are never overwritten.
    pub fn insert(&mut self, gram: &str, log_prob: f64) {
        if !self.log_probs.contains_key(gram) {
            self.fallbacks.insert(gram.to_string(), log_prob);
        }
    }

    /// log2(0.0001 / N), the value assigned to unseen n-grams.
    pub fn unseen_log_prob(&self) -> f64 {
        (UNSEEN_MASS / self.total as f64).log2()
    }

    /// Trained entries only, in arbitrary order.
    pub fn trained(&self) -> impl Iterator<Item = (&str, f64)> {
        self.log_probs.iter().map(|(g, &p)| (g.as_str(), p))
    }

    pub fn clear_memoized(&mut self) {
        self.fallbacks.clear();
    }
}

/// Every contiguous `width`-symbol substring, one per starting offset.
pub fn sliding_windows(text: &str, width: usize) -> impl Iterator<Item = &str> {
    windows_with_stride(text, width, 1)
}

/// Disjoint `width`-symbol chunks starting at offset 0; a trailing partial
/// chunk is dropped.
pub fn disjoint_chunks(text: &str, width: usize) -> impl Iterator<Item = &str> {
    windows_with_stride(text, width, width)
}

fn windows_with_stride(text: &str, width: usize, stride: usize) -> impl Iterator<Item = &str> {
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let symbols = bounds.len() - 1;
    let count = if width == 0 || symbols < width {
        0
    } else {
        (symbols - width) / stride.max(1) + 1
    };

    (0..count).map(move |k| {
        let start = k * stride.max(1);
        &text[bounds[start]..bounds[start + width]]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sliding_windows() {
        let grams: Vec<&str> = sliding_windows("chunkme", 3).collect();
        assert_eq!(grams, vec!["chu", "hun", "unk", "nkm", "kme"]);
    }

    #[test]
    fn test_disjoint_chunks_drop_tail() {
        let grams: Vec<&str> = disjoint_chunks("chunkme", 3).collect();
        assert_eq!(grams, vec!["chu", "nkm"]);
    }

    #[test]
    fn test_windows_shorter_than_width() {
        assert_eq!(sliding_windows("ab", 3).count(), 0);
        assert_eq!(disjoint_chunks("", 1).count(), 0);
    }

    #[test]
    fn test_windows_respect_char_boundaries() {
        let grams: Vec<&str> = sliding_windows("ñaé", 2).collect();
        assert_eq!(grams, vec!["ña", "aé"]);
    }

    #[test]
    fn test_build_counts_overlapping_windows() {
        let m = LanguageModel::build("abab", 2).unwrap();
        // ab, ba, ab
        assert_eq!(m.total(), 3);
        assert!((m.lookup("ab").unwrap() - (2.0f64 / 3.0).log2()).abs() < 1e-12);
        assert!((m.lookup("ba").unwrap() - (1.0f64 / 3.0).log2()).abs() < 1e-12);
    }

    #[test]
    fn test_insert_never_overwrites_trained() {
        let mut m = LanguageModel::build("aaaa", 2).unwrap();
        m.insert("aa", -99.0);
        assert_eq!(m.lookup("aa"), Some(0.0));
        assert_eq!(m.memoized(), 0);

        m.insert("zz", -5.0);
        assert_eq!(m.lookup("zz"), Some(-5.0));
        assert_eq!(m.memoized(), 1);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_from_parts_rejects_mixed_widths() {
        let mut table = FnvHashMap::default();
        table.insert("ab".to_string(), -1.0);
        table.insert("abc".to_string(), -1.0);
        assert!(LanguageModel::from_parts(2, 2, table).is_err());
    }
}
