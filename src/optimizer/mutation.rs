use crate::alphabet::Alphabet;
use fastrand::Rng;

/// Uniformly random permutation of the alphabet.
pub fn generate_key(rng: &mut Rng, alphabet: &Alphabet) -> Vec<char> {
    let mut key = alphabet.symbols().to_vec();
    rng.shuffle(&mut key);
    key
}

/// Two distinct positions in `0..len`, rejection-sampled. `len` must be >= 2.
pub fn pick_swap(rng: &mut Rng, len: usize) -> (usize, usize) {
    debug_assert!(len >= 2, "cannot pick two distinct positions from {}", len);
    loop {
        let a = rng.usize(0..len);
        let b = rng.usize(0..len);
        if a != b {
            return (a, b);
        }
    }
}

/// Child key: `parent` with two distinct positions transposed.
pub fn swap_mutate(rng: &mut Rng, parent: &[char]) -> Vec<char> {
    let mut child = parent.to_vec();
    let (a, b) = pick_swap(rng, child.len());
    child.swap(a, b);
    child
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_key_is_permutation() {
        let alphabet = Alphabet::english();
        let mut rng = Rng::with_seed(7);
        let mut key = generate_key(&mut rng, &alphabet);
        key.sort_unstable();
        assert_eq!(key, alphabet.symbols());
    }

    #[test]
    fn test_generate_key_is_seeded() {
        let alphabet = Alphabet::english();
        let a = generate_key(&mut Rng::with_seed(42), &alphabet);
        let b = generate_key(&mut Rng::with_seed(42), &alphabet);
        assert_eq!(a, b);
    }

    #[test]
    fn test_swap_changes_exactly_two_positions() {
        let parent: Vec<char> = "abcdefghijklmnopqrstuvwxyz".chars().collect();
        let mut rng = Rng::with_seed(1);
        for _ in 0..200 {
            let child = swap_mutate(&mut rng, &parent);
            let diffs = parent.iter().zip(&child).filter(|(p, c)| p != c).count();
            assert_eq!(diffs, 2);
        }
    }

    #[test]
    fn test_swap_two_symbol_key() {
        let mut rng = Rng::with_seed(3);
        assert_eq!(swap_mutate(&mut rng, &['x', 'y']), vec!['y', 'x']);
    }
}
