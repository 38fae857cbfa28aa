use anyhow::{bail, Result};
use rand::Rng;

/// Source alphabet for injected characters: digits, then lower- and
/// uppercase ASCII letters.
const TYPO_POOL: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Upper bound on the number of overwrites per call.
const MAX_TYPOS: usize = 5;

/// Overwrite up to five random positions in `text` with random alphanumeric
/// characters.
///
/// The number of typos is drawn uniformly from [0, 5]. Repeated draws may
/// hit the same index, so fewer positions than the drawn count can end up
/// changed. The output always has the same character length as the input.
/// An empty input is an error, since there is no position to overwrite.
pub fn insert_typo(text: &str, rng: &mut impl Rng) -> Result<String> {
    if text.is_empty() {
        bail!("Cannot inject typos into an empty string");
    }

    let mut chars: Vec<char> = text.chars().collect();
    let count = rng.random_range(0..=MAX_TYPOS);

    for _ in 0..count {
        let typo = TYPO_POOL[rng.random_range(0..TYPO_POOL.len())] as char;
        let index = rng.random_range(0..chars.len());
        chars[index] = typo;
    }

    Ok(chars.into_iter().collect())
}
