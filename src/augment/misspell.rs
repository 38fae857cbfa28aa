use crate::table::MisspellingTable;
use anyhow::Result;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::path::Path;

/// Replace known words with randomly chosen misspellings.
///
/// The table at `data_source` is re-read on every call, so edits to the
/// file are always visible. Callers that process many strings against a
/// static table should load a [`MisspellingTable`] once and use
/// [`substitute`] instead; the results are identical.
pub fn insert_misspellings(
    text: &str,
    data_source: &Path,
    probability: f64,
    rng: &mut impl Rng,
) -> Result<String> {
    let table = MisspellingTable::load(data_source)?;
    Ok(substitute(text, &table, probability, rng))
}

/// Per-word substitution against an already loaded table.
///
/// The text is split on single spaces and rejoined with single spaces;
/// other whitespace stays inside its word and is never matched against the
/// table. For each word present in the table, a fresh uniform integer draw
/// in [0, 100] divided by 100 decides the substitution: at most
/// `probability` means replace with a uniformly chosen candidate. A
/// probability of zero never substitutes.
pub fn substitute(
    text: &str,
    table: &MisspellingTable,
    probability: f64,
    rng: &mut impl Rng,
) -> String {
    let mut new_words = Vec::new();

    for word in text.split(' ') {
        let replacement = match table.get(word) {
            Some(candidates)
                if probability > 0.0
                    && rng.random_range(0..=100) as f64 / 100.0 <= probability =>
            {
                candidates.choose(rng)
            }
            _ => None,
        };

        new_words.push(replacement.map(String::as_str).unwrap_or(word));
    }

    new_words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;
    use tempfile::tempdir;

    fn table_from(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missp.csv");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    const THE_TABLE: &str = "word,misspellings\nthe,\"['teh', 'hte']\"\n";

    #[test]
    fn test_probability_zero_is_identity() {
        let (_dir, path) = table_from(THE_TABLE);
        let mut rng = StdRng::seed_from_u64(42);

        let result = insert_misspellings("the cat sat", &path, 0.0, &mut rng).unwrap();
        assert_eq!(result, "the cat sat");
    }

    #[test]
    fn test_probability_one_replaces_every_known_word() {
        let (_dir, path) = table_from(THE_TABLE);
        let mut rng = StdRng::seed_from_u64(42);

        let result = insert_misspellings("the cat the dog the", &path, 1.0, &mut rng).unwrap();
        let words: Vec<&str> = result.split(' ').collect();

        assert_eq!(words.len(), 5);
        for known in [words[0], words[2], words[4]] {
            assert!(known == "teh" || known == "hte", "got '{}'", known);
        }
        assert_eq!(words[1], "cat");
        assert_eq!(words[3], "dog");
    }

    #[test]
    fn test_unknown_words_always_pass_through() {
        let (_dir, path) = table_from(THE_TABLE);
        let mut rng = StdRng::seed_from_u64(7);

        let result = insert_misspellings("cat dog bird", &path, 1.0, &mut rng).unwrap();
        assert_eq!(result, "cat dog bird");
    }

    #[test]
    fn test_table_is_reloaded_on_every_call() {
        let (_dir, path) = table_from(THE_TABLE);
        let mut rng = StdRng::seed_from_u64(1);

        let first = insert_misspellings("the", &path, 1.0, &mut rng).unwrap();
        assert!(first == "teh" || first == "hte");

        fs::write(&path, "word,misspellings\nthe,\"['zzz']\"\n").unwrap();

        let second = insert_misspellings("the", &path, 1.0, &mut rng).unwrap();
        assert_eq!(second, "zzz");
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let dir = tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let result = insert_misspellings("the", &dir.path().join("nope.csv"), 1.0, &mut rng);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_candidate_list_keeps_word() {
        let (_dir, path) = table_from("word,misspellings\nthe,[]\n");
        let mut rng = StdRng::seed_from_u64(1);

        let result = insert_misspellings("the cat", &path, 1.0, &mut rng).unwrap();
        assert_eq!(result, "the cat");
    }

    #[test]
    fn test_other_whitespace_is_not_split() {
        let (_dir, path) = table_from(THE_TABLE);
        let mut rng = StdRng::seed_from_u64(1);

        // "the\tcat" is a single word and not a table key
        let result = insert_misspellings("the\tcat", &path, 1.0, &mut rng).unwrap();
        assert_eq!(result, "the\tcat");
    }
}
