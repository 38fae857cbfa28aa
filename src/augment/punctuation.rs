/// Remove every ASCII punctuation character from `text`.
///
/// All other characters, including non-ASCII ones, pass through unchanged
/// and keep their relative order. Applying this twice is the same as
/// applying it once.
pub fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(remove_punctuation("Hello, World!"), "Hello World");
        assert_eq!(remove_punctuation("a.b,c;d"), "abcd");
    }

    #[test]
    fn test_removes_entire_ascii_punctuation_set() {
        let all = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
        assert_eq!(remove_punctuation(all), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(remove_punctuation(""), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["Hello, World!", "no punctuation here", "!!!", ""];
        for input in inputs {
            let once = remove_punctuation(input);
            assert_eq!(remove_punctuation(&once), once);
        }
    }

    #[test]
    fn test_non_ascii_passes_through() {
        // Unicode punctuation is not in the ASCII set and survives
        assert_eq!(remove_punctuation("héllo wörld¿"), "héllo wörld¿");
        assert_eq!(remove_punctuation("naïve, résumé!"), "naïve résumé");
    }

    #[test]
    fn test_preserves_order_and_whitespace() {
        assert_eq!(remove_punctuation("a! b? c."), "a b c");
        assert_eq!(remove_punctuation("tabs\tand\nnewlines"), "tabs\tand\nnewlines");
    }
}
