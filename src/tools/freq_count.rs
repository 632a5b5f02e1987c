use rustc_hash::FxHashMap;

/// Returns a frequency count of each character in the sample text.
pub fn freqs(text: &str) -> FxHashMap<char, u32> {
    let mut freqs = FxHashMap::default();
    text.chars().for_each(|ch| *freqs.entry(ch).or_insert(0) += 1);
    freqs
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn hello_world_frequencies() {
        let counts = freqs("HELLO WORLD");
        assert_eq!(counts[&'H'], 1);
        assert_eq!(counts[&'E'], 1);
        assert_eq!(counts[&'L'], 3);
        assert_eq!(counts[&'O'], 2);
        assert_eq!(counts[&' '], 1);
        assert_eq!(counts[&'W'], 1);
        assert_eq!(counts[&'R'], 1);
        assert_eq!(counts[&'D'], 1);
        assert_eq!(counts.len(), 8);
    }

    #[test]
    fn empty_text_counts_nothing() {
        assert!(freqs("").is_empty());
    }
}
