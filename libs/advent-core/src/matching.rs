//! Answer matching for free-text riddles.
//!
//! Answers are compared on their normalized form and accepted when the
//! Levenshtein distance stays within a tolerance that grows with the
//! length of the answer.

/// Characters removed during normalization. Other punctuation is kept.
const STRIPPED_PUNCTUATION: [char; 9] = ['.', ',', '!', '?', ':', ';', '\'', '"', '-'];

/// Normalize an answer for comparison.
///
/// Trims surrounding whitespace, lowercases every character and removes the
/// fixed set of punctuation characters in [`STRIPPED_PUNCTUATION`].
/// Whitespace left at either end once punctuation is gone is trimmed too,
/// so normalizing twice gives the same result as normalizing once.
pub fn normalize(s: &str) -> String {
    let stripped: String = s
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    stripped.trim().to_string()
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Use two rows instead of full matrix for memory efficiency
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Maximum edit distance tolerated for an answer of `len` characters.
///
/// | length | tolerance |
/// |--------|-----------|
/// | 0..=3  | 0         |
/// | 4..=7  | 1         |
/// | 8..    | 2         |
pub fn max_tolerated_distance(len: usize) -> usize {
    match len {
        0..=3 => 0,
        4..=7 => 1,
        _ => 2,
    }
}

/// Check whether a submission is an acceptable rendering of one candidate.
///
/// Empty inputs never match, not even each other.
pub fn is_match(submission: &str, candidate: &str) -> bool {
    let submission = normalize(submission);
    let candidate = normalize(candidate);

    if submission.is_empty() || candidate.is_empty() {
        return false;
    }
    if submission == candidate {
        return true;
    }

    let len = submission.chars().count().max(candidate.chars().count());
    levenshtein_distance(&submission, &candidate) <= max_tolerated_distance(len)
}

/// Check a free-text submission against the canonical answer and any alternates.
pub fn is_correct_answer<S: AsRef<str>>(
    submission: &str,
    canonical: &str,
    alternates: &[S],
) -> bool {
    is_match(submission, canonical)
        || alternates
            .iter()
            .any(|alt| is_match(submission, alt.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLES: [&str; 10] = [
        "",
        "Elf",
        "Elch",
        "Rentier",
        "  Schnee-Mann! ",
        "Schneemann",
        "Weihnachtsmann",
        "Nikolaus",
        "Äpfel & Nüsse",
        "kitten",
    ];

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Rentier  "), "rentier");
        assert_eq!(normalize("Schnee-Mann!"), "schneemann");
        assert_eq!(normalize(r#"'Ja', "nein"; ok? gut: so."#), "ja nein ok gut so");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_keeps_other_punctuation() {
        assert_eq!(normalize("Äpfel & Nüsse (2)"), "äpfel & nüsse (2)");
        assert_eq!(normalize("a/b_c"), "a/b_c");
    }

    #[test]
    fn test_normalize_punctuation_next_to_whitespace() {
        assert_eq!(normalize("- Elch"), "elch");
        assert_eq!(normalize("Ja ."), "ja");
        assert_eq!(normalize("\"Ja\" !"), "ja");
        assert_eq!(normalize(" ! ? "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let edges = ["- Elch", "Ja .", "\"Ja\" !", "? Stern -", "Ja - Nein", "\t.\n"];
        for s in SAMPLES.iter().chain(edges.iter()) {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input: {s:?}");
        }
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
        assert_eq!(levenshtein_distance("elch", "elf"), 2);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("nüsse", "nusse"), 1);
        assert_eq!(levenshtein_distance("äöü", "aou"), 3);
    }

    #[test]
    fn test_levenshtein_metric_properties() {
        for a in SAMPLES {
            let a = normalize(a);
            assert_eq!(levenshtein_distance(&a, &a), 0);

            for b in SAMPLES {
                let b = normalize(b);
                let ab = levenshtein_distance(&a, &b);
                assert_eq!(ab, levenshtein_distance(&b, &a), "{a:?} vs {b:?}");

                for c in SAMPLES {
                    let c = normalize(c);
                    let ac = levenshtein_distance(&a, &c);
                    let bc = levenshtein_distance(&b, &c);
                    assert!(ac <= ab + bc, "{a:?} {b:?} {c:?}");
                }
            }
        }
    }

    #[test]
    fn test_max_tolerated_distance() {
        assert_eq!(max_tolerated_distance(1), 0);
        assert_eq!(max_tolerated_distance(3), 0);
        assert_eq!(max_tolerated_distance(4), 1);
        assert_eq!(max_tolerated_distance(7), 1);
        assert_eq!(max_tolerated_distance(8), 2);
        assert_eq!(max_tolerated_distance(40), 2);
    }

    #[test]
    fn test_tier_boundaries() {
        // 3 chars, one substitution
        assert!(!is_match("elg", "elf"));
        // 4 chars, one substitution
        assert!(is_match("elck", "elch"));
        // 8 chars, two substitutions
        assert!(is_match("nikxlaux", "nikolaus"));
        // 8 chars, three substitutions
        assert!(!is_match("nixxlaux", "nikolaus"));
    }

    #[test]
    fn test_is_match_scenarios() {
        assert!(is_match("Rentier", "rentier"));
        assert!(is_match("Schneeman", "Schneemann"));
        assert!(!is_match("Elch", "Elf"));
        assert!(!is_match("", "Ja"));
    }

    #[test]
    fn test_is_match_empty_inputs() {
        assert!(!is_match("", ""));
        assert!(!is_match("Ja", ""));
        assert!(!is_match("  ", "  "));
        assert!(!is_match("?!", "..."));
    }

    #[test]
    fn test_is_match_ignores_punctuation_and_case() {
        assert!(is_match("Ja .", "Ja"));
        assert!(is_match("- Elch", "elch"));
        assert!(is_match("  Schnee-Mann! ", "schneemann"));
        assert!(is_match("O Tannenbaum", "o tannenbaum!"));
    }

    #[test]
    fn test_is_correct_answer_with_alternates() {
        assert!(is_correct_answer(
            "Nikolaus",
            "Weihnachtsmann",
            &["Nikolaus", "Santa"]
        ));
        assert!(is_correct_answer("Weihnachtsman", "Weihnachtsmann", &["Santa"]));
        assert!(!is_correct_answer("Osterhase", "Weihnachtsmann", &["Santa"]));
    }

    #[test]
    fn test_is_correct_answer_without_alternates() {
        let none: [&str; 0] = [];
        assert!(is_correct_answer("Stern", "stern", &none));
        assert!(!is_correct_answer("Mond", "Stern", &none));

        let owned: Vec<String> = Vec::new();
        assert!(!is_correct_answer("", "", &owned));
    }
}
