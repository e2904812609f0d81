/// Edit distance between `a` and `b`: the minimum number of single-character
/// insertions, deletions or substitutions turning one into the other.
///
/// Operates on `char`s, so multi-byte characters count as one edit.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Rolling rows of the (m + 1) x (n + 1) table.
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Number of edits a query word of this length may absorb and still match.
pub fn threshold_for(word: &str) -> usize {
    match word.chars().count() {
        0..=3 => 0,
        4..=5 => 1,
        _ => 2,
    }
}

/// Cheap lower bound check: if the lengths differ by more than `threshold`
/// the distance necessarily exceeds it.
pub fn within_length_bound(a: &str, b: &str, threshold: usize) -> bool {
    a.chars().count().abs_diff(b.chars().count()) <= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_identical() {
        assert_eq!(distance("kitten", "kitten"), 0);
        assert_eq!(distance("", ""), 0);
    }

    #[test]
    fn test_distance_empty_side() {
        assert_eq!(distance("", "hooks"), 5);
        assert_eq!(distance("hooks", ""), 5);
    }

    #[test]
    fn test_distance_classic() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("hoks", "hooks"), 1);
    }

    #[test]
    fn test_distance_counts_chars_not_bytes() {
        assert_eq!(distance("café", "cafe"), 1);
        assert_eq!(distance("naïve", "naive"), 1);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(threshold_for("cat"), 0);
        assert_eq!(threshold_for("hook"), 1);
        assert_eq!(threshold_for("hooks"), 1);
        assert_eq!(threshold_for("reacts"), 2);
        assert_eq!(threshold_for(""), 0);
    }

    #[test]
    fn test_length_bound() {
        assert!(within_length_bound("hoks", "hooks", 1));
        assert!(!within_length_bound("cat", "cats", 0));
    }
}
