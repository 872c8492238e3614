//! Character-level similarity primitives used by the ranking engine.
//!
//! Edit distance comes from `strsim`; the longest-common-subsequence length
//! is a two-row dynamic program since no crate in our stack exposes it.

/// Length of the longest common subsequence of `a` and `b`.
///
/// Characters must appear in both strings in the same relative order but
/// need not be contiguous. O(len(a) * len(b)) time, O(len(b)) space.
pub fn common_subsequence_len(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() || b_chars.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b_chars.len() + 1];
    let mut curr = vec![0usize; b_chars.len() + 1];
    for ca in &a_chars {
        for (j, cb) in b_chars.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_chars.len()]
}
