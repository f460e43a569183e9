//! Longest-matching-block sequence similarity.
//!
//! Ratcliff–Obershelp over character sequences: find the longest common
//! block, recurse on the pieces to either side, and score twice the
//! matched character count over the combined length. Order-sensitive, so
//! near-identical strings score very highly.

use std::collections::HashMap;

/// Similarity ratio in [0, 1] between two character sequences.
/// Two empty sequences are identical and score 1.0.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    // Positions of every character of b, for O(matches) block search.
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b.iter().enumerate() {
        b2j.entry(ch).or_default().push(j);
    }

    let matched = match_total(&a, &b2j, (0, a.len()), (0, b.len()));
    2.0 * matched as f64 / total as f64
}

/// Total characters covered by matching blocks within the given ranges.
fn match_total(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    a_range: (usize, usize),
    b_range: (usize, usize),
) -> usize {
    let mut matched = 0;
    let mut pending = vec![(a_range, b_range)];
    while let Some(((alo, ahi), (blo, bhi))) = pending.pop() {
        let (i, j, size) = longest_match(a, b2j, alo, ahi, blo, bhi);
        if size > 0 {
            matched += size;
            pending.push(((alo, i), (blo, j)));
            pending.push(((i + size, ahi), (j + size, bhi)));
        }
    }
    matched
}

/// Longest block such that `a[i..i+size] == b[j..j+size]` within the
/// given ranges, preferring the earliest block on ties.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // j2len[j] = length of the longest match ending at a[i], b[j].
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut row: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(ch) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let len = if j > 0 {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                row.insert(j, len);
                if len > best_size {
                    best_i = i + 1 - len;
                    best_j = j + 1 - len;
                    best_size = len;
                }
            }
        }
        j2len = row;
    }
    (best_i, best_j, best_size)
}
