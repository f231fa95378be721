/// Levenshtein distance over arbitrary symbol sequences.
///
/// Builds the full `(|a|+1) x (|b|+1)` cost table (flattened row-major).
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut dist = vec![0usize; rows * cols];

    for i in 1..rows {
        dist[i * cols] = i;
    }
    for j in 1..cols {
        dist[j] = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let deletion = dist[(i - 1) * cols + j] + 1;
            let insertion = dist[i * cols + (j - 1)] + 1;
            let substitution = dist[(i - 1) * cols + (j - 1)] + cost;
            dist[i * cols + j] = deletion.min(insertion).min(substitution);
        }
    }

    dist[rows * cols - 1]
}

pub fn levenshtein_str(a: &str, b: &str) -> usize {
    levenshtein(a.as_bytes(), b.as_bytes())
}

/// Neighbours in the genotype hypercube: exactly one edit apart.
#[inline]
pub fn is_adjacent<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    levenshtein(a, b) == 1
}
