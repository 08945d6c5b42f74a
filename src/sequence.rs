//! Reordering of a sorted key sequence so that inserting it, in order, into
//! a plain binary search tree yields a balanced tree.

/// Emit the lower-middle element of every `[left, right]` range before the
/// left half, then the right half. `[1, 2, 3, 4, 5, 6, 7]` becomes
/// `[4, 2, 1, 3, 6, 5, 7]`.
pub fn balanced_order<T: Copy>(sorted: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(sorted.len());
    // Explicit stack of half-open ranges; right pushed first so left pops first.
    let mut stack = vec![(0usize, sorted.len())];
    while let Some((lo, hi)) = stack.pop() {
        if lo >= hi {
            continue;
        }
        let mid = lo + (hi - 1 - lo) / 2;
        out.push(sorted[mid]);
        stack.push((mid + 1, hi));
        stack.push((lo, mid));
    }
    out
}
