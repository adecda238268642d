// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! K-subsets enumeration.

/// Returns the binomial coefficient for n choose k.
pub fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // C(n, i) * (n - i) is always divisible by (i + 1).
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Calls the `f` closure for each k-subset of `items`.
///
/// Subsets are generated in lexicographic order of the items positions, each
/// subset is visited once and has no repeated positions. For k = 0 the closure
/// is called once with an empty slice, for k > items.len() it is never called.
pub fn for_each_combination<T, F>(items: &[T], k: usize, mut f: F)
where
    T: Copy,
    F: FnMut(&[T]),
{
    let n = items.len();
    if k > n {
        return;
    }

    let mut pos = (0..k).collect::<Vec<_>>();
    let mut subset = pos.iter().map(|&p| items[p]).collect::<Vec<_>>();

    loop {
        f(&subset);

        // Find the rightmost position that can still move right.
        let Some(i) = (0..k).rev().find(|&i| pos[i] < i + n - k) else {
            break;
        };

        pos[i] += 1;
        for j in (i + 1)..k {
            pos[j] = pos[j - 1] + 1;
        }

        for (item, &p) in subset[i..].iter_mut().zip(&pos[i..]) {
            *item = items[p];
        }
    }
}

/// Returns all k-subsets of `items`.
pub fn combinations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut out = Vec::with_capacity(nck(items.len(), k));
    for_each_combination(items, k, |subset| out.push(subset.to_vec()));
    out
}
