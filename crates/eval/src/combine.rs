// Copyright (C) 2025 The rankcast authors.
// SPDX-License-Identifier: Apache-2.0

//! Lazy k-combinations enumeration.

/// Returns a lazy iterator over all k-element combinations of `items`.
///
/// Each combination preserves the relative order of the chosen items,
/// the iterator yields exactly C(n, k) combinations with no duplicates.
/// When k is larger than the number of items the iterator is empty.
///
/// The iterator keeps a k-element index array and computes each
/// successor in place, so enumeration never recurses and allocates
/// only the yielded combinations.
pub fn combinations<T: Copy>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        indices: (0..k).collect(),
        done: k > items.len(),
    }
}

/// Iterator over the k-element combinations of a slice.
///
/// See [combinations].
#[derive(Debug)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<T: Copy> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let combo = self.indices.iter().map(|&i| self.items[i]).collect();

        // Advance to the successor: bump the rightmost index that has
        // room to grow and reset the indices to its right.
        let n = self.items.len();
        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }

            i -= 1;
            if self.indices[i] != i + n - k {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(combo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    /// Binomial coefficient for small arguments.
    fn choose(n: usize, k: usize) -> usize {
        if k > n {
            return 0;
        }
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn seven_choose_five() {
        let items = (0..7).collect::<Vec<_>>();
        let combos = combinations(&items, 5).collect::<Vec<_>>();
        assert_eq!(combos.len(), 21);
        assert!(combos.iter().all(|c| c.len() == 5));

        // No duplicates as sets of items.
        let distinct = combos
            .iter()
            .map(|c| c.iter().copied().collect::<HashSet<_>>())
            .map(|s| {
                let mut v = s.into_iter().collect::<Vec<_>>();
                v.sort_unstable();
                v
            })
            .collect::<HashSet<_>>();
        assert_eq!(distinct.len(), 21);
    }

    #[test]
    fn combination_counts() {
        for n in 0..=9 {
            let items = (0..n).collect::<Vec<_>>();
            for k in 0..=n + 1 {
                assert_eq!(
                    combinations(&items, k).count(),
                    choose(n, k),
                    "C({n}, {k})"
                );
            }
        }
    }

    #[test]
    fn preserves_relative_order() {
        let items = ['a', 'b', 'c', 'd', 'e'];
        let combos = combinations(&items, 3).collect::<Vec<_>>();

        assert_eq!(combos.first(), Some(&vec!['a', 'b', 'c']));
        assert_eq!(combos.last(), Some(&vec!['c', 'd', 'e']));

        for combo in &combos {
            let mut sorted = combo.clone();
            sorted.sort_unstable();
            assert_eq!(&sorted, combo);
        }
    }

    #[test]
    fn degenerate_sizes() {
        let items = [1, 2, 3];

        // k = 0 yields the single empty combination.
        assert_eq!(combinations(&items, 0).collect::<Vec<_>>(), vec![vec![]]);

        // k = n yields the whole slice.
        assert_eq!(
            combinations(&items, 3).collect::<Vec<_>>(),
            vec![vec![1, 2, 3]]
        );

        // k > n yields nothing.
        assert_eq!(combinations(&items, 4).count(), 0);
        assert_eq!(combinations(&[] as &[i32], 1).count(), 0);
    }
}
