/// Iterator over all `C(n, K)` index combinations in lexicographic order.
///
/// Example: `Combinations::<5>::new(7)` yields the 21 five-card subsets of a
/// seven-card Hold'em set as index arrays.
pub struct Combinations<const K: usize> {
    n: usize,
    indices: [usize; K],
    done: bool,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        Self { n, indices: core::array::from_fn(|i| i), done: K > n }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // Rightmost index that can still move forward.
        match (0..K).rev().find(|&i| self.indices[i] < self.n - K + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in (i + 1)..K {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(result)
    }
}
