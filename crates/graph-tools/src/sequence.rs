/// Iterator over all boolean vectors of length `n` with exactly `w` entries
/// set, in cool-lex order.
///
/// Each vector is produced exactly once, so the iterator yields
/// `binomial(n, w)` items. Successive vectors differ by moving one or two set
/// entries.
///
/// # Examples
///
/// ```rust
/// use graph_tools::sequence::WeightSequence;
///
/// let words: Vec<String> = WeightSequence::new(4, 2)
///     .map(|v| v.iter().map(|&b| if b { '1' } else { '0' }).collect())
///     .collect();
/// assert_eq!(words, ["0110", "1010", "0101", "0011", "1001", "1100"]);
/// ```
#[derive(Clone, Debug)]
pub struct WeightSequence {
    bits: Vec<bool>,
    x: usize,
    y: usize,
    state: State,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    First,
    Running,
    Done,
}

impl WeightSequence {
    /// # Panics
    ///
    /// Panics if `w > n`.
    pub fn new(n: usize, w: usize) -> Self {
        assert!(w <= n, "weight {w} exceeds length {n}");
        let mut bits = vec![false; n];
        if w == n {
            bits.fill(true);
        } else {
            // 0 1^w 0^(n - w - 1)
            bits[1..=w].fill(true);
        }
        Self { bits, x: 1, y: 0, state: State::First }
    }

    fn step(&mut self) -> bool {
        let n = self.bits.len();
        let Self { bits, x, y, .. } = self;
        if *x >= n {
            return false;
        }
        bits[*x] = false;
        bits[*y] = true;
        *x += 1;
        *y += 1;
        if *x < n && !bits[*x] {
            bits[*x] = true;
            bits[0] = false;
            if *y > 1 {
                *x = 1;
            }
            *y = 0;
        }
        true
    }
}

impl Iterator for WeightSequence {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::First => {
                let n = self.bits.len();
                let weight = self.bits.iter().filter(|&&b| b).count();
                self.state = if weight == 0 || weight == n { State::Done } else { State::Running };
                Some(self.bits.clone())
            }
            State::Running => {
                if self.step() {
                    Some(self.bits.clone())
                } else {
                    self.state = State::Done;
                    None
                }
            }
            State::Done => None,
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::WeightSequence;

    fn binomial(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn every_vector_once() {
        for n in 0..12 {
            for w in 0..=n {
                let vectors: Vec<Vec<bool>> = WeightSequence::new(n, w).collect();
                assert_eq!(vectors.len(), binomial(n, w), "n={n} w={w}");
                assert!(vectors.iter().all(|v| v.len() == n && v.iter().filter(|&&b| b).count() == w));
                let distinct: HashSet<_> = vectors.iter().collect();
                assert_eq!(distinct.len(), vectors.len());
            }
        }
    }

    #[test]
    fn order() {
        let words: Vec<String> =
            WeightSequence::new(5, 2).map(|v| v.iter().map(|&b| if b { '1' } else { '0' }).collect()).collect();
        assert_eq!(words, ["01100", "10100", "01010", "00110", "10010", "01001", "00101", "00011", "10001", "11000"]);
    }

    #[test]
    fn trivial_weights() {
        assert_eq!(WeightSequence::new(3, 0).collect::<Vec<_>>(), [vec![false; 3]]);
        assert_eq!(WeightSequence::new(3, 3).collect::<Vec<_>>(), [vec![true; 3]]);
        assert_eq!(WeightSequence::new(0, 0).collect::<Vec<_>>(), [Vec::<bool>::new()]);
    }

    #[test]
    #[should_panic(expected = "exceeds length")]
    fn weight_too_large() {
        WeightSequence::new(2, 3);
    }
}
