use rand::Rng;

/// Source of uniformly distributed indices.
pub trait RandomIndex: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&self, len: usize) -> usize;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomIndex;

impl RandomIndex for ThreadRandomIndex {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

pub fn pick_random<'a, T>(random: &dyn RandomIndex, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }

    items.get(random.pick_index(items.len()))
}

#[cfg(test)]
pub struct FixedRandomIndex(pub usize);

#[cfg(test)]
impl RandomIndex for FixedRandomIndex {
    fn pick_index(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slice_yields_none() {
        let items: Vec<u8> = Vec::new();
        assert!(pick_random(&ThreadRandomIndex, &items).is_none());
    }

    #[test]
    fn picks_the_index_the_source_returns() {
        let items = ["a", "b", "c"];
        assert_eq!(pick_random(&FixedRandomIndex(1), &items), Some(&"b"));
    }

    #[test]
    fn selection_is_roughly_uniform() {
        let items = [0usize, 1, 2, 3];
        let trials = 20_000;
        let mut counts = [0usize; 4];

        for _ in 0..trials {
            let picked = pick_random(&ThreadRandomIndex, &items).unwrap();
            counts[*picked] += 1;
        }

        for count in counts {
            let frequency = count as f64 / trials as f64;
            assert!(
                (frequency - 0.25).abs() < 0.03,
                "frequency {frequency} too far from 1/4"
            );
        }
    }
}
