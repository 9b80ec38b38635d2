use crate::{Error, Result};

/// Memoized Jacobsthal numbers: J(0) = 0, J(1) = 1, J(k) = 2 J(k - 2) + J(k - 1).
#[derive(Clone, Debug)]
pub struct Jacobsthal {
    values: Vec<u64>,
}

impl Default for Jacobsthal {
    fn default() -> Self {
        Self { values: vec![0, 1] }
    }
}

impl Jacobsthal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, index: usize) -> Result<u64> {
        while self.values.len() <= index {
            let k = self.values.len();
            let next = self.values[k - 2]
                .checked_mul(2)
                .and_then(|doubled| doubled.checked_add(self.values[k - 1]))
                .ok_or(Error::JacobsthalOverflow { index: k })?;
            self.values.push(next);
        }
        Ok(self.values[index])
    }

    /// Number of `large` nodes pulled in insertion round `round`, i.e. `2 J(round)`.
    pub fn batch(&mut self, round: usize) -> Result<usize> {
        let value = self.get(round)?;
        value
            .checked_mul(2)
            .and_then(|batch| usize::try_from(batch).ok())
            .ok_or(Error::JacobsthalOverflow { index: round })
    }

    pub fn cached_len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_terms() {
        let mut jacobsthal = Jacobsthal::new();
        let expected = [0_u64, 1, 1, 3, 5, 11, 21, 43, 85, 171, 341];
        for (index, &value) in expected.iter().enumerate() {
            assert_eq!(jacobsthal.get(index), Ok(value), "index={index}");
        }
    }

    #[test]
    fn closed_form_agrees() {
        let mut jacobsthal = Jacobsthal::new();
        for n in 0..60_u32 {
            let sign: i128 = if n % 2 == 0 { 1 } else { -1 };
            let expected = ((1_i128 << n) - sign) / 3;
            assert_eq!(jacobsthal.get(n as usize), Ok(expected as u64), "n={n}");
        }
    }

    #[test]
    fn lookups_out_of_order_hit_the_cache() {
        let mut jacobsthal = Jacobsthal::new();
        assert_eq!(jacobsthal.get(6), Ok(21));
        assert_eq!(jacobsthal.cached_len(), 7);
        assert_eq!(jacobsthal.get(3), Ok(3));
        assert_eq!(jacobsthal.cached_len(), 7);
    }

    #[test]
    fn batch_doubles() {
        let mut jacobsthal = Jacobsthal::new();
        let batches = (1..=5)
            .map(|round| jacobsthal.batch(round))
            .collect::<Result<Vec<_>>>();
        assert_eq!(batches, Ok(vec![2, 2, 6, 10, 22]));
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        let mut jacobsthal = Jacobsthal::new();
        assert_eq!(jacobsthal.get(65), Ok(12_297_829_382_473_034_411));
        assert_eq!(
            jacobsthal.get(66),
            Err(Error::JacobsthalOverflow { index: 66 })
        );
        assert_eq!(
            jacobsthal.get(500),
            Err(Error::JacobsthalOverflow { index: 66 })
        );
        // The cache is left intact by a failed lookup.
        assert_eq!(jacobsthal.cached_len(), 66);
        assert_eq!(jacobsthal.get(64), Ok(6_148_914_691_236_517_205));
    }

    #[test]
    fn batch_overflow_is_reported() {
        let mut jacobsthal = Jacobsthal::new();
        assert_eq!(
            jacobsthal.batch(65),
            Err(Error::JacobsthalOverflow { index: 65 })
        );
    }
}
