//! Counting sort over the observed value range.

use super::{AlgorithmKind, Sorter};
use crate::error::{AlgoBenchError, Result};

/// Largest `max - min + 1` counting sort will allocate buckets for.
pub const COUNTING_MAX_RANGE: u64 = 1 << 24;

pub struct CountingSort;

impl Sorter for CountingSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Counting
    }

    fn sort(&self, data: &mut [i32]) -> Result<()> {
        let (Some(&min), Some(&max)) = (data.iter().min(), data.iter().max()) else {
            return Ok(());
        };
        let range = (i64::from(max) - i64::from(min) + 1) as u64;
        if range > COUNTING_MAX_RANGE {
            return Err(AlgoBenchError::LimitExceeded(format!(
                "counting sort value range {range} exceeds {COUNTING_MAX_RANGE}"
            )));
        }

        let mut counts = vec![0usize; range as usize];
        for &v in data.iter() {
            counts[(i64::from(v) - i64::from(min)) as usize] += 1;
        }

        let mut out = data.iter_mut();
        for (offset, &count) in counts.iter().enumerate() {
            let value = (i64::from(min) + offset as i64) as i32;
            for slot in out.by_ref().take(count) {
                *slot = value;
            }
        }
        Ok(())
    }
}
