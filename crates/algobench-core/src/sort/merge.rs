//! Top-down merge sort with a single scratch buffer.

use super::{AlgorithmKind, Sorter};
use crate::error::Result;

pub struct MergeSort;

impl Sorter for MergeSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Merge
    }

    fn sort(&self, data: &mut [i32]) -> Result<()> {
        let mut buf = vec![0; data.len()];
        sort_into(data, &mut buf);
        Ok(())
    }
}

/// `buf.len() == data.len()` on every call.
fn sort_into(data: &mut [i32], buf: &mut [i32]) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    let mid = n / 2;
    {
        let (left, right) = data.split_at_mut(mid);
        let (buf_left, buf_right) = buf.split_at_mut(mid);
        sort_into(left, buf_left);
        sort_into(right, buf_right);
    }
    // halves already in order
    if data[mid - 1] <= data[mid] {
        return;
    }
    merge(&data[..mid], &data[mid..], buf);
    data.copy_from_slice(buf);
}

fn merge(left: &[i32], right: &[i32], out: &mut [i32]) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        // `<=` keeps equal keys in input order
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
