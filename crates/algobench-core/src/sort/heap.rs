use super::{AlgorithmKind, Sorter};
use crate::error::Result;

pub struct HeapSort;

impl Sorter for HeapSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Heap
    }

    fn sort(&self, data: &mut [i32]) -> Result<()> {
        let n = data.len();
        for start in (0..n / 2).rev() {
            sift_down(data, start, n);
        }
        for end in (1..n).rev() {
            data.swap(0, end);
            sift_down(data, 0, end);
        }
        Ok(())
    }
}

/// Restore the max-heap property for the subtree at `root`, limited to `data[..end]`.
fn sift_down(data: &mut [i32], mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && data[child] < data[child + 1] {
            child += 1;
        }
        if data[root] >= data[child] {
            return;
        }
        data.swap(root, child);
        root = child;
    }
}
