//! Quick sort: Lomuto partition, median-of-three pivot, loop on the larger
//! side so the stack depth stays logarithmic.

use super::{AlgorithmKind, Sorter};
use crate::error::Result;

pub struct QuickSort;

impl Sorter for QuickSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Quick
    }

    fn sort(&self, data: &mut [i32]) -> Result<()> {
        quick_sort(data);
        Ok(())
    }
}

fn quick_sort(mut data: &mut [i32]) {
    while data.len() > 1 {
        let p = partition(data);
        let (left, right) = data.split_at_mut(p);
        // right[0] is the pivot, already in its final slot
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left);
            data = right;
        } else {
            quick_sort(right);
            data = left;
        }
    }
}

fn partition(data: &mut [i32]) -> usize {
    let last = data.len() - 1;
    let mid = last / 2;
    // order first/mid/last, then park the median at the end
    if data[mid] < data[0] {
        data.swap(mid, 0);
    }
    if data[last] < data[0] {
        data.swap(last, 0);
    }
    if data[mid] < data[last] {
        data.swap(mid, last);
    }
    let pivot = data[last];

    let mut store = 0;
    for i in 0..last {
        if data[i] < pivot {
            data.swap(i, store);
            store += 1;
        }
    }
    data.swap(store, last);
    store
}
