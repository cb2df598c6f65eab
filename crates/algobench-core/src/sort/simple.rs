//! Quadratic comparison sorts.

use super::{AlgorithmKind, Sorter};
use crate::error::Result;

pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bubble
    }

    fn sort(&self, data: &mut [i32]) -> Result<()> {
        let mut end = data.len();
        while end > 1 {
            // everything past the last swap is already in place
            let mut last_swap = 0;
            for i in 1..end {
                if data[i - 1] > data[i] {
                    data.swap(i - 1, i);
                    last_swap = i;
                }
            }
            end = last_swap;
        }
        Ok(())
    }
}

pub struct SelectionSort;

impl Sorter for SelectionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Selection
    }

    fn sort(&self, data: &mut [i32]) -> Result<()> {
        let n = data.len();
        for i in 0..n {
            let mut min = i;
            for j in (i + 1)..n {
                if data[j] < data[min] {
                    min = j;
                }
            }
            if min != i {
                data.swap(i, min);
            }
        }
        Ok(())
    }
}

pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Insertion
    }

    fn sort(&self, data: &mut [i32]) -> Result<()> {
        for i in 1..data.len() {
            let key = data[i];
            let mut j = i;
            while j > 0 && data[j - 1] > key {
                data[j] = data[j - 1];
                j -= 1;
            }
            data[j] = key;
        }
        Ok(())
    }
}
