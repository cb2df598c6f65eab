//! Sorting algorithms under benchmark.
//!
//! Every algorithm implements [`Sorter`] and sorts a `&mut [i32]` in place,
//! ascending. [`AlgorithmKind`] is the closed set of names accepted by the API
//! and the CLI; it resolves to a static sorter instance, so the runner can hold
//! `&'static dyn Sorter` without allocating.

mod counting;
mod heap;
mod merge;
mod quick;
mod simple;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AlgoBenchError, Result};

pub use counting::{CountingSort, COUNTING_MAX_RANGE};
pub use heap::HeapSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use simple::{BubbleSort, InsertionSort, SelectionSort};

/// In-place ascending sort.
pub trait Sorter: Send + Sync {
    fn kind(&self) -> AlgorithmKind;

    /// Sort `data` ascending. Only fails when the input cannot be handled by
    /// the algorithm at all (counting sort over an oversized value range).
    fn sort(&self, data: &mut [i32]) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
}

impl AlgorithmKind {
    /// Registry order; reports list algorithms in this order.
    pub const ALL: [AlgorithmKind; 7] = [
        AlgorithmKind::Bubble,
        AlgorithmKind::Selection,
        AlgorithmKind::Insertion,
        AlgorithmKind::Merge,
        AlgorithmKind::Quick,
        AlgorithmKind::Heap,
        AlgorithmKind::Counting,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "bubble",
            AlgorithmKind::Selection => "selection",
            AlgorithmKind::Insertion => "insertion",
            AlgorithmKind::Merge => "merge",
            AlgorithmKind::Quick => "quick",
            AlgorithmKind::Heap => "heap",
            AlgorithmKind::Counting => "counting",
        }
    }

    /// Bubble, selection and insertion sort do `O(n^2)` work on random input.
    pub fn is_quadratic(self) -> bool {
        matches!(
            self,
            AlgorithmKind::Bubble | AlgorithmKind::Selection | AlgorithmKind::Insertion
        )
    }

    /// Human-readable label used in the text report.
    pub fn display_name(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "Bubble Sort",
            AlgorithmKind::Selection => "Selection Sort",
            AlgorithmKind::Insertion => "Insertion Sort",
            AlgorithmKind::Merge => "Merge Sort",
            AlgorithmKind::Quick => "Quick Sort",
            AlgorithmKind::Heap => "Heap Sort",
            AlgorithmKind::Counting => "Counting Sort",
        }
    }

    pub fn sorter(self) -> &'static dyn Sorter {
        match self {
            AlgorithmKind::Bubble => &BubbleSort,
            AlgorithmKind::Selection => &SelectionSort,
            AlgorithmKind::Insertion => &InsertionSort,
            AlgorithmKind::Merge => &MergeSort,
            AlgorithmKind::Quick => &QuickSort,
            AlgorithmKind::Heap => &HeapSort,
            AlgorithmKind::Counting => &CountingSort,
        }
    }

    /// Parse a comma separated list (`"bubble, merge"`). Duplicates are
    /// dropped, first occurrence wins.
    pub fn parse_list(s: &str) -> Result<Vec<AlgorithmKind>> {
        let mut out = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let kind: AlgorithmKind = part.parse()?;
            if !out.contains(&kind) {
                out.push(kind);
            }
        }
        Ok(out)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = AlgoBenchError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_suffix("sort").unwrap_or(&lower).trim_end_matches(['-', '_', ' ']);
        AlgorithmKind::ALL
            .into_iter()
            .find(|k| k.as_str() == name)
            .ok_or_else(|| AlgoBenchError::BadRequest(format!("unknown algorithm: {s}")))
    }
}

/// Verify `sorted` is ascending and has the same length as the input it came from.
pub fn verify_sorted(kind: AlgorithmKind, original_len: usize, sorted: &[i32]) -> Result<()> {
    if sorted.len() != original_len {
        return Err(AlgoBenchError::Internal(format!(
            "{kind} changed input length: {original_len} -> {}",
            sorted.len()
        )));
    }
    if let Some(pos) = sorted.windows(2).position(|w| w[0] > w[1]) {
        return Err(AlgoBenchError::Internal(format!(
            "{kind} produced unsorted output at index {pos}"
        )));
    }
    Ok(())
}
