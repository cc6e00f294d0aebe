//! Ordering the rows of a jagged array by a per-row key.
//!
//! A row may be absent (`None`). Keys are computed once, then rows are ordered with selection
//! sort, swapping rows and keys in lockstep. Rows are moved, never cloned. Of several rows with
//! the same key the leftmost one is selected first.

use crate::error::required;
use crate::selection::selection_sort_paired;
use crate::SortResult;

/// What a row is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKey {
    /// Sum of the elements. Absent and empty rows sum to 0.
    Sum,
    /// Largest element. Absent and empty rows count as `i32::MIN`.
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl RowKey {
    fn of(self, row: Option<&[i32]>) -> i64 {
        let row = row.unwrap_or(&[]);

        match self {
            // Summed as i64, a row of i32 can't overflow that in practice.
            RowKey::Sum => row.iter().map(|&x| i64::from(x)).sum(),
            RowKey::Max => i64::from(row.iter().copied().max().unwrap_or(i32::MIN)),
        }
    }
}

/// Orders the rows of `source` in place by `key`.
///
/// Returns [`SortError::InvalidArgument`](crate::SortError) if `source` is `None`.
pub fn order_rows(
    source: Option<&mut [Option<Vec<i32>>]>,
    key: RowKey,
    direction: Direction,
) -> SortResult {
    let rows = required(source, "source")?;

    let mut keys: Vec<i64> = rows.iter().map(|row| key.of(row.as_deref())).collect();

    tracing::trace!(rows = rows.len(), ?key, ?direction, "ordering jagged rows");

    match direction {
        Direction::Ascending => {
            selection_sort_paired(&mut keys, rows, &mut |a: &i64, b: &i64| a < b)
        }
        Direction::Descending => {
            selection_sort_paired(&mut keys, rows, &mut |a: &i64, b: &i64| a > b)
        }
    }

    Ok(())
}

pub fn order_by_ascending_by_sum(source: Option<&mut [Option<Vec<i32>>]>) -> SortResult {
    order_rows(source, RowKey::Sum, Direction::Ascending)
}

pub fn order_by_descending_by_sum(source: Option<&mut [Option<Vec<i32>>]>) -> SortResult {
    order_rows(source, RowKey::Sum, Direction::Descending)
}

pub fn order_by_ascending_by_max(source: Option<&mut [Option<Vec<i32>>]>) -> SortResult {
    order_rows(source, RowKey::Max, Direction::Ascending)
}

pub fn order_by_descending_by_max(source: Option<&mut [Option<Vec<i32>>]>) -> SortResult {
    order_rows(source, RowKey::Max, Direction::Descending)
}
