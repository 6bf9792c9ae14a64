//! Offset-tracked indicator output.
//!
//! Indicators produce fewer values than they consume, and composite indicators
//! feed one output into another. `AlignedSeries` keeps the index into the
//! original price series of its first element, so pairing two series is done by
//! offset instead of by position.

use serde::{Deserialize, Serialize};

/// Indicator values plus the price index their first element belongs to.
///
/// Outputs of one computation are tail-anchored: a non-empty series always ends
/// at the newest price, so `offset + len == input length`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    pub offset: usize,
    pub values: Vec<f64>,
}

impl AlignedSeries {
    pub fn new(offset: usize, values: Vec<f64>) -> Self {
        Self { offset, values }
    }

    /// An empty series anchored at the end of an input of `input_len` elements.
    pub fn empty(input_len: usize) -> Self {
        Self {
            offset: input_len,
            values: Vec::new(),
        }
    }

    /// Wrap values that end at the last element of an input of `input_len`.
    pub fn tail_anchored(input_len: usize, values: Vec<f64>) -> Self {
        Self {
            offset: input_len.saturating_sub(values.len()),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// One past the index of the last element.
    pub fn end(&self) -> usize {
        self.offset + self.values.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Value at an absolute index of the source series, if covered.
    pub fn at(&self, index: usize) -> Option<f64> {
        index
            .checked_sub(self.offset)
            .and_then(|i| self.values.get(i).copied())
    }

    /// Shift a series computed over a derived input into the index space of
    /// that input's own source. `base` is the offset of the derived input.
    pub fn rebase(mut self, base: usize) -> Self {
        self.offset += base;
        self
    }

    /// Combine two series element-wise over the indices both cover.
    ///
    /// The excess prefix of the longer series is discarded; the newest values
    /// always line up.
    pub fn zip_tail<F>(&self, other: &AlignedSeries, f: F) -> AlignedSeries
    where
        F: Fn(f64, f64) -> f64,
    {
        let end = self.end().min(other.end());
        let start = self.offset.max(other.offset);
        if start >= end {
            return AlignedSeries::empty(end);
        }

        let lhs = &self.values[start - self.offset..end - self.offset];
        let rhs = &other.values[start - other.offset..end - other.offset];
        let values = lhs.iter().zip(rhs).map(|(&a, &b)| f(a, b)).collect();

        AlignedSeries::new(start, values)
    }
}
