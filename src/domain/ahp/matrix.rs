//! Pairwise comparison matrix.

use super::AhpError;

/// A positive reciprocal comparison matrix over `n` items.
///
/// Entry `(i, j)` holds the judged preference strength of item `i` over
/// item `j`. The diagonal is always 1 and `(j, i)` always holds the
/// reciprocal of `(i, j)`, so the matrix is fully determined by its upper
/// triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseMatrix {
    n: usize,
    entries: Vec<f64>,
}

impl PairwiseMatrix {
    /// Builds a matrix from upper-triangle judgments in row-major order.
    ///
    /// For `n` items the judgment slice must contain exactly `n(n-1)/2`
    /// values, enumerating pairs `(i, j)` with `i < j`: `(0,1), (0,2), ...,
    /// (0,n-1), (1,2), ...`. The conventional domain is the Saaty scale
    /// (1-9 and reciprocals), but any positive real is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AhpError::InvalidInput`] when `n` is zero, the judgment
    /// slice has the wrong length, or any judgment is not a positive
    /// finite number. The input is never truncated or padded.
    pub fn from_judgments(n: usize, judgments: &[f64]) -> Result<Self, AhpError> {
        if n == 0 {
            return Err(AhpError::invalid_input(
                "a comparison matrix requires at least one item",
            ));
        }

        let expected = n * (n - 1) / 2;
        if judgments.len() != expected {
            return Err(AhpError::invalid_input(format!(
                "expected {} judgments for {} items, got {}",
                expected,
                n,
                judgments.len()
            )));
        }

        let mut entries = vec![1.0; n * n];
        let mut k = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                let v = judgments[k];
                if !v.is_finite() || v <= 0.0 {
                    return Err(AhpError::invalid_input(format!(
                        "judgment at position {} must be a positive number, got {}",
                        k, v
                    )));
                }
                entries[i * n + j] = v;
                entries[j * n + i] = 1.0 / v;
                k += 1;
            }
        }

        Ok(Self { n, entries })
    }

    /// Number of items compared.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.entries[i * self.n + j]
    }

    /// Multiplies the matrix by a vector of length `n`.
    pub fn multiply(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.n);
        (0..self.n)
            .map(|i| {
                (0..self.n)
                    .map(|j| self.entries[i * self.n + j] * v[j])
                    .sum()
            })
            .collect()
    }
}
