//! # Frontier Errors
//!
//! $$
//! \sigma_k = 0 \Rightarrow \frac{\mu_k - r_f}{\sigma_k} \notin \mathbb{R}
//! $$
//!
//! Typed failures for table construction and tangent selection.

use std::error::Error;
use std::fmt::Display;

/// Errors raised while building a frontier table or selecting from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrontierError {
  /// The frontier table holds no rows; there is no maximum to select.
  EmptyFrontier,
  /// A row's standard deviation is not strictly positive, so its Sharpe
  /// ratio is undefined. Carries the offending row index.
  DegenerateRisk {
    /// Position of the degenerate row in the table.
    index: usize,
  },
  /// A row's weight vector length disagrees with the ticker count.
  WeightDimension {
    /// Position of the malformed row in the table.
    index: usize,
    /// Number of tickers declared for the table.
    expected: usize,
    /// Number of weights the row actually carries.
    got: usize,
  },
}

impl Display for FrontierError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      FrontierError::EmptyFrontier => write!(f, "frontier table is empty"),
      FrontierError::DegenerateRisk { index } => write!(
        f,
        "frontier row {} has non-positive risk; Sharpe ratio is undefined",
        index
      ),
      FrontierError::WeightDimension {
        index,
        expected,
        got,
      } => write!(
        f,
        "frontier row {} carries {} weights, expected {}",
        index, got, expected
      ),
    }
  }
}

impl Error for FrontierError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_names_the_offending_row() {
    let err = FrontierError::DegenerateRisk { index: 3 };
    assert!(err.to_string().contains("row 3"));

    let err = FrontierError::WeightDimension {
      index: 1,
      expected: 4,
      got: 2,
    };
    assert!(err.to_string().contains("2 weights, expected 4"));
  }
}
