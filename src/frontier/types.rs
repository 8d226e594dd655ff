//! # Frontier Types
//!
//! $$
//! \mathcal{F} = \{(\mu_k, \sigma_k, \mathbf{w}_k)\}_{k=1}^{n}
//! $$
//!
//! Typed records for externally produced frontier tables and the selected
//! tangent portfolio. Rows carry named fields instead of positional
//! columns, so consumers never slice weight offsets out of a flat record.

use super::error::FrontierError;

/// One candidate portfolio sampled from the efficient frontier.
#[derive(Clone, Debug, PartialEq)]
pub struct FrontierRow {
  /// Expected portfolio return over the analysis period.
  pub mean_return: f64,
  /// Portfolio return standard deviation (risk proxy).
  pub std_dev: f64,
  /// Per-asset weights in table asset order. The upstream optimizer bounds
  /// the sum near 1.0 (roughly 0.99..1.01); not validated here.
  pub weights: Vec<f64>,
}

impl FrontierRow {
  /// Construct a row from its return, risk and weight vector.
  pub fn new(mean_return: f64, std_dev: f64, weights: Vec<f64>) -> Self {
    Self {
      mean_return,
      std_dev,
      weights,
    }
  }
}

/// Read-only table of frontier candidates sharing one asset ordering.
///
/// Produced once per analysis run by an external optimizer. Rows are kept
/// in input order and are not necessarily sorted by risk or return.
#[derive(Clone, Debug)]
pub struct FrontierTable {
  tickers: Vec<String>,
  rows: Vec<FrontierRow>,
}

impl FrontierTable {
  /// Build a table, validating that every row carries one weight per ticker.
  pub fn new(tickers: Vec<String>, rows: Vec<FrontierRow>) -> Result<Self, FrontierError> {
    let expected = tickers.len();

    for (index, row) in rows.iter().enumerate() {
      if row.weights.len() != expected {
        return Err(FrontierError::WeightDimension {
          index,
          expected,
          got: row.weights.len(),
        });
      }
    }

    Ok(Self { tickers, rows })
  }

  /// Asset identifiers in declaration order.
  pub fn tickers(&self) -> &[String] {
    &self.tickers
  }

  /// Frontier rows in input order.
  pub fn rows(&self) -> &[FrontierRow] {
    &self.rows
  }

  /// Number of sampled frontier points.
  pub fn len(&self) -> usize {
    self.rows.len()
  }

  /// True when the table holds no rows.
  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }
}

/// Weight of a single asset in the selected portfolio.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetWeight {
  /// Asset identifier.
  pub ticker: String,
  /// Allocated weight.
  pub weight: f64,
}

/// The frontier row with the highest Sharpe ratio, plus derived views.
#[derive(Clone, Debug)]
pub struct TangentPortfolio {
  /// Position of the winning row in the input table.
  pub index: usize,
  /// Expected return of the winning row.
  pub mean_return: f64,
  /// Volatility of the winning row.
  pub std_dev: f64,
  /// Sharpe ratio achieved by the winning row.
  pub sharpe: f64,
  /// Per-asset weights keyed by ticker, preserving table asset order.
  pub weights: Vec<AssetWeight>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn table_rejects_mismatched_weight_dimension() {
    let tickers = vec!["AAA".to_string(), "BBB".to_string()];
    let rows = vec![
      FrontierRow::new(0.001, 0.02, vec![0.5, 0.5]),
      FrontierRow::new(0.002, 0.03, vec![1.0]),
    ];

    let err = FrontierTable::new(tickers, rows).unwrap_err();
    assert_eq!(
      err,
      FrontierError::WeightDimension {
        index: 1,
        expected: 2,
        got: 1,
      }
    );
  }

  #[test]
  fn table_preserves_row_and_ticker_order() {
    let tickers = vec!["AAA".to_string(), "BBB".to_string()];
    let rows = vec![
      FrontierRow::new(0.001, 0.02, vec![0.6, 0.4]),
      FrontierRow::new(0.002, 0.03, vec![0.3, 0.7]),
    ];

    let table = FrontierTable::new(tickers, rows).unwrap();
    assert_eq!(table.len(), 2);
    assert!(!table.is_empty());
    assert_eq!(table.tickers()[1], "BBB");
    assert_eq!(table.rows()[0].weights, vec![0.6, 0.4]);
  }

  #[test]
  fn empty_table_is_constructible() {
    let table = FrontierTable::new(Vec::new(), Vec::new()).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
  }
}
