//! # Tangent Selector
//!
//! $$
//! k^\* = \arg\max_k \frac{\mu_k - r_f}{\sigma_k}
//! $$
//!
//! Single-pass scan for the frontier row with the highest Sharpe ratio.

use super::error::FrontierError;
use super::types::AssetWeight;
use super::types::FrontierRow;
use super::types::FrontierTable;
use super::types::TangentPortfolio;

/// Sharpe ratio of a single frontier row at the given risk-free rate.
///
/// Assumes `std_dev` is strictly positive; [`select_tangent`] guards this
/// before ranking any row.
pub fn sharpe_ratio(row: &FrontierRow, risk_free: f64) -> f64 {
  (row.mean_return - risk_free) / row.std_dev
}

/// Select the tangent portfolio: the row with the highest Sharpe ratio.
///
/// One deterministic pass with a running maximum. Rows tied on the exact
/// maximal ratio resolve to the earliest row in table order. A row with
/// non-positive `std_dev` aborts the whole selection with
/// [`FrontierError::DegenerateRisk`] rather than ranking an unbounded
/// ratio; an empty table yields [`FrontierError::EmptyFrontier`].
pub fn select_tangent(
  table: &FrontierTable,
  risk_free: f64,
) -> Result<TangentPortfolio, FrontierError> {
  if table.is_empty() {
    return Err(FrontierError::EmptyFrontier);
  }

  let mut best_index = 0;
  let mut best_sharpe = f64::NEG_INFINITY;

  for (index, row) in table.rows().iter().enumerate() {
    if row.std_dev <= 0.0 {
      return Err(FrontierError::DegenerateRisk { index });
    }

    let sharpe = sharpe_ratio(row, risk_free);
    if sharpe > best_sharpe {
      best_sharpe = sharpe;
      best_index = index;
    }
  }

  let row = &table.rows()[best_index];
  let weights = table
    .tickers()
    .iter()
    .zip(row.weights.iter())
    .map(|(ticker, &weight)| AssetWeight {
      ticker: ticker.clone(),
      weight,
    })
    .collect();

  Ok(TangentPortfolio {
    index: best_index,
    mean_return: row.mean_return,
    std_dev: row.std_dev,
    sharpe: best_sharpe,
    weights,
  })
}
