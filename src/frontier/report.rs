//! # Frontier Report
//!
//! $$
//! \mathbf{w}^\* \mapsto \text{key/value and per-asset tables}
//! $$
//!
//! Tabular presentation of a selected tangent portfolio for downstream
//! display. Print-oriented only; charting stays with external consumers.

use prettytable::Table;
use prettytable::row;

use super::types::TangentPortfolio;

/// Key/value summary of the selected portfolio.
pub fn summary_table(tangent: &TangentPortfolio) -> Table {
  let mut table = Table::new();
  table.add_row(row!["Mean return", format!("{:.6}", tangent.mean_return)]);
  table.add_row(row!["Volatility", format!("{:.6}", tangent.std_dev)]);
  table.add_row(row!["Sharpe ratio", format!("{:.6}", tangent.sharpe)]);
  table
}

/// Per-asset weight table in declaration order.
pub fn weights_table(tangent: &TangentPortfolio) -> Table {
  let mut table = Table::new();
  table.add_row(row!["Asset", "Weight"]);

  for asset in &tangent.weights {
    table.add_row(row![asset.ticker, format!("{:.4}", asset.weight)]);
  }

  table
}
