//! # Tangent Engine
//!
//! $$
//! (\mathcal{F}, r_f) \mapsto \mathbf{w}^\*
//! $$
//!
//! Configuration-holding entry point for tangent portfolio selection.

use tracing::debug;
use tracing::info;

use super::error::FrontierError;
use super::selector::select_tangent;
use super::types::FrontierTable;
use super::types::TangentPortfolio;

/// Daily risk-free rate used when no explicit rate is configured.
pub const DEFAULT_RISK_FREE: f64 = 0.00012;

/// Runtime configuration for [`TangentEngine`].
#[derive(Clone, Debug)]
pub struct TangentEngineConfig {
  /// Risk-free rate used in Sharpe computations.
  pub risk_free: f64,
}

impl Default for TangentEngineConfig {
  fn default() -> Self {
    Self {
      risk_free: DEFAULT_RISK_FREE,
    }
  }
}

/// Single entry-point engine for tangent portfolio selection.
#[derive(Clone, Debug)]
pub struct TangentEngine {
  config: TangentEngineConfig,
}

impl TangentEngine {
  /// Construct a new engine with explicit configuration.
  pub fn new(config: TangentEngineConfig) -> Self {
    Self { config }
  }

  /// Borrow engine configuration.
  pub fn config(&self) -> &TangentEngineConfig {
    &self.config
  }

  /// Select the maximum Sharpe ratio row from `table`.
  pub fn select(&self, table: &FrontierTable) -> Result<TangentPortfolio, FrontierError> {
    debug!(
      rows = table.len(),
      risk_free = self.config.risk_free,
      "scanning frontier for tangent portfolio"
    );

    let tangent = select_tangent(table, self.config.risk_free)?;

    info!(
      index = tangent.index,
      sharpe = tangent.sharpe,
      "tangent portfolio selected"
    );

    Ok(tangent)
  }
}

#[cfg(test)]
mod tests {
  use tracing_test::traced_test;

  use super::*;
  use crate::frontier::types::FrontierRow;

  fn sample_table() -> FrontierTable {
    let tickers = vec!["AAA".to_string(), "BBB".to_string()];
    let rows = vec![
      FrontierRow::new(0.0010, 0.0200, vec![0.5, 0.5]),
      FrontierRow::new(0.0015, 0.0180, vec![0.7, 0.3]),
      FrontierRow::new(0.0005, 0.0100, vec![0.2, 0.8]),
    ];
    FrontierTable::new(tickers, rows).unwrap()
  }

  #[test]
  fn default_config_uses_the_reference_rate() {
    let engine = TangentEngine::new(TangentEngineConfig::default());
    assert_eq!(engine.config().risk_free, 0.00012);
  }

  #[test]
  fn engine_matches_the_free_function() {
    let engine = TangentEngine::new(TangentEngineConfig { risk_free: 0.0002 });
    let table = sample_table();

    let via_engine = engine.select(&table).unwrap();
    let direct = select_tangent(&table, 0.0002).unwrap();
    assert_eq!(via_engine.index, direct.index);
    assert_eq!(via_engine.sharpe, direct.sharpe);
  }

  #[test]
  fn engine_surfaces_selection_errors() {
    let engine = TangentEngine::new(TangentEngineConfig::default());
    let empty = FrontierTable::new(Vec::new(), Vec::new()).unwrap();
    assert_eq!(
      engine.select(&empty).unwrap_err(),
      FrontierError::EmptyFrontier
    );
  }

  #[traced_test]
  #[test]
  fn engine_logs_the_selection() {
    let engine = TangentEngine::new(TangentEngineConfig::default());
    let tangent = engine.select(&sample_table()).unwrap();

    assert_eq!(tangent.index, 1);
    assert!(logs_contain("tangent portfolio selected"));
  }
}
