use anyhow::Result;

use tangency_rs::frontier::FrontierRow;
use tangency_rs::frontier::FrontierTable;
use tangency_rs::frontier::TangentEngine;
use tangency_rs::frontier::TangentEngineConfig;
use tangency_rs::frontier::summary_table;
use tangency_rs::frontier::weights_table;

fn main() -> Result<()> {
  // Frontier points as an external mean-variance optimizer would emit
  // them: return, risk and one weight per declared asset.
  let tickers = vec![
    "AAPL".to_string(),
    "MSFT".to_string(),
    "AMZN".to_string(),
    "GOOG".to_string(),
  ];

  let rows = vec![
    FrontierRow::new(0.00040, 0.0080, vec![0.10, 0.22, 0.33, 0.35]),
    FrontierRow::new(0.00060, 0.0090, vec![0.14, 0.24, 0.31, 0.31]),
    FrontierRow::new(0.00080, 0.0105, vec![0.19, 0.27, 0.28, 0.26]),
    FrontierRow::new(0.00100, 0.0125, vec![0.26, 0.29, 0.24, 0.21]),
    FrontierRow::new(0.00120, 0.0150, vec![0.34, 0.31, 0.20, 0.15]),
    FrontierRow::new(0.00140, 0.0185, vec![0.45, 0.32, 0.14, 0.09]),
    FrontierRow::new(0.00160, 0.0230, vec![0.58, 0.31, 0.08, 0.03]),
  ];

  let table = FrontierTable::new(tickers, rows)?;
  let engine = TangentEngine::new(TangentEngineConfig::default());
  let tangent = engine.select(&table)?;

  println!(
    "Tangent portfolio: frontier point {} of {}",
    tangent.index + 1,
    table.len()
  );
  summary_table(&tangent).printstd();

  println!("\nAsset weights:");
  weights_table(&tangent).printstd();

  Ok(())
}
