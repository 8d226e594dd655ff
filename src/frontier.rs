//! # Frontier
//!
//! $$
//! \mathcal{F} = \{(\mu_k, \sigma_k, \mathbf{w}_k)\}_{k=1}^{n}
//! $$
//!
//! Frontier table model, tangent portfolio selection and reporting.

pub mod engine;
pub mod error;
pub mod report;
pub mod selector;
pub mod types;

pub use engine::DEFAULT_RISK_FREE;
pub use engine::TangentEngine;
pub use engine::TangentEngineConfig;
pub use error::FrontierError;
pub use report::summary_table;
pub use report::weights_table;
pub use selector::select_tangent;
pub use selector::sharpe_ratio;
pub use types::AssetWeight;
pub use types::FrontierRow;
pub use types::FrontierTable;
pub use types::TangentPortfolio;
