//! # Tangency
//!
//! $$
//! \mathbf{w}^\* = \arg\max_{(\mu,\sigma,\mathbf{w})\in\mathcal{F}} \frac{\mu - r_f}{\sigma}
//! $$
//!
//! Selection of the maximum Sharpe ratio (tangent) portfolio from a
//! precomputed mean-variance efficient frontier. The frontier itself is
//! produced by an external optimizer; this crate models the resulting
//! table, scans it for the tangent portfolio and renders the outcome.

pub mod frontier;
