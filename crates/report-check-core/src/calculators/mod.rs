//! Recompute report figures from raw line items.
//!
//! Every calculator is a pure function over decimal inputs. Ratios with a
//! zero denominator come back as `None`; the only failure is a figure that
//! leaves the representable decimal range, reported as invalid input.

pub mod aging;
pub mod balance_sheet;
pub mod burn_rate;
pub mod cash_flow;
pub mod growth;
pub mod profit_loss;
pub mod trial_balance;
