//! FinanceHub - personal finance toolkit for the terminal
//!
//! This library provides the core of the FinanceHub application: loan and
//! SIP calculators, budget tracking, goal planning, shared-expense groups,
//! an investment portfolio, money habits and a salary planner, all stored
//! as local JSON files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `calc`: Pure financial calculations (EMI, SIP, budgets, goals, ledgers)
//! - `models`: Core data models with validating constructors
//! - `reports`: Dashboard, spending and summary reports over a snapshot
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `logging`: Diagnostic logging setup
//!
//! # Example
//!
//! ```rust
//! use financehub::calc::emi;
//!
//! let monthly = emi(100_000.0, 10.0, 12).unwrap();
//! assert!((monthly - 8791.59).abs() < 0.01);
//! ```

pub mod audit;
pub mod calc;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
