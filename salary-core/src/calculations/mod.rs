//! Salary calculation modules.
//!
//! This module provides the progressive income tax lookup and the net salary
//! calculation that builds on it.

pub mod common;
pub mod income_tax;
pub mod net_salary;

pub use income_tax::{IncomeTaxError, IncomeTaxSchedule};
pub use net_salary::{NetSalaryCalculator, NetSalaryError};
