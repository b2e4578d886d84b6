//! Core data models for the gross-up calculation engine.
//!
//! This module contains all the domain records used throughout the engine.

mod employee;
mod salary_components;
mod salary_quote;

pub use employee::{Employee, EmployeeStatus};
pub use salary_components::{DEFAULT_DEDUCTION_PERCENT, SalaryComponents};
pub use salary_quote::SalaryQuote;
