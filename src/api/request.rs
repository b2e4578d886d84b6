//! Request types for the gross-up engine API.
//!
//! This module defines the JSON request structures for the calculation
//! and employee endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    DEFAULT_DEDUCTION_PERCENT, Employee, EmployeeStatus, SalaryComponents,
};

fn default_deduction_percent() -> f64 {
    DEFAULT_DEDUCTION_PERCENT
}

/// Request body for the `/calculate` endpoint.
///
/// A flat mapping of named numeric fields. Only `basic_pay` is required;
/// the remaining fields take the documented defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Base pay, the figure the deduction is calculated on.
    pub basic_pay: f64,
    /// House rent allowance.
    #[serde(default)]
    pub hra: f64,
    /// Overtime pay.
    #[serde(default)]
    pub over_time: f64,
    /// Any further allowances.
    #[serde(default)]
    pub other_allowances: f64,
    /// Provident fund deduction percentage.
    #[serde(default = "default_deduction_percent")]
    pub deduction_percent: f64,
    /// Flat deduction not subject to the gross-up.
    #[serde(default)]
    pub other_deductions: f64,
}

/// Request body for the `/calculate/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCalculationRequest {
    /// The rows to calculate, one quote per row.
    pub rows: Vec<CalculationRequest>,
}

/// Request body for the employee record endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique employee code.
    pub code: String,
    /// Full name.
    pub name: String,
    /// Job designation.
    pub designation: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub contact: String,
    /// The date the employee joined.
    pub date_of_joining: NaiveDate,
    /// Current payroll status.
    pub status: EmployeeStatus,
    /// The salary components to record for this employee.
    #[serde(default)]
    pub salary: Option<SalaryComponents>,
}

impl From<CalculationRequest> for SalaryComponents {
    fn from(req: CalculationRequest) -> Self {
        SalaryComponents {
            basic_pay: req.basic_pay,
            hra: req.hra,
            over_time: req.over_time,
            other_allowances: req.other_allowances,
            deduction_percent: req.deduction_percent,
            other_deductions: req.other_deductions,
        }
    }
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            code: req.code,
            name: req.name,
            designation: req.designation,
            email: req.email,
            contact: req.contact,
            date_of_joining: req.date_of_joining,
            status: req.status,
            salary: req.salary,
        }
    }
}
