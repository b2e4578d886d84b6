//! Employee record model and related types.
//!
//! This module defines the Employee struct and EmployeeStatus enum for
//! the records held by the repository layer. The calculator core never
//! reads these; they exist so the surrounding system can keep the salary
//! components it last quoted for each person.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SalaryComponents;

/// Whether an employee is currently on the payroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed and payable.
    Active,
    /// No longer on the payroll.
    Inactive,
}

/// An employee record as kept by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee code (e.g., "EMP001").
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
    /// The salary components most recently recorded for this employee.
    #[serde(default)]
    pub salary: Option<SalaryComponents>,
}

impl Employee {
    /// Returns true if the employee is currently on the payroll.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(status: EmployeeStatus) -> Employee {
        Employee {
            code: "EMP001".to_string(),
            name: "Asha Rao".to_string(),
            designation: "Analyst".to_string(),
            email: "asha.rao@example.com".to_string(),
            contact: "+91-98450-00000".to_string(),
            date_of_joining: NaiveDate::from_ymd_opt(2021, 4, 1).unwrap(),
            status,
            salary: None,
        }
    }

    #[test]
    fn test_deserialize_employee_without_salary() {
        let json = r#"{
            "code": "EMP001",
            "name": "Asha Rao",
            "designation": "Analyst",
            "email": "asha.rao@example.com",
            "contact": "+91-98450-00000",
            "date_of_joining": "2021-04-01",
            "status": "active"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.code, "EMP001");
        assert_eq!(employee.status, EmployeeStatus::Active);
        assert_eq!(
            employee.date_of_joining,
            NaiveDate::from_ymd_opt(2021, 4, 1).unwrap()
        );
        assert!(employee.salary.is_none());
    }

    #[test]
    fn test_deserialize_employee_with_salary_components() {
        let json = r#"{
            "code": "EMP002",
            "name": "Vikram Shah",
            "designation": "Senior Engineer",
            "email": "vikram.shah@example.com",
            "contact": "+91-98450-11111",
            "date_of_joining": "2019-11-18",
            "status": "active",
            "salary": {"basic_pay": 60000, "hra": 15000, "deduction_percent": 15}
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        let salary = employee.salary.unwrap();
        assert_eq!(salary.basic_pay, 60000.0);
        assert_eq!(salary.hra, 15000.0);
        assert_eq!(salary.deduction_percent, 15.0);
        // Unlisted components still default to zero inside the record.
        assert_eq!(salary.over_time, 0.0);
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee(EmployeeStatus::Inactive);
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_is_active_for_active_employee() {
        assert!(create_test_employee(EmployeeStatus::Active).is_active());
    }

    #[test]
    fn test_is_active_for_inactive_employee() {
        assert!(!create_test_employee(EmployeeStatus::Inactive).is_active());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::Inactive).unwrap(),
            "\"inactive\""
        );
    }
}
