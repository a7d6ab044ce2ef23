//! Employee validation rules

use chrono::{Months, NaiveDate};
use thiserror::Error;

use super::entity::Employee;

/// Violations reported by employee validation
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeValidationError {
    #[error("Employee firstname cannot be empty")]
    EmptyFirstName,

    #[error("Employee lastname cannot be empty")]
    EmptyLastName,

    #[error("The employee must be over 18 years old")]
    UnderMinimumAge,
}

const MINIMUM_AGE_YEARS: u32 = 18;

/// Validate an employee candidate against all rules
///
/// Every rule is checked independently; the returned list preserves
/// declaration order (firstname, lastname, age). The reference date is a
/// parameter so callers and tests share one deterministic clock.
pub fn validate_employee(
    employee: &Employee,
    today: NaiveDate,
) -> Result<(), Vec<EmployeeValidationError>> {
    let mut violations = Vec::new();

    if employee.first_name.is_none() {
        violations.push(EmployeeValidationError::EmptyFirstName);
    }

    if employee.last_name.is_none() {
        violations.push(EmployeeValidationError::EmptyLastName);
    }

    if let Some(date_of_birth) = employee.date_of_birth {
        // a birth date on the cutoff itself (exactly 18 years ago) is valid
        let cutoff = today.checked_sub_months(Months::new(MINIMUM_AGE_YEARS * 12));

        if cutoff.is_none_or(|cutoff| date_of_birth > cutoff) {
            violations.push(EmployeeValidationError::UnderMinimumAge);
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::entity::Gender;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    #[test]
    fn test_valid_employee() {
        let employee = Employee::new("Ann", "Lee")
            .with_gender(Gender::Female)
            .with_date_of_birth(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());

        assert!(validate_employee(&employee, today()).is_ok());
    }

    #[test]
    fn test_valid_without_date_of_birth() {
        let employee = Employee::new("Ann", "Lee");
        assert!(validate_employee(&employee, today()).is_ok());
    }

    #[test]
    fn test_missing_first_name() {
        let mut employee = Employee::new("Ann", "Lee");
        employee.first_name = None;

        let violations = validate_employee(&employee, today()).unwrap_err();
        assert_eq!(violations, vec![EmployeeValidationError::EmptyFirstName]);
        assert_eq!(
            violations[0].to_string(),
            "Employee firstname cannot be empty"
        );
    }

    #[test]
    fn test_missing_last_name() {
        let mut employee = Employee::new("Ann", "Lee");
        employee.last_name = None;

        let violations = validate_employee(&employee, today()).unwrap_err();
        assert_eq!(violations, vec![EmployeeValidationError::EmptyLastName]);
        assert_eq!(
            violations[0].to_string(),
            "Employee lastname cannot be empty"
        );
    }

    #[test]
    fn test_underage_employee() {
        let employee = Employee::new("Ann", "Lee")
            .with_date_of_birth(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());

        let violations = validate_employee(&employee, today()).unwrap_err();
        assert_eq!(violations, vec![EmployeeValidationError::UnderMinimumAge]);
        assert_eq!(
            violations[0].to_string(),
            "The employee must be over 18 years old"
        );
    }

    #[test]
    fn test_exactly_eighteen_is_valid() {
        let employee = Employee::new("Ann", "Lee")
            .with_date_of_birth(NaiveDate::from_ymd_opt(2008, 6, 15).unwrap());

        assert!(validate_employee(&employee, today()).is_ok());
    }

    #[test]
    fn test_one_day_under_eighteen_is_rejected() {
        let employee = Employee::new("Ann", "Lee")
            .with_date_of_birth(NaiveDate::from_ymd_opt(2008, 6, 16).unwrap());

        let violations = validate_employee(&employee, today()).unwrap_err();
        assert_eq!(violations, vec![EmployeeValidationError::UnderMinimumAge]);
    }

    #[test]
    fn test_all_violations_reported_in_declaration_order() {
        let employee = Employee {
            employee_id: None,
            first_name: None,
            last_name: None,
            department_id: None,
            job_title: None,
            gender: Gender::Unspecified,
            date_of_birth: NaiveDate::from_ymd_opt(2020, 1, 1),
        };

        let violations = validate_employee(&employee, today()).unwrap_err();
        assert_eq!(
            violations,
            vec![
                EmployeeValidationError::EmptyFirstName,
                EmployeeValidationError::EmptyLastName,
                EmployeeValidationError::UnderMinimumAge,
            ]
        );
    }

    #[test]
    fn test_validation_has_no_side_effects() {
        let employee = Employee::new("Ann", "Lee");
        let before = employee.clone();

        let _ = validate_employee(&employee, today());
        assert_eq!(employee, before);
    }
}
