//! Employee entity, validation rules and repository contract

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::{Employee, EmployeeId, Gender};
pub use repository::{employee_not_found, employees_not_found_by_name, EmployeeRepository};
pub use validation::{validate_employee, EmployeeValidationError};
