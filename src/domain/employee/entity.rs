//! Employee entity and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee identifier, assigned by the store at creation time
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EmployeeId(i32);

impl EmployeeId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw integer value
    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for EmployeeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employee gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "MALE"),
            Self::Female => write!(f, "FEMALE"),
            Self::Unspecified => write!(f, "UNSPECIFIED"),
        }
    }
}

/// Employee record
///
/// `first_name` and `last_name` are optional at the type level so that a
/// null payload value reaches the validator and produces the contractual
/// message instead of a deserialization rejection. Equality covers all
/// seven fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub department_id: Option<i32>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

impl Employee {
    /// Create a new employee candidate without an id
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            employee_id: None,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            department_id: None,
            job_title: None,
            gender: Gender::default(),
            date_of_birth: None,
        }
    }

    /// Set the id (builder pattern)
    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.employee_id = Some(id);
        self
    }

    /// Set the department (builder pattern)
    pub fn with_department(mut self, department_id: i32) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Set the job title (builder pattern)
    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    /// Set the gender (builder pattern)
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Set the date of birth (builder pattern)
    pub fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }
}
