use std::fmt;

use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// Employee fields that carry a presence constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Field {
    EmployeeCode,
    Designation,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::EmployeeCode => "EmployeeCode",
            Field::Designation => "Designation",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required(field) => *field,
        }
    }
}

impl From<ValidationError> for DbErr {
    fn from(value: ValidationError) -> Self {
        DbErr::Custom(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_message_names_the_property() {
        let err = ValidationError::Required(Field::Designation);
        assert_eq!(err.to_string(), "Designation is required");
        assert_eq!(err.field(), Field::Designation);
    }

    #[test]
    fn converts_into_custom_db_error() {
        let err: DbErr = ValidationError::Required(Field::EmployeeCode).into();
        assert!(matches!(err, DbErr::Custom(msg) if msg == "EmployeeCode is required"));
    }
}
