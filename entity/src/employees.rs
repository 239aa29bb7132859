use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveValue::{self, NotSet, Set},
    IntoActiveModel,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Field, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
#[serde(rename_all = "PascalCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub employee_id: i32,
    pub employee_code: String,
    pub address: Option<String>,
    pub designation: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(Field::EmployeeCode, Some(self.employee_code.as_str()))?;
        require(Field::Designation, Some(self.designation.as_str()))
    }

    pub fn draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            employee_id: Some(self.employee_id),
            employee_code: Some(self.employee_code.clone()),
            address: self.address.clone(),
            designation: Some(self.designation.clone()),
        }
    }
}

impl ActiveModel {
    /// Inserts need every required column; updates only check what they write.
    pub fn check_required(&self, insert: bool) -> Result<(), ValidationError> {
        require_active(Field::EmployeeCode, &self.employee_code, insert)?;
        require_active(Field::Designation, &self.designation, insert)
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let Err(err) = self.check_required(insert) {
            warn!(field = %err.field(), insert, "employee rejected before save");
            return Err(err.into());
        }
        Ok(self)
    }
}

/// An employee as supplied by a caller, before the required fields are checked.
///
/// Every field is optional so an unset value can be told apart from a
/// supplied one. JSON keys use the PascalCase property names; a missing key
/// and `null` both mean unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeDraft {
    pub employee_id: Option<i32>,
    pub employee_code: Option<String>,
    pub address: Option<String>,
    pub designation: Option<String>,
}

impl EmployeeDraft {
    /// Reports the first missing required field, `EmployeeCode` before `Designation`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(Field::EmployeeCode, self.employee_code.as_deref())?;
        require(Field::Designation, self.designation.as_deref())
    }
}

impl IntoActiveModel<ActiveModel> for EmployeeDraft {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            employee_id: self.employee_id.map_or(NotSet, Set),
            employee_code: self.employee_code.map_or(NotSet, Set),
            address: Set(self.address),
            designation: self.designation.map_or(NotSet, Set),
        }
    }
}

fn require(field: Field, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::Required(field)),
    }
}

fn require_active(
    field: Field,
    value: &ActiveValue<String>,
    insert: bool,
) -> Result<(), ValidationError> {
    match value {
        ActiveValue::Set(text) => require(field, Some(text.as_str())),
        ActiveValue::Unchanged(text) if insert => require(field, Some(text.as_str())),
        ActiveValue::Unchanged(_) => Ok(()),
        ActiveValue::NotSet if insert => Err(ValidationError::Required(field)),
        ActiveValue::NotSet => Ok(()),
    }
}
