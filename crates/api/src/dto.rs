//! Wire-facing types and their explicit mapping to the stored model.

use chrono::NaiveDate;
use entity::employee;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire spelling of the stored gender enum.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl From<Gender> for employee::Gender {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => employee::Gender::Male,
            Gender::Female => employee::Gender::Female,
            Gender::Other => employee::Gender::Other,
        }
    }
}

impl From<employee::Gender> for Gender {
    fn from(gender: employee::Gender) -> Self {
        match gender {
            employee::Gender::Male => Gender::Male,
            employee::Gender::Female => Gender::Female,
            employee::Gender::Other => Gender::Other,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    /// Assigned by the store; ignored on inbound payloads.
    pub id: Option<i64>,
    pub name: String,
    pub father_name: String,
    pub mother_name: String,
    pub dob: Option<NaiveDate>,
    pub doj: Option<NaiveDate>,
    pub gender: Gender,
}

impl EmployeeDto {
    pub fn from_model(model: employee::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            father_name: model.father_name,
            mother_name: model.mother_name,
            dob: model.dob,
            doj: model.doj,
            gender: model.gender.into(),
        }
    }

    /// Copies every data field onto the record, full-replace: absent dates
    /// overwrite stored values with NULL. The id and audit columns are
    /// deliberately not part of this field list.
    pub fn apply_to(&self, record: &mut employee::ActiveModel) {
        record.name = Set(self.name.clone());
        record.father_name = Set(self.father_name.clone());
        record.mother_name = Set(self.mother_name.clone());
        record.dob = Set(self.dob);
        record.doj = Set(self.doj);
        record.gender = Set(self.gender.into());
    }

    /// Template variant for bulk loading: each name field gets the loop
    /// index appended so the inserted rows stay distinct.
    pub(crate) fn with_suffix(&self, index: u64) -> Self {
        let mut copy = self.clone();
        copy.name = format!("{}{}", self.name, index);
        copy.father_name = format!("{}{}", self.father_name, index);
        copy.mother_name = format!("{}{}", self.mother_name, index);
        copy
    }
}

/// One slice of the employee table plus enough context to page onward.
/// `page` and `size` echo the request verbatim; the total is recomputed
/// from the store on every call.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[aliases(EmployeePage = Page<EmployeeDto>)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub page: i64,
    pub size: i64,
}
