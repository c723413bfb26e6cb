use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::NewCategory;
use crate::domain::types::{CategoryName, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct AddCategoryForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Category name cannot be null or empty."))]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddCategoryFormPayload {
    pub name: CategoryName,
}

impl AddCategoryFormPayload {
    pub fn into_new_category(self) -> NewCategory {
        NewCategory { name: self.name }
    }
}

#[derive(Debug, Error)]
pub enum AddCategoryFormError {
    #[error("Add category form validation failed: {0}")]
    Validation(String),
    #[error("Add category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddCategoryForm> for AddCategoryFormPayload {
    type Error = AddCategoryFormError;

    fn try_from(value: AddCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: CategoryName::new(value.name)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_category_name() {
        let payload: AddCategoryFormPayload = AddCategoryForm {
            name: "  Cafe  ".to_string(),
        }
        .try_into()
        .unwrap();
        assert_eq!(payload.name, "Cafe");
    }

    #[test]
    fn rejects_blank_category_name() {
        let empty = AddCategoryFormPayload::try_from(AddCategoryForm {
            name: String::new(),
        });
        assert!(matches!(empty, Err(AddCategoryFormError::Validation(_))));

        let blank = AddCategoryFormPayload::try_from(AddCategoryForm {
            name: "   ".to_string(),
        });
        assert!(matches!(blank, Err(AddCategoryFormError::TypeConstraint(_))));
    }
}
