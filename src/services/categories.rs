use crate::domain::category::NewCategory;
use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryDto;
use crate::forms::categories::AddCategoryFormPayload;
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

pub fn show_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn add_category<R>(payload: AddCategoryFormPayload, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter,
{
    let category = payload.into_new_category();
    match repo.create_category(&category) {
        Ok(created) => Ok(created.into()),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Store a batch of categories as a unit. An empty batch is rejected.
pub fn add_categories<R>(
    payloads: Vec<AddCategoryFormPayload>,
    repo: &R,
) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryWriter,
{
    if payloads.is_empty() {
        return Err(ServiceError::Validation(
            "The list of categories cannot be empty.".to_string(),
        ));
    }

    let categories = payloads
        .into_iter()
        .map(AddCategoryFormPayload::into_new_category)
        .collect::<Vec<NewCategory>>();

    match repo.create_categories(&categories) {
        Ok(created) => Ok(created.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to create categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_category<R>(category_id: &str, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_category(&category_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(ServiceError::Internal)
        }
    }
}
