//! Attaching resolved categories to places.
//!
//! Category references are not enforced by the store, so a reference that
//! matches nothing simply leaves the place without a category.

use std::collections::HashMap;

use crate::domain::category::Category;
use crate::domain::place::Place;
use crate::domain::types::CategoryId;
use crate::repository::CategoryReader;
use crate::repository::errors::RepositoryResult;

/// Resolve the category of a single place.
pub fn resolve_category<R>(mut place: Place, repo: &R) -> RepositoryResult<Place>
where
    R: CategoryReader,
{
    if let Some(category_id) = &place.category_id {
        place.category = repo.get_category_by_id(category_id)?;
    }
    Ok(place)
}

/// Resolve the categories of many places with a single lookup.
///
/// The output has the same order and length as the input.
pub fn resolve_categories<R>(places: Vec<Place>, repo: &R) -> RepositoryResult<Vec<Place>>
where
    R: CategoryReader,
{
    let mut ids: Vec<CategoryId> = Vec::new();
    for id in places.iter().filter_map(|p| p.category_id.as_ref()) {
        if !ids.contains(id) {
            ids.push(id.clone());
        }
    }

    if ids.is_empty() {
        return Ok(places);
    }

    let categories: HashMap<CategoryId, Category> = repo
        .list_categories_by_ids(&ids)?
        .into_iter()
        .map(|c| (c.id.clone(), c))
        .collect();

    Ok(places
        .into_iter()
        .map(|mut place| {
            place.category = place
                .category_id
                .as_ref()
                .and_then(|id| categories.get(id))
                .cloned();
            place
        })
        .collect())
}
