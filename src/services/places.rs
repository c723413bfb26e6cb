use crate::domain::place::NewPlace;
use crate::domain::types::{CategoryId, PlaceId};
use crate::dto::places::{PlaceDto, RankedPlaceDto};
use crate::forms::places::PlaceFormPayload;
use crate::pagination::Pagination;
use crate::repository::{CategoryReader, PlaceListQuery, PlaceReader, PlaceWriter};
use crate::services::enrichment::{resolve_categories, resolve_category};

use super::{ServiceError, ServiceResult};

fn parse_place_id(place_id: &str) -> ServiceResult<PlaceId> {
    PlaceId::new(place_id).map_err(|_| ServiceError::NotFound)
}

fn parse_pagination(page: i64, per_page: i64) -> ServiceResult<Pagination> {
    Pagination::new(page, per_page).map_err(|e| ServiceError::InvalidArgument(e.to_string()))
}

fn list_places<R>(query: PlaceListQuery, repo: &R) -> ServiceResult<Vec<PlaceDto>>
where
    R: PlaceReader,
{
    match repo.list_places(query) {
        Ok(places) => Ok(places.into_iter().map(PlaceDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list places: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// All places, each with its category resolved.
pub fn show_places<R>(repo: &R) -> ServiceResult<Vec<PlaceDto>>
where
    R: PlaceReader + CategoryReader,
{
    let places = repo.list_places(PlaceListQuery::default()).map_err(|e| {
        log::error!("Failed to list places: {e}");
        ServiceError::Internal
    })?;

    match resolve_categories(places, repo) {
        Ok(places) => Ok(places.into_iter().map(PlaceDto::from).collect()),
        Err(e) => {
            log::error!("Failed to resolve place categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// A single place with its category resolved.
pub fn show_place<R>(place_id: &str, repo: &R) -> ServiceResult<PlaceDto>
where
    R: PlaceReader + CategoryReader,
{
    let place_id = parse_place_id(place_id)?;

    let place = match repo.get_place_by_id(&place_id) {
        Ok(Some(place)) => place,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get place: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match resolve_category(place, repo) {
        Ok(place) => Ok(place.into()),
        Err(e) => {
            log::error!("Failed to resolve place category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn add_place<R>(payload: PlaceFormPayload, repo: &R) -> ServiceResult<PlaceDto>
where
    R: PlaceWriter,
{
    let place = payload.into_new_place();
    match repo.create_place(&place) {
        Ok(created) => Ok(created.into()),
        Err(e) => {
            log::error!("Failed to create place: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Store a batch of places as a unit. An empty batch is rejected.
pub fn add_places<R>(payloads: Vec<PlaceFormPayload>, repo: &R) -> ServiceResult<Vec<PlaceDto>>
where
    R: PlaceWriter,
{
    if payloads.is_empty() {
        return Err(ServiceError::Validation(
            "The list of places cannot be empty.".to_string(),
        ));
    }

    let places = payloads
        .into_iter()
        .map(PlaceFormPayload::into_new_place)
        .collect::<Vec<NewPlace>>();

    match repo.create_places(&places) {
        Ok(created) => Ok(created.into_iter().map(PlaceDto::from).collect()),
        Err(e) => {
            log::error!("Failed to create places: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Replace every stored field of an existing place. The id is taken from
/// `place_id`, never from the payload.
pub fn update_place<R>(place_id: &str, payload: PlaceFormPayload, repo: &R) -> ServiceResult<()>
where
    R: PlaceReader + PlaceWriter,
{
    let place_id = parse_place_id(place_id)?;

    match repo.get_place_by_id(&place_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get place: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.replace_place(&place_id, &payload.into_new_place()) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to update place: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_place<R>(place_id: &str, repo: &R) -> ServiceResult<()>
where
    R: PlaceWriter,
{
    let place_id = parse_place_id(place_id)?;

    match repo.delete_place(&place_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete place: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Places whose name contains `name`, ignoring case.
pub fn search_places_by_name<R>(name: &str, repo: &R) -> ServiceResult<Vec<PlaceDto>>
where
    R: PlaceReader,
{
    list_places(PlaceListQuery::default().name(name), repo)
}

pub fn show_places_by_category<R>(category_id: &str, repo: &R) -> ServiceResult<Vec<PlaceDto>>
where
    R: PlaceReader,
{
    let Ok(category_id) = CategoryId::new(category_id) else {
        return Ok(Vec::new());
    };
    list_places(PlaceListQuery::default().category(category_id), repo)
}

pub fn show_places_by_category_and_name<R>(
    category_id: &str,
    name: &str,
    repo: &R,
) -> ServiceResult<Vec<PlaceDto>>
where
    R: PlaceReader,
{
    let Ok(category_id) = CategoryId::new(category_id) else {
        return Ok(Vec::new());
    };
    list_places(
        PlaceListQuery::default().category(category_id).name(name),
        repo,
    )
}

/// One page of places in storage order.
pub fn show_places_page<R>(page: i64, per_page: i64, repo: &R) -> ServiceResult<Vec<PlaceDto>>
where
    R: PlaceReader,
{
    let pagination = parse_pagination(page, per_page)?;
    list_places(PlaceListQuery::default().paginate(pagination), repo)
}

/// One page of places ordered by mean review rating, highest first. Places
/// without reviews have no average and come after all rated places.
pub fn show_ranked_places<R>(
    page: i64,
    per_page: i64,
    repo: &R,
) -> ServiceResult<Vec<RankedPlaceDto>>
where
    R: PlaceReader,
{
    let pagination = parse_pagination(page, per_page)?;

    match repo.list_ranked_places(pagination) {
        Ok(places) => Ok(places.into_iter().map(RankedPlaceDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list ranked places: {e}");
            Err(ServiceError::Internal)
        }
    }
}
