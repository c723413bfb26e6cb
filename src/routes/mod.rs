use actix_web::{HttpResponse, web};

use crate::services::ServiceError;

pub mod categories;
pub mod places;
pub mod reviews;

/// Register every API route. Literal paths are registered before the
/// `{id}` routes that would otherwise shadow them.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(categories::show_categories)
        .service(categories::add_categories)
        .service(categories::add_category)
        .service(categories::delete_category)
        .service(places::search_places_by_name)
        .service(places::show_places_by_category)
        .service(places::show_places_by_category_and_name)
        .service(places::show_places_page)
        .service(places::show_ranked_places)
        .service(places::add_places)
        .service(places::show_places)
        .service(places::add_place)
        .service(places::show_place)
        .service(places::update_place)
        .service(places::delete_place)
        .service(reviews::show_reviews)
        .service(reviews::show_place_reviews)
        .service(reviews::add_reviews)
        .service(reviews::add_review)
        .service(reviews::update_review)
        .service(reviews::delete_review);
}

/// Map a service failure onto its HTTP response.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Validation(message) => HttpResponse::BadRequest().body(message),
        ServiceError::InvalidArgument(message) => HttpResponse::BadRequest().body(message),
        ServiceError::Internal => HttpResponse::InternalServerError().finish(),
    }
}
